// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Type-erased catalog entries.
//!
//! The catalog owns an open set of entry types that this crate cannot enumerate at compile time.
//! Entries travel as [`RawEntry`] (an `Arc<dyn Any>`) and are paired with their [`EntryType`] tag
//! once, in [`TypedEntry::wrap`], which refuses any pairing where the tag does not match the
//! value's runtime type.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An entry value as the catalog hands it out, before its type is known.
pub type RawEntry = Arc<dyn Any + Send + Sync>;

/// Opaque tag for one category of catalog entries (items, fluids, ...).
///
/// Equality and hashing only look at the Rust type; the name is for logs and display.
#[derive(Clone, Copy)]
pub struct EntryType {
    type_id: TypeId,
    name: &'static str,
}

impl EntryType {
    pub fn of<T: Any>() -> Self {
        Self::named::<T>(std::any::type_name::<T>())
    }

    pub fn named<T: Any>(name: &'static str) -> Self {
        Self { type_id: TypeId::of::<T>(), name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, value: &(dyn Any + Send + Sync)) -> bool {
        let value: &dyn Any = value;
        value.type_id() == self.type_id
    }

    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl PartialEq for EntryType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for EntryType {}

impl Hash for EntryType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntryType").field(&self.name).finish()
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A raw entry paired with its type tag. Immutable and cheap to clone.
#[derive(Clone)]
pub struct TypedEntry {
    entry_type: EntryType,
    value: RawEntry,
}

impl TypedEntry {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self { entry_type: EntryType::of::<T>(), value: Arc::new(value) }
    }

    /// Pairs `raw` with `entry_type`, or `None` when the tag does not describe the value.
    pub fn wrap(raw: RawEntry, entry_type: EntryType) -> Option<Self> {
        if !entry_type.matches(&*raw) {
            return None;
        }
        Some(Self { entry_type, value: raw })
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn raw(&self) -> &RawEntry {
        &self.value
    }

    pub fn value(&self) -> &(dyn Any + Send + Sync) {
        &*self.value
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for TypedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedEntry").field("entry_type", &self.entry_type).finish_non_exhaustive()
    }
}
