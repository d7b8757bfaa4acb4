// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-type helper and renderer bundles.
//!
//! Catalog integrations implement the typed [`EntryHelper`] / [`EntryRenderer`] traits for each of
//! their entry types. [`EntryKind`] bundles the pair and erases it behind [`DynEntryKind`], so the
//! bridge can dispatch on an [`EntryType`] tag without knowing the concrete type.

use std::any::Any;
use std::marker::PhantomData;

use super::canvas::Canvas;
use crate::model::EntryType;

pub trait EntryHelper<T>: Send + Sync {
    /// The catalog's id string for `entry`, or `None` if the entry has no location.
    fn location(&self, entry: &T) -> Option<String>;

    fn display_name(&self, entry: &T) -> String;
}

pub trait EntryRenderer<T>: Send + Sync {
    /// Draws `entry` with its top-left corner at the canvas' current pose.
    fn render(&self, canvas: &mut Canvas<'_>, entry: &T);
}

impl<T, F> EntryRenderer<T> for F
where
    F: Fn(&mut Canvas<'_>, &T) + Send + Sync,
{
    fn render(&self, canvas: &mut Canvas<'_>, entry: &T) {
        self(canvas, entry)
    }
}

/// Type-erased view of one registered entry type.
///
/// Methods return `None` (or draw nothing) when handed a value of another type; the
/// tag check in [`TypedEntry::wrap`](crate::model::TypedEntry::wrap) keeps that from happening.
pub trait DynEntryKind: Send + Sync {
    fn entry_type(&self) -> EntryType;

    fn location(&self, value: &(dyn Any + Send + Sync)) -> Option<String>;

    fn display_name(&self, value: &(dyn Any + Send + Sync)) -> Option<String>;

    fn render(&self, canvas: &mut Canvas<'_>, value: &(dyn Any + Send + Sync));
}

pub struct EntryKind<T, H, R> {
    entry_type: EntryType,
    helper: H,
    renderer: R,
    _marker: PhantomData<fn() -> T>,
}

impl<T, H, R> EntryKind<T, H, R>
where
    T: Any + Send + Sync,
    H: EntryHelper<T>,
    R: EntryRenderer<T>,
{
    pub fn new(entry_type: EntryType, helper: H, renderer: R) -> Self {
        debug_assert!(entry_type.is::<T>(), "entry type tag must describe the bundled type");
        Self { entry_type, helper, renderer, _marker: PhantomData }
    }
}

impl<T, H, R> DynEntryKind for EntryKind<T, H, R>
where
    T: Any + Send + Sync,
    H: EntryHelper<T>,
    R: EntryRenderer<T>,
{
    fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    fn location(&self, value: &(dyn Any + Send + Sync)) -> Option<String> {
        value.downcast_ref::<T>().and_then(|entry| self.helper.location(entry))
    }

    fn display_name(&self, value: &(dyn Any + Send + Sync)) -> Option<String> {
        value.downcast_ref::<T>().map(|entry| self.helper.display_name(entry))
    }

    fn render(&self, canvas: &mut Canvas<'_>, value: &(dyn Any + Send + Sync)) {
        if let Some(entry) = value.downcast_ref::<T>() {
            self.renderer.render(canvas, entry);
        }
    }
}
