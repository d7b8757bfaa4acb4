// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-process [`CatalogRuntime`] backed by plain collections.
//!
//! Each entry type is registered once with its helper/renderer bundle; lookups by tag go through
//! an index built at registration time. Pointer surfaces are lists of placed entries that the
//! host updates as its overlay layout changes.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use ratatui::layout::Rect;

use super::kind::{DynEntryKind, EntryHelper, EntryKind, EntryRenderer};
use super::{CatalogRuntime, Surface};
use crate::model::{EntryType, RawEntry};

struct Registration {
    kind: Box<dyn DynEntryKind>,
    entries: Vec<RawEntry>,
}

struct PlacedEntry {
    area: Rect,
    entry: RawEntry,
}

#[derive(Default)]
pub struct EntryRegistry {
    registrations: Vec<Registration>,
    index: HashMap<EntryType, usize>,
    surfaces: RwLock<BTreeMap<Surface, Vec<PlacedEntry>>>,
}

impl EntryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T, H, R>(&mut self, entry_type: EntryType, helper: H, renderer: R) -> &mut Self
    where
        T: Any + Send + Sync,
        H: EntryHelper<T> + 'static,
        R: EntryRenderer<T> + 'static,
    {
        self.register_kind(Box::new(EntryKind::<T, H, R>::new(entry_type, helper, renderer)))
    }

    /// Registers a bundle. Re-registering a type swaps its bundle and keeps its entries and
    /// registration position.
    pub fn register_kind(&mut self, kind: Box<dyn DynEntryKind>) -> &mut Self {
        let entry_type = kind.entry_type();
        match self.index.get(&entry_type) {
            Some(&idx) => {
                tracing::warn!(%entry_type, "entry type registered twice; replacing its helper");
                self.registrations[idx].kind = kind;
            }
            None => {
                self.index.insert(entry_type, self.registrations.len());
                self.registrations.push(Registration { kind, entries: Vec::new() });
            }
        }
        self
    }

    /// Adds an entry to its type's list. Returns `false` if `T` was never registered.
    pub fn add_entry<T: Any + Send + Sync>(&mut self, value: T) -> bool {
        self.add_raw(EntryType::of::<T>(), Arc::new(value))
    }

    pub fn add_raw(&mut self, entry_type: EntryType, raw: RawEntry) -> bool {
        if !entry_type.matches(&*raw) {
            return false;
        }
        let Some(&idx) = self.index.get(&entry_type) else {
            return false;
        };
        self.registrations[idx].entries.push(raw);
        true
    }

    /// Total entries across all registered types.
    pub fn len(&self) -> usize {
        self.registrations.iter().map(|registration| registration.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shows `entry` on `surface` inside `area`. Later placements do not shadow earlier ones.
    pub fn place(&self, surface: Surface, area: Rect, entry: RawEntry) {
        let mut surfaces = self.surfaces.write().expect("catalog surface lock poisoned");
        surfaces.entry(surface).or_default().push(PlacedEntry { area, entry });
    }

    pub fn clear_surface(&self, surface: Surface) {
        let mut surfaces = self.surfaces.write().expect("catalog surface lock poisoned");
        surfaces.remove(&surface);
    }
}

impl CatalogRuntime for EntryRegistry {
    fn entry_types(&self) -> Vec<EntryType> {
        self.registrations.iter().map(|registration| registration.kind.entry_type()).collect()
    }

    fn entries(&self, entry_type: EntryType) -> Box<dyn Iterator<Item = RawEntry> + '_> {
        match self.index.get(&entry_type) {
            Some(&idx) => Box::new(self.registrations[idx].entries.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn kind(&self, entry_type: EntryType) -> Option<&dyn DynEntryKind> {
        let idx = *self.index.get(&entry_type)?;
        Some(self.registrations[idx].kind.as_ref())
    }

    fn type_of(&self, raw: &RawEntry) -> Option<EntryType> {
        self.registrations
            .iter()
            .map(|registration| registration.kind.entry_type())
            .find(|entry_type| entry_type.matches(&**raw))
    }

    fn entry_under_pointer(&self, surface: Surface, column: u16, row: u16) -> Option<RawEntry> {
        let surfaces = self.surfaces.read().expect("catalog surface lock poisoned");
        surfaces
            .get(&surface)?
            .iter()
            .find(|placed| rect_contains(placed.area, column, row))
            .map(|placed| Arc::clone(&placed.entry))
    }
}

fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.left() && column < area.right() && row >= area.top() && row < area.bottom()
}
