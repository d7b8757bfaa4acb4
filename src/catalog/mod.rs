// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Adapter over the external catalog service.
//!
//! [`CatalogRuntime`] is the contract the catalog exposes once it is up; [`CatalogBridge`] layers
//! location parsing, scoped rendering, bulk enumeration and id lookup on top of it without any
//! per-type compile-time knowledge.

use std::fmt;

use crate::model::{EntryType, Location, RawEntry, TypedEntry};

pub mod canvas;
pub mod kind;
pub mod registry;

pub use canvas::{Canvas, PoseGuard};
pub use kind::{DynEntryKind, EntryHelper, EntryKind, EntryRenderer};
pub use registry::EntryRegistry;

/// Catalog UI surfaces that can report an entry under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Surface {
    /// The main entry list overlay.
    Overlay,
    Bookmarks,
}

impl Surface {
    /// Lookup order for pointer queries; first hit wins.
    pub const SEARCH_ORDER: [Self; 2] = [Self::Overlay, Self::Bookmarks];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overlay => "overlay",
            Self::Bookmarks => "bookmarks",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the running catalog service offers to this crate.
pub trait CatalogRuntime: Send + Sync {
    /// Registered entry types, in registration order.
    fn entry_types(&self) -> Vec<EntryType>;

    fn entries(&self, entry_type: EntryType) -> Box<dyn Iterator<Item = RawEntry> + '_>;

    /// Helper/renderer bundle for a registered type.
    fn kind(&self, entry_type: EntryType) -> Option<&dyn DynEntryKind>;

    /// The catalog's own introspection: which registered type `raw` belongs to.
    fn type_of(&self, raw: &RawEntry) -> Option<EntryType>;

    fn entry_under_pointer(&self, surface: Surface, column: u16, row: u16) -> Option<RawEntry>;

    fn create_typed_entry(&self, entry_type: EntryType, raw: RawEntry) -> Option<TypedEntry> {
        TypedEntry::wrap(raw, entry_type)
    }
}

/// One row of [`CatalogBridge::enumerate_all`], lowercased for index building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogListing {
    pub id: Location,
    pub display_name: String,
    pub path: String,
}

#[derive(Clone, Copy)]
pub struct CatalogBridge<'r> {
    runtime: &'r dyn CatalogRuntime,
}

impl<'r> CatalogBridge<'r> {
    pub fn new(runtime: &'r dyn CatalogRuntime) -> Self {
        Self { runtime }
    }

    pub fn type_of(&self, raw: &RawEntry) -> Option<EntryType> {
        self.runtime.type_of(raw)
    }

    pub fn wrap(&self, raw: RawEntry, entry_type: EntryType) -> Option<TypedEntry> {
        self.runtime.create_typed_entry(entry_type, raw)
    }

    pub fn entry_under_pointer(&self, surface: Surface, column: u16, row: u16) -> Option<RawEntry> {
        self.runtime.entry_under_pointer(surface, column, row)
    }

    /// `type_of` followed by `wrap`.
    pub fn typed(&self, raw: RawEntry) -> Option<TypedEntry> {
        let entry_type = self.type_of(&raw)?;
        self.wrap(raw, entry_type)
    }

    /// # Panics
    ///
    /// If the runtime declares the entry's type without a helper bundle.
    pub fn canonical_location(&self, entry: &TypedEntry) -> Option<Location> {
        let kind = kind_for(self.runtime, entry.entry_type());
        parse_reported_location(kind, entry.value())
    }

    pub fn display_name(&self, entry: &TypedEntry) -> Option<String> {
        kind_for(self.runtime, entry.entry_type()).display_name(entry.value())
    }

    /// Draws `entry` at `(x, y)` relative to the canvas' current pose.
    ///
    /// The canvas pose stack is restored afterwards, even if the renderer leaves it unbalanced
    /// or unwinds.
    pub fn render(&self, entry: &TypedEntry, canvas: &mut Canvas<'_>, x: i32, y: i32) {
        let kind = kind_for(self.runtime, entry.entry_type());
        let mut scope = canvas.scoped();
        scope.translate(x, y);
        kind.render(&mut scope, entry.value());
    }

    /// Every entry of every registered type, skipping entries without a parseable location.
    ///
    /// Scans the whole catalog on each call; meant for rare bulk work such as building a search
    /// index.
    pub fn enumerate_all(&self) -> impl Iterator<Item = CatalogListing> + 'r {
        let runtime = self.runtime;
        runtime.entry_types().into_iter().flat_map(move |entry_type| {
            let kind = kind_for(runtime, entry_type);
            runtime.entries(entry_type).filter_map(move |raw| {
                let id = parse_reported_location(kind, &*raw)?;
                let display_name = kind.display_name(&*raw).unwrap_or_default().to_lowercase();
                let path = id.path().to_lowercase();
                Some(CatalogListing { id, display_name, path })
            })
        })
    }

    /// First entry (in registration order) whose canonical location reads as `id`.
    pub fn resolve_by_id(&self, id: &str) -> Option<TypedEntry> {
        for entry_type in self.runtime.entry_types() {
            let kind = kind_for(self.runtime, entry_type);
            for raw in self.runtime.entries(entry_type) {
                let Some(location) = parse_reported_location(kind, &*raw) else {
                    continue;
                };
                if location.to_string() == id {
                    return self.wrap(raw, entry_type);
                }
            }
        }
        None
    }
}

impl fmt::Debug for CatalogBridge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogBridge").finish_non_exhaustive()
    }
}

fn kind_for(runtime: &dyn CatalogRuntime, entry_type: EntryType) -> &dyn DynEntryKind {
    match runtime.kind(entry_type) {
        Some(kind) => kind,
        None => panic!("catalog declared entry type `{entry_type}` without a registered helper"),
    }
}

fn parse_reported_location(
    kind: &dyn DynEntryKind,
    value: &(dyn std::any::Any + Send + Sync),
) -> Option<Location> {
    let reported = kind.location(value)?;
    match Location::parse(&reported) {
        Ok(location) => Some(location),
        Err(err) => {
            tracing::debug!(
                entry_type = %kind.entry_type(),
                reported = %reported,
                error = %err,
                "skipping catalog entry with malformed location"
            );
            None
        }
    }
}
