// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drop zones for catalog entries dragged onto the listening identifier field.

use std::fmt;

use ratatui::layout::Rect;
use smallvec::SmallVec;

use crate::catalog::CatalogBridge;
use crate::editor::{EditorScreen, TextField};
use crate::model::{IdentifierKind, ItemStack, RawEntry};
use crate::resolve::IdResolver;
use crate::session::SessionState;

type AcceptFn = Box<dyn FnOnce(&mut dyn TextField) -> bool>;

/// A drop zone built for one drag gesture. Not meant to outlive it.
pub struct DragTarget {
    area: Rect,
    accept: AcceptFn,
}

/// At most one target is ever produced per gesture.
pub type DragTargets = SmallVec<[DragTarget; 1]>;

impl DragTarget {
    fn new(area: Rect, accept: impl FnOnce(&mut dyn TextField) -> bool + 'static) -> Self {
        Self { area, accept: Box::new(accept) }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Drops the entry on `field`. Returns whether the field was written.
    pub fn accept(self, field: &mut dyn TextField) -> bool {
        (self.accept)(field)
    }
}

impl fmt::Debug for DragTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragTarget").field("area", &self.area).finish_non_exhaustive()
    }
}

pub struct GhostTargetProvider<'a> {
    bridge: CatalogBridge<'a>,
    resolver: &'a IdResolver,
}

impl<'a> GhostTargetProvider<'a> {
    pub fn new(bridge: CatalogBridge<'a>, resolver: &'a IdResolver) -> Self {
        Self { bridge, resolver }
    }

    pub fn targets(
        &self,
        session: &SessionState,
        screen: &mut dyn EditorScreen,
        dragged: RawEntry,
        drag_starting: bool,
    ) -> DragTargets {
        let mut targets = DragTargets::new();
        let Some(kind) = session.active_kind() else {
            return targets;
        };
        let Some(field) = screen.target_field() else {
            return targets;
        };
        let area = field.area();

        let target = if kind.is_raw() {
            self.raw_target(area, dragged)
        } else {
            self.kind_target(area, kind, dragged)
        };
        if let Some(target) = target {
            if drag_starting {
                tracing::trace!(%kind, ?area, "offering identifier field as drop target");
            }
            targets.push(target);
        }
        targets
    }

    fn raw_target(&self, area: Rect, dragged: RawEntry) -> Option<DragTarget> {
        let entry = self.bridge.typed(dragged)?;
        let id = self.bridge.canonical_location(&entry)?.to_string();
        Some(DragTarget::new(area, move |field: &mut dyn TextField| {
            field.set_value(&id);
            true
        }))
    }

    fn kind_target(
        &self,
        area: Rect,
        kind: IdentifierKind,
        dragged: RawEntry,
    ) -> Option<DragTarget> {
        let item = ItemStack::from_raw(&dragged)?.clone();
        if !self.resolver.is_compatible(&item, kind) {
            return None;
        }
        let resolver = self.resolver.clone();
        Some(DragTarget::new(area, move |field: &mut dyn TextField| {
            match resolver.resolve(&item, kind) {
                Some(id) => {
                    field.set_value(&id.to_string());
                    true
                }
                None => false,
            }
        }))
    }
}
