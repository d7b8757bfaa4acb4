// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::entry::{RawEntry, TypedEntry};
use super::location::Location;

/// Item-like catalog entry: the one representation kind-specific modes can resolve.
///
/// The extra facets mirror what the host knows about the underlying item: the block it places,
/// the entity type it spawns, and whether it is one of the boat items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemStack {
    item: Location,
    count: u32,
    block: Option<Location>,
    embedded_entity: Option<Location>,
    boat: bool,
}

impl ItemStack {
    pub fn new(item: Location) -> Self {
        Self { item, count: 1, block: None, embedded_entity: None, boat: false }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Marks this stack as a block-backed item placing `block`.
    pub fn with_block(mut self, block: Location) -> Self {
        self.block = Some(block);
        self
    }

    /// Attaches a spawn-egg style entity-type payload.
    pub fn with_embedded_entity(mut self, entity_type: Location) -> Self {
        self.embedded_entity = Some(entity_type);
        self
    }

    pub fn as_boat(mut self) -> Self {
        self.boat = true;
        self
    }

    pub fn item(&self) -> &Location {
        &self.item
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn block(&self) -> Option<&Location> {
        self.block.as_ref()
    }

    pub fn embedded_entity(&self) -> Option<&Location> {
        self.embedded_entity.as_ref()
    }

    pub fn is_boat(&self) -> bool {
        self.boat
    }

    pub fn from_entry(entry: &TypedEntry) -> Option<&Self> {
        entry.downcast_ref::<Self>()
    }

    pub fn from_raw(raw: &RawEntry) -> Option<&Self> {
        raw.downcast_ref::<Self>()
    }
}
