// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mapping from item-like entries to the canonical id an identifier field expects.
//!
//! Resolution is pure: the same item, kind and registry state always produce the same answer, and
//! "no id" is an ordinary `None`, never an error.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::model::{IdentifierKind, ItemStack, Location};

/// Host registries the resolver validates candidate ids against.
pub trait GameRegistries: Send + Sync {
    fn contains_item(&self, location: &Location) -> bool;

    fn contains_block(&self, location: &Location) -> bool;

    fn contains_entity_type(&self, location: &Location) -> bool;
}

/// Set-backed [`GameRegistries`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapRegistries {
    items: BTreeSet<Location>,
    blocks: BTreeSet<Location>,
    entity_types: BTreeSet<Location>,
}

impl MapRegistries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, location: Location) -> Self {
        self.items.insert(location);
        self
    }

    pub fn with_block(mut self, location: Location) -> Self {
        self.blocks.insert(location);
        self
    }

    pub fn with_entity_type(mut self, location: Location) -> Self {
        self.entity_types.insert(location);
        self
    }

    pub fn insert_item(&mut self, location: Location) {
        self.items.insert(location);
    }

    pub fn insert_block(&mut self, location: Location) {
        self.blocks.insert(location);
    }

    pub fn insert_entity_type(&mut self, location: Location) {
        self.entity_types.insert(location);
    }
}

impl GameRegistries for MapRegistries {
    fn contains_item(&self, location: &Location) -> bool {
        self.items.contains(location)
    }

    fn contains_block(&self, location: &Location) -> bool {
        self.blocks.contains(location)
    }

    fn contains_entity_type(&self, location: &Location) -> bool {
        self.entity_types.contains(location)
    }
}

/// One way of deriving an entity-type id from an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityStrategy {
    /// Spawn-egg style items carry the entity type they spawn.
    EmbeddedType,
    /// Boat items never share an id with the entity they place, so the id is synthesized.
    Boat,
    /// Items named after their entity (minecarts, armor stands, ...).
    SharedLocation,
}

/// Entity strategies in the order they are tried; the first `Some` wins.
pub const ENTITY_STRATEGIES: [EntityStrategy; 3] =
    [EntityStrategy::EmbeddedType, EntityStrategy::Boat, EntityStrategy::SharedLocation];

impl EntityStrategy {
    pub fn apply(self, item: &ItemStack, registries: &dyn GameRegistries) -> Option<Location> {
        match self {
            Self::EmbeddedType => {
                item.embedded_entity().filter(|ty| registries.contains_entity_type(ty)).cloned()
            }
            Self::Boat => {
                if !item.is_boat() {
                    return None;
                }
                let path = if item.item().path().contains("chest") { "chest_boat" } else { "boat" };
                item.item().with_path(path).ok()
            }
            Self::SharedLocation => {
                Some(item.item()).filter(|loc| registries.contains_entity_type(loc)).cloned()
            }
        }
    }
}

#[derive(Clone)]
pub struct IdResolver {
    registries: Arc<dyn GameRegistries>,
}

impl IdResolver {
    pub fn new(registries: Arc<dyn GameRegistries>) -> Self {
        Self { registries }
    }

    pub fn registries(&self) -> &dyn GameRegistries {
        self.registries.as_ref()
    }

    /// Canonical id of `item` for a field expecting `kind`.
    ///
    /// [`IdentifierKind::Raw`] yields the item's own id verbatim; callers normally resolve raw
    /// captures through [`CatalogBridge::canonical_location`](crate::catalog::CatalogBridge)
    /// instead, since raw mode also accepts entries that are not items.
    pub fn resolve(&self, item: &ItemStack, kind: IdentifierKind) -> Option<Location> {
        let registries = self.registries();
        let resolved = match kind {
            IdentifierKind::Item => {
                Some(item.item()).filter(|loc| registries.contains_item(loc)).cloned()
            }
            IdentifierKind::Block => {
                item.block().filter(|block| registries.contains_block(block)).cloned()
            }
            IdentifierKind::Entity => ENTITY_STRATEGIES
                .iter()
                .find_map(|strategy| strategy.apply(item, registries)),
            IdentifierKind::Raw => Some(item.item().clone()),
        };
        if resolved.is_none() {
            tracing::trace!(item = %item.item(), %kind, "item does not resolve for this kind");
        }
        resolved
    }

    pub fn is_compatible(&self, item: &ItemStack, kind: IdentifierKind) -> bool {
        self.resolve(item, kind).is_some()
    }
}

impl fmt::Debug for IdResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdResolver").finish_non_exhaustive()
    }
}
