// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use catalog_pick::catalog::{Canvas, EntryHelper};
use catalog_pick::{EntryRegistry, EntryType, ItemStack, Location};

pub struct Fluid {
    pub id: String,
    pub name: String,
}

struct FluidHelper;

impl EntryHelper<Fluid> for FluidHelper {
    fn location(&self, entry: &Fluid) -> Option<String> {
        Some(entry.id.clone())
    }

    fn display_name(&self, entry: &Fluid) -> String {
        entry.name.clone()
    }
}

struct ItemHelper;

impl EntryHelper<ItemStack> for ItemHelper {
    fn location(&self, entry: &ItemStack) -> Option<String> {
        // Every 97th item reports a malformed id, so enumeration exercises the skip path.
        if entry.count() % 97 == 0 {
            return Some(format!("{}:Bad Id", entry.item().namespace()));
        }
        Some(entry.item().to_string())
    }

    fn display_name(&self, entry: &ItemStack) -> String {
        entry.item().path().replace('_', " ")
    }
}

const NAMESPACES: [&str; 4] = ["minecraft", "create", "farmersdelight", "botania"];

fn draw_nothing<T>(_: &mut Canvas<'_>, _: &T) {}

fn location(namespace: &str, path: &str) -> Location {
    Location::new(namespace, path).expect("bench location")
}

/// `items` item stacks across four namespaces, followed by `fluids` fluids.
pub fn catalog(items: usize, fluids: usize) -> EntryRegistry {
    let mut registry = EntryRegistry::new();
    registry
        .register::<ItemStack, _, _>(
            EntryType::of::<ItemStack>(),
            ItemHelper,
            draw_nothing::<ItemStack>,
        )
        .register::<Fluid, _, _>(EntryType::of::<Fluid>(), FluidHelper, draw_nothing::<Fluid>);

    for idx in 0..items {
        let namespace = NAMESPACES[idx % NAMESPACES.len()];
        let count = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        let path = format!("item_{idx:05}");
        registry.add_entry(ItemStack::new(location(namespace, &path)).with_count(count));
    }
    for idx in 0..fluids {
        registry.add_entry(Fluid {
            id: format!("minecraft:fluid_{idx:04}"),
            name: format!("Fluid {idx}"),
        });
    }
    registry
}

/// Canonical id of the last item `catalog(items, _)` produced.
pub fn last_item_id(items: usize) -> String {
    let idx = items - 1;
    format!("{}:item_{idx:05}", NAMESPACES[idx % NAMESPACES.len()])
}
