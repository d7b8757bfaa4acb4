// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalog Pick: fill identifier fields from an external entry catalog.
//!
//! An editor screen activates a pick session for one of its fields; the user then drags a catalog
//! entry onto the field or clicks one in the overlay. [`CatalogIntegration`] is the host-facing
//! entry point and stays inert while the catalog service is absent.

pub mod catalog;
pub mod click;
pub mod config;
pub mod editor;
pub mod gate;
pub mod ghost;
pub mod integration;
pub mod model;
pub mod resolve;
pub mod session;

pub use catalog::{CatalogBridge, CatalogListing, CatalogRuntime, EntryRegistry, Surface};
pub use click::ClickOutcome;
pub use config::{ConfigError, IntegrationConfig};
pub use editor::{EditorId, EditorScreen, TextField};
pub use gate::AvailabilityGate;
pub use ghost::{DragTarget, DragTargets};
pub use integration::CatalogIntegration;
pub use model::{EntryType, IdentifierKind, ItemStack, Location, RawEntry, TypedEntry};
pub use resolve::{GameRegistries, IdResolver, MapRegistries};
pub use session::{ActiveSession, SessionState};
