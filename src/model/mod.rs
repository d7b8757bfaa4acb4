// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types shared by the bridge, resolver and handlers.

pub mod entry;
pub mod item;
pub mod kind;
pub mod location;

pub use entry::{EntryType, RawEntry, TypedEntry};
pub use item::ItemStack;
pub use kind::{IdentifierKind, ParseIdentifierKindError};
pub use location::{Location, LocationError, DEFAULT_NAMESPACE};
