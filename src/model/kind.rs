// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What kind of canonical id an identifier field is listening for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    Item,
    Block,
    Entity,
    /// Accept any catalog entry type and write its canonical location verbatim.
    Raw,
}

impl IdentifierKind {
    pub const ALL: [Self; 4] = [Self::Item, Self::Block, Self::Entity, Self::Raw];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Block => "block",
            Self::Entity => "entity",
            Self::Raw => "raw",
        }
    }

    /// Kind-specific modes only consider entries with an item-like representation.
    pub fn is_raw(self) -> bool {
        self == Self::Raw
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdentifierKindError;

impl fmt::Display for ParseIdentifierKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid identifier kind")
    }
}

impl std::error::Error for ParseIdentifierKindError {}

impl FromStr for IdentifierKind {
    type Err = ParseIdentifierKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "item" => Ok(Self::Item),
            "block" => Ok(Self::Block),
            "entity" => Ok(Self::Entity),
            "raw" => Ok(Self::Raw),
            _ => Err(ParseIdentifierKindError),
        }
    }
}
