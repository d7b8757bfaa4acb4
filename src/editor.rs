// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! What this crate needs from the host's editor screens.

use std::fmt;

use ratatui::layout::Rect;

use crate::model::IdentifierKind;

/// Identity of one open editor screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditorId(u64);

impl EditorId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "editor#{}", self.0)
    }
}

/// A single-line text input that can receive a picked id.
pub trait TextField {
    fn value(&self) -> &str;

    fn set_value(&mut self, value: &str);

    /// Screen rectangle of the field; drag targets cover exactly this area.
    fn area(&self) -> Rect;
}

pub trait EditorScreen {
    fn editor_id(&self) -> EditorId;

    /// The identifier field currently listening for a pick, if any.
    fn target_field(&mut self) -> Option<&mut dyn TextField>;

    fn gui_bounds(&self) -> Rect;

    /// Tells the editor its picking session ended after a successful pick.
    fn deactivate_session(&mut self) {}

    fn show_incompatible_warning(&mut self, kind: IdentifierKind);
}

/// Plain in-memory [`TextField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    value: String,
    area: Rect,
}

impl FieldBuffer {
    pub fn new(area: Rect) -> Self {
        Self { value: String::new(), area }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl TextField for FieldBuffer {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }

    fn area(&self) -> Rect {
        self.area
    }
}
