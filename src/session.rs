// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Which editor is listening for a catalog pick, and for what kind of id.
//!
//! There is one session slot. Editor and kind are stored together, so either both are present
//! (ACTIVE) or neither is (INACTIVE).

use crate::editor::EditorId;
use crate::model::IdentifierKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSession {
    pub editor: EditorId,
    pub kind: IdentifierKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    rev: u64,
    active: Option<ActiveSession>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumped on every observable change.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn active(&self) -> Option<ActiveSession> {
        self.active
    }

    pub fn active_editor(&self) -> Option<EditorId> {
        self.active.map(|session| session.editor)
    }

    pub fn active_kind(&self) -> Option<IdentifierKind> {
        self.active.map(|session| session.kind)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_active_editor(&self, editor: EditorId) -> bool {
        self.active_editor() == Some(editor)
    }

    /// Starts listening; an already-active session is overwritten.
    pub fn activate(&mut self, editor: EditorId, kind: IdentifierKind) {
        let next = Some(ActiveSession { editor, kind });
        if self.active == next {
            return;
        }
        self.active = next;
        self.rev = self.rev.wrapping_add(1);
    }

    /// Returns the session that was active, if any.
    pub fn deactivate(&mut self) -> Option<ActiveSession> {
        let previous = self.active.take();
        if previous.is_some() {
            self.rev = self.rev.wrapping_add(1);
        }
        previous
    }
}
