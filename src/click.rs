// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Picking an id by clicking a catalog entry while a field is listening.

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::catalog::{CatalogBridge, Surface};
use crate::config::IntegrationConfig;
use crate::editor::EditorScreen;
use crate::model::{IdentifierKind, ItemStack, Location, RawEntry};
use crate::resolve::IdResolver;
use crate::session::SessionState;

/// What the host should do with the click after the interceptor saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not ours; let default handling run.
    PassThrough,
    /// Swallow the click.
    Consume,
    /// Swallow the click; the entry does not fit a field expecting this kind.
    ConsumeAndWarn(IdentifierKind),
}

impl ClickOutcome {
    pub fn is_consumed(self) -> bool {
        self != Self::PassThrough
    }
}

pub struct ClickInterceptor<'a> {
    bridge: Option<CatalogBridge<'a>>,
    resolver: &'a IdResolver,
    config: &'a IntegrationConfig,
}

impl<'a> ClickInterceptor<'a> {
    /// `bridge` is `None` while the catalog runtime is not initialized.
    pub fn new(
        bridge: Option<CatalogBridge<'a>>,
        resolver: &'a IdResolver,
        config: &'a IntegrationConfig,
    ) -> Self {
        Self { bridge, resolver, config }
    }

    pub fn on_click(
        &self,
        session: &mut SessionState,
        event: &MouseEvent,
        screen: &mut dyn EditorScreen,
    ) -> ClickOutcome {
        if !matches!(event.kind, MouseEventKind::Down(_)) {
            return ClickOutcome::PassThrough;
        }
        let Some(active) = session.active() else {
            return ClickOutcome::PassThrough;
        };
        if active.editor != screen.editor_id() {
            return ClickOutcome::PassThrough;
        }
        let Some(bridge) = self.bridge else {
            return ClickOutcome::PassThrough;
        };
        let Some(raw) = self.entry_under_pointer(bridge, event.column, event.row) else {
            return ClickOutcome::PassThrough;
        };

        let resolved = if active.kind.is_raw() {
            let Some(entry) = bridge.typed(raw) else {
                return ClickOutcome::Consume;
            };
            bridge.canonical_location(&entry)
        } else {
            let Some(item) = ItemStack::from_raw(&raw) else {
                return ClickOutcome::Consume;
            };
            self.resolver.resolve(item, active.kind)
        };

        match resolved {
            Some(id) => commit(session, screen, &id),
            None => {
                tracing::debug!(
                    kind = %active.kind,
                    editor = %active.editor,
                    "incompatible catalog entry clicked"
                );
                if !self.config.warn_on_incompatible {
                    return ClickOutcome::Consume;
                }
                screen.show_incompatible_warning(active.kind);
                ClickOutcome::ConsumeAndWarn(active.kind)
            }
        }
    }

    fn entry_under_pointer(
        &self,
        bridge: CatalogBridge<'_>,
        column: u16,
        row: u16,
    ) -> Option<RawEntry> {
        Surface::SEARCH_ORDER
            .into_iter()
            .filter(|&surface| surface != Surface::Bookmarks || self.config.search_bookmarks)
            .find_map(|surface| bridge.entry_under_pointer(surface, column, row))
    }
}

fn commit(
    session: &mut SessionState,
    screen: &mut dyn EditorScreen,
    id: &Location,
) -> ClickOutcome {
    let id = id.to_string();
    match screen.target_field() {
        Some(field) => field.set_value(&id),
        None => tracing::warn!(%id, "picked id but the editor has no target field"),
    }
    if let Some(previous) = session.deactivate() {
        tracing::debug!(
            editor = %previous.editor,
            kind = %previous.kind,
            %id,
            "catalog pick committed"
        );
    }
    screen.deactivate_session();
    ClickOutcome::Consume
}

#[cfg(test)]
mod tests;
