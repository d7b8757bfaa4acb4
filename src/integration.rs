// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host-owned facade tying the gate, session, resolver and catalog runtime together.
//!
//! The host constructs one [`CatalogIntegration`], forwards the catalog service lifecycle to
//! [`CatalogIntegration::on_service_available`] / [`CatalogIntegration::on_service_unavailable`],
//! and routes drag, click and GUI-bounds queries through the matching hook. Every hook consults
//! the [`AvailabilityGate`] before the runtime is touched, and degrades to an empty or
//! pass-through answer while the service is absent.

use std::fmt;
use std::sync::Arc;

use crossterm::event::MouseEvent;
use ratatui::layout::Rect;

use crate::catalog::{Canvas, CatalogBridge, CatalogListing, CatalogRuntime};
use crate::click::{ClickInterceptor, ClickOutcome};
use crate::config::IntegrationConfig;
use crate::editor::{EditorId, EditorScreen};
use crate::gate::AvailabilityGate;
use crate::ghost::{DragTargets, GhostTargetProvider};
use crate::model::{IdentifierKind, RawEntry, TypedEntry};
use crate::resolve::{GameRegistries, IdResolver};
use crate::session::{ActiveSession, SessionState};

pub struct CatalogIntegration {
    gate: AvailabilityGate,
    config: IntegrationConfig,
    session: SessionState,
    resolver: IdResolver,
    runtime: Option<Arc<dyn CatalogRuntime>>,
}

impl CatalogIntegration {
    pub fn new(gate: AvailabilityGate, registries: Arc<dyn GameRegistries>) -> Self {
        Self {
            gate,
            config: IntegrationConfig::default(),
            session: SessionState::new(),
            resolver: IdResolver::new(registries),
            runtime: None,
        }
    }

    pub fn with_config(mut self, config: IntegrationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    pub fn gate(&self) -> &AvailabilityGate {
        &self.gate
    }

    pub fn resolver(&self) -> &IdResolver {
        &self.resolver
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Whether the service is present and its runtime has been handed over.
    pub fn is_ready(&self) -> bool {
        self.bridge().is_some()
    }

    /// Caches `runtime`. Ignored (returns `false`) when the gate reports the service as absent.
    pub fn on_service_available(&mut self, runtime: Arc<dyn CatalogRuntime>) -> bool {
        if !self.gate.is_available() {
            tracing::warn!("catalog runtime offered while the service is absent; ignoring");
            return false;
        }
        let replaced = self.runtime.replace(runtime).is_some();
        tracing::debug!(replaced, "catalog runtime available");
        true
    }

    /// Drops the cached runtime and ends any active session.
    ///
    /// The editor is not told through [`EditorScreen::deactivate_session`], since no screen is at
    /// hand here. The ended session is returned instead, and [`SessionState::rev`] moves, so a host
    /// showing a "listening" state can clear it from either signal.
    pub fn on_service_unavailable(&mut self) -> Option<ActiveSession> {
        let had_runtime = self.runtime.take().is_some();
        let ended = self.session.deactivate();
        tracing::debug!(
            had_runtime,
            ended_editor = ended.map(|session| session.editor.get()),
            "catalog runtime unavailable"
        );
        ended
    }

    /// Starts listening for a pick on `editor`. Replaces any session already active.
    pub fn activate(&mut self, editor: EditorId, kind: IdentifierKind) {
        let previous = self.session.active_editor();
        self.session.activate(editor, kind);
        tracing::debug!(%editor, %kind, ?previous, "catalog pick session activated");
    }

    pub fn deactivate(&mut self) -> Option<ActiveSession> {
        let previous = self.session.deactivate();
        if let Some(previous) = previous {
            tracing::debug!(editor = %previous.editor, "catalog pick session deactivated");
        }
        previous
    }

    pub fn bridge(&self) -> Option<CatalogBridge<'_>> {
        ready_bridge(&self.gate, self.runtime.as_deref())
    }

    /// Drag-target provider hook.
    pub fn ghost_targets(
        &self,
        screen: &mut dyn EditorScreen,
        dragged: RawEntry,
        drag_starting: bool,
    ) -> DragTargets {
        match self.bridge() {
            Some(bridge) => GhostTargetProvider::new(bridge, &self.resolver).targets(
                &self.session,
                screen,
                dragged,
                drag_starting,
            ),
            None => DragTargets::new(),
        }
    }

    /// Click-listener hook.
    pub fn on_click(&mut self, event: &MouseEvent, screen: &mut dyn EditorScreen) -> ClickOutcome {
        let bridge = ready_bridge(&self.gate, self.runtime.as_deref());
        ClickInterceptor::new(bridge, &self.resolver, &self.config).on_click(
            &mut self.session,
            event,
            screen,
        )
    }

    /// GUI-properties hook: the screen's bounds, but only for the editor that is listening.
    pub fn gui_bounds(&self, screen: &dyn EditorScreen) -> Option<Rect> {
        if !self.gate.is_available() || !self.session.is_active_editor(screen.editor_id()) {
            return None;
        }
        Some(screen.gui_bounds())
    }

    /// See [`CatalogBridge::enumerate_all`]. Empty while the service is absent.
    pub fn enumerate_all(&self) -> impl Iterator<Item = CatalogListing> + '_ {
        self.bridge().into_iter().flat_map(|bridge| bridge.enumerate_all())
    }

    pub fn resolve_by_id(&self, id: &str) -> Option<TypedEntry> {
        self.bridge()?.resolve_by_id(id)
    }

    /// Returns `false` without drawing when the service is absent.
    pub fn render(&self, entry: &TypedEntry, canvas: &mut Canvas<'_>, x: i32, y: i32) -> bool {
        let Some(bridge) = self.bridge() else {
            return false;
        };
        bridge.render(entry, canvas, x, y);
        true
    }
}

impl fmt::Debug for CatalogIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogIntegration")
            .field("gate", &self.gate)
            .field("config", &self.config)
            .field("session", &self.session)
            .field("runtime", &self.runtime.is_some())
            .finish_non_exhaustive()
    }
}

fn ready_bridge<'a>(
    gate: &AvailabilityGate,
    runtime: Option<&'a dyn CatalogRuntime>,
) -> Option<CatalogBridge<'a>> {
    if !gate.is_available() {
        return None;
    }
    runtime.map(CatalogBridge::new)
}
