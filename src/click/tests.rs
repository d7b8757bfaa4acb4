// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use rstest::{fixture, rstest};

use super::{ClickInterceptor, ClickOutcome};
use crate::catalog::{Canvas, CatalogBridge, EntryHelper, EntryRegistry, Surface};
use crate::config::IntegrationConfig;
use crate::editor::{EditorId, EditorScreen, FieldBuffer, TextField};
use crate::model::{EntryType, IdentifierKind, ItemStack, Location, RawEntry};
use crate::resolve::{IdResolver, MapRegistries};
use crate::session::SessionState;

const EDITOR: EditorId = EditorId::new(7);
const OVERLAY_CELL: (u16, u16) = (60, 3);
const BOOKMARK_CELL: (u16, u16) = (60, 10);

struct Screen {
    id: EditorId,
    field: Option<FieldBuffer>,
    warnings: Vec<IdentifierKind>,
    closed: usize,
}

impl Screen {
    fn new(id: EditorId) -> Self {
        Self {
            id,
            field: Some(FieldBuffer::new(Rect::new(2, 2, 30, 1)).with_value("before")),
            warnings: Vec::new(),
            closed: 0,
        }
    }

    fn value(&self) -> &str {
        self.field.as_ref().map(|field| field.value()).unwrap_or_default()
    }
}

impl EditorScreen for Screen {
    fn editor_id(&self) -> EditorId {
        self.id
    }

    fn target_field(&mut self) -> Option<&mut dyn TextField> {
        self.field.as_mut().map(|field| field as &mut dyn TextField)
    }

    fn gui_bounds(&self) -> Rect {
        Rect::new(0, 0, 40, 20)
    }

    fn deactivate_session(&mut self) {
        self.closed += 1;
    }

    fn show_incompatible_warning(&mut self, kind: IdentifierKind) {
        self.warnings.push(kind);
    }
}

struct Fluid;
struct FluidHelper;

impl EntryHelper<Fluid> for FluidHelper {
    fn location(&self, _: &Fluid) -> Option<String> {
        Some("ns:water".to_owned())
    }

    fn display_name(&self, _: &Fluid) -> String {
        "Water".to_owned()
    }
}

/// Registered, but never reports a location.
struct Dry;
struct DryHelper;

impl EntryHelper<Dry> for DryHelper {
    fn location(&self, _: &Dry) -> Option<String> {
        None
    }

    fn display_name(&self, _: &Dry) -> String {
        "Dry".to_owned()
    }
}

/// Never registered with the catalog.
struct Stray;

struct ItemHelper;

impl EntryHelper<ItemStack> for ItemHelper {
    fn location(&self, entry: &ItemStack) -> Option<String> {
        Some(entry.item().to_string())
    }

    fn display_name(&self, entry: &ItemStack) -> String {
        entry.item().path().to_owned()
    }
}

fn draw_nothing<T>(_: &mut Canvas<'_>, _: &T) {}

fn loc(s: &str) -> Location {
    Location::parse(s).expect("location")
}

fn item(id: &str) -> RawEntry {
    Arc::new(ItemStack::new(loc(id)))
}

fn intercept<'a>(
    registry: &'a EntryRegistry,
    resolver: &'a IdResolver,
    config: &'a IntegrationConfig,
) -> ClickInterceptor<'a> {
    ClickInterceptor::new(Some(CatalogBridge::new(registry)), resolver, config)
}

fn cell(area: (u16, u16)) -> Rect {
    Rect::new(area.0, area.1, 1, 1)
}

fn registry_with(overlay: Option<RawEntry>) -> EntryRegistry {
    let mut registry = EntryRegistry::new();
    registry
        .register::<ItemStack, _, _>(
            EntryType::of::<ItemStack>(),
            ItemHelper,
            draw_nothing::<ItemStack>,
        )
        .register::<Fluid, _, _>(EntryType::of::<Fluid>(), FluidHelper, draw_nothing::<Fluid>)
        .register::<Dry, _, _>(EntryType::of::<Dry>(), DryHelper, draw_nothing::<Dry>);
    if let Some(entry) = overlay {
        registry.place(Surface::Overlay, cell(OVERLAY_CELL), entry);
    }
    registry
}

#[fixture]
fn resolver() -> IdResolver {
    IdResolver::new(Arc::new(
        MapRegistries::new()
            .with_item(loc("ns:apple"))
            .with_item(loc("ns:stone"))
            .with_block(loc("ns:stone")),
    ))
}

fn click_at((column, row): (u16, u16)) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn active(kind: IdentifierKind) -> SessionState {
    let mut session = SessionState::new();
    session.activate(EDITOR, kind);
    session
}

#[rstest]
fn successful_pick_writes_field_and_ends_session(resolver: IdResolver) {
    let registry = registry_with(Some(item("ns:apple")));
    let config = IntegrationConfig::default();
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Item);
    let mut screen = Screen::new(EDITOR);
    let outcome = interceptor.on_click(&mut session, &click_at(OVERLAY_CELL), &mut screen);

    assert_eq!(outcome, ClickOutcome::Consume);
    assert_eq!(screen.value(), "ns:apple");
    assert!(!session.is_active());
    assert_eq!(screen.closed, 1);
    assert!(screen.warnings.is_empty());
}

#[rstest]
fn incompatible_pick_warns_and_keeps_session(resolver: IdResolver) {
    let registry = registry_with(Some(item("ns:apple")));
    let config = IntegrationConfig::default();
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Block);
    let mut screen = Screen::new(EDITOR);
    let outcome = interceptor.on_click(&mut session, &click_at(OVERLAY_CELL), &mut screen);

    assert_eq!(outcome, ClickOutcome::ConsumeAndWarn(IdentifierKind::Block));
    assert_eq!(screen.warnings, vec![IdentifierKind::Block]);
    assert_eq!(screen.value(), "before");
    assert_eq!(session.active_kind(), Some(IdentifierKind::Block));
    assert_eq!(screen.closed, 0);
}

#[rstest]
fn warning_can_be_disabled(resolver: IdResolver) {
    let registry = registry_with(Some(item("ns:apple")));
    let config = IntegrationConfig { warn_on_incompatible: false, ..IntegrationConfig::default() };
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Block);
    let mut screen = Screen::new(EDITOR);
    let outcome = interceptor.on_click(&mut session, &click_at(OVERLAY_CELL), &mut screen);

    assert_eq!(outcome, ClickOutcome::Consume);
    assert!(screen.warnings.is_empty());
    assert!(session.is_active());
}

#[rstest]
fn non_item_entry_is_swallowed_without_side_effects(resolver: IdResolver) {
    let registry = registry_with(Some(Arc::new(Fluid)));
    let config = IntegrationConfig::default();
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Item);
    let before = session.clone();
    let mut screen = Screen::new(EDITOR);
    let outcome = interceptor.on_click(&mut session, &click_at(OVERLAY_CELL), &mut screen);

    assert_eq!(outcome, ClickOutcome::Consume);
    assert_eq!(session, before);
    assert_eq!(screen.value(), "before");
    assert!(screen.warnings.is_empty());
}

#[rstest]
fn raw_mode_accepts_non_item_entries(resolver: IdResolver) {
    let registry = registry_with(Some(Arc::new(Fluid)));
    let config = IntegrationConfig::default();
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Raw);
    let mut screen = Screen::new(EDITOR);
    let outcome = interceptor.on_click(&mut session, &click_at(OVERLAY_CELL), &mut screen);

    assert_eq!(outcome, ClickOutcome::Consume);
    assert_eq!(screen.value(), "ns:water");
    assert!(!session.is_active());
}

#[rstest]
#[case::unlocatable(Arc::new(Dry) as RawEntry, ClickOutcome::ConsumeAndWarn(IdentifierKind::Raw))]
#[case::unrecognised(Arc::new(Stray) as RawEntry, ClickOutcome::Consume)]
fn raw_mode_without_location_keeps_session(
    resolver: IdResolver,
    #[case] entry: RawEntry,
    #[case] expected: ClickOutcome,
) {
    let registry = registry_with(Some(entry));
    let config = IntegrationConfig::default();
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Raw);
    let before = session.clone();
    let mut screen = Screen::new(EDITOR);
    let outcome = interceptor.on_click(&mut session, &click_at(OVERLAY_CELL), &mut screen);

    assert_eq!(outcome, expected);
    let warned = matches!(expected, ClickOutcome::ConsumeAndWarn(_));
    assert_eq!(screen.warnings.len(), usize::from(warned));
    assert_eq!(session, before);
    assert_eq!(screen.value(), "before");
    assert_eq!(screen.closed, 0);
}

#[rstest]
fn empty_cell_passes_through(resolver: IdResolver) {
    let registry = registry_with(Some(item("ns:apple")));
    let config = IntegrationConfig::default();
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Item);
    let mut screen = Screen::new(EDITOR);
    let outcome = interceptor.on_click(&mut session, &click_at((0, 0)), &mut screen);

    assert_eq!(outcome, ClickOutcome::PassThrough);
    assert!(session.is_active());
}

#[rstest]
#[case::other_editor(EditorId::new(8), Some(IdentifierKind::Item), true)]
#[case::no_session(EDITOR, None, true)]
#[case::no_runtime(EDITOR, Some(IdentifierKind::Item), false)]
fn ignored_unless_listening_editor_with_runtime(
    resolver: IdResolver,
    #[case] screen_id: EditorId,
    #[case] kind: Option<IdentifierKind>,
    #[case] runtime_ready: bool,
) {
    let registry = registry_with(Some(item("ns:apple")));
    let config = IntegrationConfig::default();
    let bridge = runtime_ready.then(|| CatalogBridge::new(&registry));
    let interceptor = ClickInterceptor::new(bridge, &resolver, &config);

    let mut session = SessionState::new();
    if let Some(kind) = kind {
        session.activate(EDITOR, kind);
    }
    let mut screen = Screen::new(screen_id);
    let outcome = interceptor.on_click(&mut session, &click_at(OVERLAY_CELL), &mut screen);

    assert_eq!(outcome, ClickOutcome::PassThrough);
    assert_eq!(screen.value(), "before");
}

#[rstest]
fn mouse_release_is_not_a_click(resolver: IdResolver) {
    let registry = registry_with(Some(item("ns:apple")));
    let config = IntegrationConfig::default();
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Item);
    let mut event = click_at(OVERLAY_CELL);
    event.kind = MouseEventKind::Up(MouseButton::Left);
    let outcome = interceptor.on_click(&mut session, &event, &mut Screen::new(EDITOR));

    assert_eq!(outcome, ClickOutcome::PassThrough);
}

#[rstest]
fn bookmarks_are_searched_after_overlay(resolver: IdResolver) {
    let registry = registry_with(Some(item("ns:apple")));
    registry.place(Surface::Bookmarks, cell(OVERLAY_CELL), item("ns:stone"));
    registry.place(Surface::Bookmarks, cell(BOOKMARK_CELL), item("ns:stone"));
    let config = IntegrationConfig::default();
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Item);
    let mut screen = Screen::new(EDITOR);
    interceptor.on_click(&mut session, &click_at(OVERLAY_CELL), &mut screen);
    assert_eq!(screen.value(), "ns:apple");

    let mut session = active(IdentifierKind::Item);
    let mut screen = Screen::new(EDITOR);
    interceptor.on_click(&mut session, &click_at(BOOKMARK_CELL), &mut screen);
    assert_eq!(screen.value(), "ns:stone");
}

#[rstest]
fn bookmarks_can_be_excluded(resolver: IdResolver) {
    let registry = registry_with(None);
    registry.place(Surface::Bookmarks, cell(BOOKMARK_CELL), item("ns:stone"));
    let config = IntegrationConfig { search_bookmarks: false, ..IntegrationConfig::default() };
    let interceptor = intercept(&registry, &resolver, &config);

    let mut session = active(IdentifierKind::Item);
    let outcome =
        interceptor.on_click(&mut session, &click_at(BOOKMARK_CELL), &mut Screen::new(EDITOR));
    assert_eq!(outcome, ClickOutcome::PassThrough);
}

#[test]
fn only_pass_through_is_unconsumed() {
    assert!(!ClickOutcome::PassThrough.is_consumed());
    assert!(ClickOutcome::Consume.is_consumed());
    assert!(ClickOutcome::ConsumeAndWarn(IdentifierKind::Entity).is_consumed());
}
