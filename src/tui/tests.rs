// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode, MouseButton,
    MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use rstest::{fixture, rstest};

use super::chrome::{draw, panel_rows, scroll_offset, PanelRow};
use super::theme::TuiTheme;
use super::{App, HitTarget, Panel};
use crate::assets::DirAssetResolver;
use crate::model::fixtures::{champion, cid, mixed_rows};
use crate::model::{ChampionClass, ChampionId, Modifiers};
use crate::randomizer::Randomizer;
use crate::store::{ChampionStore, MemoryKvStore, Persistence};

fn app_with_kv(kv: &MemoryKvStore) -> App {
    let store = ChampionStore::open(mixed_rows(), Persistence::new(kv.clone()))
        .with_randomizer(Randomizer::with_seed(3));
    App::new(store, Box::new(DirAssetResolver::new("/assets")), TuiTheme::default())
}

#[fixture]
fn app() -> App {
    app_with_kv(&MemoryKvStore::new())
}

fn render(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_of(app: &App, id: &str) -> (u16, u16) {
    let id = cid(id);
    app.hit_map
        .regions
        .iter()
        .find_map(|(area, target)| match target {
            HitTarget::Champion { id: hit, .. } if *hit == id => Some((area.x + 1, area.y)),
            _ => None,
        })
        .expect("champion is on screen")
}

fn roll_cell(app: &App) -> Option<(u16, u16)> {
    app.hit_map.regions.iter().find_map(|(area, target)| match target {
        HitTarget::Roll => Some((area.x, area.y)),
        HitTarget::Champion { .. } => None,
    })
}

fn mouse(kind: MouseEventKind, (column, row): (u16, u16), modifiers: KeyModifiers) -> Event {
    Event::Mouse(MouseEvent { kind, column, row, modifiers })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn modifier_key(code: ModifierKeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(KeyCode::Modifier(code), KeyModifiers::NONE, kind))
}

fn hovered(app: &App) -> Option<&str> {
    app.store.hovered_champion_id().map(ChampionId::as_str)
}

#[test]
fn panel_rows_put_a_header_before_each_non_empty_class() {
    let champions = [
        champion("cassie", "Cassie", ChampionClass::Damage),
        champion("grover", "Grover", ChampionClass::Support),
        champion("seris", "Seris", ChampionClass::Support),
    ];
    let refs: Vec<_> = champions.iter().collect();
    let rows = panel_rows(&refs);

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], PanelRow::Header { class: ChampionClass::Damage, count: 1 });
    assert!(matches!(rows[1], PanelRow::Champion { index: 0, .. }));
    assert_eq!(rows[2], PanelRow::Header { class: ChampionClass::Support, count: 2 });
    assert!(matches!(
        rows[4],
        PanelRow::Champion { index: 2, champion } if champion.name() == "Seris"
    ));
}

#[rstest]
#[case(0, 5, 0)]
#[case(4, 5, 0)]
#[case(5, 5, 1)]
#[case(12, 5, 8)]
#[case(3, 0, 0)]
fn scroll_keeps_the_cursor_row_visible(
    #[case] cursor_row: usize,
    #[case] height: usize,
    #[case] expected: usize,
) {
    assert_eq!(scroll_offset(cursor_row, height), expected);
}

#[rstest]
fn draw_lists_the_pool_by_class_and_maps_every_row(mut app: App) {
    let text = buffer_text(&render(&mut app, 80, 24));

    assert!(text.contains("Out (0)"));
    assert!(text.contains("Pool (8)"));
    assert!(text.contains("Frontline (2)"));
    assert!(text.contains("No champions"));
    assert!(text.contains("No pick yet"));
    assert_eq!(
        app.hit_map
            .regions
            .iter()
            .filter(|(_, target)| matches!(target, HitTarget::Champion { panel: Panel::Pool, .. }))
            .count(),
        8
    );
    assert!(roll_cell(&app).is_some());
}

#[rstest]
fn mouse_moves_set_and_clear_the_hover(mut app: App) {
    render(&mut app, 80, 24);
    app.handle_event(mouse(MouseEventKind::Moved, cell_of(&app, "maeve"), KeyModifiers::NONE));
    assert_eq!(hovered(&app), Some("maeve"));
    assert_eq!(app.cursors[Panel::Pool.index()], 3);

    app.handle_event(mouse(MouseEventKind::Moved, (0, 23), KeyModifiers::NONE));
    assert_eq!(hovered(&app), None);
}

#[rstest]
fn left_click_moves_a_champion_out_and_right_click_does_nothing(mut app: App) {
    render(&mut app, 80, 24);
    let ash = cell_of(&app, "ash");

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Right), ash, KeyModifiers::NONE));
    assert!(app.store.excluded_champions().is_empty());

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), ash, KeyModifiers::NONE));
    let out: Vec<&str> = app.store.excluded_champions().iter().map(|c| c.name()).collect();
    assert_eq!(out, ["Ash"]);

    let text = buffer_text(&render(&mut app, 80, 24));
    assert!(text.contains("Out (1)"));
    assert!(text.contains("Pool (7)"));
}

#[rstest]
fn ctrl_click_without_keyboard_protocol_uses_mouse_modifiers(mut app: App) {
    render(&mut app, 80, 24);
    let seris = cell_of(&app, "seris");

    app.handle_event(mouse(MouseEventKind::Moved, seris, KeyModifiers::CONTROL));
    assert_eq!(app.store.modifiers(), Modifiers::new(true, false));
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), seris, KeyModifiers::CONTROL));

    let seris = app.store.champion(&cid("seris")).expect("seris");
    assert!(seris.disabled());
    assert!(!seris.removed());
}

#[rstest]
fn modifier_keys_drive_class_gestures_with_keyboard_protocol(mut app: App) {
    app.keyboard_enhanced = true;
    render(&mut app, 80, 24);

    app.handle_event(modifier_key(ModifierKeyCode::LeftShift, KeyEventKind::Press));
    assert!(app.store.modifiers().shift);

    let grover = cell_of(&app, "grover");
    app.handle_event(mouse(MouseEventKind::Moved, grover, KeyModifiers::NONE));
    let selected: Vec<&str> = app.store.selected_champions().iter().map(|c| c.name()).collect();
    assert_eq!(selected, ["Grover", "Seris"]);
    assert!(app.store.modifiers().shift);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), grover, KeyModifiers::NONE));
    let out: Vec<&str> = app.store.excluded_champions().iter().map(|c| c.name()).collect();
    assert_eq!(out, ["Grover", "Seris"]);

    app.handle_event(modifier_key(ModifierKeyCode::LeftShift, KeyEventKind::Release));
    assert_eq!(app.store.modifiers(), Modifiers::NONE);
}

#[rstest]
fn focus_loss_releases_held_modifiers(mut app: App) {
    app.keyboard_enhanced = true;
    app.handle_event(modifier_key(ModifierKeyCode::RightControl, KeyEventKind::Press));
    app.handle_event(modifier_key(ModifierKeyCode::LeftShift, KeyEventKind::Press));
    assert_eq!(app.store.modifiers(), Modifiers::new(true, true));

    app.handle_event(Event::FocusLost);
    assert_eq!(app.store.modifiers(), Modifiers::NONE);
}

#[rstest]
fn keyboard_cursor_hovers_and_presses(mut app: App) {
    app.handle_event(key(KeyCode::Char('j')));
    assert_eq!(hovered(&app), Some("viktor"));

    app.handle_event(key(KeyCode::Char('x')));
    assert!(app.store.champion(&cid("viktor")).is_some_and(|c| c.removed()));
    assert_eq!(hovered(&app), Some("androxus"));

    app.handle_event(key(KeyCode::Char('D')));
    let mut flank = app.store.champions().iter().filter(|c| c.class() == ChampionClass::Flank);
    assert!(flank.all(|c| c.disabled()));

    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.focus, Panel::Out);
    assert_eq!(hovered(&app), Some("viktor"));
    app.handle_event(key(KeyCode::Char(' ')));
    assert!(app.store.excluded_champions().is_empty());
}

#[rstest]
fn pressing_in_an_empty_panel_only_shows_a_toast(mut app: App) {
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Panel::Out);
    app.handle_event(key(KeyCode::Char('x')));

    assert_eq!(app.live_toast(), Some("Out is empty"));
    assert_eq!(app.store.rev(), 0);
}

#[rstest]
fn roll_key_and_button_pick_from_the_pool(mut app: App) {
    app.handle_event(key(KeyCode::Char('r')));
    let first = app.store.randomized_champion_id().cloned().expect("picked");
    assert!(app.is_revealing());

    render(&mut app, 80, 24);
    let roll = roll_cell(&app).expect("roll button");
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), roll, KeyModifiers::NONE));
    assert_eq!(app.store.previous_champion_id(), Some(&first));

    let text = buffer_text(&render(&mut app, 80, 24));
    assert!(text.contains("→") || text.contains("(was"));
}

#[rstest]
fn rolling_an_empty_pool_changes_nothing(mut app: App) {
    for class in ChampionClass::ALL {
        app.store.set_disabled_by_class(class, true).expect("disable");
    }
    let rev = app.store.rev();

    render(&mut app, 80, 24);
    assert_eq!(roll_cell(&app), None);
    app.handle_event(key(KeyCode::Char('r')));

    assert_eq!(app.store.rev(), rev);
    assert_eq!(app.store.randomized_champion(), None);
    assert!(!app.is_revealing());
    assert!(app.live_toast().is_some_and(|toast| toast.starts_with("Nothing to roll")));
}

#[rstest]
fn footer_shows_the_hovered_champion_asset(mut app: App) {
    app.handle_event(key(KeyCode::Down));
    let text = buffer_text(&render(&mut app, 160, 24));
    assert!(text.contains("file:///assets/viktor.png"));
}

#[test]
fn persist_failures_surface_as_a_toast() {
    let kv = MemoryKvStore::new();
    let mut app = app_with_kv(&kv);
    kv.set_fail_writes(true);

    app.handle_event(key(KeyCode::Char('x')));
    assert!(app.store.champion(&cid("cassie")).is_some_and(|c| c.removed()));
    assert!(app.live_toast().is_some_and(|toast| toast.starts_with("Not saved")));
}

#[rstest]
fn help_toggles_and_quit_keys_stop_the_loop(mut app: App) {
    app.handle_event(key(KeyCode::Char('?')));
    assert!(app.show_help);
    let text = buffer_text(&render(&mut app, 100, 30));
    assert!(text.contains("Keys & mouse"));

    app.handle_event(key(KeyCode::Char('x')));
    assert!(app.store.excluded_champions().is_empty());
    app.handle_event(key(KeyCode::Esc));
    assert!(!app.show_help);
    assert!(!app.should_quit);

    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[rstest]
fn release_events_for_regular_keys_are_ignored(mut app: App) {
    let release =
        KeyEvent::new_with_kind(KeyCode::Char('x'), KeyModifiers::NONE, KeyEventKind::Release);
    app.handle_event(Event::Key(release));
    assert_eq!(app.store.rev(), 0);
}
