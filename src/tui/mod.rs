// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Two panels (Out on the left, Pool on the right) list champions grouped by class, and a strip
//! on top shows the last roll. Mouse, modifier-key and focus events are translated into
//! [`ChampionStore`] actions; every handler finishes before the next event is read.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        ModifierKeyCode, MouseButton, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::prelude::*;

use crate::assets::AssetResolver;
use crate::model::{Champion, ChampionId, Modifiers, PointerButton};
use crate::ops::PressGesture;
use crate::store::{ChampionStore, StoreError};

mod chrome;
mod theme;

pub use theme::ThemeError;
use theme::TuiTheme;

const TOAST_TTL: Duration = Duration::from_secs(3);
const REVEAL_DURATION: Duration = Duration::from_millis(900);
const IDLE_POLL: Duration = Duration::from_millis(250);
const ANIMATION_POLL: Duration = Duration::from_millis(50);
const PAGE_STEP: isize = 10;

/// Runs the interactive terminal UI until the user quits.
pub fn run(store: ChampionStore, assets: Box<dyn AssetResolver>) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(store, assets, theme);
    app.keyboard_enhanced = terminal.keyboard_enhanced;
    tracing::info!(keyboard_enhanced = app.keyboard_enhanced, "terminal ui started");

    while !app.should_quit {
        terminal.draw(|frame| chrome::draw(frame, &mut app))?;

        let timeout = if app.is_revealing() { ANIMATION_POLL } else { IDLE_POLL };
        if event::poll(timeout)? {
            app.handle_event(event::read()?);
        }
    }

    tracing::info!("terminal ui stopped");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Out,
    Pool,
}

impl Panel {
    fn index(self) -> usize {
        match self {
            Self::Out => 0,
            Self::Pool => 1,
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Out => Self::Pool,
            Self::Pool => Self::Out,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Out => "Out",
            Self::Pool => "Pool",
        }
    }

    fn holds(self, champion: &Champion) -> bool {
        match self {
            Self::Out => champion.removed(),
            Self::Pool => !champion.removed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HitTarget {
    Champion { panel: Panel, index: usize, id: ChampionId },
    Roll,
}

/// Screen cell ranges from the last draw, so mouse events resolve to what was on screen.
#[derive(Debug, Clone, Default)]
struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    fn clear(&mut self) {
        self.regions.clear();
    }

    fn push(&mut self, area: Rect, target: HitTarget) {
        self.regions.push((area, target));
    }

    fn at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target)
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    store: ChampionStore,
    assets: Box<dyn AssetResolver>,
    theme: TuiTheme,
    focus: Panel,
    cursors: [usize; 2],
    hit_map: HitMap,
    show_help: bool,
    toast: Option<Toast>,
    reveal_started: Option<Instant>,
    keyboard_enhanced: bool,
    should_quit: bool,
}

impl App {
    fn new(store: ChampionStore, assets: Box<dyn AssetResolver>, theme: TuiTheme) -> Self {
        Self {
            store,
            assets,
            theme,
            focus: Panel::Pool,
            cursors: [0; 2],
            hit_map: HitMap::default(),
            show_help: false,
            toast: None,
            reveal_started: None,
            keyboard_enhanced: false,
            should_quit: false,
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => {
                // Key-up events for modifiers released elsewhere never reach us.
                self.store.clear_modifiers();
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let KeyCode::Modifier(code) = key.code {
            self.handle_modifier_key(code, key.kind != KeyEventKind::Release);
            return;
        }
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-PAGE_STEP),
            KeyCode::PageDown => self.move_cursor(PAGE_STEP),
            KeyCode::Home => self.move_cursor(isize::MIN),
            KeyCode::End => self.move_cursor(isize::MAX),
            KeyCode::Left | KeyCode::Char('h') => self.focus_panel(Panel::Out),
            KeyCode::Right | KeyCode::Char('l') => self.focus_panel(Panel::Pool),
            KeyCode::Tab | KeyCode::BackTab => self.focus_panel(self.focus.other()),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if !self.keyboard_enhanced {
                    self.store.set_modifiers(modifiers_from(key.modifiers));
                }
                let gesture = PressGesture::from_modifiers(self.store.modifiers());
                self.press_cursor(gesture);
            }
            KeyCode::Char('x') if shifted => self.press_cursor(PressGesture::ShiftClass),
            KeyCode::Char('x') => self.press_cursor(PressGesture::ShiftChampion),
            KeyCode::Char('X') => self.press_cursor(PressGesture::ShiftClass),
            KeyCode::Char('d') if shifted => self.press_cursor(PressGesture::ToggleClass),
            KeyCode::Char('d') => self.press_cursor(PressGesture::ToggleChampion),
            KeyCode::Char('D') => self.press_cursor(PressGesture::ToggleClass),
            KeyCode::Char('r') => self.randomize(),
            _ => {}
        }
    }

    fn handle_modifier_key(&mut self, code: ModifierKeyCode, pressed: bool) {
        match code {
            ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => {
                self.store.set_ctrl(pressed);
            }
            ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => {
                self.store.set_shift(pressed);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Without modifier key events, the flags on each mouse event are the only source.
        if !self.keyboard_enhanced {
            self.store.set_modifiers(modifiers_from(mouse.modifiers));
        }

        let target = self.hit_map.at(mouse.column, mouse.row).cloned();
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.hover_target(target.as_ref()),
            MouseEventKind::Down(button) => {
                if self.show_help {
                    self.show_help = false;
                    return;
                }
                match target {
                    Some(HitTarget::Champion { panel, index, id }) => {
                        self.focus = panel;
                        self.cursors[panel.index()] = index;
                        let result = self.store.press_champion(&id, pointer_button(button));
                        self.report(result);
                        self.clamp_cursors();
                    }
                    Some(HitTarget::Roll) if button == MouseButton::Left => self.randomize(),
                    _ => {}
                }
            }
            MouseEventKind::ScrollUp => self.move_cursor(-1),
            MouseEventKind::ScrollDown => self.move_cursor(1),
            _ => {}
        }
    }

    fn hover_target(&mut self, target: Option<&HitTarget>) {
        match target {
            Some(HitTarget::Champion { panel, index, id }) => {
                self.focus = *panel;
                self.cursors[panel.index()] = *index;
                let result = self.store.set_hovered_champion(Some(id.clone()));
                self.report(result);
            }
            _ => self.store.clear_hovered_champion(),
        }
    }

    fn panel_champions(&self, panel: Panel) -> Vec<&Champion> {
        self.store.champions().iter().filter(|champion| panel.holds(champion)).collect()
    }

    fn cursor_champion_id(&self) -> Option<ChampionId> {
        let champions = self.panel_champions(self.focus);
        champions
            .get(self.cursors[self.focus.index()])
            .map(|champion| champion.id().clone())
    }

    fn focus_panel(&mut self, panel: Panel) {
        self.focus = panel;
        self.clamp_cursors();
        self.hover_cursor();
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.panel_champions(self.focus).len();
        let cursor = &mut self.cursors[self.focus.index()];
        *cursor = match delta {
            isize::MIN => 0,
            isize::MAX => len.saturating_sub(1),
            delta if delta < 0 => cursor.saturating_sub(delta.unsigned_abs()),
            delta => cursor.saturating_add(delta.unsigned_abs()).min(len.saturating_sub(1)),
        };
        self.hover_cursor();
    }

    fn clamp_cursors(&mut self) {
        for panel in [Panel::Out, Panel::Pool] {
            let len = self.panel_champions(panel).len();
            let cursor = &mut self.cursors[panel.index()];
            *cursor = (*cursor).min(len.saturating_sub(1));
        }
    }

    /// The keyboard cursor doubles as the hover source.
    fn hover_cursor(&mut self) {
        let id = self.cursor_champion_id();
        let result = self.store.set_hovered_champion(id);
        self.report(result);
    }

    fn press_cursor(&mut self, gesture: PressGesture) {
        let Some(id) = self.cursor_champion_id() else {
            self.set_toast(format!("{} is empty", self.focus.title()));
            return;
        };
        let result = self.store.press_champion_with(&id, gesture);
        if let Some(delta) = self.report(result) {
            tracing::debug!(%id, ?gesture, changed = delta.changed.len(), "pressed champion");
        }
        self.clamp_cursors();
        self.hover_cursor();
    }

    fn randomize(&mut self) {
        if !self.store.can_randomize() {
            self.set_toast("Nothing to roll: every champion is out or disabled");
            return;
        }
        let result = self.store.randomize();
        if let Some(Some(_)) = self.report(result) {
            self.reveal_started = Some(Instant::now());
        }
    }

    fn is_revealing(&self) -> bool {
        self.reveal_progress().is_some()
    }

    /// Fraction of the reveal animation elapsed, while it runs.
    fn reveal_progress(&self) -> Option<f64> {
        let started = self.reveal_started?;
        let elapsed = started.elapsed();
        if elapsed >= REVEAL_DURATION {
            return None;
        }
        Some(elapsed.as_secs_f64() / REVEAL_DURATION.as_secs_f64())
    }

    fn hovered_asset_location(&self) -> Option<String> {
        self.store
            .hovered_champion()
            .map(|champion| self.assets.resolve(champion.image_path()))
    }

    fn report<T>(&mut self, result: Result<T, StoreError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err @ StoreError::Persist(_)) => {
                self.set_toast(format!("Not saved: {err}"));
                None
            }
            Err(err) => {
                tracing::warn!(%err, "store rejected ui action");
                self.set_toast(err.to_string());
                None
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn live_toast(&mut self) -> Option<&str> {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= Instant::now()) {
            self.toast = None;
        }
        self.toast.as_ref().map(|toast| toast.message.as_str())
    }
}

fn modifiers_from(flags: KeyModifiers) -> Modifiers {
    Modifiers::new(flags.contains(KeyModifiers::CONTROL), flags.contains(KeyModifiers::SHIFT))
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    keyboard_enhanced: bool,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange).map_err(
            |err| {
                teardown_terminal(false);
                err
            },
        )?;

        // Modifier press/release events need the progressive keyboard protocol.
        let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true))
            && execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                )
            )
            .is_ok();

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal(keyboard_enhanced);
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal(keyboard_enhanced);
            err
        })?;

        Ok(Self { terminal, keyboard_enhanced })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal(self.keyboard_enhanced);
    }
}

fn teardown_terminal(keyboard_enhanced: bool) {
    let mut stdout = io::stdout();
    if keyboard_enhanced {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(stdout, DisableFocusChange, DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

#[cfg(test)]
mod tests;
