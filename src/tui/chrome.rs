// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Panel, pick strip, footer and help rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{App, HitTarget, Panel};
use crate::model::{Champion, ChampionClass};

const PICK_HEIGHT: u16 = 3;
const ROLL_BUTTON: &str = "[ Roll ]";
const REVEAL_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// One line of a champion panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PanelRow<'a> {
    Header { class: ChampionClass, count: usize },
    Champion { index: usize, champion: &'a Champion },
}

/// Rows for `champions` (already in roster order), with a header before each non-empty class.
pub(super) fn panel_rows<'a>(champions: &[&'a Champion]) -> Vec<PanelRow<'a>> {
    let mut rows = Vec::with_capacity(champions.len() + ChampionClass::ALL.len());
    for class in ChampionClass::ALL {
        let start = rows.len();
        let mut count = 0;
        for (index, champion) in champions.iter().enumerate() {
            if champion.class() == class {
                rows.push(PanelRow::Champion { index, champion });
                count += 1;
            }
        }
        if count > 0 {
            rows.insert(start, PanelRow::Header { class, count });
        }
    }
    rows
}

/// First visible row so the cursor row stays on screen.
pub(super) fn scroll_offset(cursor_row: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    (cursor_row + 1).saturating_sub(height)
}

pub(super) fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    app.hit_map.clear();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PICK_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    render_pick(frame, app, layout[0]);
    render_panel(frame, app, Panel::Out, panels[0]);
    render_panel(frame, app, Panel::Pool, panels[1]);
    let footer = footer_line(app);
    frame.render_widget(Paragraph::new(footer).style(app.theme.base_style()), layout[2]);

    if app.show_help {
        render_help(frame, app, layout[1]);
    }
}

fn render_pick(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Pick ")
        .border_style(theme.base_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let store = &app.store;
    let mut spans = Vec::<Span<'static>>::new();
    match (store.randomized_champion(), app.reveal_progress()) {
        (None, _) if !store.can_randomize() => spans.push(Span::styled(
            "Nothing to roll: every champion is out or disabled",
            theme.muted_style(),
        )),
        (None, _) => spans.push(Span::styled("No pick yet. Press r to roll.", theme.muted_style())),
        (Some(current), Some(progress)) => {
            let frame_idx = ((progress * REVEAL_FRAMES.len() as f64) as usize)
                .min(REVEAL_FRAMES.len() - 1);
            spans.push(Span::styled(format!("{} ", REVEAL_FRAMES[frame_idx]), theme.key_style()));
            if let Some(previous) = store.previous_champion() {
                spans.push(Span::styled(
                    previous.name().to_owned(),
                    theme.muted_style().add_modifier(Modifier::CROSSED_OUT),
                ));
                spans.push(Span::styled(" → ", theme.muted_style()));
            }
            spans.push(Span::styled(current.name().to_owned(), theme.pick_style()));
        }
        (Some(current), None) => {
            spans.push(Span::styled(current.name().to_owned(), theme.pick_style()));
            spans.push(Span::styled(format!("  {}", current.class()), theme.header_style()));
            if let Some(previous) = store.previous_champion() {
                spans.push(Span::styled(
                    format!("  (was {})", previous.name()),
                    theme.muted_style(),
                ));
            }
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    let button_width = ROLL_BUTTON.chars().count() as u16;
    if inner.width > button_width && inner.height > 0 {
        let button = Rect {
            x: inner.x + inner.width - button_width,
            y: inner.y,
            width: button_width,
            height: 1,
        };
        let style = if store.can_randomize() {
            theme.key_style().add_modifier(Modifier::BOLD)
        } else {
            theme.disabled_style()
        };
        frame.render_widget(Paragraph::new(ROLL_BUTTON).style(style), button);
        if store.can_randomize() {
            app.hit_map.push(button, HitTarget::Roll);
        }
    }
}

fn render_panel(frame: &mut Frame<'_>, app: &mut App, panel: Panel, area: Rect) {
    let focused = app.focus == panel;
    let champions = app.panel_champions(panel);
    let rows = panel_rows(&champions);
    let title = format!(" {} ({}) ", panel.title(), champions.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(app.theme.panel_border_style(focused));
    let inner = block.inner(area);

    let cursor = app.cursors[panel.index()];
    let cursor_row = rows
        .iter()
        .position(|row| matches!(row, PanelRow::Champion { index, .. } if *index == cursor))
        .unwrap_or(0);
    let offset = scroll_offset(cursor_row, inner.height as usize);

    let ctrl = app.store.modifiers().ctrl;
    let mut lines = Vec::with_capacity(rows.len());
    let mut hits = Vec::new();
    for (row_idx, row) in rows.iter().enumerate() {
        match *row {
            PanelRow::Header { class, count } => {
                lines.push(Line::styled(format!("{class} ({count})"), app.theme.header_style()));
            }
            PanelRow::Champion { index, champion } => {
                let is_cursor = focused && index == cursor;
                let selected = app.store.is_selected(champion.id());
                lines.push(champion_line(app, champion, is_cursor, selected, ctrl));

                let visible = row_idx >= offset && row_idx - offset < inner.height as usize;
                if visible {
                    let cell = Rect {
                        x: inner.x,
                        y: inner.y + (row_idx - offset) as u16,
                        width: inner.width,
                        height: 1,
                    };
                    let id = champion.id().clone();
                    hits.push((cell, HitTarget::Champion { panel, index, id }));
                }
            }
        }
    }
    if lines.is_empty() {
        lines.push(Line::styled("No champions", app.theme.muted_style()));
    }

    let paragraph = Paragraph::new(lines)
        .style(app.theme.base_style())
        .block(block)
        .scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
    for (cell, target) in hits {
        app.hit_map.push(cell, target);
    }
}

fn champion_line(
    app: &App,
    champion: &Champion,
    is_cursor: bool,
    selected: bool,
    ctrl: bool,
) -> Line<'static> {
    let theme = &app.theme;
    let marker = if champion.disabled() { "○" } else { "●" };
    let pointer = if is_cursor { "›" } else { " " };
    let mut style = if champion.disabled() { theme.disabled_style() } else { theme.base_style() };
    if selected {
        style = theme.selected_style(ctrl);
    }
    if is_cursor {
        style = style.patch(theme.cursor_style());
    }
    let is_pick = app.store.randomized_champion_id() == Some(champion.id());
    let mut spans = vec![
        Span::raw(format!("{pointer} ")),
        Span::styled(format!("{marker} {}", champion.name()), style),
    ];
    if is_pick {
        spans.push(Span::styled(" ★", theme.pick_style()));
    }
    Line::from(spans)
}

fn footer_line(app: &mut App) -> Line<'static> {
    let modifiers = app.store.modifiers();
    let mut spans = Vec::<Span<'static>>::new();
    push_footer_entry(&mut spans, app, "ROLL", "r", !app.store.can_randomize());
    push_footer_entry(&mut spans, app, "OUT", "x/X", false);
    push_footer_entry(&mut spans, app, "DISABLE", "d/D", false);
    push_footer_entry(&mut spans, app, "HELP", "?", false);
    push_footer_entry(&mut spans, app, "QUIT", "q", false);

    let ctrl = if modifiers.ctrl { "ctrl◼" } else { "ctrl◻" };
    let shift = if modifiers.shift { "shift◼" } else { "shift◻" };
    spans.push(Span::styled(format!(" | {ctrl} {shift}"), app.theme.muted_style()));

    if let Some(location) = app.hovered_asset_location() {
        spans.push(Span::styled(format!(" | {location}"), app.theme.muted_style()));
    }
    if let Some(message) = app.live_toast() {
        let message = message.to_owned();
        spans.push(Span::styled(format!(" | {message}"), app.theme.error_style()));
    }
    Line::from(spans)
}

fn push_footer_entry(
    spans: &mut Vec<Span<'static>>,
    app: &App,
    label: &str,
    value: &str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", app.theme.muted_style()));
    }
    spans.push(Span::styled(format!("{}:", footer_label_ucfirst(label)), app.theme.muted_style()));
    let style = if disabled {
        app.theme.disabled_style()
    } else {
        app.theme.key_style().add_modifier(Modifier::BOLD)
    };
    spans.push(Span::styled(value.to_owned(), style));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("click", "Move champion between Pool and Out"),
    ("shift+click", "Move the whole class (same side as the champion)"),
    ("ctrl+click", "Disable/enable champion"),
    ("ctrl+shift+click", "Disable/enable the whole class"),
    ("j/k, ↑/↓", "Move cursor"),
    ("h/l, ←/→, Tab", "Switch panel"),
    ("Space/Enter", "Press cursor champion with held modifiers"),
    ("x / X", "Move champion / class"),
    ("d / D", "Disable champion / class"),
    ("r", "Roll a random champion from the enabled pool"),
    ("?", "Help (toggle)"),
    ("q/Esc", "Quit"),
];

fn render_help(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let area = centered_rect(80, 80, main_area);
    frame.render_widget(Clear, area);

    let key_width = HELP_ENTRIES.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);
    let key_style = app.theme.key_style().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::styled("--- Keys & mouse ---", app.theme.header_style())];
    lines.extend(HELP_ENTRIES.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("{key:>key_width$}"), key_style),
            Span::raw("  "),
            Span::raw((*desc).to_owned()),
        ])
    }));
    if !app.keyboard_enhanced {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "This terminal does not report modifier keys; the x/X/d/D keys work everywhere.",
            app.theme.muted_style(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    frame.render_widget(paragraph, area);
}
