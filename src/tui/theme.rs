// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

const PALETTE_ENV: &str = "CHAMPION_RANDOMIZER_PALETTE";

/// Named color slots the UI paints with. `fg`/`bg` of `None` keep the terminal's own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    fg: Option<Color>,
    bg: Option<Color>,
    accent: Color,
    focus: Color,
    select: Color,
    danger: Color,
    ink: Color,
    dim: Color,
    pick: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fg: None,
            bg: None,
            accent: Color::Cyan,
            focus: Color::LightGreen,
            select: Color::Yellow,
            danger: Color::Red,
            ink: Color::Black,
            dim: Color::DarkGray,
            pick: Color::LightYellow,
        }
    }
}

impl Palette {
    /// Applies `slot=color` pairs separated by commas on top of the defaults.
    ///
    /// Colors use ratatui's names (`red`, `light-blue`), `#RRGGBB` or an indexed value.
    fn with_overrides(mut self, spec: &str) -> Result<Self, String> {
        for entry in spec.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let Some((slot, raw)) = entry.split_once('=') else {
                return Err(format!("expected slot=color, got {entry:?}"));
            };
            let color = Color::from_str(raw.trim())
                .map_err(|_| format!("unknown color {:?} for {}", raw.trim(), slot.trim()))?;
            match slot.trim() {
                "fg" => self.fg = Some(color),
                "bg" => self.bg = Some(color),
                "accent" => self.accent = color,
                "focus" => self.focus = color,
                "select" => self.select = color,
                "danger" => self.danger = color,
                "ink" => self.ink = color,
                "dim" => self.dim = color,
                "pick" => self.pick = color,
                other => return Err(format!("unknown palette slot {other:?}")),
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Palette,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let value = match env::var(PALETTE_ENV) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV,
                    value: "<non-unicode>".to_string(),
                });
            }
        };
        Self::from_overrides(&value)
    }

    fn from_overrides(value: &str) -> Result<Self, ThemeError> {
        let palette = Palette::default().with_overrides(value).map_err(|error| {
            ThemeError::InvalidEnv {
                name: PALETTE_ENV,
                value: format!("{} ({error})", value.trim()),
            }
        })?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.palette.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.palette.bg {
            style = style.bg(bg);
        }
        style
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.palette.focus)
        } else {
            self.base_style()
        }
    }

    pub(crate) fn header_style(&self) -> Style {
        self.base_style().fg(self.palette.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn cursor_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    /// Champions in the derived selection; red while ctrl is held, like the disable gestures.
    pub(crate) fn selected_style(&self, ctrl: bool) -> Style {
        let bg = if ctrl { self.palette.danger } else { self.palette.select };
        self.base_style().fg(self.palette.ink).bg(bg).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn disabled_style(&self) -> Style {
        self.base_style().fg(self.palette.dim).add_modifier(Modifier::DIM)
    }

    pub(crate) fn pick_style(&self) -> Style {
        self.base_style().fg(self.palette.pick).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.palette.dim)
    }

    pub(crate) fn key_style(&self) -> Style {
        self.base_style().fg(self.palette.accent)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.palette.danger)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: &'static str, value: String },
}
