// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::ChampionId;

/// The closed set of champion categories.
///
/// Declaration order is the canonical category rank used for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChampionClass {
    Damage,
    Flank,
    Frontline,
    Support,
}

impl ChampionClass {
    pub const ALL: [ChampionClass; 4] = [
        ChampionClass::Damage,
        ChampionClass::Flank,
        ChampionClass::Frontline,
        ChampionClass::Support,
    ];

    pub const fn rank(self) -> usize {
        match self {
            Self::Damage => 0,
            Self::Flank => 1,
            Self::Frontline => 2,
            Self::Support => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Damage => "Damage",
            Self::Flank => "Flank",
            Self::Frontline => "Frontline",
            Self::Support => "Support",
        }
    }
}

impl fmt::Display for ChampionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionRow {
    pub id: ChampionId,
    pub name: String,
    pub image_path: String,
    pub class: ChampionClass,
}

/// A catalog entry plus its two mutable flags.
///
/// `removed` takes the champion out of the pool; `disabled` keeps it in the pool but skips it
/// when drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Champion {
    id: ChampionId,
    name: String,
    image_path: String,
    class: ChampionClass,
    removed: bool,
    disabled: bool,
}

impl Champion {
    pub fn new(row: ChampionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image_path: row.image_path,
            class: row.class,
            removed: false,
            disabled: false,
        }
    }

    pub fn id(&self) -> &ChampionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    pub fn class(&self) -> ChampionClass {
        self.class
    }

    pub fn removed(&self) -> bool {
        self.removed
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Included in the pool and not disabled.
    pub fn is_eligible(&self) -> bool {
        !self.removed && !self.disabled
    }

    /// Returns whether the flag changed.
    pub(crate) fn set_removed(&mut self, removed: bool) -> bool {
        let changed = self.removed != removed;
        self.removed = removed;
        changed
    }

    /// Returns whether the flag changed.
    pub(crate) fn set_disabled(&mut self, disabled: bool) -> bool {
        let changed = self.disabled != disabled;
        self.disabled = disabled;
        changed
    }

    pub fn state(&self) -> ChampionState {
        ChampionState {
            id: self.id.clone(),
            removed: self.removed,
            disabled: self.disabled,
        }
    }

    pub(crate) fn apply_state(&mut self, state: &ChampionState) {
        self.removed = state.removed;
        self.disabled = state.disabled;
    }
}

/// The persisted subset of a champion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionState {
    pub id: ChampionId,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub disabled: bool,
}
