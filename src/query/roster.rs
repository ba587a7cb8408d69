// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use crate::model::{Champion, ChampionClass};

/// Field constraints for [`filter_champions`]; `None` means "don't check".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChampionFilter {
    pub class: Option<ChampionClass>,
    pub removed: Option<bool>,
    pub disabled: Option<bool>,
}

impl ChampionFilter {
    pub const ALL: ChampionFilter = ChampionFilter {
        class: None,
        removed: None,
        disabled: None,
    };

    pub const ELIGIBLE: ChampionFilter = ChampionFilter {
        class: None,
        removed: Some(false),
        disabled: Some(false),
    };

    pub fn class(mut self, class: ChampionClass) -> Self {
        self.class = Some(class);
        self
    }

    pub fn removed(mut self, removed: bool) -> Self {
        self.removed = Some(removed);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn matches(&self, champion: &Champion) -> bool {
        self.class.map_or(true, |class| champion.class() == class)
            && self.removed.map_or(true, |removed| champion.removed() == removed)
            && self.disabled.map_or(true, |disabled| champion.disabled() == disabled)
    }
}

/// Order-preserving subsequence of `champions` matching every field set in `filter`.
pub fn filter_champions<'a>(
    champions: &'a [Champion],
    filter: &ChampionFilter,
) -> Vec<&'a Champion> {
    champions.iter().filter(|champion| filter.matches(champion)).collect()
}

/// Sorts in canonical order: class rank first, then name.
///
/// The sort is stable, so champions comparing equal keep their relative order.
pub fn sort_champions(champions: &mut [Champion]) {
    champions.sort_by(compare_champions);
}

pub fn compare_champions(a: &Champion, b: &Champion) -> Ordering {
    a.class()
        .rank()
        .cmp(&b.class().rank())
        .then_with(|| compare_names(a.name(), b.name()))
}

/// Case-insensitive first, raw code points as the tiebreak, so `"ash" < "Ash" < "Barik"`
/// never depends on input order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

pub fn find_champion_by_id<'a>(champions: &'a [Champion], id: &str) -> Option<&'a Champion> {
    champions.iter().find(|champion| champion.id().as_str() == id)
}
