// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Champion, ChampionId, Modifiers};

use super::roster::{filter_champions, find_champion_by_id, ChampionFilter};

/// Derives the highlighted set from the hovered champion and the held modifiers.
///
/// - nothing hovered: empty
/// - shift not held: the hovered champion alone
/// - shift held: the hovered champion's class, restricted to champions on the same side of the
///   pool (same `removed`) unless ctrl is held as well
///
/// # Panics
///
/// Panics if `hovered` does not name a champion in `champions`. Hover ids only ever come from
/// existing champions, so a dangling id means the caller's state is out of sync.
pub fn selected_champions<'a>(
    champions: &'a [Champion],
    hovered: Option<&ChampionId>,
    modifiers: Modifiers,
) -> Vec<&'a Champion> {
    let Some(hovered_id) = hovered else {
        return Vec::new();
    };
    let Some(hovered) = find_champion_by_id(champions, hovered_id.as_str()) else {
        panic!("hovered champion {hovered_id} is not in the roster");
    };

    if !modifiers.shift {
        return vec![hovered];
    }

    let mut filter = ChampionFilter::default().class(hovered.class());
    if !modifiers.ctrl {
        filter = filter.removed(hovered.removed());
    }
    filter_champions(champions, &filter)
}
