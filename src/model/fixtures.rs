// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::champion::{Champion, ChampionClass, ChampionRow};
use super::ids::ChampionId;

pub(crate) fn cid(value: &str) -> ChampionId {
    ChampionId::new(value).expect("champion id")
}

pub(crate) fn row(id: &str, name: &str, class: ChampionClass) -> ChampionRow {
    ChampionRow {
        id: cid(id),
        name: name.to_owned(),
        image_path: format!("{id}.png"),
        class,
    }
}

pub(crate) fn champion(id: &str, name: &str, class: ChampionClass) -> Champion {
    Champion::new(row(id, name, class))
}

/// Eight rows, two per class, in deliberately non-canonical order.
pub(crate) fn mixed_rows() -> Vec<ChampionRow> {
    vec![
        row("seris", "Seris", ChampionClass::Support),
        row("viktor", "Viktor", ChampionClass::Damage),
        row("ash", "Ash", ChampionClass::Frontline),
        row("maeve", "Maeve", ChampionClass::Flank),
        row("grover", "Grover", ChampionClass::Support),
        row("cassie", "Cassie", ChampionClass::Damage),
        row("androxus", "Androxus", ChampionClass::Flank),
        row("barik", "Barik", ChampionClass::Frontline),
    ]
}
