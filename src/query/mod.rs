// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the champion roster.
//!
//! Queries provide derived views (filtered subsets, canonical order, the highlighted
//! selection) that power the store and the UI.

pub mod roster;
pub mod selection;

pub use roster::{
    compare_champions, compare_names, filter_champions, find_champion_by_id, sort_champions,
    ChampionFilter,
};
pub use selection::selected_champions;
