// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Champions are immutable catalog rows plus two mutable flags (`removed`, `disabled`).

pub mod champion;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod modifiers;

pub use champion::{Champion, ChampionClass, ChampionRow, ChampionState};
pub use ids::{ChampionId, Id, IdError};
pub use modifiers::{Modifiers, PointerButton};
