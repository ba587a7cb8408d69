// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Champion Randomizer: include, exclude and disable champions, then roll a uniform pick from
//! what is left.
//!
//! [`store::ChampionStore`] is the single owner of all state; the terminal UI in [`tui`] and the
//! headless CLI both drive it through its action methods.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod ops;
pub mod query;
pub mod randomizer;
pub mod store;
pub mod tui;

#[cfg(test)]
mod test_utils;
