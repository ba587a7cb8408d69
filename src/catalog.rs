// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static champion catalog and the roster built from it.
//!
//! The bundled catalog lives in `data/champions.json` and is compiled into the binary; an
//! alternate file with the same shape can be loaded at startup instead.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{Champion, ChampionId, ChampionRow, ChampionState};
use crate::query::sort_champions;

const BUNDLED_CATALOG: &str = include_str!("../data/champions.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("io error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid catalog {origin}: {source}")]
    Json { origin: String, source: serde_json::Error },
    #[error("duplicate champion id {id} in catalog {origin}")]
    DuplicateId { origin: String, id: ChampionId },
}

#[derive(Debug, Deserialize)]
struct CatalogJson {
    champions: Vec<ChampionRow>,
}

pub fn bundled_rows() -> Result<Vec<ChampionRow>, CatalogError> {
    parse_rows(BUNDLED_CATALOG, "<bundled>")
}

pub fn load_rows(path: &Path) -> Result<Vec<ChampionRow>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows(&raw, &path.display().to_string())
}

/// Decodes catalog JSON (`{"champions": [...]}`) and rejects duplicate ids.
///
/// Unknown classes and empty ids fail decoding: the catalog is closed over [`ChampionClass`].
///
/// [`ChampionClass`]: crate::model::ChampionClass
pub fn parse_rows(raw: &str, origin: &str) -> Result<Vec<ChampionRow>, CatalogError> {
    let catalog: CatalogJson = serde_json::from_str(raw).map_err(|source| CatalogError::Json {
        origin: origin.to_owned(),
        source,
    })?;

    let mut seen = HashSet::with_capacity(catalog.champions.len());
    for row in &catalog.champions {
        if !seen.insert(row.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                origin: origin.to_owned(),
                id: row.id.clone(),
            });
        }
    }

    Ok(catalog.champions)
}

/// Builds the working roster: defaults, then persisted flags for ids still in the catalog, then
/// canonical order.
pub fn build_roster(rows: Vec<ChampionRow>, persisted: Option<&[ChampionState]>) -> Vec<Champion> {
    let mut champions: Vec<Champion> = rows.into_iter().map(Champion::new).collect();

    if let Some(persisted) = persisted {
        let by_id: HashMap<&str, &ChampionState> =
            persisted.iter().rev().map(|state| (state.id.as_str(), state)).collect();

        let mut applied = 0usize;
        for champion in &mut champions {
            if let Some(state) = by_id.get(champion.id().as_str()) {
                champion.apply_state(state);
                applied += 1;
            }
        }

        let dropped = by_id.len() - applied;
        if dropped > 0 {
            tracing::debug!(dropped, "ignoring persisted state for champions not in the catalog");
        }
    }

    sort_champions(&mut champions);
    champions
}
