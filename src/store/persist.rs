// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::kv::{KvError, KvStore};
use crate::model::{Champion, ChampionId, ChampionState};

pub const CHAMPION_STATE_KEY: &str = "championState";
pub const RANDOMIZED_CHAMPION_ID_KEY: &str = "randomizedChampionId";

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("cannot write {key}: {source}")]
    Kv {
        key: &'static str,
        source: KvError,
    },
    #[error("cannot encode {key}: {source}")]
    Json {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// Reads and writes the persisted subset of the store through a [`KvStore`].
///
/// Loads never fail: a missing, unreadable or unparsable value reads as "nothing persisted".
pub struct Persistence {
    kv: Box<dyn KvStore>,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

impl Persistence {
    pub fn new(kv: impl KvStore + 'static) -> Self {
        Self { kv: Box::new(kv) }
    }

    /// Persisted `{id, removed, disabled}` entries.
    ///
    /// Individual entries that don't decode (e.g. an empty id) are skipped; the rest still apply.
    pub fn load_champion_state(&self) -> Option<Vec<ChampionState>> {
        let raw = self.read(CHAMPION_STATE_KEY)?;
        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    key = CHAMPION_STATE_KEY,
                    %err,
                    "ignoring unparsable persisted value"
                );
                return None;
            }
        };

        let total = entries.len();
        let states: Vec<ChampionState> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        if states.len() < total {
            tracing::debug!(
                skipped = total - states.len(),
                "ignoring malformed persisted champion entries"
            );
        }
        Some(states)
    }

    pub fn save_champion_state(&self, champions: &[Champion]) -> Result<(), PersistError> {
        let states: Vec<ChampionState> = champions.iter().map(Champion::state).collect();
        self.write(CHAMPION_STATE_KEY, &states)
    }

    pub fn load_randomized_champion_id(&self) -> Option<ChampionId> {
        let raw = self.read(RANDOMIZED_CHAMPION_ID_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(
                    key = RANDOMIZED_CHAMPION_ID_KEY,
                    %err,
                    "ignoring unparsable persisted value"
                );
                None
            }
        }
    }

    /// `None` removes the key.
    pub fn save_randomized_champion_id(&self, id: Option<&ChampionId>) -> Result<(), PersistError> {
        match id {
            Some(id) => self.write(RANDOMIZED_CHAMPION_ID_KEY, id),
            None => self
                .kv
                .remove(RANDOMIZED_CHAMPION_ID_KEY)
                .map_err(|source| PersistError::Kv {
                    key: RANDOMIZED_CHAMPION_ID_KEY,
                    source,
                }),
        }
    }

    fn read(&self, key: &'static str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "cannot read persisted value; using defaults");
                None
            }
        }
    }

    fn write<T>(&self, key: &'static str, value: &T) -> Result<(), PersistError>
    where
        T: Serialize + ?Sized,
    {
        let encoded =
            serde_json::to_string(value).map_err(|source| PersistError::Json { key, source })?;
        self.kv
            .set(key, &encoded)
            .map_err(|source| PersistError::Kv { key, source })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Persistence, CHAMPION_STATE_KEY, RANDOMIZED_CHAMPION_ID_KEY};
    use crate::model::fixtures::{champion, cid};
    use crate::model::{ChampionClass, ChampionState};
    use crate::store::kv::{FileKvStore, KvStore, MemoryKvStore};
    use crate::test_utils::TempDir;

    #[test]
    fn nothing_persisted_reads_as_none() {
        let persistence = Persistence::new(MemoryKvStore::new());
        assert_eq!(persistence.load_champion_state(), None);
        assert_eq!(persistence.load_randomized_champion_id(), None);
    }

    #[test]
    fn champion_state_round_trips() {
        let kv = MemoryKvStore::new();
        let persistence = Persistence::new(kv.clone());
        let mut a = champion("a", "Zed", ChampionClass::Damage);
        a.set_removed(true);
        persistence.save_champion_state(&[a]).expect("save");

        assert_eq!(
            kv.get(CHAMPION_STATE_KEY).expect("get").as_deref(),
            Some(r#"[{"id":"a","removed":true,"disabled":false}]"#)
        );
        assert_eq!(
            persistence.load_champion_state(),
            Some(vec![ChampionState { id: cid("a"), removed: true, disabled: false }])
        );
    }

    #[rstest]
    #[case::not_json("{nope")]
    #[case::wrong_shape(r#"{"id":"a"}"#)]
    fn unparsable_champion_state_reads_as_none(#[case] raw: &str) {
        let kv = MemoryKvStore::new();
        kv.set(CHAMPION_STATE_KEY, raw).expect("set");
        assert_eq!(Persistence::new(kv).load_champion_state(), None);
    }

    #[test]
    fn malformed_entries_are_skipped_individually() {
        let kv = MemoryKvStore::new();
        kv.set(
            CHAMPION_STATE_KEY,
            r#"[{"id":"","removed":true},{"id":"io","disabled":true},42]"#,
        )
        .expect("set");

        assert_eq!(
            Persistence::new(kv).load_champion_state(),
            Some(vec![ChampionState { id: cid("io"), removed: false, disabled: true }])
        );
    }

    #[test]
    fn randomized_id_is_removed_when_cleared() {
        let kv = MemoryKvStore::new();
        let persistence = Persistence::new(kv.clone());

        persistence.save_randomized_champion_id(Some(&cid("io"))).expect("save");
        assert_eq!(kv.get(RANDOMIZED_CHAMPION_ID_KEY).expect("get").as_deref(), Some("\"io\""));
        assert_eq!(persistence.load_randomized_champion_id(), Some(cid("io")));

        persistence.save_randomized_champion_id(None).expect("clear");
        assert_eq!(kv.get(RANDOMIZED_CHAMPION_ID_KEY).expect("get"), None);
    }

    #[rstest]
    #[case("42")]
    #[case("\"\"")]
    #[case("io")]
    fn unparsable_randomized_id_reads_as_none(#[case] raw: &str) {
        let kv = MemoryKvStore::new();
        kv.set(RANDOMIZED_CHAMPION_ID_KEY, raw).expect("set");
        assert_eq!(Persistence::new(kv).load_randomized_champion_id(), None);
    }

    #[test]
    fn file_backed_state_survives_reopen() {
        let tmp = TempDir::new("persist");
        let first = Persistence::new(FileKvStore::new(tmp.path()));
        first.save_randomized_champion_id(Some(&cid("seris"))).expect("save");
        drop(first);

        let second = Persistence::new(FileKvStore::new(tmp.path()));
        assert_eq!(second.load_randomized_champion_id(), Some(cid("seris")));
    }

    #[test]
    fn failed_writes_are_reported() {
        let kv = MemoryKvStore::new();
        kv.set_fail_writes(true);
        let persistence = Persistence::new(kv);
        let err = persistence.save_randomized_champion_id(Some(&cid("io"))).unwrap_err();
        assert!(err.to_string().contains(RANDOMIZED_CHAMPION_ID_KEY));
    }
}
