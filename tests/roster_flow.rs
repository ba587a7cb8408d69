// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use champion_randomizer::catalog;
use champion_randomizer::model::{Champion, ChampionClass, ChampionId, ChampionRow, PointerButton};
use champion_randomizer::query::ChampionFilter;
use champion_randomizer::randomizer::Randomizer;
use champion_randomizer::store::{
    ChampionStore, FileKvStore, Persistence, CHAMPION_STATE_KEY, RANDOMIZED_CHAMPION_ID_KEY,
};

struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let path = std::env::temp_dir().join(format!(
            "champion-randomizer-it-{name}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("create scratch dir");
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn id(raw: &str) -> ChampionId {
    ChampionId::new(raw).expect("valid id")
}

fn row(raw: &str, name: &str, class: ChampionClass) -> ChampionRow {
    ChampionRow {
        id: id(raw),
        name: name.to_owned(),
        image_path: format!("assets/images/{raw}.png"),
        class,
    }
}

fn open_in(dir: &Path, rows: Vec<ChampionRow>) -> ChampionStore {
    ChampionStore::open(rows, Persistence::new(FileKvStore::new(dir)))
        .with_randomizer(Randomizer::with_seed(7))
}

#[test]
fn name_order_and_exclusion_follow_through_the_store() {
    let dir = ScratchDir::new("zed-ann");
    let mut store = open_in(
        dir.path(),
        vec![row("a", "Zed", ChampionClass::Damage), row("b", "Ann", ChampionClass::Damage)],
    );

    let names: Vec<_> = store.champions().iter().map(Champion::name).collect();
    assert_eq!(names, ["Ann", "Zed"]);

    store.set_removed_by_id(&id("a"), true).expect("remove a");
    let included: Vec<_> = store
        .champions_matching(&ChampionFilter::default().removed(false))
        .into_iter()
        .map(|champion| champion.id().as_str())
        .collect();
    assert_eq!(included, ["b"]);
}

#[test]
fn flags_and_pick_survive_a_reopen_from_disk() {
    let dir = ScratchDir::new("reopen");
    let rows = || {
        vec![
            row("ash", "Ash", ChampionClass::Frontline),
            row("io", "Io", ChampionClass::Support),
            row("viktor", "Viktor", ChampionClass::Damage),
        ]
    };

    let picked = {
        let mut store = open_in(dir.path(), rows());
        store.press_champion(&id("ash"), PointerButton::Primary).expect("exclude ash");
        store.set_ctrl(true);
        store.press_champion(&id("io"), PointerButton::Primary).expect("disable io");
        store.set_ctrl(false);
        let picked = store.randomize().expect("roll").expect("one eligible champion");
        assert_eq!(picked, id("viktor"));
        picked
    };

    assert!(dir.path().join(format!("{CHAMPION_STATE_KEY}.json")).is_file());
    assert!(dir.path().join(format!("{RANDOMIZED_CHAMPION_ID_KEY}.json")).is_file());

    let reopened = open_in(dir.path(), rows());
    let ash = reopened.champion(&id("ash")).expect("ash");
    let io = reopened.champion(&id("io")).expect("io");
    assert!(ash.removed() && !ash.disabled());
    assert!(io.disabled() && !io.removed());
    assert_eq!(reopened.randomized_champion_id(), Some(&picked));
    assert_eq!(reopened.previous_champion_id(), None);
}

#[test]
fn persisted_ids_missing_from_a_new_catalog_are_dropped() {
    let dir = ScratchDir::new("catalog-shrink");
    {
        let mut store = open_in(
            dir.path(),
            vec![row("a", "Ann", ChampionClass::Damage), row("gone", "Gone", ChampionClass::Flank)],
        );
        store.set_removed_by_id(&id("a"), true).expect("remove a");
        store.set_removed_by_id(&id("gone"), true).expect("remove gone");
    }

    let reopened = open_in(dir.path(), vec![row("a", "Ann", ChampionClass::Damage)]);
    assert_eq!(reopened.champions().len(), 1);
    assert!(reopened.champion(&id("a")).expect("a").removed());
    assert_eq!(reopened.champion(&id("gone")), None);
}

#[test]
fn bundled_catalog_rolls_only_from_the_pool() {
    let dir = ScratchDir::new("bundled");
    let rows = catalog::bundled_rows().expect("bundled catalog parses");
    assert!(!rows.is_empty());
    let mut store = open_in(dir.path(), rows);

    store.set_removed_by_class(ChampionClass::Damage, true).expect("exclude damage");
    store.set_disabled_by_class(ChampionClass::Support, true).expect("disable support");

    for _ in 0..32 {
        let picked = store.randomize().expect("roll").expect("pool is not empty");
        let champion = store.champion(&picked).expect("picked champion exists");
        assert!(champion.is_eligible());
        assert!(!matches!(champion.class(), ChampionClass::Damage | ChampionClass::Support));
    }
}
