// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The champion store and its persistence.
//!
//! [`ChampionStore`] owns the roster plus hover, modifier and pick state. Every action runs to
//! completion synchronously, including the write of the persisted subset through
//! [`Persistence`] (backed by a [`KvStore`]).

pub mod kv;
pub mod persist;

use crate::catalog::build_roster;
use crate::model::{Champion, ChampionClass, ChampionId, ChampionRow, Modifiers, PointerButton};
use crate::ops::{apply_op, ApplyError, Op, OpDelta, PressGesture};
use crate::query::{filter_champions, find_champion_by_id, selected_champions, ChampionFilter};
use crate::randomizer::Randomizer;

pub use kv::{FileKvStore, KvError, KvStore, MemoryKvStore, WriteDurability};
pub use persist::{PersistError, Persistence, CHAMPION_STATE_KEY, RANDOMIZED_CHAMPION_ID_KEY};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("champion not found (id={0})")]
    UnknownChampion(ChampionId),
    /// The in-memory change was applied; only saving it failed.
    #[error("state updated but not saved: {0}")]
    Persist(#[from] PersistError),
}

impl From<ApplyError> for StoreError {
    fn from(err: ApplyError) -> Self {
        match err {
            ApplyError::UnknownChampion(id) => Self::UnknownChampion(id),
        }
    }
}

#[derive(Debug)]
pub struct ChampionStore {
    champions: Vec<Champion>,
    hovered_champion_id: Option<ChampionId>,
    modifiers: Modifiers,
    randomized_champion_id: Option<ChampionId>,
    previous_champion_id: Option<ChampionId>,
    randomizer: Randomizer,
    persistence: Persistence,
    rev: u64,
}

impl ChampionStore {
    /// Builds the roster from `rows` and whatever `persistence` holds.
    ///
    /// A persisted pick that is no longer in the catalog is dropped.
    pub fn open(rows: Vec<ChampionRow>, persistence: Persistence) -> Self {
        let persisted = persistence.load_champion_state();
        let champions = build_roster(rows, persisted.as_deref());

        let randomized_champion_id = persistence
            .load_randomized_champion_id()
            .filter(|id| {
                let known = find_champion_by_id(&champions, id.as_str()).is_some();
                if !known {
                    tracing::debug!(%id, "dropping persisted pick that is not in the catalog");
                }
                known
            });

        tracing::info!(
            champions = champions.len(),
            removed = champions.iter().filter(|c| c.removed()).count(),
            disabled = champions.iter().filter(|c| c.disabled()).count(),
            "champion store opened"
        );

        Self {
            champions,
            hovered_champion_id: None,
            modifiers: Modifiers::NONE,
            randomized_champion_id,
            previous_champion_id: None,
            randomizer: Randomizer::new(),
            persistence,
            rev: 0,
        }
    }

    pub fn with_randomizer(mut self, randomizer: Randomizer) -> Self {
        self.randomizer = randomizer;
        self
    }

    /// Bumped on every observable change.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn champions(&self) -> &[Champion] {
        &self.champions
    }

    pub fn champion(&self, id: &ChampionId) -> Option<&Champion> {
        find_champion_by_id(&self.champions, id.as_str())
    }

    pub fn champions_matching(&self, filter: &ChampionFilter) -> Vec<&Champion> {
        filter_champions(&self.champions, filter)
    }

    /// The pool: champions not removed.
    pub fn included_champions(&self) -> Vec<&Champion> {
        self.champions_matching(&ChampionFilter::default().removed(false))
    }

    pub fn excluded_champions(&self) -> Vec<&Champion> {
        self.champions_matching(&ChampionFilter::default().removed(true))
    }

    /// What a draw picks from: not removed and not disabled.
    pub fn eligible_champions(&self) -> Vec<&Champion> {
        self.champions_matching(&ChampionFilter::ELIGIBLE)
    }

    pub fn can_randomize(&self) -> bool {
        self.champions.iter().any(Champion::is_eligible)
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn hovered_champion_id(&self) -> Option<&ChampionId> {
        self.hovered_champion_id.as_ref()
    }

    pub fn hovered_champion(&self) -> Option<&Champion> {
        self.hovered_champion_id.as_ref().map(|id| self.expect_champion(id, "hovered"))
    }

    pub fn selected_champions(&self) -> Vec<&Champion> {
        selected_champions(&self.champions, self.hovered_champion_id.as_ref(), self.modifiers)
    }

    pub fn is_selected(&self, id: &ChampionId) -> bool {
        self.selected_champions().iter().any(|champion| champion.id() == id)
    }

    pub fn randomized_champion_id(&self) -> Option<&ChampionId> {
        self.randomized_champion_id.as_ref()
    }

    pub fn previous_champion_id(&self) -> Option<&ChampionId> {
        self.previous_champion_id.as_ref()
    }

    pub fn randomized_champion(&self) -> Option<&Champion> {
        self.randomized_champion_id.as_ref().map(|id| self.expect_champion(id, "randomized"))
    }

    pub fn previous_champion(&self) -> Option<&Champion> {
        self.previous_champion_id.as_ref().map(|id| self.expect_champion(id, "previous"))
    }

    pub fn set_removed_by_id(
        &mut self,
        id: &ChampionId,
        removed: bool,
    ) -> Result<OpDelta, StoreError> {
        self.apply(Op::set_removed_by_id(id.clone(), removed))
    }

    pub fn set_removed_by_class(
        &mut self,
        class: ChampionClass,
        removed: bool,
    ) -> Result<OpDelta, StoreError> {
        self.apply(Op::set_removed_by_class(class, removed))
    }

    pub fn set_disabled_by_id(
        &mut self,
        id: &ChampionId,
        disabled: bool,
    ) -> Result<OpDelta, StoreError> {
        self.apply(Op::set_disabled_by_id(id.clone(), disabled))
    }

    pub fn set_disabled_by_class(
        &mut self,
        class: ChampionClass,
        disabled: bool,
    ) -> Result<OpDelta, StoreError> {
        self.apply(Op::set_disabled_by_class(class, disabled))
    }

    /// Applies one flag op and saves the flag snapshot.
    ///
    /// On `Err(StoreError::Persist)` the change is still applied in memory.
    pub fn apply(&mut self, op: Op) -> Result<OpDelta, StoreError> {
        let delta = apply_op(&mut self.champions, &op)?;
        if !delta.is_noop() {
            self.bump_rev();
        }
        tracing::debug!(?op, changed = delta.changed.len(), "applied flag op");

        self.persist_champion_state()?;
        Ok(delta)
    }

    /// A pointer press on a champion, interpreted with the currently held modifiers.
    ///
    /// Only the primary button acts; other buttons return `Ok(None)`.
    pub fn press_champion(
        &mut self,
        id: &ChampionId,
        button: PointerButton,
    ) -> Result<Option<OpDelta>, StoreError> {
        if button != PointerButton::Primary {
            return Ok(None);
        }
        let gesture = PressGesture::from_modifiers(self.modifiers);
        self.press_champion_with(id, gesture).map(Some)
    }

    pub fn press_champion_with(
        &mut self,
        id: &ChampionId,
        gesture: PressGesture,
    ) -> Result<OpDelta, StoreError> {
        let Some(pressed) = self.champion(id) else {
            return Err(StoreError::UnknownChampion(id.clone()));
        };
        let op = gesture.op_for(pressed);
        self.apply(op)
    }

    /// Draws uniformly from the eligible pool.
    ///
    /// With an empty pool this is a no-op returning `Ok(None)`. Otherwise the previous pick
    /// becomes the old current pick and the draw becomes current, in one assignment.
    pub fn randomize(&mut self) -> Result<Option<ChampionId>, StoreError> {
        let eligible = filter_champions(&self.champions, &ChampionFilter::ELIGIBLE);
        let Some(picked) = self.randomizer.choose(&eligible).map(|c| c.id().clone()) else {
            tracing::debug!("randomize skipped: no eligible champions");
            return Ok(None);
        };

        self.previous_champion_id =
            std::mem::replace(&mut self.randomized_champion_id, Some(picked.clone()));
        self.bump_rev();
        tracing::info!(
            picked = %picked,
            previous = ?self.previous_champion_id.as_ref().map(ChampionId::as_str),
            "randomized champion"
        );

        self.persistence
            .save_randomized_champion_id(Some(&picked))
            .map_err(|err| self.persist_failed(err))?;
        Ok(Some(picked))
    }

    /// Clears every flag and both picks, then saves.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        for champion in &mut self.champions {
            champion.set_removed(false);
            champion.set_disabled(false);
        }
        self.randomized_champion_id = None;
        self.previous_champion_id = None;
        self.bump_rev();
        tracing::info!("champion store reset");

        self.persist_champion_state()?;
        self.persistence
            .save_randomized_champion_id(None)
            .map_err(|err| self.persist_failed(err))?;
        Ok(())
    }

    pub fn set_ctrl(&mut self, ctrl: bool) {
        self.set_modifiers(Modifiers { ctrl, ..self.modifiers });
    }

    pub fn set_shift(&mut self, shift: bool) {
        self.set_modifiers(Modifiers { shift, ..self.modifiers });
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        if self.modifiers == modifiers {
            return;
        }
        self.modifiers = modifiers;
        self.bump_rev();
    }

    /// Releases both modifiers, e.g. when focus is lost and key-up events may never arrive.
    pub fn clear_modifiers(&mut self) {
        self.set_modifiers(Modifiers::NONE);
    }

    /// Rejects ids that are not in the roster so the derived selection always resolves.
    pub fn set_hovered_champion(&mut self, id: Option<ChampionId>) -> Result<(), StoreError> {
        if let Some(id) = &id {
            if self.champion(id).is_none() {
                return Err(StoreError::UnknownChampion(id.clone()));
            }
        }
        if self.hovered_champion_id == id {
            return Ok(());
        }
        self.hovered_champion_id = id;
        self.bump_rev();
        Ok(())
    }

    pub fn clear_hovered_champion(&mut self) {
        if self.hovered_champion_id.take().is_some() {
            self.bump_rev();
        }
    }

    fn persist_champion_state(&mut self) -> Result<(), StoreError> {
        self.persistence
            .save_champion_state(&self.champions)
            .map_err(|err| self.persist_failed(err))
    }

    fn persist_failed(&self, err: PersistError) -> StoreError {
        tracing::error!(%err, "failed to persist champion store state");
        StoreError::Persist(err)
    }

    fn expect_champion(&self, id: &ChampionId, role: &str) -> &Champion {
        match self.champion(id) {
            Some(champion) => champion,
            None => panic!("{role} champion {id} is not in the roster"),
        }
    }

    fn bump_rev(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}
