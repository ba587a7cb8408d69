// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flag mutations for the champion roster.
//!
//! Every mutation sets an explicit value (it never flips per champion) and produces a minimal
//! delta the store uses to decide whether anything observable changed.

use crate::model::{Champion, ChampionClass, ChampionId, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Removed,
    Disabled,
}

impl Flag {
    pub fn get(self, champion: &Champion) -> bool {
        match self {
            Self::Removed => champion.removed(),
            Self::Disabled => champion.disabled(),
        }
    }

    fn set(self, champion: &mut Champion, value: bool) -> bool {
        match self {
            Self::Removed => champion.set_removed(value),
            Self::Disabled => champion.set_disabled(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Champion(ChampionId),
    Class(ChampionClass),
}

impl Target {
    fn matches(&self, champion: &Champion) -> bool {
        match self {
            Self::Champion(id) => champion.id() == id,
            Self::Class(class) => champion.class() == *class,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Op {
    pub flag: Flag,
    pub target: Target,
    pub value: bool,
}

impl Op {
    pub fn set_removed_by_id(id: ChampionId, removed: bool) -> Self {
        Self { flag: Flag::Removed, target: Target::Champion(id), value: removed }
    }

    pub fn set_removed_by_class(class: ChampionClass, removed: bool) -> Self {
        Self { flag: Flag::Removed, target: Target::Class(class), value: removed }
    }

    pub fn set_disabled_by_id(id: ChampionId, disabled: bool) -> Self {
        Self { flag: Flag::Disabled, target: Target::Champion(id), value: disabled }
    }

    pub fn set_disabled_by_class(class: ChampionClass, disabled: bool) -> Self {
        Self { flag: Flag::Disabled, target: Target::Class(class), value: disabled }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpDelta {
    /// Champions the op targeted, whether or not their flag changed.
    pub matched: usize,
    /// Ids whose flag value actually changed, in roster order.
    pub changed: Vec<ChampionId>,
}

impl OpDelta {
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("champion not found (id={0})")]
    UnknownChampion(ChampionId),
}

/// Applies `op` to every matching champion.
///
/// A champion target that matches nothing is an error and leaves `champions` untouched; a class
/// with no members is a no-op.
pub fn apply_op(champions: &mut [Champion], op: &Op) -> Result<OpDelta, ApplyError> {
    if let Target::Champion(id) = &op.target {
        if !champions.iter().any(|champion| champion.id() == id) {
            return Err(ApplyError::UnknownChampion(id.clone()));
        }
    }

    let mut delta = OpDelta::default();
    for champion in champions.iter_mut().filter(|champion| op.target.matches(champion)) {
        delta.matched += 1;
        if op.flag.set(champion, op.value) {
            delta.changed.push(champion.id().clone());
        }
    }
    Ok(delta)
}

/// What a primary press does, decided by the modifiers held at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressGesture {
    /// Include/exclude the pressed champion.
    ShiftChampion,
    /// Include/exclude the pressed champion's whole class.
    ShiftClass,
    /// Enable/disable the pressed champion.
    ToggleChampion,
    /// Enable/disable the pressed champion's whole class.
    ToggleClass,
}

impl PressGesture {
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        match (modifiers.ctrl, modifiers.shift) {
            (false, false) => Self::ShiftChampion,
            (false, true) => Self::ShiftClass,
            (true, false) => Self::ToggleChampion,
            (true, true) => Self::ToggleClass,
        }
    }

    /// The op for a press on `pressed`: the new value is always the negation of the pressed
    /// champion's current value, applied uniformly to the whole target.
    pub fn op_for(self, pressed: &Champion) -> Op {
        match self {
            Self::ShiftChampion => Op::set_removed_by_id(pressed.id().clone(), !pressed.removed()),
            Self::ShiftClass => Op::set_removed_by_class(pressed.class(), !pressed.removed()),
            Self::ToggleChampion => {
                Op::set_disabled_by_id(pressed.id().clone(), !pressed.disabled())
            }
            Self::ToggleClass => Op::set_disabled_by_class(pressed.class(), !pressed.disabled()),
        }
    }
}
