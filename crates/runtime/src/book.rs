//! Per-target aura book applying engine verdicts.
//!
//! The book is the only mutable piece of the workspace: it owns the holders
//! currently on each target and asks a [`SpellEngine`] how each new aura
//! interacts with them. Verdicts for all holders are collected before anything
//! changes, so a rejected candidate leaves the target untouched.
use std::collections::HashMap;

use spell_core::{
    AuraConflict, CasterSnapshot, ObjectGuid, SpellEngine, SpellId, SpellOracle, WorldObjectView,
};

use crate::error::{Result, RuntimeError};
use crate::holder::AuraHolder;

/// Result of [`AuraBook::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The candidate was added; `replaced` holds the removed holders.
    Applied { replaced: Vec<AuraHolder> },
    /// An existing holder rejected the candidate.
    Rejected { by: SpellId },
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// In-memory holders keyed by target.
#[derive(Clone, Debug, Default)]
pub struct AuraBook {
    targets: HashMap<ObjectGuid, Vec<AuraHolder>>,
}

impl AuraBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `candidate`, cast by `caster`, to `target`.
    ///
    /// Every holder on the target is resolved against the candidate. The
    /// first [`AuraConflict::RejectCandidate`] aborts the application;
    /// otherwise holders marked [`AuraConflict::ReplaceExisting`] are removed
    /// and the new holder is recorded.
    pub fn apply<S: SpellOracle + ?Sized>(
        &mut self,
        engine: &SpellEngine<'_, S>,
        candidate: SpellId,
        caster: Option<&CasterSnapshot>,
        target: &dyn WorldObjectView,
    ) -> Result<ApplyOutcome> {
        let spell = engine
            .store()
            .spell(candidate)
            .ok_or(RuntimeError::UnknownSpell(candidate))?;
        let holder = AuraHolder::from_spell(spell, caster, target.guid());
        if !holder.has_auras() {
            return Err(RuntimeError::NotAnAura(candidate));
        }

        let existing = self.targets.entry(target.guid()).or_default();
        let mut replace = Vec::new();
        for (slot, current) in existing.iter().enumerate() {
            let verdict = engine.resolve_conflict(spell, caster, current, Some(target));
            tracing::trace!(
                candidate = candidate.0,
                existing = current.spell_id().0,
                target = %target.guid(),
                %verdict,
                "aura conflict resolved"
            );
            match verdict {
                AuraConflict::Coexist => {}
                AuraConflict::ReplaceExisting => replace.push(slot),
                AuraConflict::RejectCandidate => {
                    tracing::debug!(
                        candidate = candidate.0,
                        by = current.spell_id().0,
                        target = %target.guid(),
                        "aura rejected"
                    );
                    return Ok(ApplyOutcome::Rejected {
                        by: current.spell_id(),
                    });
                }
            }
        }

        // Descending so earlier slots stay valid.
        let replaced: Vec<AuraHolder> = replace
            .into_iter()
            .rev()
            .map(|slot| existing.remove(slot))
            .collect();
        existing.push(holder);

        tracing::debug!(
            spell_id = candidate.0,
            target = %target.guid(),
            replaced = replaced.len(),
            "aura applied"
        );
        Ok(ApplyOutcome::Applied { replaced })
    }

    /// Removes the first holder of `spell` on `target`, restricted to
    /// `caster` when given.
    pub fn remove(
        &mut self,
        target: ObjectGuid,
        spell: SpellId,
        caster: Option<ObjectGuid>,
    ) -> Option<AuraHolder> {
        let holders = self.targets.get_mut(&target)?;
        let slot = holders
            .iter()
            .position(|holder| holder.matches(spell, caster))?;
        let removed = holders.remove(slot);
        if holders.is_empty() {
            self.targets.remove(&target);
        }
        tracing::debug!(spell_id = spell.0, %target, "aura removed");
        Some(removed)
    }

    /// Drops every holder on `target`.
    pub fn clear(&mut self, target: ObjectGuid) -> Vec<AuraHolder> {
        self.targets.remove(&target).unwrap_or_default()
    }

    /// Holders on `target` in application order.
    pub fn holders(&self, target: ObjectGuid) -> &[AuraHolder] {
        self.targets
            .get(&target)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First holder of `spell` on `target`.
    pub fn find(&self, target: ObjectGuid, spell: SpellId) -> Option<&AuraHolder> {
        self.holders(target)
            .iter()
            .find(|holder| holder.spell_id() == spell)
    }

    /// Number of holders across all targets.
    pub fn len(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
