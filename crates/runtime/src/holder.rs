//! Owned aura holders kept by the [`AuraBook`](crate::AuraBook).
use spell_core::{
    AuraEffectView, AuraHolderView, CasterSnapshot, EffectIndex, ObjectGuid, SpellDescriptor,
    SpellId,
};

/// One applied aura effect of a holder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedAura {
    pub amount: i32,
    pub stack_amount: u32,
}

impl AuraEffectView for AppliedAura {
    fn amount(&self) -> i32 {
        self.amount
    }

    fn stack_amount(&self) -> u32 {
        self.stack_amount
    }
}

/// All auras one cast of a spell placed on one target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraHolder {
    spell_id: SpellId,
    caster: Option<ObjectGuid>,
    target: ObjectGuid,
    auras: [Option<AppliedAura>; 3],
}

impl AuraHolder {
    /// Builds the holder `spell` places on `target`.
    ///
    /// Every aura-apply slot gets one stack of its base points, plus the
    /// caster's combo bonus when the caster holds combo points on `target`.
    pub fn from_spell(
        spell: &SpellDescriptor,
        caster: Option<&CasterSnapshot>,
        target: ObjectGuid,
    ) -> Self {
        let combo = caster.map_or(0, |caster| caster.combo_points_on(target));
        let mut auras = [None; 3];
        for (index, effect) in spell.active_effects() {
            if !effect.is_aura_apply() {
                continue;
            }
            let bonus = (effect.points_per_combo_point * f32::from(combo)) as i32;
            auras[index.as_usize()] = Some(AppliedAura {
                amount: effect.base_points.saturating_add(bonus),
                stack_amount: 1,
            });
        }
        Self {
            spell_id: spell.id,
            caster: caster.map(|caster| caster.guid),
            target,
            auras,
        }
    }

    pub fn spell_id(&self) -> SpellId {
        self.spell_id
    }

    pub fn caster(&self) -> Option<ObjectGuid> {
        self.caster
    }

    pub fn target(&self) -> ObjectGuid {
        self.target
    }

    pub fn applied(&self, index: EffectIndex) -> Option<&AppliedAura> {
        self.auras[index.as_usize()].as_ref()
    }

    pub fn has_auras(&self) -> bool {
        self.auras.iter().any(Option::is_some)
    }

    fn is_cast_by(&self, caster: Option<ObjectGuid>) -> bool {
        caster.is_none() || self.caster == caster
    }

    pub(crate) fn matches(&self, spell: SpellId, caster: Option<ObjectGuid>) -> bool {
        self.spell_id == spell && self.is_cast_by(caster)
    }
}

impl AuraHolderView for AuraHolder {
    fn spell_id(&self) -> SpellId {
        self.spell_id
    }

    fn caster_guid(&self) -> Option<ObjectGuid> {
        self.caster
    }

    fn target_guid(&self) -> ObjectGuid {
        self.target
    }

    fn aura(&self, index: EffectIndex) -> Option<&dyn AuraEffectView> {
        self.auras[index.as_usize()]
            .as_ref()
            .map(|aura| aura as &dyn AuraEffectView)
    }
}
