mod common;

use common::{class_spell, friendly, holder, hostile, spell, store};
use proptest::prelude::*;
use spell_core::{
    AuraConflict, AuraKind, Candidate, DamageClass, DispelType, EffectDescriptor, EffectIndex,
    Mechanic, PreventionType, SpellDescriptor, SpellEngine, SpellFamily, SpellId, SpellStore,
};
use strum::IntoEnumIterator;

fn stacks(candidate: &SpellDescriptor, existing: &SpellDescriptor) -> bool {
    let empty = SpellStore::default();
    SpellEngine::new(&empty).stackable_spell(candidate, existing, None)
}

const ALWAYS_STACK: [AuraKind; 10] = [
    AuraKind::PeriodicDamage,
    AuraKind::PeriodicDamagePercent,
    AuraKind::PowerBurnMana,
    AuraKind::PeriodicHeal,
    AuraKind::ObsModHealth,
    AuraKind::ObsModMana,
    AuraKind::ModRating,
    AuraKind::ModSpellCritChance,
    AuraKind::ModSpellHitChance,
    AuraKind::SpellMagnet,
];

const NEVER_STACK: [AuraKind; 11] = [
    AuraKind::ModPossess,
    AuraKind::ModPossessPet,
    AuraKind::ModCharm,
    AuraKind::AoeCharm,
    AuraKind::DamageShield,
    AuraKind::ModShapeshift,
    AuraKind::Mounted,
    AuraKind::Empathy,
    AuraKind::ModCastingSpeedNotStack,
    AuraKind::ModMountedSpeedNotStack,
    AuraKind::HasteSpells,
];

#[test]
fn always_stack_auras_ignore_identity() {
    let empty = SpellStore::default();
    let engine = SpellEngine::new(&empty);

    for aura in ALWAYS_STACK {
        for effect in [friendly(aura), hostile(aura)] {
            let same = spell(100, effect);
            assert!(
                engine.stackable_effect(&same, &same, EffectIndex::Effect0, None),
                "{aura} must stack with itself"
            );

            let rank1 = class_spell(101, SpellFamily::Priest, 0x40, effect);
            let rank2 = class_spell(102, SpellFamily::Priest, 0x40, effect);
            assert!(
                engine.stackable_spell(&rank2, &rank1, None),
                "{aura} must stack across ranks"
            );
        }
    }
}

#[test]
fn never_stack_auras_reject_unrelated_spells() {
    let empty = SpellStore::default();
    let engine = SpellEngine::new(&empty);

    for aura in NEVER_STACK {
        let mage = class_spell(200, SpellFamily::Mage, 0x1, friendly(aura));
        let item = spell(300, friendly(aura));
        assert!(
            !engine.stackable_effect(&mage, &item, EffectIndex::Effect0, None),
            "{aura} must not stack"
        );
        assert!(!engine.stackable_spell(&item, &mage, None), "{aura} must not stack");
    }
}

#[test]
fn positive_ranks_of_one_spell_never_coexist() {
    let stamina = friendly(AuraKind::ModStat).with_misc_value(2);
    let rank1 = class_spell(1243, SpellFamily::Priest, 0x8, stamina);
    let rank2 = class_spell(1244, SpellFamily::Priest, 0x8, stamina);
    let other_buff = class_spell(1245, SpellFamily::Priest, 0x10, stamina);

    let store = store([rank1.clone(), rank2.clone(), other_buff.clone()]);
    let engine = SpellEngine::new(&store);

    assert!(!engine.stackable_spell(&rank2, &rank1, None));
    assert!(!engine.stackable_spell(&rank1, &rank2, None));
    assert!(engine.stackable_spell(&other_buff, &rank1, None));
}

#[test]
fn stun_tie_break_uses_mechanic() {
    let hammer = spell(853, hostile(AuraKind::ModStun).with_mechanic(Mechanic::Stun));
    let gouge = spell(1776, hostile(AuraKind::ModStun).with_mechanic(Mechanic::Sapped));
    let store = store([hammer.clone(), gouge.clone()]);
    let engine = SpellEngine::new(&store);

    assert!(!engine.stackable_effect(&hammer, &hammer, EffectIndex::Effect0, None));
    assert!(engine.stackable_effect(&hammer, &gouge, EffectIndex::Effect0, None));
}

#[test]
fn effect_mechanic_falls_back_to_spell_mechanic() {
    let mut fear = spell(5782, hostile(AuraKind::ModFear));
    fear.mechanic = Mechanic::Fear;
    let mut horror = spell(6789, hostile(AuraKind::ModFear));
    horror.mechanic = Mechanic::Horror;
    let mut howl = spell(5484, hostile(AuraKind::ModFear));
    howl.mechanic = Mechanic::Fear;

    let store = SpellStore::default();
    let engine = SpellEngine::new(&store);
    assert!(engine.stackable_spell(&fear, &horror, None));
    assert!(!engine.stackable_spell(&fear, &howl, None));
}

#[test]
fn attacker_bonus_stacks_only_between_different_spells() {
    let bonus = hostile(AuraKind::RangedAttackPowerAttackerBonus);
    let mark = class_spell(1130, SpellFamily::Hunter, 0x400, bonus);
    let mark2 = class_spell(14323, SpellFamily::Hunter, 0x400, bonus);
    let weakness = spell(34501, bonus);

    let store = SpellStore::default();
    let engine = SpellEngine::new(&store);
    assert!(!engine.stackable_spell(&mark2, &mark, None));
    assert!(engine.stackable_spell(&weakness, &mark, None));
}

#[test]
fn attack_power_debuffs_only_stack_without_family() {
    let debuff = |base| hostile(AuraKind::ModAttackPower).with_base_points(base);
    let shout = class_spell(1160, SpellFamily::Warrior, 0x20000, debuff(-35));
    let roar = class_spell(99, SpellFamily::Druid, 0x8, debuff(-40));
    let npc_a = spell(16244, debuff(-50));
    let npc_b = spell(16245, debuff(-60));

    let store = SpellStore::default();
    let engine = SpellEngine::new(&store);
    assert!(!engine.stackable_spell(&roar, &shout, None));
    assert!(!engine.stackable_spell(&npc_a, &shout, None));
    assert!(engine.stackable_spell(&npc_a, &npc_b, None));
}

#[test]
fn resistance_debuffs_sharing_dispel_and_prevention_do_not_stack() {
    let mut faerie = spell(770, hostile(AuraKind::ModResistance).with_misc_value(1));
    faerie.dispel = DispelType::Magic;
    faerie.prevention = PreventionType::Silence;
    let mut other = spell(16857, hostile(AuraKind::ModResistance).with_misc_value(1));
    other.dispel = DispelType::Magic;
    other.prevention = PreventionType::Silence;
    let mut sunder = spell(7386, hostile(AuraKind::ModResistance).with_misc_value(1));
    sunder.prevention = PreventionType::Pacify;

    let store = SpellStore::default();
    let engine = SpellEngine::new(&store);
    assert!(!engine.stackable_spell(&faerie, &other, None));
    assert!(engine.stackable_spell(&faerie, &sunder, None));
}

#[test]
fn druid_mangle_forms_never_stack() {
    let mangle = hostile(AuraKind::Dummy);
    let cat = class_spell(33876, SpellFamily::Druid, 0x400_0000_0000, mangle);
    let bear = class_spell(33878, SpellFamily::Druid, 0x40_0000_0000, mangle);
    let bloom = friendly(AuraKind::PeriodicDummy);
    let lifebloom = class_spell(33763, SpellFamily::Druid, 0x10_0000_0000, bloom);

    let store = SpellStore::default();
    let engine = SpellEngine::new(&store);
    assert!(!engine.stackable_spell(&cat, &bear, None));
    assert!(engine.stackable_spell(&lifebloom, &lifebloom, None));
}

#[test]
fn judgements_with_distinct_icons_coexist() {
    let judgement = |id, icon| {
        SpellDescriptor::builder(id)
            .effect0(hostile(AuraKind::ProcTriggerSpell))
            .family(SpellFamily::Paladin, 0x8_0000)
            .visuals(icon, 1)
            .build()
    };
    let light = judgement(20185, 299);
    let wisdom = judgement(20186, 206);
    let light_rank2 = judgement(20344, 299);
    let trinket_proc = spell(7, hostile(AuraKind::ProcTriggerSpell));

    assert!(stacks(&light, &wisdom));
    assert!(!stacks(&light_rank2, &light));
    assert!(stacks(&trinket_proc, &light));
}

#[test]
fn resistance_percent_buffs_reject_on_same_dispel() {
    let shield = |id, effect: EffectDescriptor, dispel| {
        SpellDescriptor::builder(id)
            .effect0(effect.with_misc_value(1))
            .dispel(dispel)
            .build()
    };
    let buff = friendly(AuraKind::ModResistancePct);
    let debuff = hostile(AuraKind::ModResistancePct);

    let ward = shield(101, buff, DispelType::Magic);
    let barrier = shield(102, buff, DispelType::Magic);
    assert!(!stacks(&ward, &barrier));

    let plain = shield(103, buff, DispelType::None);
    assert!(stacks(&plain, &ward));
    assert!(!stacks(&plain, &plain));

    let weaken = shield(104, debuff, DispelType::Magic);
    let expose = shield(105, debuff, DispelType::Magic);
    assert!(stacks(&weaken, &expose));
    assert!(!stacks(&weaken, &weaken));
}

#[test]
fn resistance_buffs_of_one_attack_table_do_not_stack() {
    let armor = |id, class| {
        SpellDescriptor::builder(id)
            .effect0(friendly(AuraKind::ModResistance).with_misc_value(1))
            .damage_class(class)
            .build()
    };
    let stoneskin = armor(201, DamageClass::Melee);
    let ironbark = armor(202, DamageClass::Melee);
    let arcane_ward = armor(203, DamageClass::Magic);

    assert!(!stacks(&stoneskin, &ironbark));
    assert!(stacks(&arcane_ward, &stoneskin));

    let class_armor = SpellDescriptor::builder(204)
        .effect0(friendly(AuraKind::ModResistance).with_misc_value(1))
        .damage_class(DamageClass::Melee)
        .family(SpellFamily::Priest, 0x2)
        .build();
    assert!(stacks(&class_armor, &stoneskin));
}

#[test]
fn haste_and_damage_buffs_stack_but_their_debuffs_refresh() {
    for aura in [AuraKind::ModMeleeHaste, AuraKind::ModDamageDone] {
        let buff = spell(301, friendly(aura));
        assert!(stacks(&buff, &buff), "{aura} buff must stack");

        let debuff = spell(302, hostile(aura));
        let other_debuff = spell(303, hostile(aura));
        assert!(!stacks(&debuff, &debuff), "{aura} debuff must refresh");
        assert!(stacks(&debuff, &other_debuff), "{aura} debuffs of different spells");
    }
}

#[test]
fn single_instance_auras_refresh_per_spell() {
    for aura in [
        AuraKind::ModDamageTaken,
        AuraKind::ModDecreaseSpeed,
        AuraKind::PreventsFleeing,
    ] {
        let first = spell(401, hostile(aura));
        let second = spell(402, hostile(aura));
        assert!(!stacks(&first, &first), "{aura} must not stack with itself");
        assert!(stacks(&first, &second), "{aura} of different spells must stack");
    }
}

#[test]
fn soulstones_replace_each_other() {
    let soulstone = |id, visual| {
        SpellDescriptor::builder(id)
            .effect0(friendly(AuraKind::Dummy))
            .visuals(92, visual)
            .build()
    };
    let minor = soulstone(20707, 99);
    let major = soulstone(20762, 99);
    let lookalike = soulstone(20763, 100);

    assert!(!stacks(&major, &minor));
    assert!(stacks(&lookalike, &minor));
}

#[test]
fn reincarnation_and_tranquility_ranks_stack() {
    let dummy = friendly(AuraKind::Dummy);
    let reincarnation = class_spell(20608, SpellFamily::Shaman, 0x200, dummy);
    let nether = class_spell(23701, SpellFamily::Shaman, 0x200, dummy);
    assert!(stacks(&nether, &reincarnation));

    let shield_rank1 = class_spell(324, SpellFamily::Shaman, 0x400, dummy);
    let shield_rank2 = class_spell(325, SpellFamily::Shaman, 0x400, dummy);
    assert!(!stacks(&shield_rank2, &shield_rank1));

    let channel = friendly(AuraKind::PeriodicTriggerSpell);
    let tranquility = class_spell(740, SpellFamily::Druid, 0x80, channel);
    let tranquility2 = class_spell(8918, SpellFamily::Druid, 0x80, channel);
    assert!(stacks(&tranquility2, &tranquility));

    let hurricane = class_spell(16914, SpellFamily::Druid, 0x8, channel);
    let hurricane2 = class_spell(17401, SpellFamily::Druid, 0x8, channel);
    assert!(!stacks(&hurricane2, &hurricane));
}

/// Rank 1 and rank 2 of one positive stat buff on the same target: rank 2
/// cannot coexist with rank 1, and rank 1 is not stronger, so it is replaced.
#[test]
fn higher_rank_replaces_lower_rank() {
    let intellect = |base| {
        friendly(AuraKind::ModStat)
            .with_misc_value(3)
            .with_base_points(base)
    };
    let rank1 = class_spell(1459, SpellFamily::Mage, 0x400, intellect(10));
    let rank2 = class_spell(1460, SpellFamily::Mage, 0x400, intellect(20));
    let store = SpellStore::builder()
        .spells([rank1.clone(), rank2.clone()])
        .rank_chain(&[SpellId(1459), SpellId(1460)])
        .build()
        .unwrap();
    let engine = SpellEngine::new(&store);

    assert!(!engine.stackable_spell(&rank2, &rank1, None));

    let existing = holder(1459, 42, 10, 1);
    let candidate = Candidate::Spell {
        spell: &rank2,
        caster: None,
    };
    assert!(!engine.existing_is_stronger(candidate, &existing));
    assert_eq!(
        engine.resolve_conflict(&rank2, None, &existing, None),
        AuraConflict::ReplaceExisting
    );
    assert!(engine.is_high_rank(SpellId(1460), SpellId(1459)));
}

fn any_aura() -> impl Strategy<Value = AuraKind> {
    prop::sample::select(AuraKind::iter().filter(|aura| aura.is_some()).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn prop_stacking_is_deterministic(
        aura in any_aura(),
        misc in -2..3i32,
        base in -50..50i32,
        hostile_target in any::<bool>(),
    ) {
        let effect = if hostile_target { hostile(aura) } else { friendly(aura) };
        let effect = effect.with_misc_value(misc).with_base_points(base);
        let candidate = class_spell(10, SpellFamily::Warlock, 0x2, effect);
        let existing = spell(11, effect);
        let store = SpellStore::default();
        let engine = SpellEngine::new(&store);

        let first = engine.stackable_spell(&candidate, &existing, None);
        prop_assert_eq!(first, engine.stackable_spell(&candidate, &existing, None));
    }

    #[test]
    fn prop_always_stack_auras_stack(
        aura in prop::sample::select(ALWAYS_STACK.to_vec()),
        candidate_id in 1..5000u32,
        existing_id in 1..5000u32,
        flags in 0..16u64,
    ) {
        let candidate = class_spell(candidate_id, SpellFamily::Rogue, flags, hostile(aura));
        let existing = class_spell(existing_id, SpellFamily::Rogue, flags, hostile(aura));
        let store = SpellStore::default();
        let engine = SpellEngine::new(&store);
        prop_assert!(engine.stackable_spell(&candidate, &existing, None));
    }
}
