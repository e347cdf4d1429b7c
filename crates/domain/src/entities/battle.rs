//! Battle entity - resolves a one-on-one fight between two combatants.
//!
//! A battle is created `Pending`, runs exactly once through [`Battle::fight`],
//! and ends `Concluded`. It owns snapshots of both combatants and its RNG; the
//! source aggregates are never mutated.
//!
//! # Round structure
//!
//! 1. Both sides draw a speed roll in `[0, speed]`; ties are rerolled. The
//!    higher roll acts first.
//! 2. The first actor rolls damage in `[0, attack]` against the other side.
//! 3. If the defender survived, the roles are mirrored for a second turn.
//!
//! Rounds repeat until one side reaches 0 HP. There is no round cap.

use std::fmt;

use thiserror::Error;

use crate::events::{BattleOutcome, RoundRecord, TurnRecord};
use crate::ids::{BattleId, CharacterId};
use crate::rng::BattleRng;
use crate::value_objects::{BattleSnapshot, Combatant};

/// Errors raised while creating or running a battle
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Character with ID {0} cannot battle itself.")]
    SelfBattle(CharacterId),

    #[error("Character with ID {0} is not alive and cannot battle.")]
    CharacterNotAlive(CharacterId),

    #[error("Battle has already concluded.")]
    AlreadyConcluded,
}

/// Which of the two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TurnOrder {
    leader: Side,
    leader_roll: i32,
    follower_roll: i32,
}

#[derive(Debug, Clone, Copy)]
struct Conclusion {
    winner: Side,
    loser: Side,
}

/// Read-only view of a battle's result. Empty until the battle concludes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleResult<'a> {
    pub winner: Option<&'a BattleSnapshot>,
    pub loser: Option<&'a BattleSnapshot>,
    pub log: &'a str,
}

/// A single battle between two combatants.
///
/// # Example
///
/// ```
/// use arena_domain::aggregates::Character;
/// use arena_domain::entities::Battle;
/// use arena_domain::rng::SeededRng;
/// use arena_domain::value_objects::{CharacterName, Job};
///
/// let hero = Character::from_job(CharacterName::new("Hero_One").unwrap(), Job::Warrior);
/// let rival = Character::from_job(CharacterName::new("Sneaky_Thief").unwrap(), Job::Thief);
///
/// let mut battle = Battle::create(&hero, &rival, SeededRng::new(12345)).unwrap();
/// let outcome = battle.fight().unwrap();
///
/// assert!(outcome.winner.is_alive());
/// assert_eq!(outcome.loser.health_points(), 0);
/// assert!(outcome.log.ends_with("HP remaining!"));
/// ```
pub struct Battle {
    id: BattleId,
    first: BattleSnapshot,
    second: BattleSnapshot,
    rng: Box<dyn BattleRng + Send>,
    rounds: Vec<RoundRecord>,
    conclusion: Option<Conclusion>,
    log: String,
}

impl Battle {
    /// Create a pending battle.
    ///
    /// # Errors
    ///
    /// - `BattleError::SelfBattle` if both combatants share an id
    /// - `BattleError::CharacterNotAlive` naming the first combatant found at 0 HP
    pub fn create(
        first: &impl Combatant,
        second: &impl Combatant,
        rng: impl BattleRng + Send + 'static,
    ) -> Result<Self, BattleError> {
        if first.combatant_id() == second.combatant_id() {
            return Err(BattleError::SelfBattle(first.combatant_id()));
        }
        if !first.can_fight() {
            return Err(BattleError::CharacterNotAlive(first.combatant_id()));
        }
        if !second.can_fight() {
            return Err(BattleError::CharacterNotAlive(second.combatant_id()));
        }

        Ok(Self {
            id: BattleId::new(),
            first: BattleSnapshot::capture(first),
            second: BattleSnapshot::capture(second),
            rng: Box::new(rng),
            rounds: Vec::new(),
            conclusion: None,
            log: String::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> BattleId {
        self.id
    }

    #[inline]
    pub fn is_concluded(&self) -> bool {
        self.conclusion.is_some()
    }

    /// Rounds recorded so far, in order.
    #[inline]
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Both snapshots, in creation order.
    pub fn combatants(&self) -> (&BattleSnapshot, &BattleSnapshot) {
        (&self.first, &self.second)
    }

    /// Current result; winner, loser and log are empty before `fight()`.
    pub fn result(&self) -> BattleResult<'_> {
        BattleResult {
            winner: self.conclusion.map(|c| self.snapshot(c.winner)),
            loser: self.conclusion.map(|c| self.snapshot(c.loser)),
            log: &self.log,
        }
    }

    /// Run the battle to completion.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::AlreadyConcluded` on every call after the first.
    pub fn fight(&mut self) -> Result<BattleOutcome, BattleError> {
        if self.is_concluded() {
            return Err(BattleError::AlreadyConcluded);
        }

        let mut round_number: u32 = 1;
        while self.first.is_alive() && self.second.is_alive() {
            let order = self.determine_turn_order();
            let follower = order.leader.other();

            let mut turns = vec![self.execute_turn(order.leader)];
            if self.snapshot(follower).is_alive() {
                turns.push(self.execute_turn(follower));
            }

            let record = RoundRecord {
                round_number,
                first_attacker_id: self.snapshot(order.leader).id(),
                first_attacker_name: self.snapshot(order.leader).name().to_string(),
                first_attacker_speed: order.leader_roll,
                second_attacker_name: self.snapshot(follower).name().to_string(),
                second_attacker_speed: order.follower_roll,
                turns,
            };
            self.rounds.push(record);
            round_number += 1;
        }

        let conclusion = if self.first.is_alive() {
            Conclusion {
                winner: Side::First,
                loser: Side::Second,
            }
        } else {
            Conclusion {
                winner: Side::Second,
                loser: Side::First,
            }
        };
        self.conclusion = Some(conclusion);
        self.log = self.generate_log(conclusion.winner);

        Ok(BattleOutcome {
            winner: self.snapshot(conclusion.winner).clone(),
            loser: self.snapshot(conclusion.loser).clone(),
            log: self.log.clone(),
        })
    }

    fn snapshot(&self, side: Side) -> &BattleSnapshot {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    fn snapshot_mut(&mut self, side: Side) -> &mut BattleSnapshot {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    /// Reroll until the two speed draws differ.
    ///
    /// With both speeds at 0 every draw is 0 and the reroll could never end;
    /// the first combatant leads without drawing.
    fn determine_turn_order(&mut self) -> TurnOrder {
        let (speed1, speed2) = (self.first.speed(), self.second.speed());
        if speed1 == 0 && speed2 == 0 {
            return TurnOrder {
                leader: Side::First,
                leader_roll: 0,
                follower_roll: 0,
            };
        }

        loop {
            let s1 = self.rng.next(0, speed1.saturating_add(1));
            let s2 = self.rng.next(0, speed2.saturating_add(1));
            if s1 > s2 {
                return TurnOrder {
                    leader: Side::First,
                    leader_roll: s1,
                    follower_roll: s2,
                };
            }
            if s2 > s1 {
                return TurnOrder {
                    leader: Side::Second,
                    leader_roll: s2,
                    follower_roll: s1,
                };
            }
        }
    }

    fn execute_turn(&mut self, attacker: Side) -> TurnRecord {
        let attack = self.snapshot(attacker).attack_power();
        let damage = self.rng.next(0, attack.saturating_add(1));
        let attacker_name = self.snapshot(attacker).name().to_string();

        let defender = self.snapshot_mut(attacker.other());
        defender.receive_damage(damage);

        TurnRecord {
            attacker_name,
            defender_name: defender.name().to_string(),
            damage_dealt: damage,
            defender_hp_remaining: defender.health_points(),
        }
    }

    fn generate_log(&self, winner: Side) -> String {
        let mut lines = Vec::with_capacity(self.rounds.len() * 3 + 2);
        lines.push(format!(
            "Battle between {} ({}) - {} HP and {} ({}) - {} HP begins!",
            self.first.name(),
            self.first.job(),
            self.first.max_health_points(),
            self.second.name(),
            self.second.job(),
            self.second.max_health_points(),
        ));

        for round in &self.rounds {
            lines.push(format!(
                "{} {} speed was faster than {} {} speed and will begin this round.",
                round.first_attacker_name,
                round.first_attacker_speed,
                round.second_attacker_name,
                round.second_attacker_speed,
            ));
            for turn in &round.turns {
                lines.push(format!(
                    "{} attacks {} for {}, {} has {} HP remaining.",
                    turn.attacker_name,
                    turn.defender_name,
                    turn.damage_dealt,
                    turn.defender_name,
                    turn.defender_hp_remaining,
                ));
            }
        }

        let winner = self.snapshot(winner);
        lines.push(format!(
            "{} wins the battle! {} still has {} HP remaining!",
            winner.name(),
            winner.name(),
            winner.health_points(),
        ));

        lines.join("\n")
    }
}

impl fmt::Debug for Battle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Battle")
            .field("id", &self.id)
            .field("first", &self.first)
            .field("second", &self.second)
            .field("rounds", &self.rounds.len())
            .field("concluded", &self.is_concluded())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::aggregates::Character;
    use crate::rng::SeededRng;
    use crate::value_objects::{CharacterName, Job, StatBlock};

    /// Replays a fixed list of draws, checking each against the requested range.
    struct ScriptedRng(VecDeque<i32>);

    impl ScriptedRng {
        fn new(draws: &[i32]) -> Self {
            Self(draws.iter().copied().collect())
        }
    }

    impl BattleRng for ScriptedRng {
        fn next(&mut self, min: i32, max: i32) -> i32 {
            let value = self.0.pop_front().expect("script exhausted");
            assert!(
                (min..max).contains(&value),
                "scripted draw {value} outside [{min}, {max})"
            );
            value
        }
    }

    fn character(name: &str, job: Job, stats: StatBlock, hp: i32, max_hp: i32) -> Character {
        Character::new(
            CharacterId::new(),
            CharacterName::new(name).unwrap(),
            job,
            stats,
            hp,
            max_hp,
        )
        .unwrap()
    }

    fn warrior(name: &str) -> Character {
        character(name, Job::Warrior, StatBlock::new(10, 5, 5), 20, 20)
    }

    mod create {
        use super::*;

        #[test]
        fn rejects_self_battle() {
            let hero = warrior("Hero_One");
            let err = Battle::create(&hero, &hero.clone(), SeededRng::new(1)).unwrap_err();
            assert_eq!(err, BattleError::SelfBattle(hero.id()));
        }

        #[test]
        fn rejects_dead_first_combatant() {
            let dead = character("Fallen", Job::Mage, StatBlock::default(), 0, 10);
            let hero = warrior("Hero_One");
            let err = Battle::create(&dead, &hero, SeededRng::new(1)).unwrap_err();
            assert_eq!(err, BattleError::CharacterNotAlive(dead.id()));
        }

        #[test]
        fn rejects_dead_second_combatant() {
            let dead = character("Fallen", Job::Mage, StatBlock::default(), 0, 10);
            let hero = warrior("Hero_One");
            let err = Battle::create(&hero, &dead, SeededRng::new(1)).unwrap_err();
            assert_eq!(err, BattleError::CharacterNotAlive(dead.id()));
        }

        #[test]
        fn starts_pending_with_empty_result() {
            let battle =
                Battle::create(&warrior("Hero_One"), &warrior("Hero_Two"), SeededRng::new(1))
                    .unwrap();
            assert!(!battle.is_concluded());
            assert!(battle.rounds().is_empty());
            let result = battle.result();
            assert!(result.winner.is_none());
            assert!(result.loser.is_none());
            assert!(result.log.is_empty());
        }
    }

    mod fight {
        use super::*;

        #[test]
        fn produces_one_winner_and_one_loser() {
            let a = warrior("Hero_One");
            let b = warrior("Hero_Two");
            let mut battle = Battle::create(&a, &b, SeededRng::new(12345)).unwrap();
            let outcome = battle.fight().unwrap();

            assert!(outcome.winner.is_alive());
            assert!(outcome.winner.health_points() > 0);
            assert_eq!(outcome.loser.health_points(), 0);
            assert_ne!(outcome.winner.id(), outcome.loser.id());
            assert!(battle.is_concluded());
        }

        #[test]
        fn same_seed_is_deterministic() {
            let a = warrior("Hero_One");
            let b = warrior("Hero_Two");

            let first = Battle::create(&a, &b, SeededRng::new(12345))
                .unwrap()
                .fight()
                .unwrap();
            let second = Battle::create(&a, &b, SeededRng::new(12345))
                .unwrap()
                .fight()
                .unwrap();

            assert_eq!(first.winner.id(), second.winner.id());
            assert_eq!(first.loser.id(), second.loser.id());
            assert_eq!(first.log, second.log);
        }

        #[test]
        fn different_seeds_vary_first_round_draws() {
            let a = warrior("Hero_One");
            let b = warrior("Hero_Two");

            let draws: HashSet<(i32, i32)> = (1..=20)
                .map(|seed| {
                    let mut battle = Battle::create(&a, &b, SeededRng::new(seed)).unwrap();
                    battle.fight().unwrap();
                    let round = &battle.rounds()[0];
                    (round.first_attacker_speed, round.second_attacker_speed)
                })
                .collect();

            assert!(draws.len() > 1);
        }

        #[test]
        fn second_fight_fails() {
            let mut battle =
                Battle::create(&warrior("Hero_One"), &warrior("Hero_Two"), SeededRng::new(7))
                    .unwrap();
            battle.fight().unwrap();
            assert_eq!(battle.fight().unwrap_err(), BattleError::AlreadyConcluded);
        }

        #[test]
        fn source_characters_are_untouched() {
            let a = warrior("Hero_One");
            let b = warrior("Hero_Two");
            let (a_before, b_before) = (a.clone(), b.clone());

            let mut battle = Battle::create(&a, &b, SeededRng::new(99)).unwrap();
            battle.fight().unwrap();

            let (first, second) = battle.combatants();
            assert_eq!((first.id(), second.id()), (a.id(), b.id()));
            assert!(first.health_points() == 0 || second.health_points() == 0);

            assert_eq!(a, a_before);
            assert_eq!(b, b_before);
            assert_eq!(a.health_points(), 20);
        }

        #[test]
        fn one_hit_kill_ends_after_one_round() {
            let hero = warrior("Hero_One");
            let glass = character("Glass_Mage", Job::Mage, StatBlock::new(5, 6, 10), 1, 1);

            // speed rolls 3 vs 0, then 5 damage
            let mut battle = Battle::create(&hero, &glass, ScriptedRng::new(&[3, 0, 5])).unwrap();
            let outcome = battle.fight().unwrap();

            assert_eq!(battle.rounds().len(), 1);
            assert_eq!(battle.rounds()[0].turns.len(), 1);
            assert_eq!(outcome.winner.id(), hero.id());
            assert_eq!(
                outcome.log,
                "Battle between Hero_One (Warrior) - 20 HP and Glass_Mage (Mage) - 1 HP begins!\n\
                 Hero_One 3 speed was faster than Glass_Mage 0 speed and will begin this round.\n\
                 Hero_One attacks Glass_Mage for 5, Glass_Mage has 0 HP remaining.\n\
                 Hero_One wins the battle! Hero_One still has 20 HP remaining!"
            );
        }

        #[test]
        fn ties_are_rerolled() {
            let a = warrior("Hero_One");
            let low = character("Low_HP", Job::Warrior, StatBlock::new(10, 5, 5), 1, 20);

            // tie 2-2, then 1-4 puts Low_HP first; 9 damage does not kill, 9 back kills
            let mut battle =
                Battle::create(&a, &low, ScriptedRng::new(&[2, 2, 1, 4, 9, 9])).unwrap();
            let outcome = battle.fight().unwrap();

            let round = &battle.rounds()[0];
            assert_eq!(round.first_attacker_id, low.id());
            assert_eq!(round.first_attacker_speed, 4);
            assert_eq!(round.second_attacker_speed, 1);
            assert_eq!(round.turns.len(), 2);
            assert_eq!(round.turns[0].defender_hp_remaining, 11);
            assert_eq!(outcome.winner.id(), a.id());
            assert_eq!(outcome.winner.health_points(), 11);
        }

        #[test]
        fn zero_damage_rounds_continue() {
            let a = warrior("Hero_One");
            let b = character("Tiny_One", Job::Warrior, StatBlock::new(10, 5, 5), 2, 20);

            // round 1: both whiff; round 2: Hero_One kills
            let script = [3, 1, 0, 0, 3, 1, 9];
            let mut battle = Battle::create(&a, &b, ScriptedRng::new(&script)).unwrap();
            let outcome = battle.fight().unwrap();

            assert_eq!(battle.rounds().len(), 2);
            assert_eq!(battle.rounds()[0].turns.len(), 2);
            assert_eq!(battle.rounds()[1].round_number, 2);
            assert_eq!(outcome.winner.id(), a.id());
        }

        #[test]
        fn both_zero_speed_lets_first_combatant_lead() {
            let slow_a = character("Slow_A", Job::Thief, StatBlock::new(0, 0, 4), 5, 5);
            let slow_b = character("Slow_B", Job::Thief, StatBlock::new(0, 0, 4), 5, 5);
            assert_eq!(slow_a.speed(), 0);
            assert_eq!(slow_a.attack_power(), 1);

            // only damage draws are consumed: 1 per turn until Slow_B drops
            let script = [1, 0, 1, 0, 1, 0, 1, 0, 1];
            let mut battle = Battle::create(&slow_a, &slow_b, ScriptedRng::new(&script)).unwrap();
            let outcome = battle.fight().unwrap();

            assert!(battle
                .rounds()
                .iter()
                .all(|r| r.first_attacker_id == slow_a.id()));
            assert_eq!(outcome.winner.id(), slow_a.id());
        }

        #[test]
        fn result_matches_outcome_after_fight() {
            let mut battle =
                Battle::create(&warrior("Hero_One"), &warrior("Hero_Two"), SeededRng::new(3))
                    .unwrap();
            let outcome = battle.fight().unwrap();
            let result = battle.result();

            assert_eq!(result.winner, Some(&outcome.winner));
            assert_eq!(result.loser, Some(&outcome.loser));
            assert_eq!(result.log, outcome.log);
        }
    }

    mod log {
        use super::*;

        #[test]
        fn has_one_speed_line_per_round_and_one_closing_line() {
            let a = warrior("Hero_One");
            let b = character("Magic_User", Job::Mage, StatBlock::new(5, 6, 10), 12, 12);
            let mut battle = Battle::create(&a, &b, SeededRng::new(2024)).unwrap();
            let outcome = battle.fight().unwrap();

            let lines: Vec<&str> = outcome.log.lines().collect();
            assert_eq!(
                lines[0],
                "Battle between Hero_One (Warrior) - 20 HP and Magic_User (Mage) - 12 HP begins!"
            );
            let speed_lines = lines.iter().filter(|l| l.contains("speed was faster than")).count();
            let attack_lines = lines.iter().filter(|l| l.contains(" attacks ")).count();
            let turns: usize = battle.rounds().iter().map(|r| r.turns.len()).sum();

            assert_eq!(speed_lines, battle.rounds().len());
            assert_eq!(attack_lines, turns);
            assert_eq!(lines.len(), 1 + speed_lines + attack_lines + 1);
            assert!(lines[lines.len() - 1].contains("wins the battle!"));
            assert!(!outcome.log.ends_with('\n'));
        }
    }
}
