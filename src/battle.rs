//! The battle engine: volleys, hit application and termination.

use alloc::vec::Vec;
use core::fmt;
use core::ops::ControlFlow;

use crate::{
    common::ShotResult,
    coordinate::Coordinate,
    player::{PlayerId, PlayerState},
    scenario::Scenario,
};

/// Something that happened during the battle, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleEvent {
    /// `shooter` fired at `target` on the opponent's grid.
    Shot {
        shooter: PlayerId,
        target: Coordinate,
        result: ShotResult,
    },
    /// `shooter` tried to fire with an exhausted sequence.
    OutOfMissiles { shooter: PlayerId },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Shot {
                shooter,
                target,
                result,
            } => {
                let verb = if result.is_hit() { "hit" } else { "miss" };
                write!(
                    f,
                    "{} fires a missile with target {} which got {}",
                    shooter, target, verb
                )
            }
            BattleEvent::OutOfMissiles { shooter } => {
                write!(f, "{} has no more missiles left to launch", shooter)
            }
        }
    }
}

/// Who won, if anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Verdict {
    Winner(PlayerId),
    Draw,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Winner(id) => write!(f, "{} won the battle", id),
            Verdict::Draw => write!(f, "The game ends in a draw!"),
        }
    }
}

/// Why the battle stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Termination {
    /// A fleet was wiped out.
    FleetDestroyed,
    /// Both firing sequences ran out.
    AmmunitionExhausted,
}

/// Final result of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Outcome {
    pub verdict: Verdict,
    pub termination: Termination,
}

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Both players still have missiles.
    Exchanging,
    /// This player's sequence is exhausted; the other keeps firing.
    PlayerDepleted(PlayerId),
    Terminated(Outcome),
}

/// Serializable digest of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BattleSummary {
    /// `None` while the battle is still running.
    pub outcome: Option<Outcome>,
    /// Missiles fired by each player.
    pub shots: [usize; 2],
    /// Hits scored by each player.
    pub hits: [usize; 2],
    /// Ships still afloat for each player.
    pub surviving: [usize; 2],
}

/// Replays two firing sequences against each other.
///
/// A player keeps firing while each shot hits; the volley passes to the
/// opponent on the first miss or when the player runs out of missiles.
#[derive(Debug, Clone)]
pub struct Battle {
    players: [PlayerState; 2],
    cursors: [usize; 2],
    events: Vec<BattleEvent>,
    phase: Phase,
}

impl Battle {
    /// Start a battle. `players[0]` must be `PlayerId::One`.
    pub fn new(players: [PlayerState; 2]) -> Self {
        debug_assert_eq!(players[0].id(), PlayerId::One);
        debug_assert_eq!(players[1].id(), PlayerId::Two);
        let mut battle = Self {
            players,
            cursors: [0; 2],
            events: Vec::new(),
            phase: Phase::Exchanging,
        };
        battle.update_phase();
        battle
    }

    /// Build both players from a scenario and start a battle.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(scenario.players())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Terminated(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Missiles `id` has not fired yet.
    pub fn missiles_left(&self, id: PlayerId) -> usize {
        self.player(id).missiles().len() - self.cursors[id.index()]
    }

    fn has_missiles(&self, id: PlayerId) -> bool {
        self.missiles_left(id) > 0
    }

    /// Fire `shooter`'s next missile at the opponent.
    ///
    /// Returns `None` without changing any ship when the sequence is
    /// exhausted; the attempt is still recorded as an event. Once the battle
    /// has terminated this returns `None` and records nothing.
    pub fn fire(&mut self, shooter: PlayerId) -> Option<ShotResult> {
        if let Phase::Terminated(_) = self.phase {
            return None;
        }
        let Some(&target) = self
            .player(shooter)
            .missiles()
            .get(self.cursors[shooter.index()])
        else {
            log::debug!("{} is out of missiles", shooter);
            self.events.push(BattleEvent::OutOfMissiles { shooter });
            return None;
        };
        self.cursors[shooter.index()] += 1;
        let result = self.players[shooter.opponent().index()].receive_fire(target);
        log::debug!("{} fired at {}: {:?}", shooter, target, result);
        self.events.push(BattleEvent::Shot {
            shooter,
            target,
            result,
        });
        Some(result)
    }

    /// Play until the battle terminates.
    pub fn run(&mut self) -> Outcome {
        loop {
            if let Phase::Terminated(outcome) = self.phase {
                return outcome;
            }
            self.round();
        }
    }

    /// One round: the win check, then a volley from each player in turn.
    fn round(&mut self) {
        if self.check_fleets().is_break() {
            return;
        }
        for shooter in PlayerId::BOTH {
            if self.volley(shooter).is_break() {
                return;
            }
        }
        self.update_phase();
    }

    fn volley(&mut self, shooter: PlayerId) -> ControlFlow<Outcome> {
        while self.fire(shooter).is_some_and(ShotResult::is_hit) {
            self.check_fleets()?;
        }
        ControlFlow::Continue(())
    }

    /// Terminate if a fleet has been wiped out.
    fn check_fleets(&mut self) -> ControlFlow<Outcome> {
        let one = self.player(PlayerId::One).is_defeated();
        let two = self.player(PlayerId::Two).is_defeated();
        let verdict = match (one, two) {
            (false, false) => return ControlFlow::Continue(()),
            (true, true) => Verdict::Draw,
            (true, false) => Verdict::Winner(PlayerId::Two),
            (false, true) => Verdict::Winner(PlayerId::One),
        };
        let outcome = Outcome {
            verdict,
            termination: Termination::FleetDestroyed,
        };
        self.terminate(outcome);
        ControlFlow::Break(outcome)
    }

    /// The sole player with ships left, a draw when both have ships, `None`
    /// when neither has.
    fn standing(&self) -> Option<Verdict> {
        let one = !self.player(PlayerId::One).is_defeated();
        let two = !self.player(PlayerId::Two).is_defeated();
        match (one, two) {
            (true, true) => Some(Verdict::Draw),
            (true, false) => Some(Verdict::Winner(PlayerId::One)),
            (false, true) => Some(Verdict::Winner(PlayerId::Two)),
            (false, false) => None,
        }
    }

    fn terminate(&mut self, outcome: Outcome) {
        log::info!("battle over: {} ({:?})", outcome.verdict, outcome.termination);
        self.phase = Phase::Terminated(outcome);
    }

    /// Track which sequences are exhausted. Once both are, the battle ends
    /// with the standing fleets deciding the verdict.
    fn update_phase(&mut self) {
        let next = match (
            self.has_missiles(PlayerId::One),
            self.has_missiles(PlayerId::Two),
        ) {
            (true, true) => Phase::Exchanging,
            (false, true) => Phase::PlayerDepleted(PlayerId::One),
            (true, false) => Phase::PlayerDepleted(PlayerId::Two),
            (false, false) => {
                let verdict = self.standing().unwrap_or(Verdict::Draw);
                self.terminate(Outcome {
                    verdict,
                    termination: Termination::AmmunitionExhausted,
                });
                return;
            }
        };
        if next != self.phase {
            log::trace!("phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    pub fn summary(&self) -> BattleSummary {
        let mut shots = [0; 2];
        let mut hits = [0; 2];
        for event in &self.events {
            if let BattleEvent::Shot {
                shooter, result, ..
            } = event
            {
                shots[shooter.index()] += 1;
                if result.is_hit() {
                    hits[shooter.index()] += 1;
                }
            }
        }
        BattleSummary {
            outcome: self.outcome(),
            shots,
            hits,
            surviving: PlayerId::BOTH.map(|id| self.player(id).surviving_count()),
        }
    }
}
