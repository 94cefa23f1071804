use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::{
    common::ShotResult,
    coordinate::Coordinate,
    grid::{Grid, ShipId},
    ship::{Damage, Footprint, Ship},
};

/// The two sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 0 for the first player, 1 for the second.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player-{}", self.index() + 1)
    }
}

/// One side of the battle: its grid, fleet and firing sequence.
#[derive(Debug, Clone)]
pub struct PlayerState {
    id: PlayerId,
    grid: Grid,
    fleet: Vec<Ship>,
    surviving: BTreeSet<Footprint>,
    missiles: Vec<Coordinate>,
}

impl PlayerState {
    /// Create a player with an empty grid and no ships or missiles.
    pub fn new(id: PlayerId, width: usize, height: usize) -> Self {
        Self {
            id,
            grid: Grid::new(width, height),
            fleet: Vec::new(),
            surviving: BTreeSet::new(),
            missiles: Vec::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Register a ship in the grid and the surviving set. A ship whose
    /// footprint is already in the set does not add a second entry, but it
    /// still takes over the cells it covers.
    pub fn add_ship(&mut self, ship: Ship) -> ShipId {
        let id = ShipId(self.fleet.len());
        self.grid.place(id, &ship.footprint());
        self.surviving.insert(ship.footprint());
        self.fleet.push(ship);
        id
    }

    /// Ship by id.
    pub fn ship(&self, id: ShipId) -> &Ship {
        &self.fleet[id.0]
    }

    /// Every ship placed, in placement order, including sunk ones.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Footprints of ships not yet sunk, in footprint order.
    pub fn surviving(&self) -> impl Iterator<Item = &Footprint> {
        self.surviving.iter()
    }

    pub fn surviving_count(&self) -> usize {
        self.surviving.len()
    }

    /// Returns `true` when no ship survives.
    pub fn is_defeated(&self) -> bool {
        self.surviving.is_empty()
    }

    /// Set the targets this player fires at, in order.
    pub fn load_missiles<I: IntoIterator<Item = Coordinate>>(&mut self, targets: I) {
        self.missiles = targets.into_iter().collect();
    }

    /// The full firing sequence.
    pub fn missiles(&self) -> &[Coordinate] {
        &self.missiles
    }

    /// Strength of the ship at `c`, or 0 for an empty cell.
    pub fn cell_strength(&self, c: Coordinate) -> u8 {
        self.grid
            .lookup(c)
            .map_or(0, |id| self.fleet[id.0].strength())
    }

    /// Resolve an incoming missile at `target`.
    pub fn receive_fire(&mut self, target: Coordinate) -> ShotResult {
        let Some(id) = self.grid.lookup(target) else {
            return ShotResult::Miss;
        };
        let ship = &mut self.fleet[id.0];
        match ship.take_hit() {
            Damage::Absorbed => ShotResult::Absorbed,
            Damage::CellDestroyed => {
                self.grid.clear(target);
                ShotResult::Destroyed
            }
            Damage::Sunk => {
                let footprint = ship.footprint();
                self.grid.clear(target);
                self.surviving.remove(&footprint);
                log::debug!("{} lost ship {}", self.id, footprint);
                ShotResult::Sunk(footprint)
            }
        }
    }
}
