#![cfg(feature = "std")]

//! Text rendering of grids, fleets and the battle log.

use std::io::{self, Write};

use crate::{
    battle::{Battle, Termination},
    coordinate::Coordinate,
    player::{PlayerId, PlayerState},
};

/// Print a player's grid: one digit per cell, `0` for empty, otherwise the
/// occupying ship's current strength.
pub fn write_arena<W: Write>(out: &mut W, player: &PlayerState) -> io::Result<()> {
    writeln!(out, "{}:", player.id())?;
    writeln!(out)?;
    let grid = player.grid();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            write!(out, "{}", player.cell_strength(Coordinate::new(x, y)))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Print the footprints of a player's surviving ships.
pub fn write_fleet<W: Write>(out: &mut W, player: &PlayerState) -> io::Result<()> {
    writeln!(out, "{} Ships:", player.id())?;
    writeln!(out)?;
    for footprint in player.surviving() {
        writeln!(out, "{}", footprint)?;
    }
    writeln!(out)
}

/// Print both grids.
pub fn write_arenas<W: Write>(out: &mut W, battle: &Battle) -> io::Result<()> {
    for id in PlayerId::BOTH {
        write_arena(out, battle.player(id))?;
    }
    Ok(())
}

/// Print everything that happened after the opening grids: the narration,
/// the final grids and fleets when the missiles ran out, and the verdict.
pub fn write_transcript<W: Write>(out: &mut W, battle: &Battle) -> io::Result<()> {
    for event in battle.events() {
        writeln!(out, "{}", event)?;
    }
    let Some(outcome) = battle.outcome() else {
        return Ok(());
    };
    if outcome.termination == Termination::AmmunitionExhausted {
        write_arenas(out, battle)?;
        for id in PlayerId::BOTH {
            write_fleet(out, battle.player(id))?;
        }
    }
    writeln!(out, "{}", outcome.verdict)
}
