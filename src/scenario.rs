//! The battle input model: grid size, fleet placements and firing sequences.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::{
    common::ScenarioError,
    config::{Limits, MAX_COLUMNS, MAX_ROWS},
    coordinate::{row_index, row_letter, Coordinate},
    player::{PlayerId, PlayerState},
    ship::{Footprint, Ship, ShipKind},
};

/// One ship line: the same ship placed independently in each player's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    pub kind: ShipKind,
    pub width: usize,
    pub height: usize,
    /// Top-left cell for each player, indexed by [`PlayerId::index`].
    pub anchors: [Coordinate; 2],
}

impl ShipPlacement {
    /// Rectangle covered in `player`'s grid.
    pub fn footprint(&self, player: PlayerId) -> Footprint {
        Footprint::at(self.anchors[player.index()], self.width, self.height)
    }
}

/// Parsed scenario, ready to be turned into two players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub width: usize,
    pub height: usize,
    pub ships: Vec<ShipPlacement>,
    /// Firing sequence for each player, indexed by [`PlayerId::index`].
    pub missiles: [Vec<Coordinate>; 2],
}

fn line_at<'a, S: AsRef<str>>(
    lines: &'a [S],
    number: usize,
    expected: &'static str,
) -> Result<&'a str, ScenarioError> {
    lines
        .get(number - 1)
        .map(|l| l.as_ref())
        .ok_or(ScenarioError::MissingLine {
            line: number,
            expected,
        })
}

fn parse_tuple(line: usize, token: &str) -> Result<Coordinate, ScenarioError> {
    token
        .parse()
        .map_err(|reason| ScenarioError::InvalidTuple {
            line,
            tuple: token.to_string(),
            reason,
        })
}

fn parse_side(line: usize, token: &str) -> Result<usize, ScenarioError> {
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ScenarioError::InvalidShipSize {
            line,
            value: token.to_string(),
        }),
    }
}

fn parse_height(token: &str) -> Result<usize, ScenarioError> {
    let mut chars = token.chars();
    match (chars.next().and_then(row_index), chars.next()) {
        (Some(row), None) => Ok(row + 1),
        _ => Err(ScenarioError::InvalidHeight(token.to_string())),
    }
}

impl Scenario {
    /// Parse scenario text.
    pub fn parse(text: &str) -> Result<Self, ScenarioError> {
        Self::from_lines(text.lines())
    }

    /// Parse a scenario from its input lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ScenarioError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();

        let mut size = line_at(&lines, 1, "the grid size")?.split_whitespace();
        let (Some(w), Some(h)) = (size.next(), size.next()) else {
            return Err(ScenarioError::GridSizeTokens);
        };
        let width = match w.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(ScenarioError::InvalidWidth(w.to_string())),
        };
        let height = parse_height(h)?;
        if width > MAX_COLUMNS {
            return Err(ScenarioError::GridTooLarge { width, height });
        }

        let count_token = line_at(&lines, 2, "the number of ships")?
            .split_whitespace()
            .next()
            .unwrap_or("");
        let count: usize = count_token
            .parse()
            .map_err(|_| ScenarioError::InvalidShipCount(count_token.to_string()))?;

        let mut ships = Vec::with_capacity(count);
        for number in 3..count + 3 {
            let parts: Vec<&str> = line_at(&lines, number, "a ship definition")?
                .split_whitespace()
                .collect();
            if parts.len() < 5 {
                return Err(ScenarioError::ShipTokens {
                    line: number,
                    found: parts.len(),
                });
            }
            let kind = ShipKind::from_code(parts[0]).ok_or_else(|| {
                ScenarioError::UnknownShipType {
                    line: number,
                    code: parts[0].to_string(),
                }
            })?;
            ships.push(ShipPlacement {
                kind,
                width: parse_side(number, parts[1])?,
                height: parse_side(number, parts[2])?,
                anchors: [parse_tuple(number, parts[3])?, parse_tuple(number, parts[4])?],
            });
        }

        let mut missiles: [Vec<Coordinate>; 2] = [Vec::new(), Vec::new()];
        for id in PlayerId::BOTH {
            let number = count + 3 + id.index();
            missiles[id.index()] = line_at(&lines, number, "a missile sequence")?
                .split_whitespace()
                .map(|token| parse_tuple(number, token))
                .collect::<Result<_, _>>()?;
        }

        let trailing = lines
            .iter()
            .skip(count + 4)
            .filter(|l| !l.as_ref().trim().is_empty())
            .count();
        if trailing > 0 {
            log::warn!("ignoring {} trailing input line(s)", trailing);
        }

        let scenario = Scenario {
            width,
            height,
            ships,
            missiles,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check that the grid is within [`MAX_COLUMNS`] by [`MAX_ROWS`] and that
    /// every ship and target lies inside it. Reported line numbers are those
    /// of the rendered input.
    ///
    /// [`Scenario::players`] relies on this holding.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.width > MAX_COLUMNS || self.height > MAX_ROWS {
            return Err(ScenarioError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        let in_grid = |c: Coordinate| c.x < self.width && c.y < self.height;
        let fits = |anchor: Coordinate, ship: &ShipPlacement| {
            anchor.x.checked_add(ship.width).is_some_and(|x| x <= self.width)
                && anchor.y.checked_add(ship.height).is_some_and(|y| y <= self.height)
        };
        for (i, ship) in self.ships.iter().enumerate() {
            for id in PlayerId::BOTH {
                let anchor = ship.anchors[id.index()];
                if ship.width == 0 || ship.height == 0 || !fits(anchor, ship) {
                    return Err(ScenarioError::ShipOutOfBounds {
                        line: i + 3,
                        player: id,
                        anchor,
                    });
                }
            }
        }
        for id in PlayerId::BOTH {
            let line = self.ships.len() + 3 + id.index();
            if let Some(target) = self.missiles[id.index()].iter().find(|&&c| !in_grid(c)) {
                return Err(ScenarioError::TargetOutOfBounds {
                    line,
                    tuple: target.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Build both players with their fleets and firing sequences.
    ///
    /// # Panics
    ///
    /// If the grid is oversized or a ship does not fit in it; see
    /// [`Scenario::validate`].
    pub fn players(&self) -> [PlayerState; 2] {
        PlayerId::BOTH.map(|id| {
            let mut player = PlayerState::new(id, self.width, self.height);
            for placement in &self.ships {
                player.add_ship(Ship::new(placement.kind, placement.footprint(id)));
            }
            player.load_missiles(self.missiles[id.index()].iter().copied());
            player
        })
    }

    /// Generate a valid scenario within `limits`. Every limit must be at
    /// least one.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, limits: &Limits) -> Self {
        let width = rng.random_range(1..=limits.max_width.min(MAX_COLUMNS));
        let height = rng.random_range(1..=limits.max_height.min(MAX_ROWS));
        let count = rng.random_range(1..=limits.max_ships);

        let mut ships = Vec::with_capacity(count);
        for _ in 0..count {
            let kind = if rng.random_bool(0.3) {
                ShipKind::Reinforced
            } else {
                ShipKind::Standard
            };
            let w = rng.random_range(1..=limits.max_ship_side.min(width));
            let h = rng.random_range(1..=limits.max_ship_side.min(height));
            let mut anchors = [Coordinate::new(0, 0); 2];
            for anchor in anchors.iter_mut() {
                *anchor = Coordinate::new(
                    rng.random_range(0..=width - w),
                    rng.random_range(0..=height - h),
                );
            }
            ships.push(ShipPlacement {
                kind,
                width: w,
                height: h,
                anchors,
            });
        }

        let mut missiles: [Vec<Coordinate>; 2] = [Vec::new(), Vec::new()];
        for sequence in missiles.iter_mut() {
            let n = rng.random_range(0..=limits.max_missiles);
            for _ in 0..n {
                sequence.push(Coordinate::new(
                    rng.random_range(0..width),
                    rng.random_range(0..height),
                ));
            }
        }

        Scenario {
            width,
            height,
            ships,
            missiles,
        }
    }
}

impl fmt::Display for Scenario {
    /// Writes the scenario in its input format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, row_letter(self.height.saturating_sub(1)))?;
        writeln!(f, "{}", self.ships.len())?;
        for ship in &self.ships {
            writeln!(
                f,
                "{} {} {} {} {}",
                ship.kind.code(),
                ship.width,
                ship.height,
                ship.anchors[0],
                ship.anchors[1]
            )?;
        }
        for sequence in &self.missiles {
            for (i, target) in sequence.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", target)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
