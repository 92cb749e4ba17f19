//! Outer-totalistic transition rules.
//!
//! A [`LifeRule`] is a pair of 9-bit masks over the live-neighbour count
//! of the Moore neighbourhood: bit `n` of `birth` means a dead cell with
//! `n` live neighbours becomes alive; bit `n` of `survive` means a live
//! cell with `n` live neighbours stays alive. Every other case is dead.
//!
//! Rules are written in the usual `B3/S23` notation. The default is
//! Conway's Game of Life.

use std::fmt;
use std::str::FromStr;

use cgol_core::{Cell, RuleError};

/// Bits 0..=8: the possible Moore neighbour counts.
const COUNT_MASK: u16 = 0x01FF;

/// A birth/survival rule over Moore neighbour counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LifeRule {
    birth: u16,
    survive: u16,
}

impl LifeRule {
    /// Conway's Game of Life, `B3/S23`.
    pub const CONWAY: Self = Self {
        birth: 1 << 3,
        survive: (1 << 2) | (1 << 3),
    };

    /// HighLife, `B36/S23`.
    pub const HIGH_LIFE: Self = Self {
        birth: (1 << 3) | (1 << 6),
        survive: (1 << 2) | (1 << 3),
    };

    /// Day & Night, `B3678/S34678`.
    pub const DAY_AND_NIGHT: Self = Self {
        birth: (1 << 3) | (1 << 6) | (1 << 7) | (1 << 8),
        survive: (1 << 3) | (1 << 4) | (1 << 6) | (1 << 7) | (1 << 8),
    };

    /// Build a rule from raw masks. Bits above 8 are ignored.
    pub const fn from_masks(birth: u16, survive: u16) -> Self {
        Self {
            birth: birth & COUNT_MASK,
            survive: survive & COUNT_MASK,
        }
    }

    /// Birth mask.
    pub fn birth_mask(&self) -> u16 {
        self.birth
    }

    /// Survival mask.
    pub fn survive_mask(&self) -> u16 {
        self.survive
    }

    /// State of a cell in the next generation.
    #[inline]
    pub fn next(&self, current: Cell, live_neighbours: u8) -> Cell {
        let mask = match current {
            Cell::Alive => self.survive,
            Cell::Dead => self.birth,
        };
        Cell::from(live_neighbours <= 8 && mask & (1 << live_neighbours) != 0)
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in 0..=8 {
            if self.birth & (1 << n) != 0 {
                write!(f, "{n}")?;
            }
        }
        write!(f, "/S")?;
        for n in 0..=8 {
            if self.survive & (1 << n) != 0 {
                write!(f, "{n}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for LifeRule {
    type Err = RuleError;

    /// Parse `B<digits>/S<digits>` (either order, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| RuleError::Malformed {
            rule: s.to_string(),
            reason: reason.to_string(),
        };

        let mut birth = None;
        let mut survive = None;
        for part in s.trim().split('/') {
            let mut chars = part.chars();
            let slot = match chars.next() {
                Some('B' | 'b') => &mut birth,
                Some('S' | 's') => &mut survive,
                _ => return Err(malformed("each part must start with 'B' or 'S'")),
            };
            if slot.is_some() {
                return Err(malformed("duplicate part"));
            }
            let mut mask = 0u16;
            for c in chars {
                let n = c
                    .to_digit(10)
                    .filter(|&n| n <= 8)
                    .ok_or_else(|| malformed("neighbour counts must be digits 0-8"))?;
                mask |= 1 << n;
            }
            *slot = Some(mask);
        }

        match (birth, survive) {
            (Some(birth), Some(survive)) => Ok(Self::from_masks(birth, survive)),
            _ => Err(malformed("expected both a 'B' and an 'S' part")),
        }
    }
}
