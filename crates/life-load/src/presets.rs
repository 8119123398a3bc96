//! Built-in starting patterns.
//!
//! Each preset is a pattern table placed on a dead field large enough for
//! it to run. Presets are parsed with the border trim off: their empty
//! margins are part of the field.

use life_core::Grid;

use crate::error::LoadError;
use crate::table::{LoadOptions, parse_grid};

/// A named built-in pattern.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub table: &'static str,
}

impl Preset {
    /// Parse the preset into a grid.
    pub fn grid(&self) -> Result<Grid, LoadError> {
        parse_grid(self.table, &LoadOptions::default().with_trim_border(false))
    }
}

/// All built-in patterns, in menu order.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "block",
        description: "2x2 still life",
        table: include_str!("../patterns/block.csv"),
    },
    Preset {
        name: "blinker",
        description: "period-2 oscillator",
        table: include_str!("../patterns/blinker.csv"),
    },
    Preset {
        name: "toad",
        description: "period-2 oscillator",
        table: include_str!("../patterns/toad.csv"),
    },
    Preset {
        name: "beacon",
        description: "period-2 oscillator",
        table: include_str!("../patterns/beacon.csv"),
    },
    Preset {
        name: "glider",
        description: "diagonal spaceship, wraps around the edges",
        table: include_str!("../patterns/glider.csv"),
    },
    Preset {
        name: "pulsar",
        description: "period-3 oscillator",
        table: include_str!("../patterns/pulsar.csv"),
    },
    Preset {
        name: "r-pentomino",
        description: "methuselah, chaotic for over a thousand generations",
        table: include_str!("../patterns/r-pentomino.csv"),
    },
    Preset {
        name: "gosper-gun",
        description: "Gosper glider gun",
        table: include_str!("../patterns/gosper-gun.csv"),
    },
];

/// Look up a preset by name (case-insensitive).
pub fn preset(name: &str) -> Result<&'static Preset, LoadError> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LoadError::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::Engine;

    #[test]
    fn every_preset_parses() {
        for p in PRESETS {
            let g = p.grid().unwrap();
            assert!(g.population() > 0, "{}", p.name);
            assert!(g.rows() >= 5 && g.cols() >= 5, "{}", p.name);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(preset("Glider").unwrap().name, "glider");
        assert!(matches!(preset("nope"), Err(LoadError::UnknownPreset(_))));
    }

    #[test]
    fn populations() {
        let pop = |n| preset(n).unwrap().grid().unwrap().population();
        assert_eq!(pop("block"), 4);
        assert_eq!(pop("blinker"), 3);
        assert_eq!(pop("glider"), 5);
        assert_eq!(pop("pulsar"), 48);
        assert_eq!(pop("gosper-gun"), 36);
    }

    #[test]
    fn oscillators_have_their_period() {
        for (name, period) in [("blinker", 2), ("toad", 2), ("beacon", 2), ("pulsar", 3)] {
            let start = preset(name).unwrap().grid().unwrap();
            let mut e = Engine::new(start.clone());
            assert_ne!(e.advance(), &start, "{name}");
            assert_eq!(e.advance_by(period - 1), &start, "{name}");
        }
    }

    #[test]
    fn block_is_still() {
        let start = preset("block").unwrap().grid().unwrap();
        let mut e = Engine::new(start.clone());
        assert_eq!(e.advance(), &start);
    }
}
