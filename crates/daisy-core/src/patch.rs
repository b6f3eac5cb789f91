//! Cell occupant kinds and their reflectivity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupant of a single grid cell.
///
/// A patch is either bare ground or holds one daisy. The only derived
/// physical property is its albedo (see [`Patch::albedo`] for the
/// built-in constants and [`AlbedoTable`] for a configurable mapping).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Patch {
    /// Barren ground.
    #[default]
    Empty,
    /// A dark, low-albedo daisy.
    BlackDaisy,
    /// A light, high-albedo daisy.
    WhiteDaisy,
}

impl Patch {
    /// Reflectivity of empty ground.
    pub const ALBEDO_EMPTY: f64 = 0.4;
    /// Reflectivity of a black daisy.
    pub const ALBEDO_BLACK: f64 = 0.25;
    /// Reflectivity of a white daisy.
    pub const ALBEDO_WHITE: f64 = 0.75;

    /// All occupant kinds, in declaration order.
    pub const ALL: [Patch; 3] = [Patch::Empty, Patch::BlackDaisy, Patch::WhiteDaisy];

    /// Built-in albedo for this kind.
    pub fn albedo(self) -> f64 {
        match self {
            Patch::Empty => Self::ALBEDO_EMPTY,
            Patch::BlackDaisy => Self::ALBEDO_BLACK,
            Patch::WhiteDaisy => Self::ALBEDO_WHITE,
        }
    }

    /// Whether this cell holds a daisy of either colour.
    pub fn is_daisy(self) -> bool {
        !matches!(self, Patch::Empty)
    }

    /// The antagonist daisy kind, or `None` for empty ground.
    pub fn enemy(self) -> Option<Patch> {
        match self {
            Patch::Empty => None,
            Patch::BlackDaisy => Some(Patch::WhiteDaisy),
            Patch::WhiteDaisy => Some(Patch::BlackDaisy),
        }
    }

    /// Whether `other` is the antagonist of this daisy.
    ///
    /// Always `false` when either side is empty ground.
    pub fn is_enemy_of(self, other: Patch) -> bool {
        self.enemy() == Some(other)
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Patch::Empty => "empty",
            Patch::BlackDaisy => "black daisy",
            Patch::WhiteDaisy => "white daisy",
        };
        f.write_str(name)
    }
}

/// Albedo per occupant kind.
///
/// Defaults to the built-in constants on [`Patch`]. Overridable at
/// initialization; values are validated to lie in `[0, 1]` by the
/// engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbedoTable {
    /// Albedo of empty ground.
    pub empty: f64,
    /// Albedo of a black daisy.
    pub black: f64,
    /// Albedo of a white daisy.
    pub white: f64,
}

impl AlbedoTable {
    /// Albedo for `patch` under this table.
    pub fn of(&self, patch: Patch) -> f64 {
        match patch {
            Patch::Empty => self.empty,
            Patch::BlackDaisy => self.black,
            Patch::WhiteDaisy => self.white,
        }
    }
}

impl Default for AlbedoTable {
    fn default() -> Self {
        Self {
            empty: Patch::Empty.albedo(),
            black: Patch::BlackDaisy.albedo(),
            white: Patch::WhiteDaisy.albedo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_albedo_constants() {
        assert_eq!(Patch::Empty.albedo(), 0.4);
        assert_eq!(Patch::BlackDaisy.albedo(), 0.25);
        assert_eq!(Patch::WhiteDaisy.albedo(), 0.75);
    }

    #[test]
    fn enemies_are_opposite_daisies() {
        assert!(Patch::BlackDaisy.is_enemy_of(Patch::WhiteDaisy));
        assert!(Patch::WhiteDaisy.is_enemy_of(Patch::BlackDaisy));
        assert!(!Patch::BlackDaisy.is_enemy_of(Patch::BlackDaisy));
        assert!(!Patch::BlackDaisy.is_enemy_of(Patch::Empty));
        assert!(!Patch::Empty.is_enemy_of(Patch::WhiteDaisy));
        assert_eq!(Patch::Empty.enemy(), None);
    }

    #[test]
    fn default_table_matches_builtin() {
        let table = AlbedoTable::default();
        for patch in Patch::ALL {
            assert_eq!(table.of(patch), patch.albedo());
        }
    }

    #[test]
    fn custom_table_overrides_lookup() {
        let table = AlbedoTable {
            empty: 0.5,
            black: 0.1,
            white: 0.9,
        };
        assert_eq!(table.of(Patch::BlackDaisy), 0.1);
        assert_eq!(table.of(Patch::WhiteDaisy), 0.9);
        assert_eq!(table.of(Patch::Empty), 0.5);
    }
}
