use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    /// Builds the mine layout, keeping the cells `policy` protects around `first_click` clear.
    fn generate(&self, config: GameConfig, first_click: Option<Coord2>) -> Result<MineLayout>;
}

/// How the first revealed cell is protected from mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartPolicy {
    /// Mines go anywhere and are placed as soon as the game is created.
    Random,
    /// The first revealed cell is never a mine.
    SafeCell,
    /// The first revealed cell and its neighbors are never mines.
    #[default]
    SafeNeighborhood,
}

impl StartPolicy {
    /// Whether mine placement has to wait for the first click.
    pub const fn is_deferred(self) -> bool {
        !matches!(self, Self::Random)
    }

    pub fn excludes(self, first_click: Coord2, coords: Coord2) -> bool {
        match self {
            Self::Random => false,
            Self::SafeCell => coords == first_click,
            Self::SafeNeighborhood => {
                coords.0.abs_diff(first_click.0) <= 1 && coords.1.abs_diff(first_click.1) <= 1
            }
        }
    }

    /// Number of cells kept clear around `first_click`.
    pub fn zone_size(self, size: Coord2, first_click: Coord2) -> CellCount {
        match self {
            Self::Random => 0,
            Self::SafeCell => 1,
            Self::SafeNeighborhood => 1 + NeighborIter::new(first_click, size).count() as CellCount,
        }
    }

    /// Largest zone any first click on a board of `size` can produce.
    pub fn max_zone_size(self, (width, height): Coord2) -> CellCount {
        match self {
            Self::Random => 0,
            Self::SafeCell => 1,
            Self::SafeNeighborhood => mult(width.min(3), height.min(3)),
        }
    }

    /// Checks that every possible first click leaves room for all the mines.
    ///
    /// Rejects only `mines > total - max_zone_size`. A board filled up to exactly
    /// `total - 9` mines is still placeable (every cell outside the zone is a mine),
    /// so it is accepted rather than refused with `mines >= total - 9`.
    pub fn check_feasible(self, config: GameConfig) -> Result<()> {
        if config.mines + self.max_zone_size(config.size) > config.total_cells() {
            Err(GameError::MineCountInfeasible)
        } else {
            Ok(())
        }
    }
}
