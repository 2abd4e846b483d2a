#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod render;
mod types;

/// Largest board, in cells, a game can be created on.
pub const MAX_CELLS: CellCount = 1 << 20;

/// Board size and mine count of a game that can actually be played.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Requires a non-empty board of at most [`MAX_CELLS`] cells and `0 < mines < width * height`.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        let total = config.total_cells();
        if size.0 == 0 || size.1 == 0 || total > MAX_CELLS || mines == 0 || mines >= total {
            return Err(GameError::InvalidDimensions);
        }
        Ok(config)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// The authoritative grid: where the mines are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    cells: Array2<CellKind>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_cells(cells: Array2<CellKind>) -> Self {
        let mine_count = cells.iter().filter(|kind| kind.is_mine()).count() as CellCount;
        Self { cells, mine_count }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let mut cells: Array2<CellKind> = Array2::default(grid_shape(size));

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoordinate);
            }
            cells[coords.to_nd_index()] = CellKind::Mine;
        }

        Ok(Self::from_cells(cells))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellKind> + '_ {
        self.cells.iter().copied()
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, kind)| kind.is_mine())
            .map(|((y, x), _)| (x as Coord, y as Coord))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = CellKind;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// What a single reveal did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the board changed, `false` only for a reveal of an already open cell.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn config_rejects_bad_dimensions() {
        assert_eq!(GameConfig::new((0, 4), 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((4, 0), 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((4, 4), 0), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((4, 4), 16), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((4, 4), 15).map(|c| c.total_cells()), Ok(16));
    }

    #[test]
    fn config_caps_board_area() {
        assert_eq!(GameConfig::new((1024, 1024), 1).map(|c| c.total_cells()), Ok(MAX_CELLS));
        assert_eq!(GameConfig::new((1025, 1024), 1), Err(GameError::InvalidDimensions));
        assert_eq!(
            GameConfig::new((Coord::MAX, Coord::MAX), 1),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn only_no_change_has_no_update() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Revealed.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(RevealOutcome::Won.has_update());
    }

    #[test]
    fn layout_counts_mines_and_neighbors() {
        let layout = MineLayout::from_mine_coords((3, 2), &[(0, 0), (2, 1)]).unwrap();

        assert_eq!(layout.size(), (3, 2));
        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 4);
        assert_eq!(layout.adjacent_mine_count((1, 0)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 1)), 1);
        assert_eq!(layout.iter_mines().collect::<Vec<_>>(), [(0, 0), (2, 1)]);
    }

    #[test]
    fn layout_is_row_major() {
        let layout = MineLayout::from_mine_coords((3, 2), &[(1, 1)]).unwrap();
        let mines: Vec<_> = layout.cells().map(CellKind::is_mine).collect();

        // index = y * width + x
        assert_eq!(mines, [false, false, false, false, true, false]);
    }

    #[test]
    fn layout_rejects_out_of_range_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoordinate)
        );
        assert_eq!(
            MineLayout::from_mine_coords((0, 2), &[]),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn duplicate_mine_coords_count_once() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(layout.mine_count(), 1);
    }
}
