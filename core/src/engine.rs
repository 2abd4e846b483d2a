use alloc::collections::VecDeque;
use alloc::string::String;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Opaque identifier assigned by whoever creates the game.
pub type GameId = String;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game from creation to its win or loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    config: GameConfig,
    generator: RandomMinefieldGenerator,
    /// `None` until the first reveal when placement waits for the first click.
    layout: Option<MineLayout>,
    board: Array2<VisibleCell>,
    revealed_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Game {
    /// Creates a game whose mines are placed by `generator`, right away or on the first reveal
    /// depending on its start policy.
    pub fn new(id: GameId, config: GameConfig, generator: RandomMinefieldGenerator) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        let policy = generator.policy();
        policy.check_feasible(config)?;

        let layout = if policy.is_deferred() {
            None
        } else {
            Some(generator.generate(config, None)?)
        };

        log::debug!(
            "New game {} on {}x{} with {} mines, {:?}",
            id,
            config.size.0,
            config.size.1,
            config.mines,
            policy
        );

        Ok(Self::build(id, config, generator, layout))
    }

    /// Creates a game on a fixed layout, no placement involved.
    pub fn with_layout(id: GameId, layout: MineLayout) -> Self {
        let config = layout.game_config();
        let generator = RandomMinefieldGenerator::new(0, StartPolicy::Random);
        Self::build(id, config, generator, Some(layout))
    }

    fn build(
        id: GameId,
        config: GameConfig,
        generator: RandomMinefieldGenerator,
        layout: Option<MineLayout>,
    ) -> Self {
        Self {
            id,
            config,
            generator,
            layout,
            board: Array2::default(grid_shape(config.size)),
            revealed_count: 0,
            status: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Mine layout, `None` while placement waits for the first reveal.
    pub fn layout(&self) -> Option<&MineLayout> {
        self.layout.as_ref()
    }

    pub fn cell_at(&self, coords: Coord2) -> VisibleCell {
        self.board[coords.to_nd_index()]
    }

    /// Visible cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = VisibleCell> + '_ {
        self.board.iter().copied()
    }

    pub fn render(&self) -> String {
        render_grid(self.config.size.0, self.cells().map(VisibleCell::glyph))
    }

    pub fn render_layout(&self) -> Option<String> {
        self.layout
            .as_ref()
            .map(|layout| render_grid(self.config.size.0, layout.cells().map(CellKind::glyph)))
    }

    /// Reveals the cell at `point`, spreading over zero-count regions.
    ///
    /// Nothing is mutated when this fails, and revealing an already revealed cell is a no-op.
    pub fn reveal(&mut self, point: Point) -> Result<RevealOutcome> {
        let coords = checked_coords(point, self.config.size).ok_or(GameError::InvalidCoordinate)?;
        self.check_not_finished()?;

        if !self.cell_at(coords).is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        let layout = match self.layout.take() {
            Some(layout) => layout,
            None => self.generator.generate(self.config, Some(coords))?,
        };
        let outcome = self.reveal_single_cell(&layout, coords);
        self.layout = Some(layout);

        Ok(outcome)
    }

    fn reveal_single_cell(&mut self, layout: &MineLayout, coords: Coord2) -> RevealOutcome {
        match layout[coords] {
            CellKind::Mine => {
                self.board[coords.to_nd_index()] = VisibleCell::Mine;
                self.triggered_mine = Some(coords);
                self.end_game(layout, GameStatus::Lost);
                RevealOutcome::HitMine
            }
            CellKind::Clear => {
                self.flood_reveal(layout, coords);

                if self.revealed_count == layout.safe_cell_count() {
                    self.end_game(layout, GameStatus::Won);
                    RevealOutcome::Won
                } else {
                    RevealOutcome::Revealed
                }
            }
        }
    }

    fn flood_reveal(&mut self, layout: &MineLayout, coords: Coord2) {
        let mut to_visit = VecDeque::new();
        if self.open_cell(layout, coords) == 0 {
            to_visit.push_back(coords);
        }

        // cells are opened when queued, so each one is queued at most once
        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in layout.iter_neighbors(visit_coords) {
                if self.cell_at(pos).is_hidden() && self.open_cell(layout, pos) == 0 {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    fn open_cell(&mut self, layout: &MineLayout, coords: Coord2) -> u8 {
        let count = layout.adjacent_mine_count(coords);
        self.board[coords.to_nd_index()] = VisibleCell::Revealed(count);
        self.revealed_count += 1;
        log::trace!("Revealed {:?}, adjacent mines: {}", coords, count);
        count
    }

    fn end_game(&mut self, layout: &MineLayout, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }

        self.status = status;
        log::info!("Game {} ended: {:?}", self.id, status);

        if status == GameStatus::Lost {
            for coords in layout.iter_mines() {
                self.board[coords.to_nd_index()] = VisibleCell::Mine;
            }
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::GameAlreadyFinished)
        } else {
            Ok(())
        }
    }
}
