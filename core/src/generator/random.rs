use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::*;

/// Uniform mine placement by rejection sampling, deterministic for a given seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    policy: StartPolicy,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64, policy: StartPolicy) -> Self {
        Self { seed, policy }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn policy(&self) -> StartPolicy {
        self.policy
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(&self, config: GameConfig, first_click: Option<Coord2>) -> Result<MineLayout> {
        use rand::prelude::*;

        let (width, height) = config.size;
        if width == 0 || height == 0 || config.mines >= config.total_cells() {
            return Err(GameError::InvalidDimensions);
        }

        // without a click there is nothing to keep clear
        let exclusion = first_click.map(|click| (click, self.policy));
        if let Some((click, policy)) = exclusion {
            if config.mines + policy.zone_size(config.size, click) > config.total_cells() {
                log::warn!(
                    "Cannot fit {} mines around {:?} with {:?}",
                    config.mines,
                    click,
                    policy
                );
                return Err(GameError::MineCountInfeasible);
            }
        }
        log::debug!(
            "Placing {} mines on {}x{}, seed: {}, exclusion: {:?}",
            config.mines,
            width,
            height,
            self.seed,
            exclusion
        );

        let mut cells: Array2<CellKind> = Array2::default(grid_shape(config.size));
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed = 0;

        while mines_placed < config.mines {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));

            if exclusion.is_some_and(|(click, policy)| policy.excludes(click, coords)) {
                continue;
            }

            let cell = &mut cells[coords.to_nd_index()];
            if cell.is_mine() {
                continue;
            }

            *cell = CellKind::Mine;
            mines_placed += 1;
        }

        Ok(MineLayout::from_cells(cells))
    }
}
