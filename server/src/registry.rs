use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use sapper_core::{Game, GameConfig, GameId, Point, RandomMinefieldGenerator, StartPolicy};
use sapper_protocol::GameView;

use crate::{ServerError, game_view};

type Shared = Arc<Mutex<Game>>;

/// Keeps every game created by this server, each behind its own lock so moves on one game
/// never wait for another.
pub struct Registry {
    games: RwLock<HashMap<GameId, Shared>>,
    defaults: GameConfig,
    policy: StartPolicy,
}

impl Registry {
    pub fn new(defaults: GameConfig, policy: StartPolicy) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            defaults,
            policy,
        }
    }

    /// Board used when a client does not ask for a specific one.
    pub fn defaults(&self) -> GameConfig {
        self.defaults
    }

    pub fn policy(&self) -> StartPolicy {
        self.policy
    }

    /// Creates a game under a fresh id with its own random seed.
    pub fn create(&self, config: GameConfig) -> Result<GameView, ServerError> {
        let id = uuid::Uuid::new_v4().to_string();
        let generator = RandomMinefieldGenerator::new(rand::random(), self.policy);
        log::debug!("game {} seed: {}", id, generator.seed());
        let game = Game::new(id, config, generator)?;
        Ok(self.insert(game))
    }

    /// Registers an already built game, replacing any game with the same id.
    pub fn insert(&self, game: Game) -> GameView {
        let view = game_view(&game);
        let id = game.id().to_owned();
        self.games
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(Mutex::new(game)));
        log::info!("opened game {}", view.game_id);
        view
    }

    pub fn reveal(&self, id: &str, point: Point) -> Result<GameView, ServerError> {
        let shared = self.lookup(id)?;
        let mut game = shared.lock().unwrap_or_else(PoisonError::into_inner);
        let outcome = game.reveal(point)?;
        if !outcome.has_update() {
            log::debug!("game {} open {:?}: already open", id, point);
            return Ok(game_view(&game));
        }

        log::debug!("game {} open {:?}: {:?}", id, point, outcome);
        if let Some(layout) = game.render_layout() {
            log::trace!("game {} mine layout\n{}", id, layout);
        }
        Ok(game_view(&game))
    }

    pub fn get(&self, id: &str) -> Result<GameView, ServerError> {
        let shared = self.lookup(id)?;
        let game = shared.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(game_view(&game))
    }

    pub fn len(&self) -> usize {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, id: &str) -> Result<Shared, ServerError> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| ServerError::NotFound(id.to_owned()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(GameConfig::new_unchecked((8, 8), 10), StartPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapper_core::{Coord2, GameError, MineLayout};
    use sapper_protocol::Status;
    use std::thread;

    fn layout_game(id: &str, size: Coord2, mines: &[Coord2]) -> Game {
        Game::with_layout(id.into(), MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn create_assigns_unique_ids() {
        let registry = Registry::default();

        let a = registry.create(registry.defaults()).unwrap();
        let b = registry.create(registry.defaults()).unwrap();

        assert_ne!(a.game_id, b.game_id);
        assert_eq!(registry.len(), 2);
        assert_eq!(a.status, Status::InProgress);
        assert_eq!(a.board_state.len(), 64);
        assert!(a.board_state.iter().all(|glyph| glyph == "?"));
    }

    #[test]
    fn create_rejects_crowded_board() {
        let registry = Registry::default();
        let crowded = GameConfig::new((4, 4), 10).unwrap();

        assert_eq!(
            registry.create(crowded),
            Err(ServerError::Game(GameError::MineCountInfeasible))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn first_move_is_never_lost() {
        let registry = Registry::default();

        for _ in 0..32 {
            let view = registry.create(registry.defaults()).unwrap();
            let view = registry.reveal(&view.game_id, (3, 5)).unwrap();

            assert_ne!(view.status, Status::Lost);
            assert_eq!(view.board_state[5 * 8 + 3], " ");
        }
    }

    #[test]
    fn reopening_a_cell_returns_same_view() {
        let registry = Registry::default();
        registry.insert(layout_game("again", (3, 3), &[(0, 0)]));

        let first = registry.reveal("again", (1, 1)).unwrap();
        let second = registry.reveal("again", (1, 1)).unwrap();

        assert_eq!(first.board_state[4], "1");
        assert_eq!(second, first);
    }

    #[test]
    fn oversized_board_is_rejected_before_allocation() {
        let registry = Registry::default();
        let huge = GameConfig::new_unchecked((u16::MAX, u16::MAX), 1);

        assert_eq!(
            registry.create(huge),
            Err(ServerError::Game(GameError::InvalidDimensions))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_game_is_not_found() {
        let registry = Registry::default();

        assert_eq!(
            registry.reveal("nope", (0, 0)),
            Err(ServerError::NotFound("nope".into()))
        );
        assert_eq!(registry.get("nope"), Err(ServerError::NotFound("nope".into())));
    }

    #[test]
    fn finished_game_rejects_moves() {
        let registry = Registry::default();
        registry.insert(layout_game("lost", (2, 2), &[(0, 0)]));

        let view = registry.reveal("lost", (0, 0)).unwrap();
        assert_eq!(view.status, Status::Lost);

        assert_eq!(
            registry.reveal("lost", (1, 1)),
            Err(ServerError::Game(GameError::GameAlreadyFinished))
        );
        assert_eq!(registry.get("lost").unwrap(), view);
    }

    #[test]
    fn concurrent_moves_on_one_game_are_serialized() {
        let registry = Arc::new(Registry::default());
        registry.insert(layout_game("shared", (8, 8), &[(7, 7)]));

        let handles: Vec<_> = (0..8)
            .map(|x| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for y in 0..7 {
                        match registry.reveal("shared", (x, y)) {
                            Ok(_) | Err(ServerError::Game(GameError::GameAlreadyFinished)) => {}
                            Err(e) => panic!("unexpected error: {e}"),
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let view = registry.get("shared").unwrap();
        assert_eq!(view.status, Status::Won);
        assert_eq!(view.board_state[63], "?");
    }
}
