use sapper_core::{Game, GameStatus};
use sapper_protocol::{GameView, Status};

/// Public fields of a game as sent to clients.
pub fn game_view(game: &Game) -> GameView {
    let (board_width, board_height) = game.size();
    GameView {
        game_id: game.id().to_owned(),
        status: match game.status() {
            GameStatus::InProgress => Status::InProgress,
            GameStatus::Won => Status::Won,
            GameStatus::Lost => Status::Lost,
        },
        board_width,
        board_height,
        mines_count: game.total_mines(),
        board_state: game.cells().map(|cell| cell.glyph().to_string()).collect(),
        pretty_board_state: game.render(),
    }
}
