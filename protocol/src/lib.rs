//! JSON messages exchanged between the game server and its clients.

use serde::{Deserialize, Serialize};

pub const NEW_GAME_PATH: &str = "/newgame";
pub const MOVE_PATH: &str = "/move";
pub const GAME_PATH: &str = "/game";

/// Body of `POST /newgame`; any missing field falls back to the server defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewGameRequest {
    pub board_width: Option<u16>,
    pub board_height: Option<u16>,
    pub mines_count: Option<u32>,
}

/// Body of `POST /move`.
///
/// Coordinates are signed so that negative values reach the server and get rejected there
/// instead of failing to parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub game_id: String,
    pub x: i64,
    pub y: i64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Public state of a game, what every successful response carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub game_id: String,
    pub status: Status,
    pub board_width: u16,
    pub board_height: u16,
    pub mines_count: u32,
    /// Row-major glyphs: `?` hidden, `*` mine, ` ` no adjacent mines, `1`-`8` otherwise.
    pub board_state: Vec<String>,
    pub pretty_board_state: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
