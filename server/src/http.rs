use actix_web::{HttpRequest, HttpResponse, Responder, web};
use sapper_core::GameConfig;
use sapper_protocol::*;

use crate::{Registry, ServerError};

const USAGE: &str = "\
make a POST to /newgame, optionally with {\"board_width\": 8, \"board_height\": 8, \"mines_count\": 10}
then POST {\"game_id\": \"...\", \"x\": 0, \"y\": 0} to /move to open a cell
GET /game/{game_id} shows the current board
";

/// Mounts every game route, the registry has to be provided as `web::Data<Registry>`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(usage))
        .route(NEW_GAME_PATH, web::post().to(new_game))
        .route(MOVE_PATH, web::post().to(make_move))
        .route(&format!("{GAME_PATH}/{{game_id}}"), web::get().to(show_game));
}

/// Rejects bodies that are not valid JSON with the same error shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        log::warn!("rejected body on {}: {}", req.path(), err);
        ServerError::BadRequest(err.to_string()).into()
    })
}

async fn usage() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body(USAGE)
}

async fn new_game(
    registry: web::Data<Registry>,
    body: web::Bytes,
) -> Result<web::Json<GameView>, ServerError> {
    // simple clients post without a body
    let request: NewGameRequest = if body.iter().all(u8::is_ascii_whitespace) {
        NewGameRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| ServerError::BadRequest(e.to_string()))?
    };

    let defaults = registry.defaults();
    let config = GameConfig::new(
        (
            request.board_width.unwrap_or(defaults.size.0),
            request.board_height.unwrap_or(defaults.size.1),
        ),
        request.mines_count.unwrap_or(defaults.mines),
    )?;

    registry
        .create(config)
        .map(web::Json)
        .inspect_err(|e| log::warn!("rejected new game {:?}: {}", request, e))
}

async fn make_move(
    registry: web::Data<Registry>,
    request: web::Json<MoveRequest>,
) -> Result<web::Json<GameView>, ServerError> {
    let MoveRequest { game_id, x, y } = request.into_inner();
    if game_id.is_empty() {
        return Err(ServerError::BadRequest("must provide a valid game_id".into()));
    }

    registry
        .reveal(&game_id, (x, y))
        .map(web::Json)
        .inspect_err(|e| log::warn!("rejected move ({}, {}) on {}: {}", x, y, game_id, e))
}

async fn show_game(
    registry: web::Data<Registry>,
    path: web::Path<String>,
) -> Result<web::Json<GameView>, ServerError> {
    registry.get(&path.into_inner()).map(web::Json)
}
