use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sapper_core::{GameError, GameId};
use sapper_protocol::ApiError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("game {0} is not found")]
    NotFound(GameId),
    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Game(GameError::GameAlreadyFinished) => StatusCode::CONFLICT,
            Self::Game(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiError::new(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_map_to_client_errors() {
        use GameError::*;

        for error in [InvalidDimensions, MineCountInfeasible, InvalidCoordinate] {
            assert_eq!(ServerError::from(error).status_code(), StatusCode::BAD_REQUEST);
        }
        assert_eq!(
            ServerError::from(GameAlreadyFinished).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServerError::NotFound("abc".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn message_comes_from_engine_error() {
        assert_eq!(
            ServerError::from(GameError::InvalidCoordinate).to_string(),
            "Invalid coordinates"
        );
    }
}
