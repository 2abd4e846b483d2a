use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs a positive size and between 1 and (width * height - 1) mines")]
    InvalidDimensions,
    #[error("Too many mines to keep the first move safe")]
    MineCountInfeasible,
    #[error("Invalid coordinates")]
    InvalidCoordinate,
    #[error("Game already ended, no new moves are accepted")]
    GameAlreadyFinished,
}

pub type Result<T> = core::result::Result<T, GameError>;
