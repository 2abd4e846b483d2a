use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use sapper_core::{GameConfig, GameError, StartPolicy};

/// Minesweeper game server
#[derive(Parser, Debug)]
#[command(name = "sapper", version, long_about = None)]
pub struct Cli {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Number of HTTP worker threads
    #[arg(long, default_value_t = 4)]
    pub workers: usize,

    /// Board width of games created without an explicit size
    #[arg(long, default_value_t = 8)]
    pub width: u16,

    /// Board height of games created without an explicit size
    #[arg(long, default_value_t = 8)]
    pub height: u16,

    /// Mine count of games created without an explicit count
    #[arg(long, default_value_t = 10)]
    pub mines: u32,

    /// How the first opened cell is kept safe
    #[arg(long, value_enum, default_value_t = StartPolicyArg::SafeNeighborhood)]
    pub start_policy: StartPolicyArg,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Cli {
    /// Default board, checked against the start policy so every new game can be placed.
    pub fn game_config(&self) -> Result<GameConfig, GameError> {
        let config = GameConfig::new((self.width, self.height), self.mines)?;
        self.start_policy().check_feasible(config)?;
        Ok(config)
    }

    pub fn start_policy(&self) -> StartPolicy {
        self.start_policy.into()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StartPolicyArg {
    Random,
    SafeCell,
    SafeNeighborhood,
}

impl From<StartPolicyArg> for StartPolicy {
    fn from(arg: StartPolicyArg) -> Self {
        match arg {
            StartPolicyArg::Random => Self::Random,
            StartPolicyArg::SafeCell => Self::SafeCell,
            StartPolicyArg::SafeNeighborhood => Self::SafeNeighborhood,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_classic_beginner_board() {
        let cli = Cli::try_parse_from(["sapper"]).unwrap();

        assert_eq!(cli.game_config(), GameConfig::new((8, 8), 10));
        assert_eq!(cli.start_policy(), StartPolicy::SafeNeighborhood);
        assert_eq!(cli.verbose.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn parses_board_and_policy() {
        let cli = Cli::try_parse_from([
            "sapper",
            "--port",
            "8080",
            "--width",
            "30",
            "--height",
            "16",
            "--mines",
            "99",
            "--start-policy",
            "safe-cell",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.game_config(), GameConfig::new((30, 16), 99));
        assert_eq!(cli.start_policy(), StartPolicy::SafeCell);
        assert_eq!(cli.verbose.log_level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn rejects_default_board_that_cannot_be_placed() {
        let cli = Cli::try_parse_from(["sapper", "--width", "3", "--height", "3", "--mines", "1"])
            .unwrap();
        assert_eq!(cli.game_config(), Err(GameError::MineCountInfeasible));

        let cli = Cli::try_parse_from(["sapper", "--mines", "0"]).unwrap();
        assert_eq!(cli.game_config(), Err(GameError::InvalidDimensions));
    }
}
