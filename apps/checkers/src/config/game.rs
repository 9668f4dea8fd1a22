//! Game setup read from the environment.
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `CHECKERS_MODE` | `pvp`, `pvbot`, `botvbot` | `pvp` |
//! | `CHECKERS_AI` | a registered AI name | `RandomPlayer` |
//! | `CHECKERS_AI_SEED` | `u64` | unset (OS entropy) |
//! | `CHECKERS_MOVE_LIMIT` | `u32` | unset (no limit) |

use std::env;
use std::str::FromStr;

use crate::ai::{self, RandomPlayer};
use crate::domain::types::Side;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Automated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub first: PlayerKind,
    pub second: PlayerKind,
    /// Registry name of the AI used for every automated side.
    pub ai: String,
    pub ai_seed: Option<u64>,
    pub move_limit: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::player_vs_player()
    }
}

impl GameConfig {
    pub fn player_vs_player() -> Self {
        Self {
            first: PlayerKind::Human,
            second: PlayerKind::Human,
            ai: RandomPlayer::NAME.to_string(),
            ai_seed: None,
            move_limit: None,
        }
    }

    /// Human plays `First`; the AI answers as `Second`.
    pub fn player_vs_bot() -> Self {
        Self {
            second: PlayerKind::Automated,
            ..Self::player_vs_player()
        }
    }

    pub fn bot_vs_bot(move_limit: u32) -> Self {
        Self {
            first: PlayerKind::Automated,
            second: PlayerKind::Automated,
            move_limit: Some(move_limit),
            ..Self::player_vs_player()
        }
    }

    pub fn with_ai(mut self, name: impl Into<String>, seed: Option<u64>) -> Self {
        self.ai = name.into();
        self.ai_seed = seed;
        self
    }

    pub fn kind(&self, side: Side) -> PlayerKind {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let mut config = match env::var("CHECKERS_MODE") {
            Err(_) => Self::player_vs_player(),
            Ok(mode) => match mode.trim().to_ascii_lowercase().as_str() {
                "" | "pvp" => Self::player_vs_player(),
                "pvbot" => Self::player_vs_bot(),
                "botvbot" => Self {
                    first: PlayerKind::Automated,
                    ..Self::player_vs_bot()
                },
                other => {
                    return Err(AppError::config(format!(
                        "CHECKERS_MODE must be one of pvp, pvbot, botvbot (got '{other}')"
                    )))
                }
            },
        };

        if let Ok(name) = env::var("CHECKERS_AI") {
            let name = name.trim();
            if !name.is_empty() {
                config.ai = name.to_string();
            }
        }
        config.ai_seed = parse_var("CHECKERS_AI_SEED")?;
        config.move_limit = parse_var("CHECKERS_MOVE_LIMIT")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let automated = [self.first, self.second]
            .iter()
            .filter(|kind| **kind == PlayerKind::Automated)
            .count();
        if automated > 0 && ai::by_name(&self.ai).is_none() {
            let known: Vec<&str> = ai::registered_ais().iter().map(|f| f.name).collect();
            return Err(AppError::config(format!(
                "unknown AI '{}' (registered: {})",
                self.ai,
                known.join(", ")
            )));
        }
        if automated == 2 && self.move_limit.is_none() {
            return Err(AppError::config(
                "botvbot requires CHECKERS_MOVE_LIMIT so the game is guaranteed to end",
            ));
        }
        if self.move_limit == Some(0) {
            return Err(AppError::config("CHECKERS_MOVE_LIMIT must be positive"));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Err(_) => Ok(None),
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            AppError::config(format!("environment variable '{name}' is not a valid number: '{raw}'"))
        }),
    }
}
