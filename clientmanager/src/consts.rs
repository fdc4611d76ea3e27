//! Shared constants.
use std::time::Duration;

/// The keyword the client routes plugin commands by, as in `/ClientManager movename`.
pub const COMMAND_KEYWORD: &str = "ClientManager";

/// The delay between two nickname animation ticks.
pub const DEFAULT_ANIMATION_INTERVAL: Duration = Duration::from_millis(2000);

/// The tag used on odd animation ticks when none is given.
pub const DEFAULT_FIRST_TAG: &str = ".";

/// The tag used on even animation ticks when none is given.
pub const DEFAULT_LAST_TAG: &str = ":";

/// The default `EnvFilter` directive when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "clientmanager=info";

/// The prefix of environment variables that override the configuration.
pub const ENV_PREFIX: &str = "CLIENTMANAGER_";
