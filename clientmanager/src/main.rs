use std::io;
use std::sync::Arc;

use argh::FromArgs;
use miette::{IntoDiagnostic, WrapErr};
use tracing::info;

use clientmanager::{ClientManager, Config};

mod console;

use console::ConsoleHost;

/// Runs the client manager plugin against a console host.
///
/// Plain lines are plugin commands (`movename * ~`, `help`). Lines starting with `:` simulate
/// client events: `:poke <id> <name> [message]`, `:kick <id> <name>`, `:menu <id> [selected]`,
/// `:connected <true|false>`, `:name` and `:quit`.
#[derive(Debug, FromArgs)]
struct Opts {
    /// path to config file
    #[argh(option, short = 'c', default = "String::from(\"clientmanager.toml\")")]
    config_path: String,
    /// nickname of the local user
    #[argh(option, default = "String::from(\"Bob\")")]
    nickname: String,
}

fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    // Load the config from file and environment
    let config = Config::load(&opts.config_path).wrap_err("could not load config")?;

    // Initialize logging
    clientmanager::tracing::try_init(&config.tracing)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = %opts.config_path,
        "starting console host"
    );

    let host = Arc::new(ConsoleHost::new(opts.nickname));
    let manager = ClientManager::new(host.clone(), config)?;

    manager.init();

    let result = console::run(&manager, &host, io::stdin().lock());

    manager.shutdown();

    result.into_diagnostic().wrap_err("reading from stdin failed")
}
