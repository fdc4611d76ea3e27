//! Error types

use clientmanager_plugin::HostError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the plugin logic.
///
/// None of these are fatal to the client, the worst outcome is that an action has no visible
/// effect.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A host function failed, most likely because we're not connected.
    #[error("Host unavailable")]
    #[diagnostic(code(clientmanager::host_unavailable))]
    HostUnavailable(#[from] HostError),
    /// The system clipboard could not be accessed.
    #[error("Clipboard error")]
    Clipboard(#[from] arboard::Error),
    /// The async runtime could not be built.
    #[error("Could not build the async runtime")]
    Runtime(#[source] std::io::Error),
    /// The configuration could not be loaded.
    #[error("Could not load configuration")]
    #[diagnostic(code(clientmanager::config))]
    Config(#[from] Box<figment::Error>),
}
