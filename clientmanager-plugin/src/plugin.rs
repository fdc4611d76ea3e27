use crate::{KickEvent, MenuId, MenuKind, PokeEvent, ServerId};

/// Whether the plugin consumed a plugin command.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CommandStatus {
    /// The command was recognized and executed.
    Handled,
    /// The command was not recognized.
    NotHandled,
}

/// What the client should do with a poke after the plugin saw it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PokeDisposition {
    /// Show the poke as usual.
    Forward,
    /// Swallow the poke.
    Ignore,
}

/// Callbacks the client delivers to the plugin.
///
/// The client calls these synchronously on its own thread, so none of them may block. Every
/// callback has a no-op default.
pub trait EventSink: Send + Sync {
    /// Processes a plugin command line, without the plugin's command keyword.
    fn process_command(&self, _server: ServerId, _command: &str) -> CommandStatus {
        CommandStatus::NotHandled
    }

    /// Someone poked us.
    fn on_client_poke(&self, _event: &PokeEvent) -> PokeDisposition {
        PokeDisposition::Forward
    }

    /// A client was kicked from its channel.
    fn on_client_kick_from_channel(&self, _event: &KickEvent) {}

    /// One of the plugin's menu items was triggered.
    ///
    /// `selected` is the channel or client id for context menus and `0` for the global menu.
    fn on_menu_item(&self, _server: ServerId, _kind: MenuKind, _menu: MenuId, _selected: u64) {}
}
