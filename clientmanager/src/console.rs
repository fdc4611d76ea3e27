//! A host that lives in the terminal, for trying the plugin without a voice-chat client.
use std::io::{self, BufRead};
use std::sync::{Mutex, PoisonError};

use clientmanager::ClientManager;
use clientmanager::menu::MENU_ITEMS;
use clientmanager_plugin::{
    ChannelId, ClientId, EventSink, Host, HostError, KickEvent, MenuId, MenuKind, MessageTarget,
    PokeDisposition, PokeEvent, ServerId,
};
use tracing::{debug, trace};

/// The only server tab of the console host.
pub const SERVER: ServerId = ServerId(1);
/// Our own client id.
pub const OWN_ID: ClientId = ClientId(1);
/// The channel kicked clients end up in.
pub const DEFAULT_CHANNEL: ChannelId = ChannelId(1);
/// The channel we start in.
pub const START_CHANNEL: ChannelId = ChannelId(2);

#[derive(Debug)]
struct State {
    nickname: String,
    staged_nickname: Option<String>,
    channel: ChannelId,
    connected: bool,
}

/// An in-memory client with a single connection and a single local user.
#[derive(Debug)]
pub struct ConsoleHost {
    state: Mutex<State>,
}

impl ConsoleHost {
    /// Creates a connected host whose local user is called `nickname`.
    pub fn new(nickname: impl Into<String>) -> ConsoleHost {
        ConsoleHost {
            state: Mutex::new(State {
                nickname: nickname.into(),
                staged_nickname: None,
                channel: START_CHANNEL,
                connected: true,
            }),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns our current, committed nickname.
    pub fn nickname(&self) -> String {
        self.state().nickname.clone()
    }

    /// Returns the channel we're in.
    pub fn channel(&self) -> ChannelId {
        self.state().channel
    }

    /// Simulates a connection loss or reconnect.
    pub fn set_connected(&self, connected: bool) {
        self.state().connected = connected;
    }

    fn ensure_connected(&self, server: ServerId) -> Result<(), HostError> {
        if server == SERVER && self.state().connected {
            Ok(())
        } else {
            Err(HostError::NotConnected)
        }
    }
}

impl Host for ConsoleHost {
    fn current_client_id(&self, server: ServerId) -> Result<ClientId, HostError> {
        self.ensure_connected(server)?;

        Ok(OWN_ID)
    }

    fn client_display_name(&self, server: ServerId, client: ClientId) -> Result<String, HostError> {
        self.ensure_connected(server)?;

        if client == OWN_ID {
            Ok(self.nickname())
        } else {
            Ok(format!("client{client}"))
        }
    }

    fn set_self_display_name(&self, server: ServerId, name: &str) -> Result<(), HostError> {
        self.ensure_connected(server)?;
        self.state().staged_nickname = Some(name.to_string());

        Ok(())
    }

    fn flush_self_updates(&self, server: ServerId) -> Result<(), HostError> {
        self.ensure_connected(server)?;

        let mut state = self.state();

        if let Some(nickname) = state.staged_nickname.take() {
            println!("* you are now known as {nickname}");
            state.nickname = nickname;
        }

        Ok(())
    }

    fn print_to_current_tab(&self, message: &str) {
        println!("{message}");
    }

    fn print_message(&self, server: ServerId, message: &str, target: MessageTarget) {
        match target {
            MessageTarget::Server => println!("[server {server}] {message}"),
            MessageTarget::Channel => println!("[channel {}] {message}", self.channel()),
        }
    }

    fn request_client_move(
        &self,
        server: ServerId,
        client: ClientId,
        channel: ChannelId,
        _password: &str,
    ) -> Result<(), HostError> {
        self.ensure_connected(server)?;

        if client == OWN_ID {
            self.state().channel = channel;
            println!("* you moved to channel {channel}");
        }

        Ok(())
    }

    fn client_unique_identifier(
        &self,
        server: ServerId,
        client: ClientId,
    ) -> Result<String, HostError> {
        self.ensure_connected(server)?;

        Ok(format!("console-{client}="))
    }

    fn set_menu_enabled(&self, menu: MenuId, enabled: bool) {
        trace!(%menu, enabled, "menu state changed");
    }
}

/// A line typed into the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// A plugin command line.
    Command(&'a str),
    /// `:poke <id> <name> [message...]`
    Poke {
        from: ClientId,
        name: &'a str,
        message: &'a str,
    },
    /// `:kick <id> <name>`
    Kick { kicker: ClientId, name: &'a str },
    /// `:menu <id> [selected]`
    Menu { menu: MenuId, selected: u64 },
    /// `:name`
    Name,
    /// `:connected <true|false>`
    Connected(bool),
    /// `:quit`
    Quit,
    /// A malformed event line.
    Invalid(&'static str),
}

impl<'a> Input<'a> {
    /// Parses a console line. Lines starting with `:` are host events, all others are plugin
    /// commands.
    pub fn parse(line: &'a str) -> Input<'a> {
        let Some(event) = line.strip_prefix(':') else {
            return Input::Command(line);
        };

        let (name, rest) = event.split_once(' ').unwrap_or((event, ""));
        let mut args = rest.splitn(3, ' ');

        match name {
            "poke" => match (args.next().map(str::parse), args.next()) {
                (Some(Ok(from)), Some(name)) => Input::Poke {
                    from: ClientId(from),
                    name,
                    message: args.next().unwrap_or(""),
                },
                _ => Input::Invalid("usage: :poke <id> <name> [message]"),
            },
            "kick" => match (args.next().map(str::parse), args.next()) {
                (Some(Ok(kicker)), Some(name)) => Input::Kick {
                    kicker: ClientId(kicker),
                    name,
                },
                _ => Input::Invalid("usage: :kick <id> <name>"),
            },
            "menu" => {
                let menu = args.next().map(str::parse);
                let selected = args.next().map_or(Ok(0), str::parse);

                match (menu, selected) {
                    (Some(Ok(menu)), Ok(selected)) => Input::Menu {
                        menu: MenuId(menu),
                        selected,
                    },
                    _ => Input::Invalid("usage: :menu <id> [selected]"),
                }
            }
            "connected" => match args.next().map(str::parse) {
                Some(Ok(connected)) => Input::Connected(connected),
                _ => Input::Invalid("usage: :connected <true|false>"),
            },
            "name" => Input::Name,
            "quit" => Input::Quit,
            _ => Input::Invalid("unknown event, try :poke, :kick, :menu, :name, :connected or :quit"),
        }
    }
}

/// Reads lines from `input` and feeds them to `manager` until EOF or `:quit`.
pub fn run(manager: &ClientManager, host: &ConsoleHost, input: impl BufRead) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;

        match Input::parse(line.trim_end()) {
            Input::Command(command) => {
                let status = manager.process_command(SERVER, command);

                debug!(command, ?status, "processed command");
            }
            Input::Poke {
                from,
                name,
                message,
            } => {
                let event = PokeEvent {
                    server: SERVER,
                    from,
                    from_name: name.to_string(),
                    from_unique_id: format!("console-{from}="),
                    message: message.to_string(),
                };

                if manager.on_client_poke(&event) == PokeDisposition::Forward {
                    println!("! {name} poked you: {message}");
                }
            }
            Input::Kick { kicker, name } => {
                let old_channel = host.channel();

                if host
                    .request_client_move(SERVER, OWN_ID, DEFAULT_CHANNEL, "")
                    .is_ok()
                {
                    manager.on_client_kick_from_channel(&KickEvent {
                        server: SERVER,
                        client: OWN_ID,
                        old_channel,
                        new_channel: DEFAULT_CHANNEL,
                        kicker,
                        kicker_name: name.to_string(),
                        kicker_unique_id: format!("console-{kicker}="),
                        message: String::new(),
                    });
                }
            }
            Input::Menu { menu, selected } => {
                let kind = MENU_ITEMS
                    .iter()
                    .find(|item| item.id == menu)
                    .map_or(MenuKind::Global, |item| item.kind);

                manager.on_menu_item(SERVER, kind, menu, selected);
            }
            Input::Name => println!("{}", host.nickname()),
            Input::Connected(connected) => host.set_connected(connected),
            Input::Quit => break,
            Input::Invalid(usage) => eprintln!("{usage}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_commands() {
        assert_eq!(Input::parse("movename * ~"), Input::Command("movename * ~"));
    }

    #[test]
    fn poke_with_message() {
        assert_eq!(
            Input::parse(":poke 9 Mallory wake up now"),
            Input::Poke {
                from: ClientId(9),
                name: "Mallory",
                message: "wake up now"
            }
        );
    }

    #[test]
    fn poke_without_message() {
        assert_eq!(
            Input::parse(":poke 9 Mallory"),
            Input::Poke {
                from: ClientId(9),
                name: "Mallory",
                message: ""
            }
        );
    }

    #[test]
    fn menu_defaults_selected_to_zero() {
        assert_eq!(
            Input::parse(":menu 2"),
            Input::Menu {
                menu: MenuId(2),
                selected: 0
            }
        );
    }

    #[test]
    fn malformed_events_are_invalid() {
        assert!(matches!(Input::parse(":kick Mallory"), Input::Invalid(_)));
        assert!(matches!(Input::parse(":menu x"), Input::Invalid(_)));
        assert!(matches!(Input::parse(":dance"), Input::Invalid(_)));
    }

    #[test]
    fn nickname_changes_on_flush_only() {
        let host = ConsoleHost::new("Bob");

        host.set_self_display_name(SERVER, ".Bob.").unwrap();
        assert_eq!(host.nickname(), "Bob");

        host.flush_self_updates(SERVER).unwrap();
        assert_eq!(host.nickname(), ".Bob.");
    }

    #[test]
    fn disconnected_host_fails_calls() {
        let host = ConsoleHost::new("Bob");
        host.set_connected(false);

        assert_eq!(
            host.current_client_id(SERVER),
            Err(HostError::NotConnected)
        );
        assert_eq!(
            host.set_self_display_name(SERVER, "x"),
            Err(HostError::NotConnected)
        );
    }
}
