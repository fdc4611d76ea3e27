//! Anti-poke and anti-kick.
use std::sync::atomic::{AtomicBool, Ordering};

use clientmanager_plugin::{Host, KickEvent, MessageTarget, PokeDisposition, PokeEvent};
use tracing::{debug, info, warn};

use crate::bbcode::{self, Rgb};

/// Color of the kick announcement.
const KICK_COLOR: Rgb = Rgb(0xDD, 0x00, 0x1D);

/// The two event-gated flags. Both start off.
#[derive(Debug, Default)]
pub struct Guards {
    anti_poke: AtomicBool,
    anti_kick: AtomicBool,
}

impl Guards {
    /// Creates a new set of guards with both flags off.
    #[must_use]
    pub const fn new() -> Guards {
        Guards {
            anti_poke: AtomicBool::new(false),
            anti_kick: AtomicBool::new(false),
        }
    }

    /// Returns whether pokes are swallowed.
    pub fn anti_poke(&self) -> bool {
        self.anti_poke.load(Ordering::Acquire)
    }

    /// Sets whether pokes are swallowed.
    pub fn set_anti_poke(&self, enabled: bool) {
        self.anti_poke.store(enabled, Ordering::Release);
    }

    /// Returns whether we move back after being kicked from a channel.
    pub fn anti_kick(&self) -> bool {
        self.anti_kick.load(Ordering::Acquire)
    }

    /// Sets whether we move back after being kicked from a channel.
    pub fn set_anti_kick(&self, enabled: bool) {
        self.anti_kick.store(enabled, Ordering::Release);
    }

    /// Swallows the poke and prints it to the channel tab instead, if anti-poke is on.
    pub fn on_poke(&self, host: &dyn Host, event: &PokeEvent) -> PokeDisposition {
        if !self.anti_poke() {
            return PokeDisposition::Forward;
        }

        debug!(server = %event.server, from = %event.from, "swallowing poke");

        host.print_message(event.server, &poke_notice(event), MessageTarget::Channel);

        PokeDisposition::Ignore
    }

    /// Moves us back into the channel we were kicked from and names the kicker in the channel
    /// tab, if anti-kick is on.
    ///
    /// Returns whether a move was requested.
    pub fn on_kick(&self, host: &dyn Host, event: &KickEvent) -> bool {
        if !self.anti_kick() {
            return false;
        }

        let own_id = match host.current_client_id(event.server) {
            Ok(id) => id,
            Err(err) => {
                warn!(%err, server = %event.server, "could not get own client id");

                return false;
            }
        };

        if own_id != event.client {
            return false;
        }

        info!(
            server = %event.server,
            channel = %event.old_channel,
            kicker = %event.kicker_name,
            "kicked from channel, moving back"
        );

        host.print_message(event.server, &kick_notice(event), MessageTarget::Channel);

        if let Err(err) =
            host.request_client_move(event.server, event.client, event.old_channel, "")
        {
            warn!(%err, channel = %event.old_channel, "could not move back");
        }

        true
    }
}

fn poke_notice(event: &PokeEvent) -> String {
    let link = bbcode::client_link(event.from, &event.from_unique_id, &event.from_name);

    if event.message.is_empty() {
        format!("{link} poked you")
    } else {
        format!("{link} poked you: {}", event.message)
    }
}

fn kick_notice(event: &KickEvent) -> String {
    let link = bbcode::client_link(event.kicker, &event.kicker_unique_id, &event.kicker_name);

    format!(
        "{}{link}{}",
        bbcode::color("You were kicked by ", KICK_COLOR),
        bbcode::color("!", KICK_COLOR)
    )
}

#[cfg(test)]
mod tests {
    use clientmanager_plugin::{ChannelId, ClientId, ServerId};

    use super::*;

    fn poke(message: &str) -> PokeEvent {
        PokeEvent {
            server: ServerId(1),
            from: ClientId(9),
            from_name: "Mallory".to_string(),
            from_unique_id: "m4ll0ry=".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn poke_notice_with_message() {
        assert_eq!(
            poke_notice(&poke("hey")),
            "[URL=client://9/m4ll0ry=]Mallory[/URL] poked you: hey"
        );
    }

    #[test]
    fn poke_notice_without_message() {
        assert_eq!(
            poke_notice(&poke("")),
            "[URL=client://9/m4ll0ry=]Mallory[/URL] poked you"
        );
    }

    #[test]
    fn kick_notice_links_the_kicker() {
        let event = KickEvent {
            server: ServerId(1),
            client: ClientId(2),
            old_channel: ChannelId(5),
            new_channel: ChannelId(1),
            kicker: ClientId(9),
            kicker_name: "Mallory".to_string(),
            kicker_unique_id: "m4ll0ry=".to_string(),
            message: String::new(),
        };

        assert_eq!(
            kick_notice(&event),
            "[color=#DD001D]You were kicked by [/color][URL=client://9/m4ll0ry=]Mallory[/URL][color=#DD001D]![/color]"
        );
    }

    #[test]
    fn flags_start_off() {
        let guards = Guards::new();

        assert!(!guards.anti_poke());
        assert!(!guards.anti_kick());
    }
}
