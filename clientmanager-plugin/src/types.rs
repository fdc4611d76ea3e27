use std::fmt;

/// A newtype wrapper for numeric host identifiers.
macro_rules! id_type {
    ($name:ident, $inner:ty, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
        pub struct $name(pub $inner);

        impl $name {
            /// Returns the raw identifier as used by the host.
            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(ServerId, u64, "Handle of a server connection tab");
id_type!(ClientId, u16, "Identifier of a client on a server");
id_type!(ChannelId, u64, "Identifier of a channel on a server");
id_type!(MenuId, i32, "Identifier of a plugin menu item");

/// The menu a plugin menu item is shown in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum MenuKind {
    /// "Plugins" menu in the menu bar of the main window.
    Global,
    /// Channel context menu.
    Channel,
    /// Client context menu.
    Client,
}

/// Someone poked the local user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokeEvent {
    /// The server tab the poke arrived on.
    pub server: ServerId,
    /// The client that sent the poke.
    pub from: ClientId,
    /// Display name of the sender.
    pub from_name: String,
    /// Unique identity of the sender.
    pub from_unique_id: String,
    /// The poke message, may be empty.
    pub message: String,
}

/// A client was kicked from its channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KickEvent {
    /// The server tab the kick happened on.
    pub server: ServerId,
    /// The client that was kicked.
    pub client: ClientId,
    /// The channel the client was kicked from.
    pub old_channel: ChannelId,
    /// The channel the client ended up in.
    pub new_channel: ChannelId,
    /// The client that issued the kick.
    pub kicker: ClientId,
    /// Display name of the kicker.
    pub kicker_name: String,
    /// Unique identity of the kicker.
    pub kicker_unique_id: String,
    /// The kick reason, may be empty.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_raw_numbers() {
        assert_eq!(ServerId(1).to_string(), "1");
        assert_eq!(ClientId::from(42).to_string(), "42");
        assert_eq!(MenuId(-3).get(), -3);
    }
}
