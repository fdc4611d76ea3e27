//! The boundary between the voice-chat client and the plugin logic.
//!
//! [`Host`] is what the plugin may call on the client, [`EventSink`] is what the client calls on
//! the plugin. The exported C callback table binds to these two traits and nothing else.

mod error;
mod host;
mod plugin;
mod types;

pub use error::HostError;
pub use host::{Host, MessageTarget};
pub use plugin::{CommandStatus, EventSink, PokeDisposition};
pub use types::{ChannelId, ClientId, KickEvent, MenuId, MenuKind, PokeEvent, ServerId};
