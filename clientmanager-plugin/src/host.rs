use crate::{ChannelId, ClientId, HostError, MenuId, ServerId};

/// Where [`Host::print_message`] puts its text.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MessageTarget {
    /// The server tab.
    Server,
    /// The channel tab.
    Channel,
}

/// Functions the client exposes to the plugin.
///
/// Every call is synchronous and may be made from any thread. Printing is local to the client,
/// nothing is sent to the server.
pub trait Host: Send + Sync {
    /// Returns the id of our own client on `server`.
    fn current_client_id(&self, server: ServerId) -> Result<ClientId, HostError>;

    /// Returns the display name of `client` on `server`.
    fn client_display_name(&self, server: ServerId, client: ClientId) -> Result<String, HostError>;

    /// Stages a new nickname for our own client. Takes effect on [`Host::flush_self_updates`].
    fn set_self_display_name(&self, server: ServerId, name: &str) -> Result<(), HostError>;

    /// Commits all staged changes to our own client.
    fn flush_self_updates(&self, server: ServerId) -> Result<(), HostError>;

    /// Prints `message` to whatever tab is currently active.
    fn print_to_current_tab(&self, message: &str);

    /// Prints `message` to the server or channel tab of `server`.
    fn print_message(&self, server: ServerId, message: &str, target: MessageTarget);

    /// Asks the server to move `client` into `channel`.
    fn request_client_move(
        &self,
        server: ServerId,
        client: ClientId,
        channel: ChannelId,
        password: &str,
    ) -> Result<(), HostError>;

    /// Returns the unique identity of `client` on `server`.
    fn client_unique_identifier(
        &self,
        server: ServerId,
        client: ClientId,
    ) -> Result<String, HostError>;

    /// Enables or disables one of the plugin's menu items.
    fn set_menu_enabled(&self, menu: MenuId, enabled: bool);
}
