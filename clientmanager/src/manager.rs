//! The plugin state that lives from load to unload.
use std::sync::Arc;
use std::time::Duration;

use clientmanager_plugin::{
    ClientId, CommandStatus, EventSink, Host, KickEvent, MenuId, MenuKind, PokeDisposition,
    PokeEvent, ServerId,
};
use tokio::runtime::{self, Runtime};
use tracing::{debug, info, trace, warn};

use crate::Error;
use crate::animator::{Animator, ToggleOutcome};
use crate::bbcode::{self, Rgb};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::command::{self, Command};
use crate::config::Config;
use crate::consts::COMMAND_KEYWORD;
use crate::guard::Guards;
use crate::menu::{self, MenuAction};

/// How long unloading waits for stray runtime tasks after the animation has been joined.
const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

/// Shown when `movename` comes in before the previous animation has restored the nickname.
const STILL_STOPPING_NOTICE: &str =
    "The nickname animation is still stopping, try again in a moment.";

/// Everything the plugin owns while it is loaded.
pub struct ClientManager {
    /// The client's function table.
    host: Arc<dyn Host>,
    /// The complete configuration
    config: Config,
    /// The nickname animation
    animator: Animator,
    /// Anti-poke and anti-kick flags
    guards: Guards,
    /// Target of the "Copy ID" menu item
    clipboard: Box<dyn Clipboard>,
    /// Runs the animation task, the client gives us no executor of its own.
    runtime: Runtime,
}

impl ClientManager {
    /// Creates the plugin state, copying to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] if the background runtime can't be started.
    pub fn new(host: Arc<dyn Host>, config: Config) -> Result<ClientManager, Error> {
        Self::with_clipboard(host, config, Box::new(SystemClipboard))
    }

    /// Creates the plugin state with the given clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] if the background runtime can't be started.
    pub fn with_clipboard(
        host: Arc<dyn Host>,
        config: Config,
        clipboard: Box<dyn Clipboard>,
    ) -> Result<ClientManager, Error> {
        let runtime = runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("clientmanager-worker")
            .enable_time()
            .build()
            .map_err(Error::Runtime)?;
        let animator = Animator::new(
            Arc::clone(&host),
            runtime.handle().clone(),
            config.animation.interval,
        );

        Ok(ClientManager {
            host,
            config,
            animator,
            guards: Guards::new(),
            clipboard,
            runtime,
        })
    }

    /// Sets up the menus and greets the user. Called once, right after loading.
    pub fn init(&self) {
        for item in menu::initially_disabled() {
            self.host.set_menu_enabled(item.id, false);
        }

        self.host.print_to_current_tab(&banner(&format!(
            "ClientManager by {} activated.",
            env!("CARGO_PKG_AUTHORS")
        )));

        info!("plugin initialized");
    }

    /// Returns the nickname animator.
    #[must_use]
    pub const fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Returns the anti-poke and anti-kick flags.
    #[must_use]
    pub const fn guards(&self) -> &Guards {
        &self.guards
    }

    /// Stops the animation, waits until the original nickname is restored and tears down the
    /// runtime.
    ///
    /// Blocks the calling thread, so it must not be called from within an async context.
    pub fn shutdown(self) {
        let ClientManager {
            host,
            animator,
            runtime,
            ..
        } = self;

        runtime.block_on(animator.shutdown());
        host.print_to_current_tab(&banner("ClientManager closed."));
        runtime.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);

        info!("plugin shut down");
    }

    fn toggle_animation(&self, server: ServerId, first_tag: Option<&str>, last_tag: Option<&str>) {
        let first_tag = first_tag.unwrap_or(&self.config.animation.first_tag);
        let last_tag = last_tag.unwrap_or(&self.config.animation.last_tag);

        match self.animator.toggle(server, first_tag, last_tag) {
            Ok(ToggleOutcome::Rejected) => {
                debug!(%server, "nickname animation restart rejected");

                self.host.print_to_current_tab(STILL_STOPPING_NOTICE);
            }
            Ok(outcome) => debug!(%server, ?outcome, "toggled nickname animation"),
            Err(err) => warn!(%err, %server, "could not toggle nickname animation"),
        }
    }

    fn copy_unique_id(&self, server: ServerId, selected: u64) {
        let Ok(client) = u16::try_from(selected).map(ClientId) else {
            warn!(%selected, "selected item is not a client id");

            return;
        };

        let result = self
            .host
            .client_unique_identifier(server, client)
            .map_err(Error::from)
            .and_then(|unique_id| self.clipboard.set_text(&unique_id));

        match result {
            Ok(()) => debug!(%server, %client, "copied unique id to clipboard"),
            Err(err) => warn!(%err, %server, %client, "could not copy unique id"),
        }
    }
}

impl EventSink for ClientManager {
    fn process_command(&self, server: ServerId, command: &str) -> CommandStatus {
        match Command::parse(command) {
            Command::Toggle {
                first_tag,
                last_tag,
            } => {
                self.toggle_animation(server, first_tag, last_tag);

                CommandStatus::Handled
            }
            Command::Help => {
                self.host
                    .print_to_current_tab(&command::usage(COMMAND_KEYWORD));

                CommandStatus::Handled
            }
            Command::Unknown => {
                trace!(%server, command, "ignoring unknown command");

                CommandStatus::NotHandled
            }
        }
    }

    fn on_client_poke(&self, event: &PokeEvent) -> PokeDisposition {
        self.guards.on_poke(self.host.as_ref(), event)
    }

    fn on_client_kick_from_channel(&self, event: &KickEvent) {
        self.guards.on_kick(self.host.as_ref(), event);
    }

    fn on_menu_item(&self, server: ServerId, kind: MenuKind, menu: MenuId, selected: u64) {
        let Some(action) = MenuAction::from_menu(kind, menu) else {
            trace!(%server, ?kind, %menu, "ignoring unknown menu item");

            return;
        };

        debug!(%server, ?action, "menu item triggered");

        match action {
            MenuAction::CopyUniqueId => self.copy_unique_id(server, selected),
            MenuAction::EnableAntiPoke => self.guards.set_anti_poke(true),
            MenuAction::DisableAntiPoke => self.guards.set_anti_poke(false),
            MenuAction::EnableAntiKick => self.guards.set_anti_kick(true),
            MenuAction::DisableAntiKick => self.guards.set_anti_kick(false),
        }

        if let Some(counterpart) = action.counterpart() {
            self.host.set_menu_enabled(menu, false);
            self.host.set_menu_enabled(counterpart.menu_id(), true);
        }
    }
}

/// Renders `text` on the red to blue gradient used for status banners.
fn banner(text: &str) -> String {
    bbcode::gradient(text, Rgb(0xFF, 0x00, 0x00), Rgb(0x00, 0x00, 0xFF))
}
