#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use clientmanager::Error;
use clientmanager::clipboard::Clipboard;
use clientmanager_plugin::{ChannelId, ClientId, Host, HostError, MenuId, MessageTarget, ServerId};

pub const SERVER: ServerId = ServerId(1);
pub const OWN_ID: ClientId = ClientId(2);

/// Everything a [`RecordingHost`] was asked to do.
#[derive(Debug, Default)]
pub struct Recorded {
    /// Our committed nickname.
    pub nickname: String,
    staged: Option<String>,
    /// Every nickname that was committed, in order.
    pub nicknames: Vec<String>,
    /// Messages printed to the current tab.
    pub tab: Vec<String>,
    /// Messages printed to a server or channel tab.
    pub messages: Vec<(MessageTarget, String)>,
    /// Requested client moves.
    pub moves: Vec<(ClientId, ChannelId)>,
    /// Last enabled state of each menu item that was touched.
    pub menus: HashMap<MenuId, bool>,
}

/// A host that records every call.
#[derive(Debug)]
pub struct RecordingHost {
    recorded: Mutex<Recorded>,
    connected: AtomicBool,
    /// Number of upcoming nickname writes that fail.
    failing_writes: AtomicUsize,
}

impl RecordingHost {
    pub fn new(nickname: &str) -> RecordingHost {
        RecordingHost {
            recorded: Mutex::new(Recorded {
                nickname: nickname.to_string(),
                ..Recorded::default()
            }),
            connected: AtomicBool::new(true),
            failing_writes: AtomicUsize::new(0),
        }
    }

    pub fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn nickname(&self) -> String {
        self.recorded().nickname.clone()
    }

    pub fn nicknames(&self) -> Vec<String> {
        self.recorded().nicknames.clone()
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    pub fn fail_next_writes(&self, count: usize) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    fn ensure_connected(&self) -> Result<(), HostError> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(HostError::NotConnected)
        }
    }
}

impl Host for RecordingHost {
    fn current_client_id(&self, _server: ServerId) -> Result<ClientId, HostError> {
        self.ensure_connected()?;

        Ok(OWN_ID)
    }

    fn client_display_name(&self, _server: ServerId, client: ClientId) -> Result<String, HostError> {
        self.ensure_connected()?;

        if client == OWN_ID {
            Ok(self.nickname())
        } else {
            Ok(format!("client{client}"))
        }
    }

    fn set_self_display_name(&self, _server: ServerId, name: &str) -> Result<(), HostError> {
        self.ensure_connected()?;

        let failing = self
            .failing_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();

        if failing {
            return Err(HostError::Call {
                function: "setClientSelfVariableAsString",
                code: 0x0200,
            });
        }

        self.recorded().staged = Some(name.to_string());

        Ok(())
    }

    fn flush_self_updates(&self, _server: ServerId) -> Result<(), HostError> {
        self.ensure_connected()?;

        let mut recorded = self.recorded();

        if let Some(name) = recorded.staged.take() {
            recorded.nicknames.push(name.clone());
            recorded.nickname = name;
        }

        Ok(())
    }

    fn print_to_current_tab(&self, message: &str) {
        self.recorded().tab.push(message.to_string());
    }

    fn print_message(&self, _server: ServerId, message: &str, target: MessageTarget) {
        self.recorded().messages.push((target, message.to_string()));
    }

    fn request_client_move(
        &self,
        _server: ServerId,
        client: ClientId,
        channel: ChannelId,
        _password: &str,
    ) -> Result<(), HostError> {
        self.ensure_connected()?;
        self.recorded().moves.push((client, channel));

        Ok(())
    }

    fn client_unique_identifier(
        &self,
        _server: ServerId,
        client: ClientId,
    ) -> Result<String, HostError> {
        self.ensure_connected()?;

        Ok(format!("uid-{client}="))
    }

    fn set_menu_enabled(&self, menu: MenuId, enabled: bool) {
        self.recorded().menus.insert(menu, enabled);
    }
}

/// A clipboard that keeps the last copied text. Clones share the contents.
#[derive(Debug, Default, Clone)]
pub struct RecordingClipboard {
    text: Arc<Mutex<Option<String>>>,
}

impl RecordingClipboard {
    pub fn text(&self) -> Option<String> {
        self.text.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<(), Error> {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());

        Ok(())
    }
}
