//! Clipboard access for the "Copy ID" menu item.
use crate::Error;

/// Somewhere text can be copied to.
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&self, text: &str) -> Result<(), Error>;
}

/// The operating system clipboard.
///
/// A new handle is opened for every copy since clipboard handles aren't shareable between
/// threads on every platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), Error> {
        let mut clipboard = arboard::Clipboard::new()?;

        clipboard.set_text(text)?;

        Ok(())
    }
}
