//! Helpers for the BBCode markup the client renders in chat tabs.
use std::fmt::Write;

use clientmanager_plugin::ClientId;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation between `self` and `to` at `step` out of `steps`.
    #[must_use]
    pub fn lerp(self, to: Rgb, step: usize, steps: usize) -> Rgb {
        if steps == 0 {
            return self;
        }

        let channel = |from: u8, to: u8| -> u8 {
            let from = i64::from(from);
            let to = i64::from(to);
            #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
            let value = from + (to - from) * step as i64 / steps as i64;

            u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
        };

        Rgb(
            channel(self.0, to.0),
            channel(self.1, to.1),
            channel(self.2, to.2),
        )
    }
}

/// Returns a link that opens the client's context menu when clicked.
#[must_use]
pub fn client_link(client: ClientId, unique_id: &str, name: &str) -> String {
    format!("[URL=client://{client}/{unique_id}]{name}[/URL]")
}

/// Wraps `text` in a color tag.
#[must_use]
pub fn color(text: &str, rgb: Rgb) -> String {
    let Rgb(r, g, b) = rgb;

    format!("[color=#{r:02X}{g:02X}{b:02X}]{text}[/color]")
}

/// Colors every non-whitespace character of `text` on a gradient from `from` to `to`.
#[must_use]
pub fn gradient(text: &str, from: Rgb, to: Rgb) -> String {
    let steps = text.chars().count().saturating_sub(1);
    let mut buf = String::with_capacity(text.len() * 24);

    for (step, chr) in text.chars().enumerate() {
        if chr.is_whitespace() {
            buf.push(chr);
        } else {
            let Rgb(r, g, b) = from.lerp(to, step, steps);
            let _ = write!(buf, "[color=#{r:02X}{g:02X}{b:02X}]{chr}[/color]");
        }
    }

    buf
}
