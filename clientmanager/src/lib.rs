//! Client management plugin: nickname animation, anti-poke and anti-kick.

pub mod animator;
pub mod bbcode;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod consts;
mod error;
pub mod guard;
mod manager;
pub mod menu;
pub mod tracing;

pub use animator::{Animator, ToggleOutcome};
pub use config::Config;
pub use error::Error;
pub use manager::ClientManager;
