//! Nickname animation.
//!
//! While running, a background task rewrites our nickname every interval, wrapping the original
//! name in the first and the last tag alternately:
//!
//! ```text
//! .Bob.  ->  :Bob:  ->  .Bob.  ->  ...
//! ```
//!
//! Stopping is cooperative: the task sees the cleared flag when it next wakes up and restores the
//! original name before it exits. If that restore fails, the untagged name is kept and reused by
//! the next start, so tags never pile up on top of each other.
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use clientmanager_plugin::{Host, ServerId};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::Error;

/// The result of [`Animator::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A new animation task was started.
    Started,
    /// The running animation was asked to stop.
    Stopping,
    /// A start was requested while the previous task hasn't restored the nickname yet.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    First,
    Last,
}

/// An untagged snapshot whose restore failed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Unrestored {
    server: ServerId,
    name: String,
}

/// The state owned by a single animation run.
#[derive(Debug)]
struct Animation {
    first_tag: String,
    last_tag: String,
    original_name: String,
    phase: Phase,
}

impl Animation {
    fn new(first_tag: &str, last_tag: &str, original_name: String) -> Animation {
        Animation {
            first_tag: first_tag.to_string(),
            last_tag: last_tag.to_string(),
            original_name,
            phase: Phase::First,
        }
    }

    /// Returns the tagged name for the current tick and advances to the next phase.
    fn next_name(&mut self) -> String {
        let tag = match self.phase {
            Phase::First => {
                self.phase = Phase::Last;
                &self.first_tag
            }
            Phase::Last => {
                self.phase = Phase::First;
                &self.last_tag
            }
        };

        format!("{tag}{}{tag}", self.original_name)
    }
}

/// Toggles the nickname animation and owns its background task.
pub struct Animator {
    host: Arc<dyn Host>,
    runtime: Handle,
    interval: Duration,
    /// Cleared to ask the running task to stop.
    running: Arc<AtomicBool>,
    /// Cancelled once on shutdown, interrupts the task's sleep.
    shutdown: CancellationToken,
    task: Mutex<Option<JoinHandle<()>>>,
    /// Set while our nickname may still carry tags from a run that couldn't restore it.
    unrestored: Arc<Mutex<Option<Unrestored>>>,
    /// Number of tasks started over the animator's lifetime.
    spawned: AtomicUsize,
}

impl Animator {
    /// Creates a stopped animator that spawns its task on `runtime`.
    #[must_use]
    pub fn new(host: Arc<dyn Host>, runtime: Handle, interval: Duration) -> Animator {
        Animator {
            host,
            runtime,
            interval,
            running: Arc::new(AtomicBool::new(false)),
            shutdown: CancellationToken::new(),
            task: Mutex::new(None),
            unrestored: Arc::new(Mutex::new(None)),
            spawned: AtomicUsize::new(0),
        }
    }

    /// Starts the animation if it's stopped, stops it otherwise.
    ///
    /// The tags are only used when starting. A start is rejected while the task of the previous
    /// run is still restoring the nickname, or after [`Animator::shutdown`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::HostUnavailable`] if our current nickname can't be read, in which case
    /// nothing is started.
    pub fn toggle(
        &self,
        server: ServerId,
        first_tag: &str,
        last_tag: &str,
    ) -> Result<ToggleOutcome, Error> {
        let mut task = lock(&self.task);

        if self.running.swap(false, Ordering::AcqRel) {
            debug!(%server, "stopping nickname animation");

            return Ok(ToggleOutcome::Stopping);
        }

        if self.shutdown.is_cancelled() || task.as_ref().is_some_and(|t| !t.is_finished()) {
            debug!(%server, "previous nickname animation is still winding down");

            return Ok(ToggleOutcome::Rejected);
        }

        let client = self.host.current_client_id(server)?;
        let original_name = match self.unrestored_name(server) {
            Some(name) => {
                debug!(%server, %name, "reusing snapshot of an unrestored nickname");

                name
            }
            None => self.host.client_display_name(server, client)?,
        };
        let animation = Animation::new(first_tag, last_tag, original_name);

        self.running.store(true, Ordering::Release);

        let run = AnimationTask {
            host: Arc::clone(&self.host),
            server,
            interval: self.interval,
            running: Arc::clone(&self.running),
            shutdown: self.shutdown.clone(),
            unrestored: Arc::clone(&self.unrestored),
            animation,
        }
        .run()
        .instrument(info_span!("nickname_animation", %server));

        *task = Some(self.runtime.spawn(run));
        self.spawned.fetch_add(1, Ordering::Relaxed);

        info!(%server, first_tag, last_tag, "nickname animation started");

        Ok(ToggleOutcome::Started)
    }

    /// Returns whether the animation is currently toggled on.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Returns how many animation tasks have been started so far.
    #[must_use]
    pub fn spawned_tasks(&self) -> usize {
        self.spawned.load(Ordering::Relaxed)
    }

    /// Stops the animation and waits for the task to restore the original nickname.
    ///
    /// A nickname left tagged by an earlier failed restore gets one more attempt. Further calls
    /// to [`Animator::toggle`] are rejected.
    pub async fn shutdown(&self) {
        self.running.store(false, Ordering::Release);
        self.shutdown.cancel();

        let task = lock(&self.task).take();

        if let Some(task) = task
            && let Err(err) = task.await
        {
            warn!(%err, "nickname animation task failed");
        }

        let unrestored = lock(&self.unrestored).take();

        if let Some(Unrestored { server, name }) = unrestored
            && !push_name(self.host.as_ref(), server, &name)
        {
            warn!(%server, %name, "could not restore nickname on shutdown");
        }
    }

    fn unrestored_name(&self, server: ServerId) -> Option<String> {
        lock(&self.unrestored)
            .as_ref()
            .filter(|unrestored| unrestored.server == server)
            .map(|unrestored| unrestored.name.clone())
    }
}

/// The background half of a single animation run.
struct AnimationTask {
    host: Arc<dyn Host>,
    server: ServerId,
    interval: Duration,
    running: Arc<AtomicBool>,
    shutdown: CancellationToken,
    unrestored: Arc<Mutex<Option<Unrestored>>>,
    animation: Animation,
}

impl AnimationTask {
    async fn run(mut self) {
        loop {
            tokio::select! {
                () = self.shutdown.cancelled() => break,
                () = tokio::time::sleep(self.interval) => {}
            }

            if !self.running.load(Ordering::Acquire) {
                break;
            }

            let name = self.animation.next_name();
            push_name(self.host.as_ref(), self.server, &name);
        }

        let name = &self.animation.original_name;
        let restored = push_name(self.host.as_ref(), self.server, name);
        let mut unrestored = lock(&self.unrestored);

        if restored {
            if unrestored.as_ref().is_some_and(|u| u.server == self.server) {
                *unrestored = None;
            }

            debug!(%name, "restored original nickname");
        } else {
            warn!(%name, "could not restore original nickname, keeping it for the next run");

            *unrestored = Some(Unrestored {
                server: self.server,
                name: name.clone(),
            });
        }
    }
}

/// Sets and commits our nickname, returning whether both calls succeeded. Failures only skip
/// this update.
fn push_name(host: &dyn Host, server: ServerId, name: &str) -> bool {
    if let Err(err) = host.set_self_display_name(server, name) {
        warn!(%err, name, "could not set nickname, skipping");

        return false;
    }

    if let Err(err) = host.flush_self_updates(server) {
        warn!(%err, name, "could not flush nickname update");

        return false;
    }

    true
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_name_alternates_starting_with_first_tag() {
        let mut animation = Animation::new("*", "~", "Bob".to_string());

        let names: Vec<String> = (0..5).map(|_| animation.next_name()).collect();

        assert_eq!(names, ["*Bob*", "~Bob~", "*Bob*", "~Bob~", "*Bob*"]);
    }

    #[test]
    fn next_name_never_accumulates_tags() {
        let mut animation = Animation::new(".", ":", "Alice".to_string());

        for _ in 0..100 {
            let name = animation.next_name();

            assert!(name == ".Alice." || name == ":Alice:", "unexpected name {name}");
        }
        assert_eq!(animation.original_name, "Alice");
    }

    #[test]
    fn multi_character_tags_wrap_both_sides() {
        let mut animation = Animation::new("<>", "[]", "x".to_string());

        assert_eq!(animation.next_name(), "<>x<>");
        assert_eq!(animation.next_name(), "[]x[]");
    }
}
