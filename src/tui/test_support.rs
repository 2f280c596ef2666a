//! Runs `MovieApp` commands outside the bubbletea-rs runtime.
//!
//! [`CommandDriver`] plays the part of the program loop: it dispatches a
//! message, spawns every resulting command on the current Tokio runtime and
//! feeds each completed command's message back into the model. Combined
//! with a paused clock this makes fetches, retries and notification
//! expiry observable step by step.

use std::any::Any;

use bubbletea_rs::Cmd;
use tokio::task::JoinSet;
use tokio::time::Instant;

use super::app::MovieApp;
use super::messages::AppMsg;

type Msg = Box<dyn Any + Send>;

/// Drives a [`MovieApp`] by running its commands to completion.
pub struct CommandDriver {
    app: MovieApp,
    queued: Vec<Cmd>,
    running: JoinSet<Option<Msg>>,
    delivered: Vec<(Instant, AppMsg)>,
}

impl CommandDriver {
    /// Wraps `app`.
    #[must_use]
    pub fn new(app: MovieApp) -> Self {
        Self {
            app,
            queued: Vec::new(),
            running: JoinSet::new(),
            delivered: Vec::new(),
        }
    }

    /// Returns the model.
    #[must_use]
    pub const fn app(&self) -> &MovieApp {
        &self.app
    }

    /// Returns the model mutably.
    pub const fn app_mut(&mut self) -> &mut MovieApp {
        &mut self.app
    }

    /// Dispatches `msg` and queues the commands it produced.
    ///
    /// Queued commands start on the next call to [`Self::step`].
    pub fn send(&mut self, msg: &AppMsg) {
        self.queued.extend(self.app.dispatch(msg));
    }

    /// Returns the number of commands queued or still running.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.queued.len() + self.running.len()
    }

    /// Waits for the next command to finish and delivers its message.
    ///
    /// Messages that are not [`AppMsg`] values (such as the runtime's quit
    /// message) are dropped. Returns `None` once nothing is outstanding.
    pub async fn step(&mut self) -> Option<AppMsg> {
        for cmd in self.queued.drain(..) {
            self.running.spawn(cmd);
        }

        loop {
            let joined = self.running.join_next().await?;
            let Ok(Some(boxed)) = joined else {
                continue;
            };
            let Ok(app_msg) = boxed.downcast::<AppMsg>() else {
                continue;
            };
            let msg = *app_msg;
            self.delivered.push((Instant::now(), msg.clone()));
            self.send(&msg);
            return Some(msg);
        }
    }

    /// Steps until `done` accepts a delivered message, giving up after
    /// `max_steps` deliveries.
    pub async fn run_until(
        &mut self,
        max_steps: usize,
        mut done: impl FnMut(&AppMsg) -> bool,
    ) -> Option<AppMsg> {
        for _ in 0..max_steps {
            let msg = self.step().await?;
            if done(&msg) {
                return Some(msg);
            }
        }
        None
    }

    /// Returns every delivered message with the instant it arrived.
    #[must_use]
    pub fn delivered(&self) -> &[(Instant, AppMsg)] {
        &self.delivered
    }

    /// Cancels everything still queued or running.
    pub fn abort(&mut self) {
        self.queued.clear();
        self.running.abort_all();
    }
}
