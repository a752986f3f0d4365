//! The typing animation: reveals a reply one character per tick.
//!
//! The animator owns the run state but never touches the chat log. Each
//! run posts its [`RunId`] into a channel on every scheduler tick, and the
//! owner feeds those ids back through [`TypingAnimator::tick`]. Ids from a
//! cancelled or finished run are ignored, so stale ticks that were already
//! queued cannot mutate anything.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use unicode_segmentation::UnicodeSegmentation;

use crate::scheduler::{CancelHandle, Scheduler};

/// Identifies one start-to-finish lifecycle of the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running,
}

/// Result of a tick that belonged to the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    /// The reply up to and including the newly revealed character.
    pub partial: String,
    /// `true` when this tick revealed the last character and the run stopped.
    pub finished: bool,
}

#[derive(Debug)]
struct ActiveRun {
    id: RunId,
    schedule: CancelHandle,
}

#[derive(Debug)]
pub struct TypingAnimator {
    interval: Duration,
    response: String,
    // byte offset just past each grapheme cluster of `response`
    boundaries: Vec<usize>,
    revealed: usize,
    next_run: u64,
    active: Option<ActiveRun>,
}

impl TypingAnimator {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            response: String::new(),
            boundaries: Vec::new(),
            revealed: 0,
            next_run: 0,
            active: None,
        }
    }

    /// Starts a new run over `response`, replacing any run in progress.
    ///
    /// Returns the new run id, or `None` when `response` is empty: such a
    /// run is complete as soon as it starts and nothing gets scheduled.
    pub fn start<S>(
        &mut self,
        response: &str,
        scheduler: &S,
        ticks: &UnboundedSender<RunId>,
    ) -> Option<RunId>
    where
        S: Scheduler + ?Sized,
    {
        self.cancel();

        self.response = response.to_string();
        self.boundaries = response
            .grapheme_indices(true)
            .map(|(offset, grapheme)| offset + grapheme.len())
            .collect();
        self.revealed = 0;

        if self.boundaries.is_empty() {
            tracing::debug!("empty reply, animation completes immediately");
            return None;
        }

        let id = RunId(self.next_run);
        self.next_run += 1;

        let sender = ticks.clone();
        let schedule = scheduler.schedule_repeating(
            self.interval,
            Box::new(move || {
                // the receiver is gone once the owner shuts down
                let _ = sender.send(id);
            }),
        );

        tracing::debug!(run = id.0, chars = self.boundaries.len(), "typing run started");
        self.active = Some(ActiveRun { id, schedule });
        Some(id)
    }

    /// Advances the run identified by `run` by one character.
    ///
    /// Returns `None` for ticks that do not belong to the current run.
    pub fn tick(&mut self, run: RunId) -> Option<Reveal> {
        if self.current_run() != Some(run) {
            tracing::trace!(run = run.0, "ignoring stale tick");
            return None;
        }

        // a live run always has at least one character left to reveal
        self.revealed += 1;
        let partial = self.response[..self.boundaries[self.revealed - 1]].to_string();

        let finished = self.revealed == self.boundaries.len();
        if finished {
            self.stop();
            tracing::debug!(run = run.0, "typing run finished");
        }

        Some(Reveal { partial, finished })
    }

    /// Stops the current run without completing it.
    ///
    /// Returns `true` if a run was in progress.
    pub fn cancel(&mut self) -> bool {
        let Some(run) = self.active.as_ref().map(|active| active.id) else {
            return false;
        };
        self.stop();
        tracing::debug!(run = run.0, revealed = self.revealed, "typing run cancelled");
        true
    }

    fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.schedule.cancel();
        }
    }

    pub const fn state(&self) -> AnimatorState {
        if self.active.is_some() {
            AnimatorState::Running
        } else {
            AnimatorState::Idle
        }
    }

    pub const fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|active| active.id)
    }

    pub const fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Length of the current reply in user-perceived characters.
    pub fn response_len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn response_text(&self) -> &str {
        &self.response
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn setup() -> (TypingAnimator, ManualScheduler, UnboundedSender<RunId>, UnboundedReceiver<RunId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            TypingAnimator::new(Duration::from_millis(100)),
            ManualScheduler::new(),
            tx,
            rx,
        )
    }

    #[test]
    fn test_start_schedules_exactly_one_tick_source() {
        let (mut animator, scheduler, tx, _rx) = setup();

        animator.start("Hello", &scheduler, &tx);

        assert_eq!(animator.state(), AnimatorState::Running);
        assert_eq!(animator.revealed_count(), 0);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.intervals(), vec![Duration::from_millis(100)]);
    }

    #[test]
    fn test_ticks_reveal_one_character_each() {
        let (mut animator, scheduler, tx, mut rx) = setup();
        animator.start("Hey", &scheduler, &tx);

        let mut partials = Vec::new();
        for _ in 0..3 {
            scheduler.fire();
            let run = rx.try_recv().unwrap();
            partials.push(animator.tick(run).unwrap());
        }

        assert_eq!(partials[0].partial, "H");
        assert_eq!(partials[1].partial, "He");
        assert_eq!(partials[2].partial, "Hey");
        assert!(!partials[1].finished);
        assert!(partials[2].finished);
        assert_eq!(animator.revealed_count(), 3);
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_empty_reply_completes_without_scheduling() {
        let (mut animator, scheduler, tx, _rx) = setup();

        assert!(animator.start("", &scheduler, &tx).is_none());
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel_stops_schedule() {
        let (mut animator, scheduler, tx, mut rx) = setup();
        let run = animator.start("Hello", &scheduler, &tx).unwrap();
        scheduler.fire();
        animator.tick(rx.try_recv().unwrap());

        assert!(animator.cancel());

        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(scheduler.pending(), 0);
        assert!(animator.tick(run).is_none());
        assert!(!animator.cancel());
    }

    #[test]
    fn test_restart_ignores_ticks_from_previous_run() {
        let (mut animator, scheduler, tx, mut rx) = setup();
        animator.start("Hello", &scheduler, &tx);
        scheduler.fire();
        let old = rx.try_recv().unwrap();

        let new = animator.start("World", &scheduler, &tx).unwrap();

        assert_ne!(old, new);
        assert_eq!(scheduler.pending(), 1);
        assert!(animator.tick(old).is_none());
        assert_eq!(animator.revealed_count(), 0);

        scheduler.fire();
        let reveal = animator.tick(rx.try_recv().unwrap()).unwrap();
        assert_eq!(reveal.partial, "W");
    }

    #[test]
    fn test_reveals_grapheme_clusters_whole() {
        let (mut animator, scheduler, tx, mut rx) = setup();
        animator.start("a👋🏽b", &scheduler, &tx);
        assert_eq!(animator.response_len(), 3);

        scheduler.fire();
        animator.tick(rx.try_recv().unwrap());
        scheduler.fire();
        let reveal = animator.tick(rx.try_recv().unwrap()).unwrap();

        assert_eq!(reveal.partial, "a👋🏽");
    }
}
