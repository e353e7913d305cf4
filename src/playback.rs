//! Step-by-step playback of a precomputed path.
//!
//! Playback knows nothing about time. A front end advances it at whatever pace it wants
//! (the `autoplay` binary sleeps between steps).

use crate::core::config::Configuration;
use crate::rules::movegen::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStep {
    /// 1-based step number.
    pub index: usize,
    pub total: usize,
    pub mv: Move,
}

impl PlaybackStep {
    #[inline]
    pub fn is_last(&self) -> bool {
        self.index == self.total
    }
}

#[derive(Debug, Clone)]
pub struct Playback {
    start: Configuration,
    path: Vec<Move>,
    next: usize,
}

impl Playback {
    pub fn new(start: Configuration, path: Vec<Move>) -> Self {
        Self {
            start,
            path,
            next: 0,
        }
    }

    /// Configuration after the steps played so far.
    pub fn current(&self) -> Configuration {
        match self.next.checked_sub(1) {
            Some(i) => self.path[i].to,
            None => self.start,
        }
    }

    #[inline]
    pub fn steps_played(&self) -> usize {
        self.next
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.next >= self.path.len()
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}

impl Iterator for Playback {
    type Item = PlaybackStep;

    fn next(&mut self) -> Option<PlaybackStep> {
        let mv = *self.path.get(self.next)?;
        self.next += 1;
        Some(PlaybackStep {
            index: self.next,
            total: self.path.len(),
            mv,
        })
    }
}
