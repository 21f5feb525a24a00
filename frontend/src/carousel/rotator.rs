use std::num::NonZeroUsize;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use yew::Reducible;

use crate::config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RotatorError {
    #[error("testimonial rotator needs at least one entry")]
    EmptyDeck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Which way the last move went. Only decides the side a card slides out to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

impl Direction {
    pub fn exit_offset_px(self) -> f64 {
        match self {
            Direction::Forward => 100.0,
            Direction::Backward => -100.0,
            Direction::None => 0.0,
        }
    }
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Forward => Direction::Forward,
            Step::Backward => Direction::Backward,
        }
    }
}

/// Indices of the `cards` entries shown starting at `current`, wrapping around `len`.
pub fn window_indices(current: usize, len: NonZeroUsize, cards: usize) -> Vec<usize> {
    (0..cards).map(|offset| (current + offset) % len.get()).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rotator {
    len: NonZeroUsize,
    current: usize,
    direction: Direction,
    paused: bool,
    in_view: bool,
    narrow: bool,
}

impl Rotator {
    pub fn new(len: usize) -> Result<Self, RotatorError> {
        let len = NonZeroUsize::new(len).ok_or(RotatorError::EmptyDeck)?;
        Ok(Self {
            len,
            current: 0,
            direction: Direction::None,
            paused: false,
            in_view: false,
            narrow: false,
        })
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn advance(&mut self, step: Step) {
        let len = self.len.get();
        self.direction = step.into();
        self.current = match step {
            Step::Forward => (self.current + 1) % len,
            Step::Backward => (self.current + len - 1) % len,
        };
    }

    /// Jumps to `index`. Indices past the end are ignored; dot controls are
    /// generated one per entry so they never produce one.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len.get() {
            warn!("ignoring jump to testimonial {} of {}", index, self.len);
            return;
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
    }

    pub fn set_viewport_width(&mut self, width_px: f64) {
        self.narrow = width_px < config::NARROW_VIEWPORT_MAX_PX;
    }

    pub fn cards_to_show(&self) -> usize {
        if self.narrow {
            config::CARDS_NARROW
        } else {
            config::CARDS_WIDE
        }
    }

    pub fn visible_window(&self) -> Vec<usize> {
        window_indices(self.current, self.len, self.cards_to_show())
    }

    pub fn auto_advance_active(&self) -> bool {
        self.in_view && !self.paused
    }

    /// Timer callback. Advances only while the rotator is on screen and not
    /// hovered, so a tick that races a pause is dropped.
    pub fn tick(&mut self) -> bool {
        if !self.auto_advance_active() {
            return false;
        }
        self.advance(Step::Forward);
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotatorAction {
    Next,
    Prev,
    GoTo(usize),
    Tick,
    SetPaused(bool),
    SetInView(bool),
    Resize(f64),
}

impl Reducible for Rotator {
    type Action = RotatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RotatorAction::Next => next.advance(Step::Forward),
            RotatorAction::Prev => next.advance(Step::Backward),
            RotatorAction::GoTo(index) => next.go_to(index),
            RotatorAction::Tick => {
                next.tick();
            }
            RotatorAction::SetPaused(paused) => next.set_paused(paused),
            RotatorAction::SetInView(in_view) => next.set_in_view(in_view),
            RotatorAction::Resize(width) => next.set_viewport_width(width),
        }

        if next == *self {
            return self;
        }
        debug!(
            "rotator {:?}: index {} -> {}, window {:?}",
            action,
            self.current,
            next.current,
            next.visible_window()
        );
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TESTIMONIALS;

    fn rotator(len: usize) -> Rotator {
        Rotator::new(len).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Rotator::new(0), Err(RotatorError::EmptyDeck));
    }

    #[test]
    fn forward_cycle_closes_after_len_steps() {
        for len in 1..=7 {
            let mut r = rotator(len);
            let mut seen = Vec::new();
            for _ in 0..len {
                seen.push(r.current());
                r.advance(Step::Forward);
            }
            assert_eq!(seen, (0..len).collect::<Vec<_>>());
            assert_eq!(r.current(), 0, "len {}", len);
        }
    }

    #[test]
    fn backward_from_zero_wraps_to_last() {
        let mut r = rotator(5);
        r.advance(Step::Backward);
        assert_eq!(r.current(), 4);
        assert_eq!(r.direction(), Direction::Backward);
    }

    #[test]
    fn single_entry_stays_put() {
        let mut r = rotator(1);
        r.advance(Step::Forward);
        r.advance(Step::Backward);
        assert_eq!(r.current(), 0);
    }

    #[test]
    fn go_to_lands_exactly_and_sets_direction() {
        let mut r = rotator(5);
        r.advance(Step::Forward);
        r.go_to(3);
        assert_eq!(r.current(), 3);
        assert_eq!(r.direction(), Direction::Forward);

        r.go_to(0);
        assert_eq!(r.current(), 0);
        assert_eq!(r.direction(), Direction::Backward);

        // Same index counts as "not after".
        r.go_to(0);
        assert_eq!(r.direction(), Direction::Backward);

        for k in 0..5 {
            r.go_to(k);
            assert_eq!(r.current(), k);
        }
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut r = rotator(5);
        r.go_to(2);
        let before = r.clone();
        r.go_to(5);
        assert_eq!(r, before);
    }

    #[test]
    fn window_wraps_around_the_end() {
        let mut r = rotator(5);
        r.set_viewport_width(1280.0);
        r.go_to(4);
        assert_eq!(r.visible_window(), vec![4, 0, 1]);

        let names: Vec<&str> = r
            .visible_window()
            .into_iter()
            .map(|i| TESTIMONIALS[i].name)
            .collect();
        assert_eq!(names, ["Lisa Park", "Sarah Johnson", "Michael Chen"]);
    }

    #[test]
    fn window_has_cards_to_show_entries_without_duplicates() {
        for len in 3..=8 {
            let len = NonZeroUsize::new(len).unwrap();
            for current in 0..len.get() {
                let window = window_indices(current, len, 3);
                assert_eq!(window.len(), 3);
                assert!(window.iter().all(|&i| i < len.get()));
                let mut unique = window.clone();
                unique.sort_unstable();
                unique.dedup();
                assert_eq!(unique.len(), 3);
            }
        }
    }

    #[test]
    fn window_repeats_when_more_cards_than_entries() {
        let len = NonZeroUsize::new(2).unwrap();
        assert_eq!(window_indices(1, len, 3), vec![1, 0, 1]);
    }

    #[test]
    fn resize_changes_cards_but_not_index() {
        let mut r = rotator(5);
        r.set_viewport_width(1024.0);
        r.go_to(2);
        assert_eq!(r.cards_to_show(), 3);

        r.set_viewport_width(600.0);
        assert_eq!(r.cards_to_show(), 1);
        assert_eq!(r.current(), 2);
        assert_eq!(r.visible_window(), vec![2]);

        r.set_viewport_width(768.0);
        assert_eq!(r.cards_to_show(), 3);
    }

    #[test]
    fn tick_requires_view_and_no_pause() {
        let mut r = rotator(5);
        assert!(!r.tick(), "not in view yet");

        r.set_in_view(true);
        assert!(r.tick());
        assert_eq!(r.current(), 1);

        r.set_paused(true);
        for _ in 0..10 {
            assert!(!r.tick());
        }
        assert_eq!(r.current(), 1);

        r.set_paused(false);
        r.set_in_view(false);
        assert!(!r.tick());
        assert_eq!(r.current(), 1);
    }

    #[test]
    fn direction_does_not_change_the_window() {
        let mut forward = rotator(5);
        forward.advance(Step::Forward);
        forward.advance(Step::Forward);

        let mut backward = rotator(5);
        backward.advance(Step::Backward);
        backward.advance(Step::Backward);
        backward.advance(Step::Backward);

        assert_ne!(forward.direction(), backward.direction());
        assert_eq!(forward.visible_window(), backward.visible_window());
    }

    #[test]
    fn reducer_skips_no_op_actions() {
        let state = Rc::new(rotator(5));
        let same = state.clone().reduce(RotatorAction::Tick);
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(RotatorAction::Next);
        assert_eq!(moved.current(), 1);
        let back = moved.reduce(RotatorAction::Prev);
        assert_eq!(back.current(), 0);
        assert_eq!(back.direction(), Direction::Backward);
    }

    #[test]
    fn exit_offset_follows_direction() {
        assert_eq!(Direction::Forward.exit_offset_px(), 100.0);
        assert_eq!(Direction::Backward.exit_offset_px(), -100.0);
        assert_eq!(Direction::None.exit_offset_px(), 0.0);
    }
}
