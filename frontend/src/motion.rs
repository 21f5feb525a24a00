//! Enter/exit animations as plain state.
//!
//! Every animated element is in one [`RevealPhase`]; a [`Motion`] maps each
//! phase to a [`Pose`] and renders it as an inline style. The browser does the
//! tweening through CSS transitions or the `motion-enter` keyframes declared
//! in the landing page stylesheet.

use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Visible,
    Exiting,
}

impl RevealPhase {
    pub fn from_in_view(in_view: bool) -> Self {
        if in_view {
            RevealPhase::Visible
        } else {
            RevealPhase::Hidden
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn faded(x: f64, y: f64, scale: f64) -> Self {
        Pose {
            opacity: 0.0,
            x,
            y,
            scale,
        }
    }

    fn transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    BackOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub hidden: Pose,
    pub visible: Pose,
    pub exit: Pose,
    pub transition: Transition,
}

impl Motion {
    const fn from_hidden(hidden: Pose, duration_ms: u32) -> Self {
        Motion {
            hidden,
            visible: Pose::REST,
            exit: hidden,
            transition: Transition {
                duration_ms,
                delay_ms: 0,
                easing: Easing::EaseOut,
            },
        }
    }

    /// Rises `distance` pixels into place while fading in.
    pub const fn fade_up(distance: f64, duration_ms: u32) -> Self {
        Self::from_hidden(Pose::faded(0.0, distance, 1.0), duration_ms)
    }

    /// Slides in horizontally from `offset` pixels (negative is from the left).
    pub const fn slide_x(offset: f64, duration_ms: u32) -> Self {
        Self::from_hidden(Pose::faded(offset, 0.0, 1.0), duration_ms)
    }

    pub const fn pop(scale: f64, duration_ms: u32) -> Self {
        Self::from_hidden(Pose::faded(0.0, 0.0, scale), duration_ms)
    }

    pub const fn fade(duration_ms: u32) -> Self {
        Self::from_hidden(Pose::faded(0.0, 0.0, 1.0), duration_ms)
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.transition.delay_ms = delay_ms;
        self
    }

    pub const fn eased(mut self, easing: Easing) -> Self {
        self.transition.easing = easing;
        self
    }

    /// Exit pose that slides `x` pixels sideways while fading out.
    pub const fn exiting_x(mut self, x: f64) -> Self {
        self.exit = Pose::faded(x, 0.0, 1.0);
        self
    }

    pub fn pose(&self, phase: RevealPhase) -> Pose {
        match phase {
            RevealPhase::Hidden => self.hidden,
            RevealPhase::Visible => self.visible,
            RevealPhase::Exiting => self.exit,
        }
    }

    /// Inline style placing the element at `phase`'s pose, transitioning
    /// from wherever it was.
    pub fn style(&self, phase: RevealPhase) -> String {
        let pose = self.pose(phase);
        let Transition {
            duration_ms,
            delay_ms,
            easing,
        } = self.transition;
        let easing = easing.css();
        format!(
            "opacity: {}; transform: {}; transition: opacity {duration_ms}ms {easing} {delay_ms}ms, transform {duration_ms}ms {easing} {delay_ms}ms;",
            pose.opacity,
            pose.transform(),
        )
    }

    /// Inline style that plays hidden -> visible once, as soon as the
    /// element mounts.
    pub fn enter_style(&self) -> String {
        let Transition {
            duration_ms,
            delay_ms,
            easing,
        } = self.transition;
        format!(
            "--from-opacity: {}; --from-x: {}px; --from-y: {}px; --from-scale: {}; animation: motion-enter {duration_ms}ms {} {delay_ms}ms both;",
            self.hidden.opacity,
            self.hidden.x,
            self.hidden.y,
            self.hidden.scale,
            easing.css(),
        )
    }
}

/// Parent-driven delays for a row of children revealed one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_children_ms: u32,
}

impl Stagger {
    pub const fn new(delay_children_ms: u32, stagger_children_ms: u32) -> Self {
        Self {
            delay_children_ms,
            stagger_children_ms,
        }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children_ms
            .saturating_add(index.saturating_mul(self.stagger_children_ms))
    }

    pub fn apply(&self, motion: Motion, index: usize) -> Motion {
        motion.delayed(self.delay_for(index))
    }
}

/// Swaps one displayed value for another with an exit phase in between:
/// the old value plays its exit, then the newest requested value enters.
#[derive(Clone, Debug, PartialEq)]
pub struct Presence<T> {
    shown: T,
    pending: Option<T>,
    phase: RevealPhase,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PresenceAction<T> {
    Show(T),
    ExitFinished,
}

impl<T: Clone + PartialEq> Presence<T> {
    pub fn new(shown: T) -> Self {
        Self {
            shown,
            pending: None,
            phase: RevealPhase::Visible,
        }
    }

    pub fn shown(&self) -> &T {
        &self.shown
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Returns whether an exit was started (or retargeted).
    pub fn show(&mut self, next: T) -> bool {
        if self.pending.is_none() && next == self.shown {
            return false;
        }
        if self.pending.as_ref() == Some(&next) {
            return false;
        }
        if next == self.shown {
            // Requested value is already on screen; cancel the swap.
            self.pending = None;
            self.phase = RevealPhase::Visible;
            return true;
        }
        self.pending = Some(next);
        self.phase = RevealPhase::Exiting;
        true
    }

    pub fn finish_exit(&mut self) {
        if let Some(next) = self.pending.take() {
            self.shown = next;
            self.phase = RevealPhase::Visible;
        }
    }
}

impl<T: Clone + PartialEq + 'static> Reducible for Presence<T> {
    type Action = PresenceAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PresenceAction::Show(value) => {
                next.show(value);
            }
            PresenceAction::ExitFinished => next.finish_exit(),
        }
        if next == *self {
            self
        } else {
            next.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_up_styles() {
        let motion = Motion::fade_up(20.0, 600);
        assert_eq!(
            motion.style(RevealPhase::Hidden),
            "opacity: 0; transform: translate(0px, 20px) scale(1); transition: opacity 600ms ease-out 0ms, transform 600ms ease-out 0ms;"
        );
        assert_eq!(
            motion.delayed(300).style(RevealPhase::Visible),
            "opacity: 1; transform: translate(0px, 0px) scale(1); transition: opacity 600ms ease-out 300ms, transform 600ms ease-out 300ms;"
        );
    }

    #[test]
    fn exit_pose_defaults_to_hidden() {
        let motion = Motion::pop(0.95, 600);
        assert_eq!(motion.pose(RevealPhase::Exiting), motion.hidden);
        let sliding = motion.exiting_x(-100.0);
        assert_eq!(sliding.pose(RevealPhase::Exiting).x, -100.0);
        assert_eq!(sliding.pose(RevealPhase::Exiting).opacity, 0.0);
    }

    #[test]
    fn enter_style_carries_hidden_pose() {
        let style = Motion::slide_x(-50.0, 800).eased(Easing::EaseInOut).enter_style();
        assert_eq!(
            style,
            "--from-opacity: 0; --from-x: -50px; --from-y: 0px; --from-scale: 1; animation: motion-enter 800ms ease-in-out 0ms both;"
        );
    }

    #[test]
    fn stagger_delays() {
        let stagger = Stagger::new(300, 200);
        let delays: Vec<u32> = (0..3).map(|i| stagger.delay_for(i)).collect();
        assert_eq!(delays, [300, 500, 700]);
        assert_eq!(stagger.apply(Motion::fade(500), 2).transition.delay_ms, 700);
        assert_eq!(Stagger::new(0, u32::MAX).delay_for(5), u32::MAX);
    }

    #[test]
    fn phase_follows_visibility() {
        assert_eq!(RevealPhase::from_in_view(false), RevealPhase::Hidden);
        assert_eq!(RevealPhase::from_in_view(true), RevealPhase::Visible);
    }

    #[test]
    fn presence_exits_before_swapping() {
        let mut presence = Presence::new(vec![0, 1, 2]);
        assert!(!presence.show(vec![0, 1, 2]));
        assert_eq!(presence.phase(), RevealPhase::Visible);

        assert!(presence.show(vec![1, 2, 3]));
        assert_eq!(presence.phase(), RevealPhase::Exiting);
        assert_eq!(presence.shown(), &vec![0, 1, 2]);

        presence.finish_exit();
        assert_eq!(presence.phase(), RevealPhase::Visible);
        assert_eq!(presence.shown(), &vec![1, 2, 3]);

        // A stray timer after the swap is harmless.
        presence.finish_exit();
        assert_eq!(presence.shown(), &vec![1, 2, 3]);
    }

    #[test]
    fn presence_keeps_latest_request() {
        let mut presence = Presence::new(0);
        presence.show(1);
        presence.show(2);
        presence.finish_exit();
        assert_eq!(*presence.shown(), 2);

        presence.show(3);
        assert!(presence.show(2), "going back cancels the swap");
        assert_eq!(presence.phase(), RevealPhase::Visible);
        presence.finish_exit();
        assert_eq!(*presence.shown(), 2);
    }

    #[test]
    fn presence_reducer_returns_same_rc_for_no_ops() {
        let state = Rc::new(Presence::new(7));
        let same = state.clone().reduce(PresenceAction::ExitFinished);
        assert!(Rc::ptr_eq(&state, &same));
        let exiting = state.reduce(PresenceAction::Show(8));
        assert_eq!(exiting.phase(), RevealPhase::Exiting);
    }
}
