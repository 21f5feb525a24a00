use gloo_timers::callback::Interval;
use log::debug;

/// Starts repeating timers. Dropping the returned handle cancels the timer.
pub trait Ticker {
    type Handle;

    fn start(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser ticker backed by `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn start(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, on_tick)
    }
}

/// Owns the rotator's auto-advance timer. At most one timer is live at a time.
pub struct Autoplay<T: Ticker> {
    ticker: T,
    period_ms: u32,
    handle: Option<T::Handle>,
}

impl<T: Ticker> Autoplay<T> {
    pub fn new(ticker: T, period_ms: u32) -> Self {
        Self {
            ticker,
            period_ms,
            handle: None,
        }
    }

    /// Tears down the current timer and, if `active`, arms a new one that
    /// first fires a full period from now.
    pub fn sync<F>(&mut self, active: bool, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        if active {
            debug!("autoplay armed, every {}ms", self.period_ms);
            self.handle = Some(self.ticker.start(self.period_ms, Box::new(on_tick)));
        }
    }

    pub fn stop(&mut self) {
        if self.is_armed() {
            debug!("autoplay stopped");
        }
        self.handle = None;
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::rotator::Rotator;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Armed {
        id: u64,
        period: u64,
        due: u64,
        on_tick: Box<dyn FnMut()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        timers: Vec<Armed>,
    }

    /// Virtual-time ticker: timers only fire from `elapse`.
    #[derive(Clone, Default)]
    struct ManualTicker(Rc<RefCell<Clock>>);

    struct ManualHandle {
        id: u64,
        clock: Rc<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            let id = self.id;
            self.clock.borrow_mut().timers.retain(|t| t.id != id);
        }
    }

    impl Ticker for ManualTicker {
        type Handle = ManualHandle;

        fn start(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> ManualHandle {
            let mut clock = self.0.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(period_ms);
            clock.timers.push(Armed {
                id,
                period: u64::from(period_ms),
                due,
                on_tick,
            });
            ManualHandle {
                id,
                clock: self.0.clone(),
            }
        }
    }

    impl ManualTicker {
        fn elapse(&self, ms: u64) {
            let target = self.0.borrow().now + ms;
            loop {
                let mut clock = self.0.borrow_mut();
                let next = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| t.due)
                    .map(|(i, _)| i);
                match next {
                    Some(i) => {
                        clock.now = clock.timers[i].due;
                        let timer = &mut clock.timers[i];
                        timer.due += timer.period;
                        (timer.on_tick)();
                    }
                    None => {
                        clock.now = target;
                        break;
                    }
                }
            }
        }

        fn live(&self) -> usize {
            self.0.borrow().timers.len()
        }
    }

    struct Harness {
        ticker: ManualTicker,
        autoplay: Autoplay<ManualTicker>,
        rotator: Rc<RefCell<Rotator>>,
    }

    impl Harness {
        fn new(len: usize) -> Self {
            let ticker = ManualTicker::default();
            Self {
                autoplay: Autoplay::new(ticker.clone(), 4000),
                ticker,
                rotator: Rc::new(RefCell::new(Rotator::new(len).unwrap())),
            }
        }

        /// What the testimonial component's effect does on every
        /// in-view/paused transition.
        fn sync(&mut self) {
            let active = self.rotator.borrow().auto_advance_active();
            let rotator = self.rotator.clone();
            self.autoplay.sync(active, move || {
                rotator.borrow_mut().tick();
            });
        }

        fn set_in_view(&mut self, in_view: bool) {
            self.rotator.borrow_mut().set_in_view(in_view);
            self.sync();
        }

        fn set_paused(&mut self, paused: bool) {
            self.rotator.borrow_mut().set_paused(paused);
            self.sync();
        }

        fn current(&self) -> usize {
            self.rotator.borrow().current()
        }
    }

    #[test]
    fn three_ticks_advance_three_places() {
        let mut h = Harness::new(5);
        h.set_in_view(true);
        h.ticker.elapse(3 * 4000);
        assert_eq!(h.current(), 3);
    }

    #[test]
    fn nothing_fires_before_a_full_period() {
        let mut h = Harness::new(5);
        h.set_in_view(true);
        h.ticker.elapse(3999);
        assert_eq!(h.current(), 0);
        h.ticker.elapse(1);
        assert_eq!(h.current(), 1);
    }

    #[test]
    fn paused_never_advances() {
        let mut h = Harness::new(5);
        h.set_in_view(true);
        h.set_paused(true);
        assert!(!h.autoplay.is_armed());
        h.ticker.elapse(60 * 60 * 1000);
        assert_eq!(h.current(), 0);
    }

    #[test]
    fn out_of_view_never_advances() {
        let mut h = Harness::new(5);
        h.sync();
        assert!(!h.autoplay.is_armed());
        h.ticker.elapse(60 * 60 * 1000);
        assert_eq!(h.current(), 0);

        h.set_in_view(true);
        h.ticker.elapse(4000);
        h.set_in_view(false);
        h.ticker.elapse(40_000);
        assert_eq!(h.current(), 1);
    }

    #[test]
    fn resume_restarts_the_countdown() {
        let mut h = Harness::new(5);
        h.set_in_view(true);
        h.ticker.elapse(3000);
        h.set_paused(true);
        h.ticker.elapse(5000);
        h.set_paused(false);

        // The 3s elapsed before the pause do not carry over.
        h.ticker.elapse(1000);
        assert_eq!(h.current(), 0);
        h.ticker.elapse(3000);
        assert_eq!(h.current(), 1);
    }

    #[test]
    fn repeated_syncs_never_stack_timers() {
        let mut h = Harness::new(5);
        h.set_in_view(true);
        for _ in 0..5 {
            h.sync();
        }
        assert_eq!(h.ticker.live(), 1);
        h.ticker.elapse(4000);
        assert_eq!(h.current(), 1);
    }

    #[test]
    fn stale_tick_after_pause_is_dropped() {
        let mut h = Harness::new(5);
        h.set_in_view(true);
        // Pause without re-syncing: the old timer is still armed, but the
        // rotator refuses the tick.
        h.rotator.borrow_mut().set_paused(true);
        h.ticker.elapse(4000);
        assert_eq!(h.current(), 0);
    }

    #[test]
    fn stop_releases_the_timer() {
        let mut h = Harness::new(5);
        h.set_in_view(true);
        h.autoplay.stop();
        assert_eq!(h.ticker.live(), 0);
        h.ticker.elapse(20_000);
        assert_eq!(h.current(), 0);
    }
}
