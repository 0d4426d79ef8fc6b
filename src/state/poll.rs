//! Polling Switch
//!
//! Holds the handle of an active interval timer. `gloo_timers::callback::
//! Interval` cancels itself on drop, so engaging a new handle or disengaging
//! the switch is enough to guarantee no further tick fires. Engaging while
//! already running replaces the old interval instead of stacking a second one.

/// On/off holder for a cancel-on-drop timer handle
#[derive(Debug, Default)]
pub struct PollSwitch<H> {
    handle: Option<H>,
}

impl<H> PollSwitch<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Start polling with `handle`, dropping (cancelling) any previous one
    pub fn engage(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    /// Stop polling; the returned handle cancels when the caller drops it
    pub fn disengage(&mut self) -> Option<H> {
        self.handle.take()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for an interval handle that records its own cancellation
    struct FakeInterval {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeInterval {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    #[test]
    fn disengaging_cancels_the_timer() {
        let cancelled = Rc::new(Cell::new(false));
        let mut switch = PollSwitch::new();
        switch.engage(FakeInterval {
            cancelled: Rc::clone(&cancelled),
        });
        assert!(switch.is_running());

        drop(switch.disengage());
        assert!(!switch.is_running());
        assert!(cancelled.get(), "timer must be cancelled once disengaged");
    }

    #[test]
    fn engaging_twice_replaces_the_old_timer() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let mut switch = PollSwitch::new();

        switch.engage(FakeInterval {
            cancelled: Rc::clone(&first),
        });
        switch.engage(FakeInterval {
            cancelled: Rc::clone(&second),
        });

        assert!(first.get(), "stacked interval must be cancelled");
        assert!(!second.get());
        assert!(switch.is_running());
    }

    #[test]
    fn disengaging_idle_switch_is_a_no_op() {
        let mut switch: PollSwitch<FakeInterval> = PollSwitch::new();
        assert!(switch.disengage().is_none());
        assert!(!switch.is_running());
    }
}
