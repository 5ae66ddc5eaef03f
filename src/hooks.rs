use digital_timer::{defaults::TICK_INTERVAL_MS, TimerAction, TimerState};
use gloo_timers::callback::Interval;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Shared slot for the recurring tick. At most one `Interval` lives here.
type TickSlot = Rc<RefCell<Option<Interval>>>;

/// Drop the pending handle, if any. Safe to call when nothing is scheduled.
fn cancel_tick<H>(slot: &RefCell<Option<H>>) {
    // Dropping an Interval clears it on the JS side.
    if slot.borrow_mut().take().is_some() {
        debug!("Tick interval cancelled");
    }
}

/// Store `handle` after cancelling whatever was scheduled before it.
fn install_tick<H>(slot: &RefCell<Option<H>>, handle: H) {
    cancel_tick(slot);
    *slot.borrow_mut() = Some(handle);
}

/// Replace whatever is scheduled with a fresh interval dispatching `Tick`.
fn schedule_tick(slot: &TickSlot, dispatcher: UseReducerDispatcher<TimerState>) {
    let interval = Interval::new(TICK_INTERVAL_MS, move || {
        dispatcher.dispatch(TimerAction::Tick);
    });
    install_tick(slot, interval);
    debug!("Tick interval scheduled every {} ms", TICK_INTERVAL_MS);
}

/// Holds the timer state and the callbacks for its controls.
#[derive(Clone)]
pub struct DigitalTimerHandle {
    /// Current snapshot of the timer.
    pub state: TimerState,
    /// Start or pause; restarts from zero when the countdown completed.
    pub on_toggle: Callback<MouseEvent>,
    /// Stop ticking and restore the initial state.
    pub on_reset: Callback<MouseEvent>,
    pub on_increase_limit: Callback<MouseEvent>,
    pub on_decrease_limit: Callback<MouseEvent>,
}

/// Custom hook owning the timer reducer and its recurring tick.
#[hook]
pub fn use_digital_timer() -> DigitalTimerHandle {
    let state = use_reducer(TimerState::default);
    let tick_slot: TickSlot = use_mut_ref(|| None::<Interval>);

    // Effect keeps the interval in step with `is_running`; the destructor
    // covers pause, completion, reset and unmount.
    {
        let dispatcher = state.dispatcher();
        let tick_slot = tick_slot.clone();
        use_effect_with(state.is_running, move |&running| {
            if running {
                schedule_tick(&tick_slot, dispatcher);
            } else {
                cancel_tick(&tick_slot);
            }
            move || cancel_tick(&tick_slot)
        });
    }

    let dispatch_on_click = |action: TimerAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    let on_reset = {
        let dispatcher = state.dispatcher();
        let tick_slot = tick_slot.clone();
        Callback::from(move |_: MouseEvent| {
            cancel_tick(&tick_slot);
            dispatcher.dispatch(TimerAction::Reset);
        })
    };

    DigitalTimerHandle {
        state: *state,
        on_toggle: dispatch_on_click(TimerAction::ToggleStartPause),
        on_reset,
        on_increase_limit: dispatch_on_click(TimerAction::IncreaseLimit),
        on_decrease_limit: dispatch_on_click(TimerAction::DecreaseLimit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Stand-in for `Interval` that tracks how many handles are alive.
    struct CountedHandle {
        live: Rc<Cell<usize>>,
    }

    impl CountedHandle {
        fn new(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Self { live: live.clone() }
        }
    }

    impl Drop for CountedHandle {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn cancel_on_empty_slot_is_a_no_op() {
        let slot: TickSlot = Rc::new(RefCell::new(None));
        cancel_tick(&slot);
        cancel_tick(&slot);
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn installing_replaces_the_previous_handle() {
        let live = Rc::new(Cell::new(0));
        let slot = RefCell::new(None);

        install_tick(&slot, CountedHandle::new(&live));
        install_tick(&slot, CountedHandle::new(&live));
        install_tick(&slot, CountedHandle::new(&live));

        assert_eq!(live.get(), 1);
        assert!(slot.borrow().is_some());
    }

    #[test]
    fn cancel_drops_the_pending_handle_once() {
        let live = Rc::new(Cell::new(0));
        let slot = RefCell::new(None);

        install_tick(&slot, CountedHandle::new(&live));
        cancel_tick(&slot);
        assert_eq!(live.get(), 0);
        assert!(slot.borrow().is_none());

        cancel_tick(&slot);
        assert_eq!(live.get(), 0);
    }
}
