//! Debounce
//!
//! `Debouncer` is the timer-free core: every new value supersedes the pending
//! one and only the newest ticket may settle. `use_debounced` drives it from a
//! signal with a single `gloo-timers` timeout.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Handle for one scheduled update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    current: T,
    pending: Option<(Ticket, T)>,
    issued: u64,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            pending: None,
            issued: 0,
        }
    }

    /// Replace any pending update with `value`.
    ///
    /// Returns `None` when `value` already equals the output; the previous
    /// pending update is cancelled either way.
    pub fn schedule(&mut self, value: T) -> Option<Ticket> {
        self.pending = None;
        if value == self.current {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some((ticket, value));
        Some(ticket)
    }

    /// Apply the pending value if `ticket` is still the newest; returns the new output
    pub fn settle(&mut self, ticket: Ticket) -> Option<&T> {
        match self.pending.take() {
            Some((pending, value)) if pending == ticket => {
                self.current = value;
                Some(&self.current)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }
}

/// Debounced copy of `source` that follows it once it has been stable for `delay_ms`
pub fn use_debounced<T>(source: Signal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let initial = source.get_untracked();
    let (debounced, set_debounced) = signal(initial.clone());
    let debouncer = Rc::new(RefCell::new(Debouncer::new(initial)));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    Effect::new(move |_| {
        let value = source.get();
        let Some(ticket) = debouncer.borrow_mut().schedule(value) else {
            // Dropping the handle cancels the timer
            pending.borrow_mut().take();
            return;
        };

        let debouncer = Rc::clone(&debouncer);
        let timeout = Timeout::new(delay_ms, move || {
            let settled = debouncer.borrow_mut().settle(ticket).cloned();
            if let Some(value) = settled {
                set_debounced.set(value);
            }
        });
        *pending.borrow_mut() = Some(timeout);
    });

    debounced
}

#[cfg(test)]
impl<T> Debouncer<T> {
    fn value(&self) -> &T {
        &self.current
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
