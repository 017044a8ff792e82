use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Tracks the applied value of a debounced input and which pending change,
/// if any, may still replace it.
///
/// Every change that differs from the applied value gets a fresh ticket;
/// only the newest ticket's timer can apply its value. Changing back to the
/// applied value cancels whatever was pending.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    applied: T,
    pending: Option<(u64, T)>,
    latest: u64,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            applied: initial,
            pending: None,
            latest: 0,
        }
    }

    pub fn applied(&self) -> &T {
        &self.applied
    }

    /// Record a change. Returns the ticket to fire once the quiet period has
    /// passed, or `None` when there is nothing to wait for.
    pub fn push(&mut self, value: T) -> Option<u64> {
        self.latest += 1;
        if value == self.applied {
            self.pending = None;
            return None;
        }
        self.pending = Some((self.latest, value));
        Some(self.latest)
    }

    /// Apply the pending value if `ticket` is still the newest. Returns
    /// whether the applied value changed.
    pub fn fire(&mut self, ticket: u64) -> bool {
        match self.pending.take() {
            Some((pending, value)) if pending == ticket => {
                self.applied = value;
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }
}

/// Returns `value` once it has stopped changing for `delay_ms`.
///
/// Each change drops the pending timeout, which cancels it, and the
/// [`Debouncer`] ticket keeps a timer that already fired from applying an
/// outdated value.
#[hook]
pub fn use_debounce<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());
    let debouncer = use_mut_ref(|| Debouncer::new(value.clone()));

    {
        let debounced = debounced.clone();
        use_effect_with((value, delay_ms), move |(value, delay_ms)| {
            let ticket = debouncer.borrow_mut().push(value.clone());
            let timeout = ticket.map(|ticket| {
                Timeout::new(*delay_ms, move || {
                    let applied = {
                        let mut debouncer = debouncer.borrow_mut();
                        debouncer.fire(ticket).then(|| debouncer.applied().clone())
                    };
                    if let Some(applied) = applied {
                        debounced.set(applied);
                    }
                })
            });
            move || drop(timeout)
        });
    }

    (*debounced).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_applies_only_when_its_timer_fires() {
        let mut debouncer = Debouncer::new(String::new());
        let ticket = debouncer.push("ana".to_string()).unwrap();
        assert_eq!(debouncer.applied(), "");

        assert!(debouncer.fire(ticket));
        assert_eq!(debouncer.applied(), "ana");
    }

    #[test]
    fn older_timer_cannot_apply_a_superseded_value() {
        let mut debouncer = Debouncer::new(String::new());
        let first = debouncer.push("a".to_string()).unwrap();
        let second = debouncer.push("an".to_string()).unwrap();

        assert!(!debouncer.fire(first));
        assert_eq!(debouncer.applied(), "");
        assert!(debouncer.fire(second));
        assert_eq!(debouncer.applied(), "an");
    }

    #[test]
    fn returning_to_the_applied_value_cancels_pending() {
        let mut debouncer = Debouncer::new("ana".to_string());
        let ticket = debouncer.push("anab".to_string()).unwrap();
        assert_eq!(debouncer.push("ana".to_string()), None);

        assert!(!debouncer.fire(ticket));
        assert_eq!(debouncer.applied(), "ana");
    }

    #[test]
    fn unchanged_value_needs_no_timer() {
        let mut debouncer = Debouncer::new(25u32);
        assert_eq!(debouncer.push(25), None);
    }
}
