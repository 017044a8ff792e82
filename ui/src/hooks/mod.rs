pub mod use_debounce;
pub mod use_fetch;
pub mod use_reservations;

pub use use_debounce::use_debounce;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_reservations::use_reservations;

/// Distinguishes "never fetched" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}

/// Monotonic request tags, so a response can tell whether it is still the
/// newest one issued.
///
/// Responses carrying an older ticket than the last one issued are stale and
/// must be dropped instead of overwriting newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue a new ticket, making every earlier one stale.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_ticket_is_current() {
        let mut sequence = RequestSequence::default();
        let first = sequence.issue();
        assert!(sequence.is_latest(first));

        let second = sequence.issue();
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
    }

    #[test]
    fn fetch_state_as_ref() {
        let empty: FetchState<Vec<u8>> = FetchState::NotFetched;
        assert!(!empty.is_fetched());
        assert_eq!(empty.as_ref(), None);

        let fetched = FetchState::Fetched(Vec::<u8>::new());
        assert!(fetched.is_fetched());
        assert_eq!(fetched.as_ref(), Some(&vec![]));
    }
}
