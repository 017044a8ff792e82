use yewdux::prelude::*;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Bumped whenever a reservation is saved, so views holding a copy of
    /// the list know to refetch it.
    pub reservations_revision: u64,
}

impl State {
    pub fn mark_reservations_changed(&mut self) {
        self.reservations_revision = self.reservations_revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saving_bumps_revision() {
        let mut state = State::default();
        state.mark_reservations_changed();
        state.mark_reservations_changed();
        assert_eq!(state.reservations_revision, 2);
    }
}
