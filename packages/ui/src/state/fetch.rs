/// Identifies one issued request of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter per view.
///
/// Every fetch takes a [`Ticket`]; only the most recently issued ticket may
/// write its response. A slow response to an older page request therefore
/// cannot overwrite a newer one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    generation: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Invalidate whatever is in flight.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}

/// Remote data owned by a single view.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadable<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    tracker: RequestTracker,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            tracker: RequestTracker::default(),
        }
    }
}

impl<T> Loadable<T> {
    /// Initial state of a view that fetches on mount.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Start a fetch. Previously loaded data stays visible until replaced.
    pub fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.tracker.issue()
    }

    /// Store a response. Returns `false` and changes nothing if `ticket` was
    /// superseded by a newer fetch or cancelled.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if !self.tracker.is_current(ticket) {
            tracing::debug!("discarding out-of-order response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn cancel(&mut self) {
        self.tracker.cancel();
        self.loading = false;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_until_first_response() {
        let mut state = Loadable::<u32>::pending();
        assert!(state.is_loading());
        let ticket = state.begin();
        state.resolve(ticket, Err("Failed to fetch workshops.".into()));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_success_replaces_data() {
        let mut state = Loadable::<u32>::default();
        let ticket = state.begin();
        assert!(state.is_loading());

        assert!(state.resolve(ticket, Ok(7)));
        assert!(!state.is_loading());
        assert_eq!(state.data(), Some(&7));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state = Loadable::<u32>::default();
        let first = state.begin();
        state.resolve(first, Ok(1));

        let second = state.begin();
        state.resolve(second, Err("Failed to fetch bookings.".into()));
        assert_eq!(state.data(), Some(&1));
        assert_eq!(state.error(), Some("Failed to fetch bookings."));
    }

    #[test]
    fn test_out_of_order_response_is_dropped() {
        let mut state = Loadable::<&str>::default();
        let page_one = state.begin();
        let page_two = state.begin();

        // Page two answers first, page one straggles in afterwards
        assert!(state.resolve(page_two, Ok("page two")));
        assert!(!state.resolve(page_one, Ok("page one")));
        assert_eq!(state.data(), Some(&"page two"));
    }

    #[test]
    fn test_cancel_discards_in_flight() {
        let mut state = Loadable::<u32>::default();
        let ticket = state.begin();
        state.cancel();

        assert!(!state.resolve(ticket, Ok(3)));
        assert!(state.data().is_none());
        assert!(!state.is_loading());
    }
}
