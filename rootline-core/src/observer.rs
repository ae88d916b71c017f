/// Receives solver events and decides how the iteration should proceed.
///
/// Every Rootline solver offers each freshly recorded trace row to an
/// observer before testing for convergence, so callers can log progress,
/// collect extra data, or stop a long run early.
///
/// `observe` returns `Option<A>`: `Some(action)` requests a solver-specific
/// action, `None` lets the iteration continue.
///
/// Closures automatically implement `Observer`, and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn drive<O: Observer<usize, Stop>>(mut observer: O, events: usize) -> Option<usize> {
        (0..events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_can_stop() {
        let mut seen = 0;
        let stopped_at = drive(
            |event: &usize| {
                seen += 1;
                (*event == 3).then_some(Stop::Now)
            },
            10,
        );

        assert_eq!(stopped_at, Some(3));
        assert_eq!(seen, 4);
    }
}
