//! Request Sequencing
//!
//! Fetches cannot be aborted, so a slow response can outlive the interval that
//! scheduled it and arrive after a newer one already rendered. Each fetch kind
//! carries a monotonically increasing token: a response is applied only if no
//! newer request of the same kind was issued in the meantime.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The independent fetch cycles that can overlap.
///
/// Kinds are keyed by the data a response writes, not by the endpoint: the
/// full product listing and the live feed both fill the product table, so
/// they share `Products` and supersede each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Summary,
    CurveListing,
    Products,
    Evolution,
    Alerts,
}

/// Monotonic token issuer, one sequence per fetch kind.
///
/// Clones share the same counters (single-threaded WASM, so `Rc` suffices).
#[derive(Clone, Default)]
pub struct FetchSeq {
    counters: Rc<RefCell<HashMap<FetchKind, u64>>>,
}

impl FetchSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token for `kind`, superseding all earlier ones
    pub fn begin(&self, kind: FetchKind) -> u64 {
        let mut counters = self.counters.borrow_mut();
        let counter = counters.entry(kind).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Whether `token` is still the newest request of its kind
    pub fn is_current(&self, kind: FetchKind, token: u64) -> bool {
        self.counters
            .borrow()
            .get(&kind)
            .map(|latest| *latest == token)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_increase_per_kind() {
        let seq = FetchSeq::new();
        assert_eq!(seq.begin(FetchKind::Summary), 1);
        assert_eq!(seq.begin(FetchKind::Summary), 2);
        // Other kinds have their own sequence
        assert_eq!(seq.begin(FetchKind::Products), 1);
    }

    #[test]
    fn newer_request_supersedes_older_token() {
        let seq = FetchSeq::new();
        let slow = seq.begin(FetchKind::Summary);
        let fast = seq.begin(FetchKind::Summary);

        // The fast request resolves first and is applied
        assert!(seq.is_current(FetchKind::Summary, fast));
        // The slow response arrives late and must be discarded
        assert!(!seq.is_current(FetchKind::Summary, slow));
    }

    #[test]
    fn kinds_do_not_interfere() {
        let seq = FetchSeq::new();
        let summary = seq.begin(FetchKind::Summary);
        seq.begin(FetchKind::Products);
        assert!(seq.is_current(FetchKind::Summary, summary));
    }

    #[test]
    fn clones_share_counters() {
        let seq = FetchSeq::new();
        let other = seq.clone();
        let token = seq.begin(FetchKind::Evolution);
        assert!(other.is_current(FetchKind::Evolution, token));
        other.begin(FetchKind::Evolution);
        assert!(!seq.is_current(FetchKind::Evolution, token));
    }

    #[test]
    fn unknown_token_is_never_current() {
        let seq = FetchSeq::new();
        assert!(!seq.is_current(FetchKind::Alerts, 0));
        assert!(!seq.is_current(FetchKind::Alerts, 7));
    }
}
