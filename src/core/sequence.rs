// src/core/sequence.rs
//
// Per-action request tokens. Every fetch takes a ticket; when the response
// comes back it's only rendered if no newer ticket was issued for the same
// slot in the meantime. Older responses are dropped.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Categories,
    Products,
    Compare,
    Deals,
    Detail,
    History,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub slot: Slot,
    pub seq: u64,
}

#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: HashMap<Slot, u64>,
}

impl RequestSeq {
    pub fn new() -> Self { Self::default() }

    /// Issue the next ticket for `slot`; earlier tickets become stale.
    pub fn begin(&mut self, slot: Slot) -> Ticket {
        let n = self.latest.entry(slot).or_insert(0);
        *n += 1;
        Ticket { slot, seq: *n }
    }

    pub fn is_current(&self, t: &Ticket) -> bool {
        self.latest.get(&t.slot).copied() == Some(t.seq)
    }

    /// Accept a response for `t`. Stale tickets are logged and refused.
    pub fn accept(&self, t: &Ticket) -> bool {
        let ok = self.is_current(t);
        if !ok {
            tracing::debug!(
                "Fetch: dropping stale {:?} response (seq={}, latest={:?})",
                t.slot, t.seq, self.latest.get(&t.slot)
            );
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_invalidates_older() {
        let mut seq = RequestSeq::new();
        let first = seq.begin(Slot::Products);
        let second = seq.begin(Slot::Products);
        assert!(!seq.accept(&first));
        assert!(seq.accept(&second));
    }

    #[test]
    fn slots_are_independent() {
        let mut seq = RequestSeq::new();
        let products = seq.begin(Slot::Products);
        let _deals = seq.begin(Slot::Deals);
        assert!(seq.accept(&products));
    }

    #[test]
    fn unknown_ticket_is_refused() {
        let seq = RequestSeq::new();
        assert!(!seq.accept(&Ticket { slot: Slot::Compare, seq: 1 }));
    }
}
