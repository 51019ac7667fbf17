use std::sync::atomic::{AtomicU64, Ordering};

/// Background reads whose late responses must not overwrite newer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Tasks,
    Stats,
}

impl Endpoint {
    fn index(self) -> usize {
        match self {
            Self::Tasks => 0,
            Self::Stats => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    endpoint: Endpoint,
    seq: u64,
}

/// Hands out monotonically increasing tickets per endpoint. Only the holder
/// of the latest ticket may apply its response.
#[derive(Debug, Default)]
pub struct RequestFence {
    latest: [AtomicU64; 2],
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, endpoint: Endpoint) -> Ticket {
        let seq = self.latest[endpoint.index()].fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { endpoint, seq }
    }

    /// Marks every outstanding ticket for `endpoint` as stale.
    pub fn invalidate(&self, endpoint: Endpoint) {
        self.issue(endpoint);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.endpoint.index()].load(Ordering::SeqCst) == ticket.seq
    }
}
