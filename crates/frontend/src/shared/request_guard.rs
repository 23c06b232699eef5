/// Ticket of an issued request. Only the newest ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Tracks the most recent of a series of overlapping async requests so late
/// responses of superseded requests can be dropped.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    issued: u64,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket; every earlier ticket becomes stale.
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }
}
