//! Guard against stale responses from overlapping fetches

/// Hands out increasing generation numbers; only the latest one is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier one
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    #[cfg(test)]
    pub fn latest(&self) -> u64 {
        self.latest
    }
}
