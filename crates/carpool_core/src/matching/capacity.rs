/// Remaining seats per driver for the lifetime of one run.
///
/// Drivers are identified by their index in the driver sequence. Seats are only
/// ever consumed, never restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityLedger {
    remaining: Vec<u32>,
}

impl CapacityLedger {
    pub fn new(driver_count: usize, max_capacity: u32) -> Self {
        Self {
            remaining: vec![max_capacity; driver_count],
        }
    }

    pub fn remaining(&self, driver_index: usize) -> u32 {
        self.remaining.get(driver_index).copied().unwrap_or(0)
    }

    pub fn has_seat(&self, driver_index: usize) -> bool {
        self.remaining(driver_index) > 0
    }

    /// Consume one seat. Returns `false` (and changes nothing) if the driver is full.
    pub fn take_seat(&mut self, driver_index: usize) -> bool {
        match self.remaining.get_mut(driver_index) {
            Some(seats) if *seats > 0 => {
                *seats -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn driver_count(&self) -> usize {
        self.remaining.len()
    }
}
