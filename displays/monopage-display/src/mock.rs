//! Recording bus for host tests

use heapless::Vec;
use monopage_hal::I2cBus;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

/// Enough room for a full-screen flush plus cursor commands
pub const CAPACITY: usize = 2048;

/// Mock bus error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Nack,
    ArbitrationLost,
}

/// One recorded two-byte transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub address: u8,
    pub bytes: [u8; 2],
}

/// Bus that records every write
pub struct RecordingBus {
    writes: Vec<Write, CAPACITY>,
    /// Fail every write once this many have succeeded
    fail_after: Option<usize>,
    /// Probe result
    probe_status: Result<(), MockError>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            fail_after: None,
            probe_status: Ok(()),
        }
    }

    /// Bus with no device answering probes
    pub fn absent(error: MockError) -> Self {
        Self {
            probe_status: Err(error),
            ..Self::new()
        }
    }

    pub fn fail_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    pub fn writes(&self) -> &[Write] {
        &self.writes
    }

    fn payloads(&self, control: u8) -> Vec<u8, CAPACITY> {
        self.writes
            .iter()
            .filter(|w| w.bytes[0] == control)
            .map(|w| w.bytes[1])
            .collect()
    }

    /// Payloads of command transactions, in order
    pub fn commands(&self) -> Vec<u8, CAPACITY> {
        self.payloads(CONTROL_COMMAND)
    }

    /// Payloads of data transactions, in order
    pub fn data(&self) -> Vec<u8, CAPACITY> {
        self.payloads(CONTROL_DATA)
    }
}

impl I2cBus for RecordingBus {
    type Error = MockError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
            return Err(MockError::Nack);
        }
        assert_eq!(data.len(), 2, "driver sends two-byte transactions only");
        self.writes
            .push(Write {
                address,
                bytes: [data[0], data[1]],
            })
            .expect("recording bus full");
        Ok(())
    }

    fn probe(&mut self, _address: u8) -> Result<(), Self::Error> {
        self.probe_status
    }
}
