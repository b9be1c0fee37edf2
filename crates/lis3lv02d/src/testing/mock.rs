extern crate std;

use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{self, I2c};
use portable_atomic::{AtomicU32, Ordering};

use crate::data::{Axis, Position};
use crate::error::Error;
use crate::event::{InterruptLine, NotifySink};
use crate::interface::Interface;
use crate::sampler::InputSink;

#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    reads: Vec<u8>,
    writes: Vec<(u8, u8)>,
    failing_reads: Vec<u8>,
    failing_writes: Vec<u8>,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            reads: Vec::new(),
            writes: Vec::new(),
            failing_reads: Vec::new(),
            failing_writes: Vec::new(),
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    pub(crate) fn with_failing_read(mut self, reg: u8) -> Self {
        self.failing_reads.push(reg);
        self
    }

    pub(crate) fn with_failing_write(mut self, reg: u8) -> Self {
        self.failing_writes.push(reg);
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    pub(crate) fn reads(&self) -> &[u8] {
        &self.reads
    }

    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    pub(crate) fn clear_log(&mut self) {
        self.reads.clear();
        self.writes.clear();
    }
}

impl Interface for MockInterface {
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        self.reads.push(reg);
        if self.failing_reads.contains(&reg) {
            return Err(Error::Bus);
        }
        Ok(self.regs[reg as usize])
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        if self.failing_writes.contains(&reg) {
            return Err(Error::Bus);
        }
        self.regs[reg as usize] = value;
        self.writes.push((reg, value));
        Ok(())
    }
}

/// Register file behind a 7-bit I2C address. The first written byte of a
/// transfer selects the register pointer.
#[derive(Debug)]
pub(crate) struct MockI2c {
    address: u8,
    regs: [u8; 128],
    pointer: u8,
    pub(crate) frames: Vec<Vec<u8>>,
}

impl MockI2c {
    pub(crate) fn new(address: u8) -> Self {
        Self {
            address,
            regs: [0u8; 128],
            pointer: 0,
            frames: Vec::new(),
        }
    }

    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.regs[(reg & 0x7F) as usize] = value;
        self
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[(reg & 0x7F) as usize]
    }
}

impl i2c::ErrorType for MockI2c {
    type Error = i2c::ErrorKind;
}

impl I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(i2c::ErrorKind::NoAcknowledge(i2c::NoAcknowledgeSource::Address));
        }
        for op in operations {
            match op {
                i2c::Operation::Write(bytes) => {
                    self.frames.push(bytes.to_vec());
                    if let Some((&reg, data)) = bytes.split_first() {
                        self.pointer = reg & 0x7F;
                        for value in data {
                            self.regs[self.pointer as usize] = *value;
                            self.pointer = (self.pointer + 1) & 0x7F;
                        }
                    }
                }
                i2c::Operation::Read(buffer) => {
                    for slot in buffer.iter_mut() {
                        *slot = self.regs[self.pointer as usize];
                        self.pointer = (self.pointer + 1) & 0x7F;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Completes immediately until `budget` calls are used up, then parks forever.
#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) last_ns: Option<u32>,
    pub(crate) budget: Option<u32>,
}

impl MockDelay {
    pub(crate) fn with_budget(budget: u32) -> Self {
        Self {
            budget: Some(budget),
            ..Self::default()
        }
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.last_ns = Some(ns);
        if let Some(budget) = self.budget
            && self.calls > budget
        {
            core::future::pending::<()>().await;
        }
    }
}

#[derive(Default, Debug)]
pub(crate) struct MockLine {
    pub(crate) busy: bool,
    pub(crate) acquires: u32,
    pub(crate) releases: u32,
}

impl MockLine {
    pub(crate) fn busy() -> Self {
        Self {
            busy: true,
            ..Self::default()
        }
    }
}

impl InterruptLine for MockLine {
    type Error = ();

    fn acquire(&mut self) -> Result<(), Self::Error> {
        if self.busy {
            return Err(());
        }
        self.acquires += 1;
        Ok(())
    }

    fn release(&mut self) {
        self.releases += 1;
    }
}

/// Reports `edges` rising edges, then fails.
#[derive(Debug)]
pub(crate) struct MockPin {
    edges: u32,
}

impl MockPin {
    pub(crate) fn with_edges(edges: u32) -> Self {
        Self { edges }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PinClosed;

impl embedded_hal::digital::Error for PinClosed {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for MockPin {
    type Error = PinClosed;
}

impl Wait for MockPin {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        if self.edges == 0 {
            return Err(PinClosed);
        }
        self.edges -= 1;
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.wait_for_rising_edge().await
    }
}

pub(crate) struct CountingSink {
    hits: AtomicU32,
}

impl CountingSink {
    pub(crate) const fn new() -> Self {
        Self {
            hits: AtomicU32::new(0),
        }
    }

    pub(crate) fn count(&self) -> u32 {
        self.hits.load(Ordering::Acquire)
    }
}

impl NotifySink for CountingSink {
    fn notify(&self) {
        self.hits.fetch_add(1, Ordering::AcqRel);
    }
}

#[derive(Default, Debug)]
pub(crate) struct RecordingInput {
    pub(crate) params: Vec<(Axis, i32, i32, i32, i32)>,
    pub(crate) reports: Vec<Position>,
}

impl InputSink for RecordingInput {
    fn set_abs_params(&mut self, axis: Axis, min: i32, max: i32, fuzz: i32, flat: i32) {
        self.params.push((axis, min, max, fuzz, flat));
    }

    fn report(&mut self, delta: Position) {
        self.reports.push(delta);
    }
}
