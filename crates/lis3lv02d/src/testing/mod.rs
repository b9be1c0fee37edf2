//! Testing infrastructure (mock interfaces, delays, lines, sinks).

pub(crate) mod mock;

pub(crate) use mock::{
    CountingSink, MockDelay, MockI2c, MockInterface, MockLine, MockPin, RecordingInput,
};
