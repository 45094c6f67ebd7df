//! Batch validation engine and status reporting.
//!
//! [`BatchValidator`] drives the sequential pass over survey records;
//! [`StatusSink`] is the reporting capability it is handed. The verdict
//! strings are fixed output contract and exposed as constants so consumers
//! and tests can match on them exactly.

mod batch;
mod report;

pub use batch::BatchValidator;
pub use report::{
    ChannelSink, StatusSink, ValidationEvent, MESSAGE_INVALID_AREA_COORDINATES,
    MESSAGE_INVALID_SECTORS, MESSAGE_VALID_AREA_COORDINATES, MESSAGE_VALID_SECTORS,
};
