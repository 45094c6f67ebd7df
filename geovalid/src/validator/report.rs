//! Status reporting for the batch validator.
//!
//! The validator has no opinion about threads or terminals: it only needs
//! something that accepts status lines and progress updates. [`StatusSink`]
//! is that capability; [`ChannelSink`] is the stock implementation that
//! marshals events over an unbounded channel to whatever consumer drives
//! the display.

use tokio::sync::mpsc;

/// Verdict for an area definition whose diagonal corners are degenerate.
pub const MESSAGE_INVALID_AREA_COORDINATES: &str = "Error: Invalid Area Coordinates";

/// Verdict for a well-formed area definition.
///
/// The historical output spells "Succes" with one final `s`; downstream
/// consumers match on the exact bytes, so the spelling is kept.
pub const MESSAGE_VALID_AREA_COORDINATES: &str = "Succes: Area Coordinates Valid";

/// Verdict for a group with an out-of-area or overlapping sector, or with
/// no usable area definition.
pub const MESSAGE_INVALID_SECTORS: &str =
    "Error: A sector is outside the area or overlaps with another sector";

/// Verdict for a group whose sectors are all contained and disjoint.
pub const MESSAGE_VALID_SECTORS: &str = "Success: All sectors within area and clear of overlap";

/// Receiver of validation output.
///
/// Implementations may print, buffer or forward; the validator calls them
/// from whatever thread runs the batch pass.
pub trait StatusSink {
    /// Delivers one human-readable status line.
    fn status(&mut self, line: &str);

    /// Reports batch progress as (records completed, total records).
    ///
    /// Values are monotonically non-decreasing and reach
    /// `completed == total` at the end of the batch.
    fn progress(&mut self, completed: u64, total: u64);
}

/// One unit of validator output, as carried by [`ChannelSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationEvent {
    /// A status line.
    Status(String),
    /// A progress update.
    Progress { completed: u64, total: u64 },
}

/// Sink that forwards events over an unbounded channel.
///
/// Sends are fire-and-forget: once the receiver is gone (e.g. the consumer
/// stopped listening after cancellation) further events are dropped
/// silently.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<ValidationEvent>,
}

impl ChannelSink {
    /// Creates a sink that sends events to `tx`.
    pub fn new(tx: mpsc::UnboundedSender<ValidationEvent>) -> Self {
        Self { tx }
    }
}

impl StatusSink for ChannelSink {
    fn status(&mut self, line: &str) {
        let _ = self.tx.send(ValidationEvent::Status(line.to_string()));
    }

    fn progress(&mut self, completed: u64, total: u64) {
        let _ = self.tx.send(ValidationEvent::Progress { completed, total });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_forwards_events() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut sink = ChannelSink::new(tx);

        sink.status("hello");
        sink.progress(1, 4);

        assert_eq!(rx.try_recv().unwrap(), ValidationEvent::Status("hello".to_string()));
        assert_eq!(
            rx.try_recv().unwrap(),
            ValidationEvent::Progress { completed: 1, total: 4 }
        );
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut sink = ChannelSink::new(tx);
        drop(rx);

        // Must not panic once the consumer is gone
        sink.status("nobody listening");
        sink.progress(2, 2);
    }
}
