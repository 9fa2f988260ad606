//! External event-stream reader, compiled under the `hepmc3` feature.
//!
//! Parsing external formats stays on the host side of the [`EventStream`]
//! seam; this module only forwards already-decoded records into events.

use std::collections::VecDeque;
use std::fmt;

use hpl_core::errors::{ErrorInfo, HplError};
use hpl_core::event::{Event, PrimaryVertex};

/// One decoded external event: the vertices to append to the event under
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Primary vertices in file order.
    pub vertices: Vec<PrimaryVertex>,
}

/// Host-implemented supplier of decoded event records.
pub trait EventStream {
    /// The next record, or `None` when the stream is exhausted.
    fn next_record(&mut self) -> Result<Option<EventRecord>, HplError>;
}

/// In-memory stream, used in tests and for replaying pre-decoded runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStream {
    records: VecDeque<EventRecord>,
}

impl InMemoryStream {
    /// Creates a stream over the given records.
    pub fn new(records: impl IntoIterator<Item = EventRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Records not yet consumed.
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl EventStream for InMemoryStream {
    fn next_record(&mut self) -> Result<Option<EventRecord>, HplError> {
        Ok(self.records.pop_front())
    }
}

/// Forwards one stream record into each generated event.
pub struct EventReader {
    stream: Box<dyn EventStream>,
}

impl EventReader {
    /// Wraps a host-supplied stream.
    pub fn new(stream: Box<dyn EventStream>) -> Self {
        Self { stream }
    }

    /// Appends the next record's vertices to the event. Exhaustion is an
    /// error: the run asked for more events than the stream holds.
    pub fn generate_primaries(&mut self, event: &mut Event) -> Result<(), HplError> {
        match self.stream.next_record()? {
            Some(record) => {
                for vertex in record.vertices {
                    event.add_primary_vertex(vertex);
                }
                Ok(())
            }
            None => Err(HplError::Generator(
                ErrorInfo::new("stream-exhausted", "event stream has no more records")
                    .with_context("event", event.id.to_string()),
            )),
        }
    }
}

impl fmt::Debug for EventReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventReader").finish_non_exhaustive()
    }
}
