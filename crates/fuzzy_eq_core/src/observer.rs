//! Diagnostic side channel.
//!
//! The engine reports one [`Event`] per comparison it performs, children
//! before parents. Observers never influence the verdict.

use num_complex::Complex64;
use std::cell::RefCell;
use std::fmt;

use crate::dispatch::Category;

/// Rule-specific information attached to an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detail {
    None,
    Numeric {
        left: Complex64,
        right: Complex64,
        distance: f64,
        tolerance: f64,
    },
    SizeMismatch {
        left: usize,
        right: usize,
    },
    /// Tuple arity differs; `None` marks an operand that is not a tuple.
    ArityMismatch {
        left: Option<usize>,
        right: Option<usize>,
    },
    /// First position that did not match.
    Mismatch {
        index: usize,
    },
    /// Entry of the left map that found no partner on the right.
    MissingKey {
        index: usize,
    },
    DepthLimit {
        limit: usize,
    },
    /// The type advertised a capability but did not provide the view for it.
    Malformed,
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::None => Ok(()),
            Detail::Numeric {
                left,
                right,
                distance,
                tolerance,
            } => write!(
                f,
                "|{left} - {right}| = {distance} against tolerance {tolerance}"
            ),
            Detail::SizeMismatch { left, right } => write!(f, "sizes {left} and {right}"),
            Detail::ArityMismatch { left, right } => write!(f, "arities {left:?} and {right:?}"),
            Detail::Mismatch { index } => write!(f, "first mismatch at position {index}"),
            Detail::MissingKey { index } => write!(f, "no partner for entry {index}"),
            Detail::DepthLimit { limit } => write!(f, "nesting deeper than {limit}"),
            Detail::Malformed => f.write_str("capability without matching view"),
        }
    }
}

/// One comparator boundary: the rule taken, where, on what, and the verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub category: Category,
    pub depth: usize,
    pub left: &'static str,
    pub right: &'static str,
    pub detail: Detail,
    pub result: bool,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[depth {}] {} {} vs {}: {}",
            self.depth, self.category, self.left, self.right, self.result
        )?;
        if self.detail != Detail::None {
            write!(f, " ({})", self.detail)?;
        }
        Ok(())
    }
}

pub trait Observer {
    fn observe(&self, event: &Event);
}

impl<F: Fn(&Event)> Observer for F {
    fn observe(&self, event: &Event) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn observe(&self, _event: &Event) {}
}

/// Forwards events to the `log` facade: mismatches at debug level,
/// matches at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&self, event: &Event) {
        if event.result {
            log::trace!(target: "fuzzy_eq", "{event}");
        } else {
            log::debug!(target: "fuzzy_eq", "{event}");
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn take(self) -> Vec<Event> {
        self.events.into_inner()
    }

    /// Events for comparisons that failed, in the order they were reported.
    pub fn mismatches(&self) -> Vec<Event> {
        self.events
            .borrow()
            .iter()
            .filter(|event| !event.result)
            .cloned()
            .collect()
    }
}

impl Observer for RecordingObserver {
    fn observe(&self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}
