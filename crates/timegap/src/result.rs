//! Offset results: insertion-ordered [`TimeFrame`]s keyed by unit name.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One granularity's computed offset: a numeric value plus its phrasing.
///
/// Equality is structural over all three fields, so two frames compare
/// equal exactly when they would print the same.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeFrame {
    /// The key this frame is stored under ("day", "year", ...).
    pub name: String,
    /// Offset counted in units of `name`. Always whole-valued.
    pub value: f64,
    /// The human phrasing ("in 3 days", "a year ago").
    pub phrase: String,
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}[{}]", self.name, self.value, self.phrase)
    }
}

/// The outcome of one offset or distance computation: at most one
/// [`TimeFrame`] per key, iterated in first-insertion order.
///
/// # Examples
///
/// ```
/// use timegap::OffsetResult;
///
/// let mut result = OffsetResult::new();
/// result.add_timeframe("day", 3.0, "in 3 days");
/// result.add_timeframe("week", 0.0, "in 0 weeks");
///
/// assert_eq!(result.timeframe("day").unwrap().phrase, "in 3 days");
/// assert_eq!(result.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetResult {
    frames: Vec<TimeFrame>,
}

impl OffsetResult {
    /// An empty result holding no frames.
    pub fn new() -> Self {
        OffsetResult::default()
    }

    /// Store the frame for `name`, overwriting in place: a frame that is
    /// replaced keeps its original position.
    ///
    /// Keys are not restricted to the built-in granularity names; any
    /// string is accepted.
    pub fn add_timeframe(&mut self, name: &str, value: f64, phrase: &str) {
        let frame = TimeFrame {
            name: name.to_string(),
            value,
            phrase: phrase.to_string(),
        };
        match self.frames.iter_mut().find(|f| f.name == name) {
            Some(existing) => *existing = frame,
            None => self.frames.push(frame),
        }
    }

    /// The frame stored under `name`, or `None` when the key is absent.
    pub fn timeframe(&self, name: &str) -> Option<&TimeFrame> {
        self.frames.iter().find(|f| f.name == name)
    }

    /// Every stored frame, in insertion order.
    pub fn timeframes(&self) -> &[TimeFrame] {
        &self.frames
    }

    /// True when no frame has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of stored frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

/// Prints the first stored frame, or "Offset is empty".
impl fmt::Display for OffsetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frames.first() {
            Some(frame) => write!(f, "{frame}"),
            None => f.write_str("Offset is empty"),
        }
    }
}

/// Serializes as a map keyed by frame name, in insertion order. The name
/// is the key, so each entry carries only `value` and `phrase`.
impl Serialize for OffsetResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Entry<'a> {
            value: f64,
            phrase: &'a str,
        }

        let mut map = serializer.serialize_map(Some(self.frames.len()))?;
        for frame in &self.frames {
            let entry = Entry {
                value: frame.value,
                phrase: &frame.phrase,
            };
            map.serialize_entry(&frame.name, &entry)?;
        }
        map.end()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
