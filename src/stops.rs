//! Color-stop collection
//!
//! A gradient is defined by an ordered collection of colored stops. Stops
//! carry an opaque id so edits can target a stop no matter how the
//! collection is currently ordered; insertion order is the editing order,
//! and the position-sorted view used by the serializers is derived on
//! demand by [`StopList::sorted`].

use std::fmt;

use crate::error::{Error, Result};

/// Minimum number of stops a gradient must keep at all times
pub const MIN_STOPS: usize = 2;

/// Color given to stops created by [`StopList::add`]
pub const DEFAULT_STOP_COLOR: &str = "#ef4444";

/// Opaque stop identifier, unique within one [`StopList`]
///
/// Ids come from a per-list monotonic counter; they are never reused, even
/// after the stop they named is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopId(u64);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single color stop
///
/// The color is an uninterpreted literal (typically `#rrggbb` hex); the
/// position is a percent in `[0, 100]`. Positions are not required to be
/// unique or ordered across a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub id: StopId,
    pub color: String,
    pub position: f32,
}

/// Partial update applied to one stop by [`StopList::update`]
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct StopChange {
    pub color: Option<String>,
    pub position: Option<f32>,
}

impl StopChange {
    /// Change only the color
    pub fn color(color: impl Into<String>) -> Self {
        StopChange {
            color: Some(color.into()),
            position: None,
        }
    }

    /// Change only the position
    pub fn position(position: f32) -> Self {
        StopChange {
            color: None,
            position: Some(position),
        }
    }
}

/// Ordered collection of color stops
///
/// # Examples
///
/// ```
/// use gradgen::StopList;
///
/// let mut stops = StopList::default();
/// assert_eq!(stops.len(), 2);
///
/// stops.add();
/// assert_eq!(stops.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct StopList {
    stops: Vec<ColorStop>,
    next_id: u64,
}

impl Default for StopList {
    /// The two-stop blue-to-violet ramp a fresh editing session starts with
    fn default() -> Self {
        let mut list = StopList::empty();
        list.push("#3b82f6", 0.0);
        list.push("#8b5cf6", 100.0);
        list
    }
}

impl StopList {
    /// An empty collection
    ///
    /// A serializable gradient needs at least [`MIN_STOPS`] stops; start
    /// from [`StopList::default`] unless every stop is supplied explicitly.
    pub fn empty() -> Self {
        StopList {
            stops: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a stop with the given color and position, returning its id
    pub fn push(&mut self, color: impl Into<String>, position: f32) -> StopId {
        let id = StopId(self.next_id);
        self.next_id += 1;
        self.stops.push(ColorStop {
            id,
            color: color.into(),
            position,
        });
        id
    }

    /// Appends a stop with the default color at the midpoint between the
    /// last inserted stop's position and 100
    ///
    /// The midpoint is rounded and clamped to 100. On an empty collection
    /// the new stop lands at 50. "Last" means last in insertion order, not
    /// the highest position.
    pub fn add(&mut self) -> StopId {
        let position = match self.stops.last() {
            Some(last) => ((last.position + 100.0) / 2.0).round().min(100.0),
            None => 50.0,
        };
        let id = self.push(DEFAULT_STOP_COLOR, position);
        log::debug!("added stop {id} at {position}%");
        id
    }

    /// Removes the stop with the given id
    ///
    /// Fails without touching the collection when only [`MIN_STOPS`] stops
    /// remain; the error is meant to be shown to the user, not treated as
    /// fatal. Removing an id that is not present is a no-op.
    pub fn remove(&mut self, id: StopId) -> Result<()> {
        if self.stops.len() <= MIN_STOPS {
            log::debug!("refusing to remove stop {id}: at minimum");
            return Err(Error::minimum_stops());
        }
        self.stops.retain(|stop| stop.id != id);
        Ok(())
    }

    /// Applies a partial update to the stop with the given id
    ///
    /// Unspecified fields keep their current value; the id itself never
    /// changes. Updating an id that is not present is a no-op.
    pub fn update(&mut self, id: StopId, change: StopChange) {
        if let Some(stop) = self.stops.iter_mut().find(|stop| stop.id == id) {
            if let Some(color) = change.color {
                stop.color = color;
            }
            if let Some(position) = change.position {
                stop.position = position;
            }
        }
    }

    /// The stops ordered ascending by position
    ///
    /// The sort is stable: stops sharing a position keep their relative
    /// insertion order. The underlying collection is not modified.
    pub fn sorted(&self) -> Vec<&ColorStop> {
        let mut sorted: Vec<&ColorStop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        sorted
    }

    /// The stop with the given id, if present
    pub fn get(&self, id: StopId) -> Option<&ColorStop> {
        self.stops.iter().find(|stop| stop.id == id)
    }

    /// Stops in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ColorStop> {
        self.stops.iter()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
