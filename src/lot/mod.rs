mod error;
mod mutations;
mod queries;

pub use error::LotError;

use crate::limits::*;
use crate::model::Occupancy;
use crate::plate::{DashDelimited, PlateParser};

/// A fixed-capacity parking lot. Slots are numbered 1..=capacity; each
/// holds either empty or one `Occupancy`. The table length never changes
/// after construction.
pub struct Lot {
    slots: Vec<Option<Occupancy>>,
    parser: Box<dyn PlateParser>,
}

impl Lot {
    /// A lot with `capacity` empty slots and the default dash-delimited
    /// plate scheme. Capacity 0 is legal and always reports full.
    pub fn new(capacity: u32) -> Result<Self, LotError> {
        Self::with_parser(capacity, Box::new(DashDelimited))
    }

    pub fn with_parser(
        capacity: u32,
        parser: Box<dyn PlateParser>,
    ) -> Result<Self, LotError> {
        if capacity > MAX_CAPACITY {
            return Err(LotError::LimitExceeded("capacity too large"));
        }
        Ok(Self {
            slots: vec![None; capacity as usize],
            parser,
        })
    }

    pub fn capacity(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Occupied slots with their 1-based numbers, ascending.
    fn iter_occupied(&self) -> impl Iterator<Item = (u32, &Occupancy)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|occ| (i as u32 + 1, occ)))
    }
}
