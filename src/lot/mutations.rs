use crate::limits::*;
use crate::model::Occupancy;

use super::{Lot, LotError};

impl Lot {
    /// Park a vehicle in the lowest-numbered empty slot and return its
    /// 1-based slot number. First-fit by ascending slot number, so a freed
    /// slot is reused before anything higher. The table is untouched when
    /// the lot is full.
    pub fn park(
        &mut self,
        registration: &str,
        color: &str,
        vehicle_type: &str,
    ) -> Result<u32, LotError> {
        if registration.len() > MAX_REGISTRATION_LEN {
            return Err(LotError::LimitExceeded("registration too long"));
        }
        if color.len() > MAX_COLOR_LEN {
            return Err(LotError::LimitExceeded("color too long"));
        }
        if vehicle_type.len() > MAX_VEHICLE_TYPE_LEN {
            return Err(LotError::LimitExceeded("vehicle type too long"));
        }

        let Some(idx) = self.slots.iter().position(Option::is_none) else {
            return Err(LotError::LotFull(self.capacity()));
        };
        self.slots[idx] = Some(Occupancy::new(registration, color, vehicle_type));
        Ok(idx as u32 + 1)
    }

    /// Free the given slot. Freeing an already-empty slot succeeds
    /// silently; a slot number outside [1, capacity] is a caller error.
    pub fn leave(&mut self, slot: u32) -> Result<(), LotError> {
        if slot == 0 || slot > self.capacity() {
            return Err(LotError::SlotOutOfRange {
                slot,
                capacity: self.capacity(),
            });
        }
        self.slots[(slot - 1) as usize] = None;
        Ok(())
    }
}
