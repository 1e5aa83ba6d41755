use crate::model::{Parity, SlotStatus};

use super::{Lot, LotError};

impl Lot {
    /// Currently occupied slots in ascending slot order. Read-only.
    pub fn status(&self) -> Vec<SlotStatus> {
        self.iter_occupied()
            .map(|(slot, occ)| SlotStatus {
                slot,
                occupancy: occ.clone(),
            })
            .collect()
    }

    pub fn count_by_vehicle_type(&self, vehicle_type: &str) -> usize {
        self.iter_occupied()
            .filter(|(_, occ)| occ.vehicle_type.eq_ignore_ascii_case(vehicle_type))
            .count()
    }

    /// Registrations whose numeric plate segment has the requested parity.
    /// Fails atomically: the first malformed registration aborts the whole
    /// query, identifying the offending plate.
    pub fn registrations_by_parity(&self, parity: Parity) -> Result<Vec<String>, LotError> {
        let mut registrations = Vec::new();
        for (_, occ) in self.iter_occupied() {
            let n = self
                .parser
                .plate_number(&occ.registration)
                .map_err(LotError::MalformedPlate)?;
            if parity.matches(n) {
                registrations.push(occ.registration.clone());
            }
        }
        Ok(registrations)
    }

    pub fn registrations_by_color(&self, color: &str) -> Vec<String> {
        self.iter_occupied()
            .filter(|(_, occ)| occ.color.eq_ignore_ascii_case(color))
            .map(|(_, occ)| occ.registration.clone())
            .collect()
    }

    /// True slot numbers of occupied slots matching the color, ascending.
    pub fn slots_by_color(&self, color: &str) -> Vec<u32> {
        self.iter_occupied()
            .filter(|(_, occ)| occ.color.eq_ignore_ascii_case(color))
            .map(|(slot, _)| slot)
            .collect()
    }

    /// 1-based slot number of the vehicle with this registration, or None.
    pub fn slot_for_registration(&self, registration: &str) -> Option<u32> {
        self.iter_occupied()
            .find(|(_, occ)| occ.registration.eq_ignore_ascii_case(registration))
            .map(|(slot, _)| slot)
    }
}
