use crate::plate::PlateError;

#[derive(Debug)]
pub enum LotError {
    /// Every slot is occupied. Carries the lot capacity.
    LotFull(u32),
    SlotOutOfRange { slot: u32, capacity: u32 },
    MalformedPlate(PlateError),
    LimitExceeded(&'static str),
}

impl std::fmt::Display for LotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotError::LotFull(cap) => {
                write!(f, "capacity {cap} exceeded: all slots occupied")
            }
            LotError::SlotOutOfRange { slot, capacity } => {
                write!(f, "slot {slot} out of range [1, {capacity}]")
            }
            LotError::MalformedPlate(e) => write!(f, "malformed plate: {e}"),
            LotError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for LotError {}
