//! Hard caps on caller-supplied input. These exist to keep the slot table
//! consistent and the process healthy, not to validate vehicle data.

/// Upper bound on lot capacity; the table is allocated up front.
pub const MAX_CAPACITY: u32 = 100_000;

/// Longest accepted registration string.
pub const MAX_REGISTRATION_LEN: usize = 64;

/// Longest accepted color string.
pub const MAX_COLOR_LEN: usize = 32;

/// Longest accepted vehicle type string.
pub const MAX_VEHICLE_TYPE_LEN: usize = 32;
