//! Identifier aliases for pools and farms.

/// Index of a pool within its farm's pool array.
///
/// Pool identifiers are farm-local: pool 3 in one farm has no relation to
/// pool 3 in another.
pub type PoolId = u64;

/// Handle assigned to a farm when it is registered with the engine.
pub type FarmId = u32;
