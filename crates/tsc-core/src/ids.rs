//! Vehicle identifiers.

use std::fmt;

/// Identifier of a vehicle, allocated in arrival order.
///
/// The simulator hands IDs out from `VehicleId(0)` upward as vehicles are
/// spawned, so within one lane a smaller ID always means an earlier
/// arrival.  FIFO checks rely on this.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u64);

impl VehicleId {
    pub const FIRST: VehicleId = VehicleId(0);

    /// The ID allocated after `self`.
    #[inline]
    pub fn next(self) -> VehicleId {
        VehicleId(self.0 + 1)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
