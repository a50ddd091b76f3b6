use crate::{Measurements, Zone};

/// A lightweight snapshot of one group's mapping state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`,
/// so adapters can carry a group's region and zone across frames or sessions
/// without coupling the core to any UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupState {
    pub measurements: Measurements,
    pub zone: Option<Zone>,
    pub last_coordinate: f64,
}
