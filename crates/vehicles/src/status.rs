//! Vehicle lifecycle status and its transition graph.

use serde::{Deserialize, Serialize};

/// Vehicle status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    Reserved,
    InRepair,
    ForDisassembled,
    Disassembled,
    Sold,
}

use VehicleStatus::*;

/// The complete transition graph: current status → statuses it may move to.
///
/// Terminal statuses map to an empty row.
const TRANSITIONS: [(VehicleStatus, &[VehicleStatus]); 6] = [
    (Available, &[Reserved, InRepair]),
    (Reserved, &[Sold, Available]),
    (InRepair, &[Available]),
    (ForDisassembled, &[Disassembled]),
    (Disassembled, &[]),
    (Sold, &[]),
];

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 6] = [
        Available,
        Reserved,
        InRepair,
        ForDisassembled,
        Disassembled,
        Sold,
    ];

    /// Statuses reachable from `self` in one step.
    pub fn allowed_transitions(self) -> &'static [VehicleStatus] {
        TRANSITIONS
            .iter()
            .find(|(from, _)| *from == self)
            .map(|(_, to)| *to)
            .unwrap_or(&[])
    }

    pub fn can_transition_to(self, next: VehicleStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Available => "AVAILABLE",
            Reserved => "RESERVED",
            InRepair => "IN_REPAIR",
            ForDisassembled => "FOR_DISASSEMBLED",
            Disassembled => "DISASSEMBLED",
            Sold => "SOLD",
        }
    }
}

impl core::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
