pub mod building;
pub mod lenient;
pub mod roster;
pub mod stats;

pub use building::{BuildingData, BuildingRecord, CompanyRecord, FloorRecord, Remark};
pub use roster::{FloorDescriptor, FloorRoster};
pub use stats::{BuildingStats, ScopedStats, StatsScope};

/// Status discriminator value of a successfully exported record.
pub const STATUS_SUCCESS: &str = "success";
