//! # Floor Allocation
//!
//! A terminal dashboard for building occupancy, with per-floor drill-down.
//!
//! ## Features
//!
//! - Load a floor roster and a building occupancy record (JSON)
//! - Building and per-floor area statistics, with reserved floors
//! - Stacked, bar and doughnut charts over the same aggregate
//! - Company directory grouped by floor
//! - Export to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use floor_allocation::engine::{ChartMode, Engine, Reservation, Scope, SelectionState};
//! use floor_allocation::loader::{load_building, load_roster};
//!
//! let roster = load_roster("floor.json")?;
//! let record = load_building("data.json")?;
//! let mut engine = Engine::new(
//!     &roster,
//!     record,
//!     SelectionState::new(Scope::All, ChartMode::Bar),
//!     Reservation::default(),
//! );
//! engine.activate(0);
//! println!("{}", engine.chart().title);
//! # Ok::<(), floor_allocation::error::LoadError>(())
//! ```

pub mod engine;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod ui;
