//! Aggregation and chart configuration engine.
//!
//! [`Engine`] owns the floor registry, the aggregator (with the last good
//! building record and its aggregate) and the selection. Every transition
//! takes `&mut self` and re-aggregates before returning, so the readers
//! ([`Engine::chart`], [`Engine::directory`], [`Engine::summary`]) always see
//! a consistent state.

pub mod aggregate;
pub mod chart;
pub mod directory;
pub mod format;
pub mod registry;
pub mod reservation;
pub mod selection;

pub use aggregate::{aggregate, Aggregate, Aggregator, BlockedFloorSet, CompanyEntry};
pub use chart::{
    resolve_display_row, ChartDisplayModel, ChartKind, DisplayRow, Series, SeriesColor, Tooltip,
};
pub use directory::{CompanyLine, DirectoryModel, FloorGroup, GroupBody, Listing};
pub use registry::FloorRegistry;
pub use reservation::Reservation;
pub use selection::{ChartMode, Scope, SelectionState};

use crate::model::{BuildingRecord, FloorDescriptor, FloorRoster, ScopedStats};

#[derive(Debug)]
pub struct Engine {
    registry: FloorRegistry,
    aggregator: Aggregator,
    selection: SelectionState,
    reservation: Reservation,
    roster_error: Option<String>,
}

impl Engine {
    /// Builds the engine from the two source records.
    ///
    /// A roster with a failed status leaves an empty registry; a building
    /// record with a failed status leaves a zeroed aggregate. Both failures
    /// are logged and kept for [`Engine::last_error`].
    #[must_use]
    pub fn new(
        roster: &FloorRoster,
        record: BuildingRecord,
        selection: SelectionState,
        reservation: Reservation,
    ) -> Self {
        let (registry, roster_error) = match FloorRegistry::load(roster) {
            Ok(registry) => (registry, None),
            Err(e) => {
                tracing::error!(error = %e, "floor roster rejected, no floors available");
                (FloorRegistry::default(), Some(e.to_string()))
            }
        };

        let mut aggregator = Aggregator::default();
        aggregator.load(record, selection.scope());

        Self {
            registry,
            aggregator,
            selection,
            reservation,
            roster_error,
        }
    }

    pub fn select(&mut self, scope: Scope) {
        self.selection.select(scope);
        self.aggregator.rescope(self.selection.scope());
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        self.selection.set_mode(mode);
    }

    pub fn toggle(&mut self, floor_name: &str) {
        self.registry.toggle(floor_name);
    }

    /// Handles a click on chart element `index`. Returns whether the element
    /// was a drill-down target.
    pub fn activate(&mut self, index: usize) -> bool {
        let target = self.chart().drill_down_target(index).map(str::to_string);
        match target {
            Some(floor_name) => {
                self.select(Scope::Floor(floor_name));
                true
            }
            None => false,
        }
    }

    /// Replaces the building record. A record with a failed status keeps the
    /// previous record on display.
    pub fn reload(&mut self, record: BuildingRecord) {
        self.aggregator.load(record, self.selection.scope());
    }

    #[must_use]
    pub fn chart(&self) -> ChartDisplayModel {
        chart::build(
            self.aggregator.current(),
            self.registry.floors(),
            &self.selection,
            &self.reservation,
        )
    }

    #[must_use]
    pub fn directory(&self) -> DirectoryModel {
        directory::view(
            self.aggregator.current(),
            &self.registry,
            &self.selection,
            &self.reservation,
        )
    }

    /// Totals for the summary tiles.
    #[must_use]
    pub fn summary(&self) -> &ScopedStats {
        &self.aggregator.current().stats
    }

    #[must_use]
    pub fn aggregate(&self) -> &Aggregate {
        self.aggregator.current()
    }

    /// Roster floors in display order.
    #[must_use]
    pub fn floors(&self) -> &[FloorDescriptor] {
        self.registry.floors()
    }

    #[must_use]
    pub fn registry(&self) -> &FloorRegistry {
        &self.registry
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn reservation(&self) -> &Reservation {
        &self.reservation
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.aggregator
            .last_error()
            .or(self.roster_error.as_deref())
    }
}
