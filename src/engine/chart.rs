//! Chart display models for the three visualisation modes.
//!
//! Every builder goes through [`resolve_display_row`] (or [`resolve_scope_row`]
//! for whole-scope charts), so a reserved floor renders the same way in the
//! stacked, bar and doughnut views. Labels, series values and targets are
//! built from one ordered row list and stay index-aligned.

use super::aggregate::Aggregate;
use super::format::format_pct;
use super::reservation::Reservation;
use super::selection::{ChartMode, Scope, SelectionState};
use crate::model::FloorDescriptor;

pub const TITLE_BUILDING: &str = "Building Area Distribution";
pub const TITLE_RESERVED: &str = "Reserved Floor";
pub const LABEL_OCCUPIED: &str = "Occupied";
pub const LABEL_REMAINING: &str = "Remaining";
pub const SERIES_OCCUPIED: &str = "Occupied Percentage";
pub const SERIES_REMAINING: &str = "Remaining Percentage";
pub const SERIES_ALLOCATION: &str = "Area Allocation";

/// Per-row shares after the reserved-floor override has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub name: String,
    pub occupied_pct: f64,
    pub reserved_pct: f64,
    pub remaining_pct: f64,
    pub is_blocked: bool,
}

impl DisplayRow {
    fn reserved(name: &str) -> Self {
        Self {
            name: name.to_string(),
            occupied_pct: 0.0,
            reserved_pct: 100.0,
            remaining_pct: 0.0,
            is_blocked: true,
        }
    }
}

/// Resolves one floor into stacked shares.
///
/// A blocked floor is 100% reserved whatever its numbers say. Otherwise the
/// occupied share is clamped to 0..=100 and the remainder is derived from it,
/// so the three shares always sum to 100. Unknown floors count as empty.
#[must_use]
pub fn resolve_display_row(floor_name: &str, aggregate: &Aggregate) -> DisplayRow {
    if aggregate.is_blocked(floor_name) {
        return DisplayRow::reserved(floor_name);
    }

    let occupied = aggregate
        .floor(floor_name)
        .map_or(0.0, |f| f.occupied_pct)
        .clamp(0.0, 100.0);

    DisplayRow {
        name: floor_name.to_string(),
        occupied_pct: occupied,
        reserved_pct: 0.0,
        remaining_pct: 100.0 - occupied,
        is_blocked: false,
    }
}

/// Resolves the current scope (building or selected floor) into shares, using
/// the stored percentages of the scoped stats.
#[must_use]
pub fn resolve_scope_row(scope: &Scope, aggregate: &Aggregate) -> DisplayRow {
    match scope {
        Scope::Floor(name) if aggregate.is_blocked(name) => DisplayRow::reserved(name),
        _ => DisplayRow {
            name: scope
                .floor_name()
                .map_or_else(|| "Building".to_string(), str::to_string),
            occupied_pct: aggregate.stats.stats.occupied_pct,
            reserved_pct: 0.0,
            remaining_pct: aggregate.stats.stats.remaining_pct,
            is_blocked: false,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Three stacked series per floor.
    Stacked,
    Bar,
    Doughnut,
}

/// Semantic colour of a data point; the presentation layer picks the shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Occupied,
    Remaining,
    Reserved,
    /// A reserved floor among ordinary bars.
    ReservedMuted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub colors: Vec<SeriesColor>,
}

impl Series {
    fn uniform(label: impl Into<String>, values: Vec<f64>, color: SeriesColor) -> Self {
        let colors = vec![color; values.len()];
        Self {
            label: label.into(),
            values,
            colors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub title: String,
    pub label: String,
    pub detail: Option<String>,
}

/// Immutable chart description handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDisplayModel {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    /// What each index represents, aligned with `labels`.
    pub targets: Vec<DisplayRow>,
    pub drill_down: bool,
    reserved_label: String,
    reserved_notice: String,
}

impl ChartDisplayModel {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The floor or aggregate shown at `index`.
    #[must_use]
    pub fn resolve(&self, index: usize) -> Option<&DisplayRow> {
        self.targets.get(index)
    }

    /// Floor to select when the element at `index` is clicked, if this chart
    /// supports drilling down.
    #[must_use]
    pub fn drill_down_target(&self, index: usize) -> Option<&str> {
        if !self.drill_down {
            return None;
        }
        self.resolve(index).map(|row| row.name.as_str())
    }

    #[must_use]
    pub fn tooltip(&self, series: usize, index: usize) -> Option<Tooltip> {
        let target = self.resolve(index)?;
        let title = self.labels.get(index)?.clone();
        let series = self.series.get(series)?;
        let value = series.values.get(index)?;

        if target.is_blocked {
            return Some(Tooltip {
                title,
                label: format!("{}: 100%", self.reserved_label),
                detail: Some(self.reserved_notice.clone()),
            });
        }

        Some(Tooltip {
            title,
            label: format!("{}: {}%", series.label, format_pct(*value)),
            detail: None,
        })
    }
}

/// Builds the chart for the current selection.
///
/// `floors` is the roster order used for whole-building rows; `aggregate`
/// must have been computed for `selection`'s scope.
#[must_use]
pub fn build(
    aggregate: &Aggregate,
    floors: &[FloorDescriptor],
    selection: &SelectionState,
    reservation: &Reservation,
) -> ChartDisplayModel {
    let scope = selection.scope();
    let title = title(scope, aggregate);

    let (kind, labels, series, targets, drill_down) = match selection.mode() {
        ChartMode::Distributed => {
            let rows = floor_rows(scope, aggregate, floors);
            let labels: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
            let series = vec![
                Series::uniform(
                    SERIES_OCCUPIED,
                    rows.iter().map(|r| r.occupied_pct).collect(),
                    SeriesColor::Occupied,
                ),
                Series::uniform(
                    reservation.label(),
                    rows.iter().map(|r| r.reserved_pct).collect(),
                    SeriesColor::Reserved,
                ),
                Series::uniform(
                    SERIES_REMAINING,
                    rows.iter().map(|r| r.remaining_pct).collect(),
                    SeriesColor::Remaining,
                ),
            ];
            (ChartKind::Stacked, labels, series, rows, true)
        }
        ChartMode::Bar if scope.is_all() => {
            let rows = floor_rows(scope, aggregate, floors);
            let labels: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
            let series = Series {
                label: SERIES_OCCUPIED.to_string(),
                values: rows.iter().map(|r| r.occupied_pct).collect(),
                colors: rows
                    .iter()
                    .map(|r| {
                        if r.is_blocked {
                            SeriesColor::ReservedMuted
                        } else {
                            SeriesColor::Occupied
                        }
                    })
                    .collect(),
            };
            (ChartKind::Bar, labels, vec![series], rows, true)
        }
        ChartMode::Bar => {
            let (labels, series, targets) = scope_slices(scope, aggregate, reservation);
            (ChartKind::Bar, labels, series, targets, false)
        }
        ChartMode::Doughnut => {
            let (labels, series, targets) = scope_slices(scope, aggregate, reservation);
            (ChartKind::Doughnut, labels, series, targets, false)
        }
    };

    ChartDisplayModel {
        kind,
        title,
        labels,
        series,
        targets,
        drill_down,
        reserved_label: reservation.label(),
        reserved_notice: reservation.notice(),
    }
}

fn title(scope: &Scope, aggregate: &Aggregate) -> String {
    match scope {
        Scope::All => TITLE_BUILDING.to_string(),
        Scope::Floor(name) if aggregate.is_blocked(name) => TITLE_RESERVED.to_string(),
        Scope::Floor(name) => format!("{name} Area Distribution"),
    }
}

fn floor_rows(scope: &Scope, aggregate: &Aggregate, floors: &[FloorDescriptor]) -> Vec<DisplayRow> {
    match scope {
        Scope::All => floors
            .iter()
            .map(|f| resolve_display_row(&f.floor_name, aggregate))
            .collect(),
        Scope::Floor(name) => vec![resolve_display_row(name, aggregate)],
    }
}

/// Occupied/remaining slices for the scope, or one full reserved slice.
fn scope_slices(
    scope: &Scope,
    aggregate: &Aggregate,
    reservation: &Reservation,
) -> (Vec<String>, Vec<Series>, Vec<DisplayRow>) {
    let row = resolve_scope_row(scope, aggregate);

    if row.is_blocked {
        let series = Series::uniform(SERIES_ALLOCATION, vec![100.0], SeriesColor::Reserved);
        return (vec![reservation.label()], vec![series], vec![row]);
    }

    let series = Series {
        label: SERIES_ALLOCATION.to_string(),
        values: vec![row.occupied_pct, row.remaining_pct],
        colors: vec![SeriesColor::Occupied, SeriesColor::Remaining],
    };
    (
        vec![LABEL_OCCUPIED.to_string(), LABEL_REMAINING.to_string()],
        vec![series],
        vec![row.clone(), row],
    )
}
