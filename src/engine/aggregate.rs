use super::selection::Scope;
use crate::error::{Dataset, LoadError};
use crate::model::{BuildingData, BuildingRecord, FloorRecord, ScopedStats, STATUS_SUCCESS};
use serde::Serialize;
use std::collections::BTreeSet;

/// A company tagged with the floor it sits on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyEntry {
    pub name: String,
    pub occupied_pct: f64,
    pub occupied_area: Option<f64>,
    pub floor_name: String,
    pub is_blocked: bool,
}

/// Names of floors whose remark is `blocked`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockedFloorSet(BTreeSet<String>);

impl BlockedFloorSet {
    #[must_use]
    pub fn contains(&self, floor_name: &str) -> bool {
        self.0.contains(floor_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for BlockedFloorSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything derived from one building record for one scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregate {
    pub stats: ScopedStats,
    pub floors: Vec<FloorRecord>,
    pub blocked_floors: BlockedFloorSet,
    pub companies: Vec<CompanyEntry>,
}

impl Aggregate {
    #[must_use]
    pub fn floor(&self, name: &str) -> Option<&FloorRecord> {
        self.floors.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn is_blocked(&self, floor_name: &str) -> bool {
        self.blocked_floors.contains(floor_name)
    }

    /// Companies whose floor name equals `floor_name`, in source order.
    pub fn companies_on<'a>(
        &'a self,
        floor_name: &'a str,
    ) -> impl Iterator<Item = &'a CompanyEntry> + 'a {
        self.companies
            .iter()
            .filter(move |c| c.floor_name == floor_name)
    }
}

/// Derives building/floor statistics, the blocked set and the company index.
///
/// When `scope` names a floor present in the record, the stats are that
/// floor's own totals. An unknown floor keeps the whole-building totals.
///
/// # Errors
///
/// Returns [`LoadError::Status`] if the record's status is not "success".
pub fn aggregate(record: &BuildingRecord, scope: &Scope) -> Result<Aggregate, LoadError> {
    if record.status != STATUS_SUCCESS {
        return Err(LoadError::Status {
            dataset: Dataset::BuildingOccupancy,
            status: record.status.clone(),
        });
    }

    let empty = BuildingData::default();
    let data = record.data.as_ref().unwrap_or(&empty);

    let blocked_floors: BlockedFloorSet = data
        .floors
        .iter()
        .filter(|f| f.is_blocked())
        .map(|f| f.name.clone())
        .collect();

    let companies = data
        .floors
        .iter()
        .flat_map(|floor| {
            floor.companies.iter().map(|company| CompanyEntry {
                name: company.name.clone(),
                occupied_pct: company.occupied_pct,
                occupied_area: company.occupied_area,
                floor_name: floor.name.clone(),
                is_blocked: floor.is_blocked(),
            })
        })
        .collect();

    let stats = match scope {
        Scope::All => ScopedStats::building(data.stats()),
        Scope::Floor(name) => match data.floor(name) {
            Some(floor) => ScopedStats::floor(name.clone(), floor.stats()),
            None => {
                tracing::warn!(floor = %name, "no record for floor, using building totals");
                ScopedStats::building(data.stats())
            }
        },
    };

    Ok(Aggregate {
        stats,
        floors: data.floors.clone(),
        blocked_floors,
        companies,
    })
}

/// Holds the latest successful record and its aggregate, so a failed pass
/// never replaces them.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    current: Aggregate,
    source: Option<BuildingRecord>,
    last_error: Option<String>,
}

impl Aggregator {
    /// Aggregates `record` for `scope` and keeps it as the source for later
    /// scope changes. On failure the error is logged and the previous source
    /// is re-aggregated for `scope`, so the aggregate always matches the
    /// requested scope. Without a previous source the zeroed default stays.
    pub fn load(&mut self, record: BuildingRecord, scope: &Scope) -> bool {
        match aggregate(&record, scope) {
            Ok(next) => {
                self.current = next;
                self.source = Some(record);
                self.last_error = None;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "building aggregation failed, keeping previous data");
                self.last_error = Some(e.to_string());
                self.rescope(scope);
                false
            }
        }
    }

    /// Re-aggregates the current source for a new scope.
    pub fn rescope(&mut self, scope: &Scope) {
        let Some(source) = &self.source else {
            return;
        };
        // The source already passed the status check
        if let Ok(next) = aggregate(source, scope) {
            self.current = next;
        }
    }

    #[must_use]
    pub fn current(&self) -> &Aggregate {
        &self.current
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
