use serde::Serialize;

/// Area totals and shares for either the whole building or one floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BuildingStats {
    pub total_area: f64,
    pub occupied_area: f64,
    pub remaining_area: f64,
    pub occupied_pct: f64,
    pub remaining_pct: f64,
}

/// What a set of [`BuildingStats`] describes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StatsScope {
    #[default]
    Building,
    Floor {
        name: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScopedStats {
    pub scope: StatsScope,
    pub stats: BuildingStats,
}

impl ScopedStats {
    #[must_use]
    pub fn building(stats: BuildingStats) -> Self {
        Self {
            scope: StatsScope::Building,
            stats,
        }
    }

    #[must_use]
    pub fn floor(name: impl Into<String>, stats: BuildingStats) -> Self {
        Self {
            scope: StatsScope::Floor { name: name.into() },
            stats,
        }
    }

    /// Floor name when these are one floor's totals.
    #[must_use]
    pub fn floor_name(&self) -> Option<&str> {
        match &self.scope {
            StatsScope::Building => None,
            StatsScope::Floor { name } => Some(name),
        }
    }
}
