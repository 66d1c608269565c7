use crate::error::UnknownChartMode;
use std::fmt;
use std::str::FromStr;

/// Whether the dashboard shows the whole building or one floor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    Floor(String),
}

impl Scope {
    #[must_use]
    pub fn floor(name: impl Into<String>) -> Self {
        Self::Floor(name.into())
    }

    #[must_use]
    pub fn floor_name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Floor(name) => Some(name),
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All Floors"),
            Self::Floor(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartMode {
    #[default]
    Distributed,
    Bar,
    Doughnut,
}

impl ChartMode {
    pub const ALL: [Self; 3] = [Self::Distributed, Self::Bar, Self::Doughnut];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Distributed => "Distributed",
            Self::Bar => "Bar",
            Self::Doughnut => "Doughnut",
        }
    }

    /// The next mode in picker order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Distributed => Self::Bar,
            Self::Bar => Self::Doughnut,
            Self::Doughnut => Self::Distributed,
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartMode {
    type Err = UnknownChartMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownChartMode(s.to_string()))
    }
}

/// Current scope and chart mode. Changed only through the named transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    scope: Scope,
    mode: ChartMode,
}

impl SelectionState {
    #[must_use]
    pub fn new(scope: Scope, mode: ChartMode) -> Self {
        Self { scope, mode }
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn select(&mut self, scope: Scope) {
        tracing::debug!(scope = %scope, "scope selected");
        self.scope = scope;
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        tracing::debug!(mode = %mode, "chart mode selected");
        self.mode = mode;
    }
}
