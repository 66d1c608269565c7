use crate::error::{Dataset, LoadError};
use crate::model::{FloorDescriptor, FloorRoster, STATUS_SUCCESS};
use std::collections::HashMap;

/// Known floors in display order, plus which directory groups are expanded.
#[derive(Debug, Clone, Default)]
pub struct FloorRegistry {
    floors: Vec<FloorDescriptor>,
    expanded: HashMap<String, bool>, // floor name → expanded
}

impl FloorRegistry {
    /// Builds the registry from a roster with every floor collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Status`] if the roster's status is not "success".
    pub fn load(roster: &FloorRoster) -> Result<Self, LoadError> {
        if roster.status != STATUS_SUCCESS {
            return Err(LoadError::Status {
                dataset: Dataset::FloorRoster,
                status: roster.status.clone(),
            });
        }

        let expanded = roster
            .data
            .iter()
            .map(|f| (f.floor_name.clone(), false))
            .collect();

        tracing::info!(floors = roster.data.len(), "floor registry loaded");
        Ok(Self {
            floors: roster.data.clone(),
            expanded,
        })
    }

    #[must_use]
    pub fn floors(&self) -> &[FloorDescriptor] {
        &self.floors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    #[must_use]
    pub fn contains(&self, floor_name: &str) -> bool {
        self.floors.iter().any(|f| f.floor_name == floor_name)
    }

    /// Flips one floor's expansion flag. Other floors are untouched.
    pub fn toggle(&mut self, floor_name: &str) {
        let flag = self.expanded.entry(floor_name.to_string()).or_insert(false);
        *flag = !*flag;
        tracing::debug!(floor = floor_name, expanded = *flag, "toggled floor group");
    }

    #[must_use]
    pub fn is_expanded(&self, floor_name: &str) -> bool {
        self.expanded.get(floor_name).copied().unwrap_or(false)
    }
}
