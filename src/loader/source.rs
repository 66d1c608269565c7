use crate::error::LoadError;
use crate::model::{BuildingRecord, FloorRoster};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads the floor roster document.
///
/// The status discriminator is not checked here; see
/// [`FloorRegistry::load`](crate::engine::FloorRegistry::load).
///
/// # Errors
///
/// Returns [`LoadError::FileRead`] if the file cannot be read.
/// Returns [`LoadError::InvalidJson`] if the content is not a roster document.
///
/// # Example
///
/// ```no_run
/// use floor_allocation::loader::load_roster;
///
/// let roster = load_roster("assets/floor.json")?;
/// for floor in &roster.data {
///     println!("{}", floor.floor_name);
/// }
/// # Ok::<(), floor_allocation::error::LoadError>(())
/// ```
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<FloorRoster, LoadError> {
    read_json(path.as_ref())
}

/// Reads the building occupancy document.
///
/// # Errors
///
/// Returns [`LoadError::FileRead`] if the file cannot be read.
/// Returns [`LoadError::InvalidJson`] if the content is not an occupancy document.
pub fn load_building<P: AsRef<Path>>(path: P) -> Result<BuildingRecord, LoadError> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let record = serde_json::from_str(&content).map_err(|source| LoadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "loaded source record");
    Ok(record)
}
