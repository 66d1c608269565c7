//! Error types for the floor allocation dashboard.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The two source documents the dashboard is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    FloorRoster,
    BuildingOccupancy,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloorRoster => f.write_str("floor roster"),
            Self::BuildingOccupancy => f.write_str("building occupancy record"),
        }
    }
}

/// Errors that can occur when loading source records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a source file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not match the record schema.
    #[error("invalid JSON in '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The record's status discriminator is not "success".
    #[error("{dataset} has status '{status}', expected 'success'")]
    Status { dataset: Dataset, status: String },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// A chart mode name that is not one of distributed, bar or doughnut.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart mode '{0}' (expected distributed, bar or doughnut)")]
pub struct UnknownChartMode(pub String);
