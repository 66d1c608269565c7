use crate::engine::{Aggregate, Engine};
use crate::error::ExportError;
use crate::model::FloorDescriptor;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct Report<'a> {
    roster: &'a [FloorDescriptor],
    #[serde(flatten)]
    aggregate: &'a Aggregate,
}

pub fn export_json<P: AsRef<Path>>(engine: &Engine, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = render(engine)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

fn render(engine: &Engine) -> Result<String, ExportError> {
    let report = Report {
        roster: engine.registry().floors(),
        aggregate: engine.aggregate(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
