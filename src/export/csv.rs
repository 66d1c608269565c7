use crate::engine::{resolve_display_row, Engine};
use crate::error::ExportError;
use std::fs::File;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(engine: &Engine, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_report(engine, csv::Writer::from_writer(file))
}

fn write_report<W: std::io::Write>(
    engine: &Engine,
    mut writer: csv::Writer<W>,
) -> Result<(), ExportError> {
    writer.write_record([
        "Floor",
        "Total Area",
        "Occupied Area",
        "Remaining Area",
        "Occupied %",
        "Reserved %",
        "Remaining %",
        "Status",
        "Companies",
    ])?;

    let aggregate = engine.aggregate();
    for descriptor in engine.registry().floors() {
        let name = &descriptor.floor_name;
        let stats = aggregate.floor(name).map(|f| f.stats()).unwrap_or_default();
        // Shares as charted, so a reserved floor reads 0/100/0
        let shares = resolve_display_row(name, aggregate);
        let status = if shares.is_blocked {
            "Reserved"
        } else {
            "Available"
        };

        writer.write_record(&[
            name.clone(),
            stats.total_area.to_string(),
            stats.occupied_area.to_string(),
            stats.remaining_area.to_string(),
            shares.occupied_pct.to_string(),
            shares.reserved_pct.to_string(),
            shares.remaining_pct.to_string(),
            status.to_string(),
            aggregate.companies_on(name).count().to_string(),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
