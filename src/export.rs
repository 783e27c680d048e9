//! Tabular persistence of mutation records (CSV and JSON).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::mutation::MutationRecord;

/// Which CSV layout to write.
///
/// Column order is fixed: `Position,Original,Mutated`, with `Type` appended
/// only in the extended shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvShape {
    #[default]
    Basic,
    /// Adds the `Type` column (`Replace`/`Deletion`/`Insertion`)
    Extended,
}

/// Write records as CSV into any writer.
pub fn write_csv<W: Write>(records: &[MutationRecord], shape: CsvShape, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);
    match shape {
        CsvShape::Basic => writer.write_record(["Position", "Original", "Mutated"])?,
        CsvShape::Extended => writer.write_record(["Position", "Original", "Mutated", "Type"])?,
    }
    for rec in records {
        let position = rec.position.to_string();
        match shape {
            CsvShape::Basic => {
                writer.write_record([position.as_str(), rec.original.as_str(), rec.mutated.as_str()])?
            }
            CsvShape::Extended => writer.write_record([
                position.as_str(),
                rec.original.as_str(),
                rec.mutated.as_str(),
                rec.kind.label(),
            ])?,
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write records as CSV to a file path.
pub fn save_csv<P: AsRef<Path>>(records: &[MutationRecord], shape: CsvShape, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_csv(records, shape, file)
}

/// Write records as a JSON array into any writer.
pub fn write_json<W: Write>(records: &[MutationRecord], out: W) -> Result<()> {
    serde_json::to_writer_pretty(out, records)?;
    Ok(())
}

/// Write records as a JSON array to a file path.
pub fn save_json<P: AsRef<Path>>(records: &[MutationRecord], path: P) -> Result<()> {
    let file = File::create(path)?;
    write_json(records, file)
}
