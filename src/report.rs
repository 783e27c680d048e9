//! Console report for a finished alignment.

use std::io::{self, Write};

use crate::mutation::MutationRecord;

/// Write the human-readable mutation report.
///
/// An empty record list is a valid result and prints an explicit
/// "no mutations" line; callers must not reach this function after a failed
/// alignment.
pub fn write_report<W: Write>(records: &[MutationRecord], out: &mut W) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "No mutations detected.")?;
        return Ok(());
    }
    writeln!(out, "{} mutation(s) detected:", records.len())?;
    for rec in records {
        writeln!(out, "{}", rec)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::MutationRecord;

    fn rendered(records: &[MutationRecord]) -> String {
        let mut buf = Vec::new();
        write_report(records, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_zero_mutations_is_explicit() {
        assert_eq!(rendered(&[]), "No mutations detected.\n");
    }

    #[test]
    fn test_lists_each_record() {
        let records = vec![
            MutationRecord::replace(3, "C".into(), "G".into()),
            MutationRecord::deletion(7, "AT".into()),
        ];
        assert_eq!(
            rendered(&records),
            "2 mutation(s) detected:\nPosition 3: C -> G\nPosition 7: AT -> -\n"
        );
    }
}
