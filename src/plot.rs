//! Terminal charts over the mutation record list.
//!
//! The render target is always an explicit writer passed by the caller;
//! there is no ambient display state, so every chart can be drawn into an
//! in-memory buffer.

use std::io::{self, Write};

use crate::mutation::{MutationKind, MutationRecord};

const KINDS: [MutationKind; 3] =
    [MutationKind::Replace, MutationKind::Deletion, MutationKind::Insertion];

fn ansi_code(kind: MutationKind) -> &'static str {
    match kind {
        MutationKind::Replace => "\x1b[31m",
        MutationKind::Deletion => "\x1b[34m",
        MutationKind::Insertion => "\x1b[32m",
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// One text column per reference position, repeating digit ticks (1-9, 0).
fn ruler(span: usize) -> String {
    (1..=span)
        .map(|p| char::from_digit((p % 10) as u32, 10).unwrap())
        .collect()
}

/// Count-by-position bar chart.
pub fn render_bar_chart<W: Write>(records: &[MutationRecord], out: &mut W) -> io::Result<()> {
    writeln!(out, "Mutation count by position")?;
    let Some(last) = records.last() else {
        writeln!(out, "  (nothing to plot)")?;
        return Ok(());
    };
    let span = last.position;
    let mut counts = vec![0usize; span];
    for rec in records {
        counts[rec.position - 1] += 1;
    }
    let peak = *counts.iter().max().unwrap_or(&0);
    for level in (1..=peak).rev() {
        let row: String = counts.iter().map(|&c| if c >= level { '#' } else { ' ' }).collect();
        writeln!(out, "{:>3} |{}", level, row)?;
    }
    writeln!(out, "    +{}", "-".repeat(span))?;
    writeln!(out, "     {}", ruler(span))?;
    Ok(())
}

/// Kind-per-lane scatter plot, position on the x axis.
///
/// With `color` enabled each mark carries an ANSI color per kind
/// (`Replace` red, `Deletion` blue, `Insertion` green).
pub fn render_scatter<W: Write>(
    records: &[MutationRecord],
    color: bool,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Mutation kinds by position")?;
    let Some(last) = records.last() else {
        writeln!(out, "  (nothing to plot)")?;
        return Ok(());
    };
    let span = last.position;
    for kind in KINDS {
        let mut marked = vec![false; span];
        for rec in records.iter().filter(|r| r.kind == kind) {
            marked[rec.position - 1] = true;
        }
        let mut row = String::with_capacity(span);
        for &hit in &marked {
            if hit {
                if color {
                    row.push_str(ansi_code(kind));
                    row.push('*');
                    row.push_str(ANSI_RESET);
                } else {
                    row.push('*');
                }
            } else {
                row.push('.');
            }
        }
        writeln!(out, "{:>9} |{}", kind.label(), row)?;
    }
    writeln!(out, "{:>9} +{}", "", "-".repeat(span))?;
    writeln!(out, "{:>9}  {}", "", ruler(span))?;
    Ok(())
}
