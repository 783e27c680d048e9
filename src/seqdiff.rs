//! CLI surface and top-level pipeline: acquire, align, report, export, plot.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use rayon::prelude::*;

use crate::align::{Aligner, Granularity};
use crate::error::{Result, SeqDiffError};
use crate::export::{save_csv, save_json, CsvShape};
use crate::input::{load_sequence_pair, load_sequence_pairs, normalize};
use crate::mutation::MutationRecord;
use crate::plot::{render_bar_chart, render_scatter};
use crate::report::write_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlotKind {
    /// Count-by-position bar chart
    Bar,
    /// Kind-per-lane scatter plot
    Scatter,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "seqdiff", version, about = "Compare two DNA sequences and report mutations")]
pub struct Args {
    /// Reference sequence, given directly on the command line
    #[arg(conflicts_with = "input", requires = "seq2")]
    pub seq1: Option<String>,

    /// Mutated sequence, given directly on the command line
    pub seq2: Option<String>,

    /// Read both sequences from a file (one per line) instead
    #[arg(short, long)]
    pub input: Option<String>,

    /// Treat the input file as consecutive sequence pairs and align them all
    #[arg(long, requires = "input")]
    pub batch: bool,

    /// Write the mutations to this CSV file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Add the Type column to the CSV output
    #[arg(long, requires = "output")]
    pub typed: bool,

    /// Write the mutations to this JSON file
    #[arg(long)]
    pub json: Option<String>,

    /// Draw a chart of the mutation positions on stdout
    #[arg(long, value_enum)]
    pub plot: Option<PlotKind>,

    /// Color the scatter plot marks by mutation kind
    #[arg(long)]
    pub color: bool,

    /// Always merge adjacent differences, even for equal-length inputs
    #[arg(long)]
    pub merged: bool,

    /// Refuse sequences longer than this many bases
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Number of worker threads for batch mode
    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn aligner(&self) -> Aligner {
        Aligner {
            granularity: if self.merged { Granularity::Merged } else { Granularity::Auto },
            max_len: self.max_length,
            require_non_empty: false,
        }
    }
}

/// Run the full pipeline for the parsed arguments.
pub fn run_seqdiff(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.batch {
        run_batch(&args, &mut out)
    } else {
        run_single(&args, &mut out)
    }
}

fn run_single<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let (dna1, dna2) = match (&args.input, &args.seq1, &args.seq2) {
        (Some(path), None, None) => load_sequence_pair(path)?,
        (None, Some(seq1), Some(seq2)) => (normalize(seq1), normalize(seq2)),
        _ => {
            return Err(SeqDiffError::Input(
                "provide two sequences, or --input <file> with one sequence per line".to_string(),
            ))
        }
    };
    if args.verbose {
        eprintln!("[seqdiff] comparing {} bp against {} bp", dna1.len(), dna2.len());
    }

    let records = args.aligner().align(dna1.as_bytes(), dna2.as_bytes())?;
    write_report(&records, out)?;

    if let Some(path) = &args.output {
        let shape = if args.typed { CsvShape::Extended } else { CsvShape::Basic };
        save_csv(&records, shape, path)?;
        if args.verbose {
            eprintln!("[seqdiff] wrote {} record(s) to {}", records.len(), path);
        }
    }
    if let Some(path) = &args.json {
        save_json(&records, path)?;
        if args.verbose {
            eprintln!("[seqdiff] wrote {} record(s) to {}", records.len(), path);
        }
    }
    match args.plot {
        Some(PlotKind::Bar) => render_bar_chart(&records, out)?,
        Some(PlotKind::Scatter) => render_scatter(&records, args.color, out)?,
        None => {}
    }
    Ok(())
}

fn run_batch<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    if args.output.is_some() || args.json.is_some() || args.plot.is_some() {
        return Err(SeqDiffError::Input(
            "batch mode reports to stdout only; drop --output/--json/--plot".to_string(),
        ));
    }
    let Some(path) = args.input.as_deref() else {
        return Err(SeqDiffError::Input("--batch requires --input <file>".to_string()));
    };
    let pairs = load_sequence_pairs(path)?;
    if args.verbose {
        eprintln!("[seqdiff] aligning {} pair(s) on {} thread(s)", pairs.len(), args.threads);
    }

    let aligner = args.aligner();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()
        .map_err(|e| SeqDiffError::Input(e.to_string()))?;
    // Each pair is aligned independently; collect() keeps input order
    let results: Vec<Result<Vec<MutationRecord>>> = pool.install(|| {
        pairs
            .par_iter()
            .map(|(dna1, dna2)| aligner.align(dna1.as_bytes(), dna2.as_bytes()))
            .collect()
    });

    for (index, result) in results.into_iter().enumerate() {
        let records = result?;
        writeln!(out, "Pair {}:", index + 1)?;
        write_report(&records, out)?;
    }
    Ok(())
}
