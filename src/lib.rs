pub mod align;
pub mod error;
pub mod export;
pub mod input;
pub mod matcher;
pub mod mutation;
pub mod plot;
pub mod report;
pub mod seqdiff;

pub use align::{align, Aligner, Granularity};
pub use error::{Result, SeqDiffError};
pub use export::CsvShape;
pub use matcher::{Match, OpTag, Opcode, SequenceMatcher};
pub use mutation::{MutationKind, MutationRecord, GAP};
pub use seqdiff::{run_seqdiff, Args};
