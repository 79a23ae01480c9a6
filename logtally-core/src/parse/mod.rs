//! Line parsing.
//!
//! Every input line is classified exactly once:
//!
//! raw line
//! split_fields
//! LogRecord
//! Level lookup
//! LineOutcome
//!
//! Nothing in here touches the filesystem; the reporters own all I/O.

mod level;
mod line;
mod record;

#[cfg(test)]
mod tests;

pub use level::{Level, normalize_level};
pub use line::{LineError, LineOutcome, classify, parse_line, split_fields};
pub use record::LogRecord;
