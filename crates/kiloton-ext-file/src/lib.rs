//! # Kiloton Ext File
//!
//! File-based test record source for the Kiloton library.
//!
//! Reads the CORGIS `nuclear_explosions.csv` layout into
//! [`TestRecord`](kiloton_core::TestRecord)s:
//!
//! ```rust,no_run
//! use kiloton_ext_file::CsvTestSource;
//!
//! let report = CsvTestSource::new("nuclear_explosions.csv").load()?;
//! println!("{} records ({} incomplete rows dropped)", report.records.len(), report.dropped);
//! # Ok::<(), kiloton_ext_file::FileError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod records;

pub use error::{FileError, FileResult};
pub use records::*;
