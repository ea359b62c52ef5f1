//! # Kiloton Core
//!
//! Core types and abstractions for the Kiloton nuclear test analytics library.
//!
//! This crate provides the building blocks shared by every other Kiloton crate:
//!
//! - **Types**: `TestRecord`, `Country`, `TestDate`, `Coordinates`
//! - **Traits**: `YieldSample`, the minimal view of a row that yield analytics need
//! - **Errors**: `KilotonError` for invalid domain values
//!
//! ## Example
//!
//! ```rust
//! use kiloton_core::prelude::*;
//!
//! let record = TestRecord::new("Trinity", Country::new("USA").unwrap(), 18.0, 20.0)
//!     .with_date(TestDate::from_ymd(1945, 7, 16).unwrap());
//!
//! assert!(record.has_valid_yield());
//! assert_eq!(record.year(), Some(1945));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{KilotonError, KilotonResult};
    pub use crate::traits::YieldSample;
    pub use crate::types::{Coordinates, Country, TestDate, TestRecord};
}

// Re-export commonly used types at crate root
pub use error::{KilotonError, KilotonResult};
pub use traits::YieldSample;
pub use types::{Coordinates, Country, TestDate, TestRecord};
