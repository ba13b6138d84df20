//! # rateref index
//!
//! Overnight rate indices and the dates they imply.
//!
//! - [`OvernightIndex`]: immutable index value with the fixing, publication,
//!   effective and maturity date calculations
//! - [`Index`] / [`RateIndex`]: capabilities shared by rate indices
//! - A global registry resolving indices by name, seeded with the
//!   [standard indices](standard) and open to further providers
//! - [`IndexDefinitions`]: index and calendar definitions read from TOML
//!
//! ## Example
//!
//! ```rust
//! use rateref_core::Date;
//! use rateref_index::prelude::*;
//!
//! let sonia = OvernightIndex::of("GBP-SONIA").unwrap();
//! assert_eq!(sonia.to_string(), "GBP-SONIA");
//! assert_eq!(sonia.currency(), Currency::GBP);
//!
//! // Saturday rolls to Monday; SONIA publishes and starts the same day
//! let dates = sonia.date_chain(Date::from_ymd(2025, 3, 15).unwrap());
//! assert_eq!(dates.fixing, Date::from_ymd(2025, 3, 17).unwrap());
//! assert_eq!(dates.publication, dates.fixing);
//! assert_eq!(dates.maturity, Date::from_ymd(2025, 3, 18).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

pub mod definitions;
pub mod error;
pub mod index;
pub mod overnight;
mod registry;
pub mod standard;

pub use definitions::{DefinitionFileProvider, IndexDefinitions};
pub use error::{IndexError, IndexResult};
pub use index::{Index, RateIndex, INDEX_SCHEME};
pub use overnight::{IndexDates, OvernightIndex, OvernightIndexBuilder, MAX_DATE_OFFSET};
pub use registry::OvernightIndexProviderReg;
pub use standard::StandardOvernightIndices;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::definitions::IndexDefinitions;
    pub use crate::error::{IndexError, IndexResult};
    pub use crate::index::{Index, RateIndex};
    pub use crate::overnight::{IndexDates, OvernightIndex};
    pub use rateref_core::calendars::{Calendar, HolidayCalendar};
    pub use rateref_core::daycounts::DayCountConvention;
    pub use rateref_core::{Currency, Date, Tenor};
}

// Re-export the core so dependents need a single crate.
pub use rateref_core;
