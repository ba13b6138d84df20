//! # rateref core
//!
//! Foundational building blocks shared by the rateref crates:
//!
//! - **Types**: `Date`, `Currency`, `Tenor` and `StandardId`
//! - **Day Count Conventions**: year fraction calculations used by rate indices
//! - **Business Day Calendars**: named holiday calendars and business-day stepping
//! - **Property Sets**: immutable ordered multimaps used for textual definitions
//! - **Named Registries**: lazily aggregated, provider-based lookup by unique name
//!
//! ## Example
//!
//! ```rust
//! use rateref_core::prelude::*;
//!
//! let calendar = HolidayCalendar::of("GBLO").unwrap();
//! let christmas = Date::from_ymd(2025, 12, 25).unwrap();
//! assert!(!calendar.is_business_day(christmas));
//! assert_eq!(calendar.next_or_same(christmas), Date::from_ymd(2025, 12, 29).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod named;
pub mod properties;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, HolidayCalendar, HolidayCalendarId, WeekendType};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{RateRefError, RateRefResult};
    pub use crate::named::{ListProvider, Named, NamedProvider, NamedRegistry};
    pub use crate::properties::PropertySet;
    pub use crate::types::{Currency, Date, StandardId, Tenor, TenorUnit};
}

// Re-export commonly used types at crate root
pub use error::{RateRefError, RateRefResult};
pub use types::{Currency, Date, StandardId, Tenor};
