//! Domain value types.
//!
//! - [`Date`]: calendar date
//! - [`Currency`]: ISO currency codes
//! - [`Tenor`]: deposit period of an index
//! - [`StandardId`]: scheme-qualified identifier

mod currency;
mod date;
mod standard_id;
mod tenor;

pub use currency::Currency;
pub use date::Date;
pub use standard_id::StandardId;
pub use tenor::{Tenor, TenorUnit};
