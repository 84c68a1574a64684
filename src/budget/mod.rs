//! Budget aggregation: raw sheet rows in, classified totals out.
//!
//! The pipeline is `normalize` (coerce amounts) followed by `aggregate`
//! (group and total). Both are pure and infallible; input validation happens
//! before rows reach them, in [`raw::HeaderMap`] and the storage sources.

pub mod category;
pub mod line_item;
pub mod raw;
pub mod status;
pub mod summary;

pub use category::CategorySummary;
pub use line_item::{coerce_amount, normalize, LineItem};
pub use raw::{HeaderMap, RawRow, RawValue};
pub use status::{capped_fraction, percent_used, status, BudgetStatus, PercentUsed};
pub use summary::{aggregate, PortfolioSummary};
