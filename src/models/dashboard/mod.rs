//! Dashboard statistics: reads against the store for a reference date,
//! then assembles them into one report for the index page.

pub mod report;
pub mod stats;
pub mod trend;

pub use report::*;
pub use stats::*;
pub use trend::*;
