pub mod types;
pub mod queries;
pub mod filter;

pub use types::*;
pub use queries::*;
pub use filter::*;
