mod catalog;
mod data_type;
mod dialect;
mod error;
mod types;
mod usage;
mod util;
mod value;

pub use ::anyhow::Context;
pub use catalog::*;
pub use data_type::*;
pub use dialect::*;
pub use error::*;
pub use types::*;
pub use usage::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;

/// Largest integer a host number represents exactly, 2^53 - 1.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;
