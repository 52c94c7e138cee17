mod data_types;
mod dialect;

pub use data_types::*;
pub use dialect::*;
