pub(crate) mod array;
pub(crate) mod binary;
pub(crate) mod boolean;
pub(crate) mod enumeration;
pub(crate) mod geometry;
pub(crate) mod identifier;
pub(crate) mod network;
pub(crate) mod numeric;
pub(crate) mod range;
pub(crate) mod sentinel;
pub(crate) mod string;
pub(crate) mod structured;
pub(crate) mod temporal;

pub use array::*;
pub use binary::*;
pub use enumeration::*;
pub use geometry::*;
pub use numeric::*;
pub use range::*;
pub use sentinel::*;
pub use string::*;
pub use structured::*;
pub use temporal::*;
