mod booleans;
mod composites;
mod numerics;
mod sentinels;
mod strings;
mod structured;
mod temporals;
mod usage;

#[cfg(not(feature = "disable-arrays"))]
use composites::arrays;
#[cfg(not(feature = "disable-ranges"))]
use composites::ranges;
#[cfg(not(feature = "disable-hstore"))]
use structured::hstore;
#[cfg(not(feature = "disable-geometry"))]
use structured::geometry;
#[cfg(not(feature = "disable-network"))]
use strings::network;

use booleans::booleans;
use caliber_core::{DataTypeError, Dialect, Error, data_type_error};
use composites::enums;
use log::LevelFilter;
use numerics::numerics;
use sentinels::sentinels;
use std::env;
use strings::strings;
use structured::json;
use temporals::temporals;
use usage::{resolution, usage_context};

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Runs the checks every dialect must pass.
pub fn execute_tests(dialect: &dyn Dialect) {
    strings(dialect);
    numerics(dialect);
    booleans(dialect);
    temporals(dialect);
    json(dialect);
    enums(dialect);
    sentinels(dialect);
    usage_context(dialect);
    resolution(dialect);
    #[cfg(not(feature = "disable-network"))]
    network(dialect);
    #[cfg(not(feature = "disable-hstore"))]
    hstore(dialect);
    #[cfg(not(feature = "disable-geometry"))]
    geometry(dialect);
    #[cfg(not(feature = "disable-ranges"))]
    ranges(dialect);
    #[cfg(not(feature = "disable-arrays"))]
    arrays(dialect);
}

/// Kind of a failure, panics when it was not raised by a data type.
pub fn error_kind(error: &Error) -> &DataTypeError {
    data_type_error(error)
        .unwrap_or_else(|| panic!("Expected a data type error, got: {error:#}"))
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
