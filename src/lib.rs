pub use caliber_core::*;
#[cfg(feature = "mysql")]
pub use caliber_mysql as mysql;
#[cfg(feature = "postgres")]
pub use caliber_postgres as postgres;
#[cfg(feature = "sqlite")]
pub use caliber_sqlite as sqlite;
