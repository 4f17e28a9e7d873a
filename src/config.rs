/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Name given to a defaulted user.
pub const DEFAULT_USER_NAME: &str = "";

/// Age given to a defaulted user.
pub const DEFAULT_USER_AGE: i64 = 0;
