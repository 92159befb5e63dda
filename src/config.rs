//! Process configuration from the environment

/// Default cart-service listen port
pub const DEFAULT_CART_PORT: u16 = 5150;

/// Default user-service listen port
pub const DEFAULT_USER_PORT: u16 = 7000;

/// Default location of the user dataset
pub const DEFAULT_USERS_DB: &str = "data/users_db.json";

/// Reads the listen port from `PORT`, falling back to `default` when unset.
/// An unparseable value is logged and replaced by the default rather than
/// aborting startup.
pub fn port(default: u16) -> u16 {
    match std::env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, fallback = default, "PORT is not a valid port number");
            default
        }),
        Err(_) => default,
    }
}

/// Reads the user dataset path from `USERS_DB`, falling back to the bundled
/// default.
pub fn users_db_path() -> String {
    std::env::var("USERS_DB").unwrap_or_else(|_| DEFAULT_USERS_DB.to_owned())
}
