//! Helpers shared by the integration suites.
//!
//! Each suite is its own crate, so it pulls this module in with
//! `mod support;`.

pub mod embedded_postgres;

pub use embedded_postgres::{provision_template_database, shared_cluster};

/// Set to `1`, `true` or `yes` to skip suites when PostgreSQL cannot start.
const SKIP_ENV: &str = "SKIP_TEST_CLUSTER";

fn skip_requested() -> bool {
    std::env::var(SKIP_ENV).is_ok_and(|value| {
        ["1", "true", "yes"]
            .iter()
            .any(|truthy| value.trim().eq_ignore_ascii_case(truthy))
    })
}

/// Unwrap a cluster-backed setup, or yield `None` when skipping is allowed.
///
/// # Panics
/// Panics on setup failure unless `SKIP_TEST_CLUSTER` is truthy, so CI
/// breakage is never silently skipped.
pub fn cluster_or_skip<T>(setup: Result<T, String>) -> Option<T> {
    match setup {
        Ok(value) => Some(value),
        Err(reason) if skip_requested() => {
            eprintln!("SKIP-TEST-CLUSTER: {reason}");
            None
        }
        Err(reason) => {
            panic!("embedded PostgreSQL setup failed: {reason} (set {SKIP_ENV}=1 to skip)")
        }
    }
}

/// Render a `postgres` error with its SQLSTATE and server message.
///
/// `Display` on `postgres::Error` collapses server errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    match error.as_db_error() {
        Some(db) => match db.detail() {
            Some(detail) => format!("{:?}: {} ({detail})", db.code(), db.message()),
            None => format!("{:?}: {}", db.code(), db.message()),
        },
        None => error.to_string(),
    }
}
