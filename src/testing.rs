use chrono::{DateTime, Utc};

pub type Result<T = (), E = anyhow::Error> = anyhow::Result<T, E>;

pub const T1: &str = "2022-11-02T01:00:00Z";
pub const T2: &str = "2022-11-02T01:02:03Z";

/// Initialize compact logging for unit tests, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}
