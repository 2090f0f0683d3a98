//! src/health_check.rs

use reqwest::StatusCode;

/// The lab webapp under test. Fixed address, not parametrized.
pub const TARGET_URL: &str = "http://192.168.1.10:8000/";

pub const EXPECTED_STATUS: StatusCode = StatusCode::OK;

#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("expected {}, got {}", .expected.as_u16(), .actual.as_u16())]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Issue one GET against `base_url` and verify the response status is 200.
///
/// Transport failures (connection refused, timeout, unreachable host)
/// propagate as [`CheckError::Request`]; any response other than 200 is a
/// [`CheckError::UnexpectedStatus`]. No retries.
#[tracing::instrument(name = "Check webapp health")]
pub async fn check(base_url: &str) -> Result<(), CheckError> {
    let response = reqwest::get(base_url).await?;

    let actual = response.status();
    if actual != EXPECTED_STATUS {
        return Err(CheckError::UnexpectedStatus {
            expected: EXPECTED_STATUS,
            actual,
        });
    }

    Ok(())
}
