//! # Structured Error Handling
//!
//! Every HLR lookup resolves to exactly one of two error kinds: the requested
//! identity was not there (`NotFound`), or something went wrong talking to the
//! SQLite store (`Backend`). Nothing is retried internally and no partial
//! results are returned; callers decide whether to retry, surface to an
//! operator, or abort the enclosing operation.

use thiserror::Error;

/// Errors surfaced by HLR lookup operations.
#[derive(Debug, Error)]
pub enum HlrError {
    /// The requested identity or number is not present in the registry.
    ///
    /// Raised only by the single-record lookups ([`msisdn_by_imsi`] and
    /// [`imsi_by_msisdn`]); the report operations return an empty `Vec`
    /// instead when nothing matches.
    ///
    /// [`msisdn_by_imsi`]: crate::reader::HlrReader::msisdn_by_imsi
    /// [`imsi_by_msisdn`]: crate::reader::HlrReader::imsi_by_msisdn
    #[error("not found in HLR: {0}")]
    NotFound(String),

    /// Any failure while talking to or decoding results from the SQLite
    /// store: connection failure, malformed query, or a row that did not
    /// carry the expected columns.
    #[error("HLR backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for HlrError {
    fn from(err: sqlx::Error) -> Self {
        HlrError::Backend(err.to_string())
    }
}

impl From<config::ConfigError> for HlrError {
    fn from(err: config::ConfigError) -> Self {
        HlrError::Backend(format!("configuration error: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, HlrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlx_errors_map_to_backend() {
        let err: HlrError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, HlrError::Backend(_)));
        assert!(err.to_string().starts_with("HLR backend error:"));
    }

    #[test]
    fn not_found_carries_the_key() {
        let err = HlrError::NotFound("imsi 001010000000001".to_string());
        assert_eq!(err.to_string(), "not found in HLR: imsi 001010000000001");
    }
}
