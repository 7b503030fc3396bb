//! Scoped read-only connections to the HLR SQLite file.
//!
//! No pool is kept: every lookup opens a fresh connection for its own
//! duration and the connection is released when it drops, on success and
//! error paths alike. Readers therefore always see a point-in-time snapshot
//! and never hold the file open between calls.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;
use std::path::Path;

use crate::error::Result;

/// Open a read-only connection against the subscriber registry file.
///
/// The file must already exist (it is created and maintained by osmo-hlr);
/// a missing or unreadable file surfaces as [`crate::error::HlrError::Backend`].
pub async fn open_read_only(path: &Path) -> Result<SqliteConnection> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);

    Ok(options.connect().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HlrError;

    #[tokio::test]
    async fn missing_file_is_a_backend_error() {
        let err = open_read_only(Path::new("/nonexistent/hlr.db"))
            .await
            .expect_err("connecting to a missing file should fail");
        assert!(matches!(err, HlrError::Backend(_)));
    }
}
