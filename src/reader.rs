//! # HLR Reader
//!
//! Read-only lookup facade over the osmo-hlr subscriber registry.
//!
//! ## Overview
//!
//! [`HlrReader`] translates the lookups the enclosing subscriber-management
//! service needs (IMSI ↔ MSISDN, IMEI reports) into parameterized queries
//! against the `subscriber` table and normalizes every storage fault into
//! [`HlrError::Backend`]. It owns no schema, no write path, and no state
//! beyond the database file location.
//!
//! ## Resource Model
//!
//! Each operation opens a fresh read-only connection for its own duration;
//! the connection is released by drop on every exit path, so no handle leaks
//! across calls and every lookup reads a point-in-time snapshot. Calls
//! suspend the caller for the full storage round trip. Nothing is cached and
//! nothing is retried.
//!
//! ## Not-Found Semantics
//!
//! The two single-record lookups fail with [`HlrError::NotFound`] when
//! nothing matches; the report operations return an empty `Vec` instead.
//! That asymmetry is part of the contract callers rely on.

use std::path::{Path, PathBuf};

use crate::config::HlrConfig;
use crate::database;
use crate::error::{HlrError, Result};
use crate::models::{DeviceRegistration, MsisdnEntry};

/// Read-only query access to an HLR SQLite database.
///
/// Holds only the file location; see the module docs for the connection
/// scoping rules.
#[derive(Debug, Clone)]
pub struct HlrReader {
    db_path: PathBuf,
}

impl HlrReader {
    /// Create a reader for the registry database at `db_path`.
    ///
    /// The file is not touched here; the first lookup reports a missing or
    /// unreadable database as [`HlrError::Backend`].
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Create a reader from environment-driven configuration.
    pub fn from_config(config: &HlrConfig) -> Self {
        Self::new(&config.db_path)
    }

    /// The database file this reader queries.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Look up the MSISDN assigned to a subscriber identity.
    ///
    /// The imsi is assumed unique in the registry. When duplicates exist
    /// anyway, the first row in storage order wins and a warning is logged;
    /// the order itself is arbitrary.
    ///
    /// # Errors
    ///
    /// [`HlrError::NotFound`] when no subscriber carries `imsi`;
    /// [`HlrError::Backend`] on storage faults, including a matching row
    /// whose msisdn column holds no value.
    #[tracing::instrument(skip(self))]
    pub async fn msisdn_by_imsi(&self, imsi: &str) -> Result<String> {
        let mut conn = database::open_read_only(&self.db_path).await?;

        let matches: Vec<String> = sqlx::query_scalar("SELECT msisdn FROM subscriber WHERE imsi = ?")
            .bind(imsi)
            .fetch_all(&mut conn)
            .await?;

        if matches.len() > 1 {
            tracing::warn!(
                imsi = %imsi,
                count = matches.len(),
                "duplicate imsi in subscriber registry, returning first match"
            );
        }

        matches
            .into_iter()
            .next()
            .ok_or_else(|| HlrError::NotFound(format!("imsi {imsi}")))
    }

    /// Look up the subscriber identity holding a phone number.
    ///
    /// Only the first matching row is fetched; further matches, if any,
    /// are ignored.
    ///
    /// # Errors
    ///
    /// [`HlrError::NotFound`] when no subscriber holds `msisdn`;
    /// [`HlrError::Backend`] on storage faults.
    #[tracing::instrument(skip(self))]
    pub async fn imsi_by_msisdn(&self, msisdn: &str) -> Result<String> {
        let mut conn = database::open_read_only(&self.db_path).await?;

        let imsi: Option<String> = sqlx::query_scalar("SELECT imsi FROM subscriber WHERE msisdn = ?")
            .bind(msisdn)
            .fetch_optional(&mut conn)
            .await?;

        imsi.ok_or_else(|| HlrError::NotFound(format!("msisdn {msisdn}")))
    }

    /// Find the subscriber most recently seen on a device.
    ///
    /// Matching rows are ordered by `last_lu_seen` descending and limited to
    /// the single most recent one, so the result holds at most one entry.
    /// An unknown imei yields an empty `Vec`, not an error.
    #[tracing::instrument(skip(self))]
    pub async fn msisdn_by_imei(&self, imei: &str) -> Result<Vec<DeviceRegistration>> {
        let mut conn = database::open_read_only(&self.db_path).await?;

        let registrations = sqlx::query_as::<_, DeviceRegistration>(
            "SELECT imei, imsi, msisdn, last_lu_seen \
             FROM subscriber \
             WHERE imei = ? \
             ORDER BY last_lu_seen DESC LIMIT 1",
        )
        .bind(imei)
        .fetch_all(&mut conn)
        .await?;

        if registrations.is_empty() {
            tracing::debug!(imei = %imei, "no registration for imei");
        }

        Ok(registrations)
    }

    /// List every subscriber whose MSISDN is exactly five digits long.
    ///
    /// Returns `(id, msisdn)` pairs in no particular order; empty when no
    /// short number is assigned.
    #[tracing::instrument(skip(self))]
    pub async fn five_digit_msisdns(&self) -> Result<Vec<MsisdnEntry>> {
        let mut conn = database::open_read_only(&self.db_path).await?;

        let entries = sqlx::query_as::<_, MsisdnEntry>(
            "SELECT id, msisdn FROM subscriber WHERE length(msisdn) = 5",
        )
        .fetch_all(&mut conn)
        .await?;

        Ok(entries)
    }

    /// List every distinct device identity known to the registry.
    ///
    /// Rows without a recorded imei contribute nothing. Empty when the
    /// table is empty.
    #[tracing::instrument(skip(self))]
    pub async fn distinct_imeis(&self) -> Result<Vec<String>> {
        let mut conn = database::open_read_only(&self.db_path).await?;

        let imeis: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT imei FROM subscriber WHERE imei IS NOT NULL")
                .fetch_all(&mut conn)
                .await?;

        Ok(imeis)
    }

    /// Search device identities by prefix, sorted ascending.
    ///
    /// An empty prefix matches every record, so this degenerates to the
    /// full distinct-imei list in sorted order.
    #[tracing::instrument(skip(self))]
    pub async fn imeis_by_prefix(&self, partial_imei: &str) -> Result<Vec<String>> {
        let mut conn = database::open_read_only(&self.db_path).await?;

        let imeis: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT imei FROM subscriber WHERE imei LIKE ? ORDER BY imei ASC",
        )
        .bind(format!("{partial_imei}%"))
        .fetch_all(&mut conn)
        .await?;

        Ok(imeis)
    }
}
