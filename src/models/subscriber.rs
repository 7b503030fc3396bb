//! # Subscriber Rows
//!
//! Read-only views over the osmo-hlr `subscriber` table.
//!
//! ## Database Schema
//!
//! The relevant columns of the externally owned table:
//! - `id`: primary key (INTEGER)
//! - `imsi`: permanent subscriber identity (TEXT, assumed unique)
//! - `msisdn`: dialable number (TEXT, nullable, digit length varies)
//! - `imei`: device identity (TEXT, nullable)
//! - `last_lu_seen`: timestamp of the last location update (nullable)
//!
//! Records are created, mutated, and deleted entirely by the registration
//! subsystem; this crate never writes them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full subscriber registry row as this crate sees it.
///
/// The `imsi` uniqueness invariant is assumed, not enforced here; lookups
/// that hit a duplicate log a warning and take the first row in storage
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SubscriberRecord {
    pub id: i64,
    pub imsi: String,
    pub msisdn: Option<String>,
    pub imei: Option<String>,
    pub last_lu_seen: Option<NaiveDateTime>,
}

/// One row of the device lookup: which subscriber was last seen on an IMEI.
///
/// Shape of [`crate::reader::HlrReader::msisdn_by_imei`] results, ordered by
/// `last_lu_seen` descending before the single-row limit is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DeviceRegistration {
    pub imei: Option<String>,
    pub imsi: String,
    pub msisdn: Option<String>,
    pub last_lu_seen: Option<NaiveDateTime>,
}

/// An `(id, msisdn)` pair from the short-number report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MsisdnEntry {
    pub id: i64,
    pub msisdn: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_record_serializes_nullable_fields() {
        let record = SubscriberRecord {
            id: 1,
            imsi: "001010000000001".to_string(),
            msisdn: Some("12345".to_string()),
            imei: None,
            last_lu_seen: None,
        };

        let json = serde_json::to_value(&record).expect("serialization should succeed");
        assert_eq!(json["imsi"], "001010000000001");
        assert!(json["imei"].is_null());
    }
}
