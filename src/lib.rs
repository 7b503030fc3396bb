//! # HLR Reader
//!
//! Read-only lookup access to an OsmoHLR subscriber registry (SQLite).
//!
//! ## Overview
//!
//! A community cellular network keeps its subscriber registry in osmo-hlr's
//! SQLite database. This crate gives the surrounding subscriber-management
//! service the handful of lookups it needs over that registry — mapping
//! between a subscriber's permanent identity (IMSI), dialable number
//! (MSISDN), and device identity (IMEI), plus three reporting queries —
//! without owning the schema, a write path, or any protocol of its own.
//!
//! ## Key Properties
//!
//! - **Read-only**: no operation mutates the store
//! - **Stateless**: the reader holds only the database file location
//! - **Connection-per-call**: each lookup opens and releases its own
//!   read-only connection, so nothing leaks across calls
//! - **Two error kinds**: [`HlrError::NotFound`] for absent identities,
//!   [`HlrError::Backend`] for every storage-layer fault
//!
//! ## Module Organization
//!
//! - [`reader`] - the [`HlrReader`] lookup facade
//! - [`models`] - row shapes read from the `subscriber` table
//! - [`database`] - scoped SQLite connection handling
//! - [`config`] - database file location from the environment
//! - [`error`] - structured error handling
//! - [`logging`] - tracing subscriber setup for standalone use
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hlr_reader::{HlrConfig, HlrReader};
//!
//! # async fn example() -> hlr_reader::Result<()> {
//! let config = HlrConfig::from_env()?;
//! let hlr = HlrReader::from_config(&config);
//!
//! let msisdn = hlr.msisdn_by_imsi("001010000000001").await?;
//! println!("subscriber reachable at {msisdn}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod reader;

pub use config::HlrConfig;
pub use error::{HlrError, Result};
pub use models::{DeviceRegistration, MsisdnEntry, SubscriberRecord};
pub use reader::HlrReader;
