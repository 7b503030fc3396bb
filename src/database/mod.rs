//! # Database Access
//!
//! Connection handling for the HLR SQLite store. The store is owned by
//! osmo-hlr; this crate only ever opens short-lived read-only connections
//! against it.

pub mod connection;

pub use connection::open_read_only;
