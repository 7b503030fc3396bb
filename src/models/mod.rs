//! # Data Layer
//!
//! Row shapes read out of the osmo-hlr `subscriber` table. The schema is
//! owned by osmo-hlr; these types only describe the columns this crate
//! selects.

pub mod subscriber;

pub use subscriber::{DeviceRegistration, MsisdnEntry, SubscriberRecord};
