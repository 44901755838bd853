//! Display-ready audit reports for Trail.
//!
//! Composes the lower layers into the structure a detail view renders:
//! the change table (diff plus catalog labels and formatting), the
//! line-level JSON view, and device information parsed from the recorded
//! User-Agent.
//!
//! # Key Types
//!
//! - [`ChangeReport`] / [`FieldReport`] -- The assembled detail model
//! - [`DeviceInfo`] -- Parsed device and browser information

pub mod device;
pub mod report;

pub use device::{parse_user_agent, DeviceInfo};
pub use report::{build_report, ChangeReport, FieldReport};
