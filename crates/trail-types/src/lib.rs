//! Foundation types for Trail.
//!
//! This crate provides the shared vocabulary of the audit-trail pipeline:
//! actions, change classifications, field display kinds, entity snapshots,
//! and the audit entry envelope. Every other Trail crate depends on
//! `trail-types`.
//!
//! # Key Types
//!
//! - [`ChangeAction`] -- Recorded action (CREATE/UPDATE/DELETE, unknown passthrough)
//! - [`ChangeType`] -- Per-field classification (added/removed/modified/unchanged)
//! - [`FieldKind`] -- Display category driving value formatting
//! - [`Snapshot`] -- Flat field map for one side of a comparison
//! - [`AuditEntry`] -- The envelope consumed by the diff and report layers

pub mod action;
pub mod entry;
pub mod error;
pub mod field;
pub mod snapshot;

pub use action::ChangeAction;
pub use entry::AuditEntry;
pub use error::{PayloadError, PayloadResult};
pub use field::{ChangeType, FieldKind};
pub use snapshot::Snapshot;
