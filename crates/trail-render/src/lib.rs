//! Presentation policy for Trail comparisons.
//!
//! Everything a display layer needs to turn a raw comparison into a
//! readable change table: typed value renderings, badge tones and cell
//! emphasis, field-kind formatting, and the field metadata catalog.
//!
//! # Key Types
//!
//! - [`ValueRendering`] -- Typed rendering instruction for a raw value
//! - [`Tone`] / [`Emphasis`] -- Badge and cell decoration policy
//! - [`FieldCatalog`] / [`FieldSpec`] -- Labels, display kinds, sensitivity
//!
//! Formatting is best-effort by contract: malformed values degrade to
//! their raw text, never an error.

pub mod catalog;
pub mod format;
pub mod style;
pub mod value;

pub use catalog::{FieldCatalog, FieldSpec};
pub use format::{format_value, mask_sensitive, ABSENT};
pub use style::{action_tone, change_tone, new_side_emphasis, old_side_emphasis, Emphasis, Tone};
pub use value::{render_value, ValueRendering};
