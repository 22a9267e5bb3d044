//! Shared primitive types used across both report stages.

/// A projection week. Week numbering is 1-based in every output.
pub type Week = u32;

/// A stable client identifier, taken verbatim from the input table.
pub type ClientId = String;
