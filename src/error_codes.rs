//! Stable error codes for programmatic matching.
//!
//! Codes are embedded in the corresponding error messages and are part of
//! the public API; existing codes must never be renumbered.

pub const SRC_UNREADABLE_DOCUMENT: &str = "PAGEDIFF_SRC_001";
pub const CMP_EMPTY_DOCUMENT_SET: &str = "PAGEDIFF_CMP_001";
pub const CMP_ALIGNMENT_UNRESOLVED: &str = "PAGEDIFF_CMP_002";
pub const CMP_SLOT_OUT_OF_RANGE: &str = "PAGEDIFF_CMP_003";
