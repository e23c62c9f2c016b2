//! Password scoring sections
//!
//! Each section inspects one aspect of the password and returns its
//! contribution to the raw score (bonuses positive, penalties negative).

mod length;
mod pattern;
mod sequence;
mod variety;

pub use length::length_section;
pub use pattern::repetition_section;
pub use sequence::common_sequence_section;
pub use variety::character_variety_section;

/// Signed contribution of a section to the raw score.
pub type SectionScore = i64;
