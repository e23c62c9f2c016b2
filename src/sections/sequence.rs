//! Sequence section - penalizes well-known keyboard and alphabet runs.

use regex::Regex;
use std::sync::LazyLock;

use super::SectionScore;

const SEQUENCE_PENALTY: SectionScore = -20;

static COMMON_SEQUENCES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"12345|abcde|qwerty").expect("valid sequence pattern"));

/// Penalizes the password if its lowercased form contains `12345`, `abcde`
/// or `qwerty`. Applied once no matter how many match.
pub fn common_sequence_section(password: &str) -> SectionScore {
    if COMMON_SEQUENCES.is_match(&password.to_lowercase()) {
        return SEQUENCE_PENALTY;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_section_each_sequence() {
        assert_eq!(common_sequence_section("my12345pass"), -20);
        assert_eq!(common_sequence_section("xabcdex"), -20);
        assert_eq!(common_sequence_section("qwertyuiop"), -20);
    }

    #[test]
    fn test_sequence_section_case_insensitive() {
        assert_eq!(common_sequence_section("QWERTY"), -20);
        assert_eq!(common_sequence_section("AbCdE!"), -20);
    }

    #[test]
    fn test_sequence_section_applied_once() {
        assert_eq!(common_sequence_section("qwerty12345abcde"), -20);
    }

    #[test]
    fn test_sequence_section_partial_runs() {
        assert_eq!(common_sequence_section("1234"), 0);
        assert_eq!(common_sequence_section("abcd"), 0);
        assert_eq!(common_sequence_section("qwert"), 0);
    }
}
