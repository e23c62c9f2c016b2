//! Length section - rewards passwords of 8 and 12 characters or more.

use super::SectionScore;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

const MIN_LENGTH_BONUS: SectionScore = 25;
const LONG_LENGTH_BONUS: SectionScore = 15;

/// Length bonus of the password. The two bonuses stack.
///
/// Length is counted in UTF-16 code units, the unit browsers report for
/// input values, so characters outside the BMP count twice.
pub fn length_section(password: &str) -> SectionScore {
    let len = password.encode_utf16().count();
    let mut bonus = 0;
    if len >= MIN_LENGTH {
        bonus += MIN_LENGTH_BONUS;
    }
    if len >= LONG_LENGTH {
        bonus += LONG_LENGTH_BONUS;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(length_section("Short1!"), 0);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section("12345678"), 25);
    }

    #[test]
    fn test_length_section_long_stacks() {
        assert_eq!(length_section("LongEnough12"), 40);
        assert_eq!(length_section("CorrectHorseBatteryStaple"), 40);
    }

    #[test]
    fn test_length_section_counts_utf16_units() {
        // 4 emoji are 8 UTF-16 units
        assert_eq!(length_section("😀😀😀😀"), 25);
        // 7 two-byte chars stay at 7 units
        assert_eq!(length_section("ééééééé"), 0);
    }
}
