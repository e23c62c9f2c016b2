//! Character variety section - lowercase, uppercase, digits, symbols.

use super::SectionScore;

const CLASS_BONUS: SectionScore = 10;

/// Awards 10 points per character class present.
///
/// Classes are ASCII only: any character outside `[a-zA-Z0-9]`, accented
/// letters included, counts as a symbol.
pub fn character_variety_section(password: &str) -> SectionScore {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let classes = [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&b| b)
        .count();
    classes as SectionScore * CLASS_BONUS
}
