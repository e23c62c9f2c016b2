//! Pattern section - penalizes runs of the same character.

use super::SectionScore;

const REPEAT_RUN: usize = 3;
const REPEAT_PENALTY: SectionScore = -10;

fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

/// Penalizes the password once if any character appears three or more times
/// in a row.
///
/// Runs are detected over UTF-16 code units; line terminators never form a
/// run.
pub fn repetition_section(password: &str) -> SectionScore {
    let units: Vec<u16> = password.encode_utf16().collect();
    if units.len() < REPEAT_RUN {
        return 0;
    }

    let mut run = 1;
    for i in 1..units.len() {
        if units[i] == units[i - 1] && !is_line_terminator(units[i]) {
            run += 1;
            if run >= REPEAT_RUN {
                return REPEAT_PENALTY;
            }
        } else {
            run = 1;
        }
    }
    0
}
