//! Reading-time estimate for mixed CJK / latin text.

/// Ideographs read per minute.
const IDEOGRAPHS_PER_MINUTE: usize = 300;

/// Whitespace-delimited words read per minute.
const WORDS_PER_MINUTE: usize = 200;

pub const READ_TIME_UNIT: &str = "分钟";

fn is_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Ideograph count and word count of `text`. Ideographs act as word separators.
pub fn count_units(text: &str) -> (usize, usize) {
    let ideographs = text.chars().filter(|c| is_ideograph(*c)).count();
    let words = text
        .split(|c: char| c.is_whitespace() || is_ideograph(c))
        .filter(|w| !w.is_empty())
        .count();
    (ideographs, words)
}

/// `ceil(ideographs / 300 + words / 200)`, never below 1.
pub fn estimate_minutes(text: &str) -> usize {
    let (ideographs, words) = count_units(text);
    // Common denominator keeps the ceiling exact.
    const SCALE: usize = 600;
    let numerator =
        ideographs * (SCALE / IDEOGRAPHS_PER_MINUTE) + words * (SCALE / WORDS_PER_MINUTE);
    numerator.div_ceil(SCALE).max(1)
}

/// Display string such as `"3 分钟"`.
pub fn estimate_read_time(text: &str) -> String {
    format!("{} {}", estimate_minutes(text), READ_TIME_UNIT)
}
