//! Reading time estimate.

const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes, at least one.
pub fn estimate_reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_to_whole_minutes() {
        assert_eq!(estimate_reading_time(""), 1);
        assert_eq!(estimate_reading_time("one two three"), 1);
        assert_eq!(estimate_reading_time(&"word ".repeat(200)), 1);
        assert_eq!(estimate_reading_time(&"word ".repeat(201)), 2);
        assert_eq!(estimate_reading_time(&"word\n".repeat(1000)), 5);
    }
}
