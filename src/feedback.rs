//! Per-letter feedback for submitted guesses.

/// Feedback for one letter of a guess. Variants are ordered by rank, so the
/// keyboard can keep the best status seen with a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Classify `letter` at `position` against `target`.
///
/// A letter that is not in its place but occurs anywhere in the target is
/// `Present`, however many times it appears in the guess. Repeated letters are
/// not counted against the target's occurrences.
pub fn classify(target: &str, letter: char, position: usize) -> LetterStatus {
    if target.chars().nth(position) == Some(letter) {
        LetterStatus::Correct
    } else if target.contains(letter) {
        LetterStatus::Present
    } else {
        LetterStatus::Absent
    }
}

/// Classify every letter of `word`, position by position.
pub fn score_word(target: &str, word: &str) -> Vec<LetterStatus> {
    word.chars()
        .enumerate()
        .map(|(i, letter)| classify(target, letter, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TARGET_WORD;

    #[test]
    fn test_classify_correct_position() {
        for (i, letter) in TARGET_WORD.chars().enumerate() {
            assert_eq!(classify(TARGET_WORD, letter, i), LetterStatus::Correct);
        }
    }

    #[test]
    fn test_classify_present_and_absent() {
        // 'M' lives at index 0
        assert_eq!(classify(TARGET_WORD, 'M', 3), LetterStatus::Present);
        assert_eq!(classify(TARGET_WORD, 'Z', 0), LetterStatus::Absent);
        assert_eq!(classify(TARGET_WORD, 'E', 5), LetterStatus::Absent);
    }

    #[test]
    fn test_classify_is_pure() {
        for i in 0..TARGET_WORD.len() {
            for letter in 'A'..='Z' {
                assert_eq!(
                    classify(TARGET_WORD, letter, i),
                    classify(TARGET_WORD, letter, i)
                );
            }
        }
    }

    #[test]
    fn test_duplicate_letters_all_marked_present() {
        // 'C' appears once in the target (index 6), guessed at 0 and 1
        let statuses = score_word(TARGET_WORD, "CCXXXXXX");
        assert_eq!(statuses[0], LetterStatus::Present);
        assert_eq!(statuses[1], LetterStatus::Present);
        assert_eq!(statuses[2], LetterStatus::Absent);
    }

    #[test]
    fn test_score_near_miss() {
        let statuses = score_word(TARGET_WORD, "MALLORCO");
        assert!(statuses[..7].iter().all(|s| *s == LetterStatus::Correct));
        // 'O' is in the target at index 4
        assert_eq!(statuses[7], LetterStatus::Present);
    }

    #[test]
    fn test_status_rank_order() {
        assert!(LetterStatus::Absent < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Correct);
    }
}
