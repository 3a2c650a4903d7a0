//! Property-based tests for scoring, keyboard and session rules.

use proptest::prelude::*;

use wordle_share::core::{Feedback, KeyState, Keyboard, LetterResult, MAX_GUESSES, Word};
use wordle_share::game::{GameConfig, KeyInput, Session, SessionStatus};
use wordle_share::puzzle::{decode_fragment, encode_fragment};

/// Strategy: a word over a small alphabet so repeated letters are common.
fn word_strategy() -> impl Strategy<Value = Word> {
    prop::array::uniform5(b'A'..=b'E').prop_map(|letters| {
        Word::from_letters(letters).expect("letters are uppercase ASCII")
    })
}

/// Strategy: any word over the full alphabet.
fn any_word_strategy() -> impl Strategy<Value = Word> {
    prop::array::uniform5(b'A'..=b'Z').prop_map(|letters| {
        Word::from_letters(letters).expect("letters are uppercase ASCII")
    })
}

fn key_state_strategy() -> impl Strategy<Value = KeyState> {
    prop_oneof![
        Just(KeyState::Absent),
        Just(KeyState::Present),
        Just(KeyState::Correct),
    ]
}

proptest! {
    // 1. Correct exactly where letters match
    #[test]
    fn correct_iff_same_letter(guess in word_strategy(), answer in word_strategy()) {
        let feedback = Feedback::evaluate(&guess, &answer);
        for i in 0..5 {
            let same = guess.letter_at(i) == answer.letter_at(i);
            prop_assert_eq!(feedback.at(i) == LetterResult::Correct, same, "position {}", i);
        }
    }

    // 2. A letter is credited min(guess count, answer count) times
    #[test]
    fn credits_bounded_by_answer(guess in word_strategy(), answer in word_strategy()) {
        let feedback = Feedback::evaluate(&guess, &answer);
        let in_guess = guess.letter_counts();
        let in_answer = answer.letter_counts();
        for letter in b'A'..=b'E' {
            let credited = (0..5)
                .filter(|&i| guess.letter_at(i) == letter && feedback.at(i) != LetterResult::Absent)
                .count();
            let guessed = in_guess.get(&letter).copied().unwrap_or(0);
            let available = in_answer.get(&letter).copied().unwrap_or(0);
            let expected = usize::from(guessed.min(available));
            prop_assert_eq!(credited, expected, "letter {}", char::from(letter));
        }
    }

    // 3. Guessing the answer always wins
    #[test]
    fn same_word_wins(word in any_word_strategy()) {
        prop_assert!(Feedback::evaluate(&word, &word).is_win());
    }

    // 4. Keys only move up Absent < Present < Correct
    #[test]
    fn keyboard_never_downgrades(marks in prop::collection::vec(key_state_strategy(), 1..10)) {
        let mut keyboard = Keyboard::new();
        for &state in &marks {
            let before = keyboard.state(b'Q');
            keyboard.mark(b'Q', state);
            let after = keyboard.state(b'Q');
            prop_assert!(after >= before);
        }
        prop_assert_eq!(keyboard.state(b'Q'), marks.iter().copied().max());
    }

    // 5. Fragment codes resolve back to the word
    #[test]
    fn fragment_code_resolves(word in any_word_strategy()) {
        let code = encode_fragment(&word);
        prop_assert!(!code.contains('='));
        prop_assert_eq!(decode_fragment(&code).ok(), Some(word));
    }

    // 6. A session never exceeds its rows and ends as soon as it's decided
    #[test]
    fn session_respects_row_limit(
        answer in word_strategy(),
        guesses in prop::collection::vec(word_strategy(), 0..10),
    ) {
        let mut session = Session::new(answer.clone(), GameConfig::default());
        for guess in &guesses {
            for c in guess.text().chars() {
                session.handle_key(KeyInput::Letter(c));
            }
            session.handle_key(KeyInput::Enter);
        }

        let played = session.history().len();
        prop_assert!(played <= MAX_GUESSES);
        match session.status() {
            SessionStatus::Won => prop_assert!(session.history().last().is_some_and(|(_, f)| f.is_win())),
            SessionStatus::Lost => prop_assert_eq!(played, MAX_GUESSES),
            SessionStatus::InProgress => prop_assert_eq!(played, guesses.len()),
        }
    }
}
