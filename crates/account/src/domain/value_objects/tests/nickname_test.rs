use crate::domain::value_objects::Nickname;
use shared_kernel::errors::DomainError;

#[test]
fn test_nickname_accepts_hangul_latin_digits_and_separators() {
    for raw in ["hyuck9", "스터디_왕", "dev-kim", "abc", "a_b-c123", "ㄱㄴㄷ"] {
        assert!(Nickname::try_new(raw).is_ok(), "Should be valid: {}", raw);
    }
}

#[test]
fn test_nickname_rejects_symbols_and_bad_lengths() {
    let too_long = "a".repeat(21);
    for raw in ["¯\\_(ツ)_/¯", "ab", "with space", "dot.name", too_long.as_str(), ""] {
        let result = Nickname::try_new(raw);
        assert!(
            matches!(result, Err(DomainError::Validation { field: "nickname", .. })),
            "Should be rejected: {}",
            raw
        );
    }
}

#[test]
fn test_nickname_length_counts_characters_not_bytes() {
    // 20 Hangul syllables are 60 bytes in UTF-8
    let hangul = "가".repeat(20);
    assert!(Nickname::try_new(hangul).is_ok());
}

#[test]
fn test_nickname_is_trimmed_and_case_preserved() {
    let nickname = Nickname::try_new("  HyUck9  ").unwrap();
    assert_eq!(nickname.as_str(), "HyUck9");
}
