//! Integration tests for the password generator.

use passtable::errors::{ErrorKind, PasstableError};
use passtable::generator::{
    PasswordGenerator, Requirements, EASY_SYMBOL_CHARS, LOWERCASE_CHARS, NUMBER_CHARS,
    SYMBOL_CHARS, UPPERCASE_CHARS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn count_in(password: &str, set: &str) -> usize {
    password.chars().filter(|c| set.contains(*c)).count()
}

#[test]
fn default_password_meets_minimums() {
    let generator = PasswordGenerator::new();
    for _ in 0..50 {
        let pw = generator.generate(&Requirements::default()).unwrap();
        assert_eq!(pw.chars().count(), 16);
        assert!(count_in(&pw, LOWERCASE_CHARS) >= 1);
        assert!(count_in(&pw, UPPERCASE_CHARS) >= 1);
        assert!(count_in(&pw, NUMBER_CHARS) >= 1);
        assert!(count_in(&pw, EASY_SYMBOL_CHARS) >= 1);
    }
}

#[test]
fn easy_symbols_exclude_the_rest() {
    let generator = PasswordGenerator::new();
    let req = Requirements {
        length: 64,
        min_symbols: 64,
        min_lowercase: 0,
        min_uppercase: 0,
        min_numbers: 0,
    };
    let pw = generator.generate(&req).unwrap();
    assert!(pw.chars().all(|c| EASY_SYMBOL_CHARS.contains(c)));
}

#[test]
fn full_symbols_when_easy_disabled() {
    let mut generator = PasswordGenerator::new();
    generator.easy_symbols = false;
    let req = Requirements {
        length: 200,
        min_symbols: 200,
        min_lowercase: 0,
        min_uppercase: 0,
        min_numbers: 0,
    };
    let mut rng = StdRng::seed_from_u64(7);
    let pw = generator.generate_with(&req, &mut rng).unwrap();
    assert!(pw.chars().all(|c| SYMBOL_CHARS.contains(c)));
    assert!(pw.chars().any(|c| !EASY_SYMBOL_CHARS.contains(c)));
}

#[test]
fn blocked_characters_never_appear() {
    let mut generator = PasswordGenerator::new();
    generator.block_chars("0O1lI");
    let req = Requirements {
        length: 128,
        ..Requirements::default()
    };
    let pw = generator.generate(&req).unwrap();
    assert!(!pw.contains(['0', 'O', '1', 'l', 'I']));
}

#[test]
fn same_seed_same_password() {
    let generator = PasswordGenerator::new();
    let a = generator
        .generate_with(&Requirements::default(), &mut StdRng::seed_from_u64(42))
        .unwrap();
    let b = generator
        .generate_with(&Requirements::default(), &mut StdRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(a.as_str(), b.as_str());
}

#[test]
fn minimums_longer_than_length_fail() {
    let req = Requirements {
        length: 3,
        ..Requirements::default()
    };
    let err = PasswordGenerator::new().generate(&req).unwrap_err();
    assert!(matches!(err, PasstableError::InvalidParameters(_)));
    assert_eq!(err.kind(), ErrorKind::Generation);
}

#[test]
fn zero_length_fails() {
    let req = Requirements {
        length: 0,
        min_lowercase: 0,
        min_uppercase: 0,
        min_numbers: 0,
        min_symbols: 0,
    };
    assert!(PasswordGenerator::new().generate(&req).is_err());
}

#[test]
fn fully_blocked_category_with_minimum_fails() {
    let mut generator = PasswordGenerator::new();
    generator.block_chars(NUMBER_CHARS);
    let err = generator.generate(&Requirements::default()).unwrap_err();
    assert!(matches!(err, PasstableError::ExhaustedCharset(_)));
}

#[test]
fn everything_disabled_fails() {
    let mut generator = PasswordGenerator::new();
    generator.lowercase = false;
    generator.uppercase = false;
    generator.numbers = false;
    generator.symbols = false;
    let req = Requirements {
        length: 8,
        min_lowercase: 0,
        min_uppercase: 0,
        min_numbers: 0,
        min_symbols: 0,
    };
    assert!(generator.generate(&req).is_err());
}
