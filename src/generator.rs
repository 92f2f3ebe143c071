//! Random password generation with per-category minimums.
//!
//! Positions for each category's minimum are reserved first (sampled
//! without replacement), so a single pass always satisfies every minimum.
//! The remaining positions draw from the union of all enabled categories.

use rand::seq::IndexedRandom;
use rand::Rng;
use zeroize::Zeroizing;

use crate::errors::{PasstableError, Result};

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBER_CHARS: &str = "0123456789";
/// All printable ASCII punctuation (space excluded).
pub const SYMBOL_CHARS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
/// Symbols that are easy to type on any keyboard, phone included.
pub const EASY_SYMBOL_CHARS: &str = "@$#&!?+*-_:";

/// Minimum counts and total length for one generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    pub length: usize,
    pub min_lowercase: usize,
    pub min_symbols: usize,
    pub min_uppercase: usize,
    pub min_numbers: usize,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            length: 16,
            min_lowercase: 1,
            min_symbols: 1,
            min_uppercase: 1,
            min_numbers: 1,
        }
    }
}

impl Requirements {
    /// Sum of all minimums, or `None` on overflow.
    fn total_minimum(&self) -> Option<usize> {
        self.min_lowercase
            .checked_add(self.min_symbols)?
            .checked_add(self.min_uppercase)?
            .checked_add(self.min_numbers)
    }
}

/// Configurable password generator.
///
/// Every category is enabled by default and symbols use the easy-to-type
/// subset.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    /// Use [`EASY_SYMBOL_CHARS`] instead of [`SYMBOL_CHARS`].
    pub easy_symbols: bool,
    blocked: Vec<char>,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
            easy_symbols: true,
            blocked: Vec::new(),
        }
    }
}

/// One character category after blocked characters are removed.
struct Category {
    name: &'static str,
    enabled: bool,
    min: usize,
    chars: Vec<char>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid the given characters. Replaces any earlier block list.
    pub fn block_chars(&mut self, chars: &str) {
        self.blocked = chars.chars().collect();
    }

    pub fn blocked_chars(&self) -> &[char] {
        &self.blocked
    }

    /// Generate a password using the thread-local CSPRNG.
    pub fn generate(&self, req: &Requirements) -> Result<Zeroizing<String>> {
        self.generate_with(req, &mut rand::rng())
    }

    /// Generate a password drawing randomness from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        req: &Requirements,
        rng: &mut R,
    ) -> Result<Zeroizing<String>> {
        if req.length == 0 {
            return Err(PasstableError::InvalidParameters(
                "password length must be greater than zero".into(),
            ));
        }
        match req.total_minimum() {
            Some(total) if total <= req.length => {}
            _ => {
                return Err(PasstableError::InvalidParameters(
                    "the sum of minimum required characters exceeds the password length".into(),
                ))
            }
        }

        let categories = self.categories(req)?;

        let pool: Vec<char> = categories
            .iter()
            .filter(|c| c.enabled)
            .flat_map(|c| c.chars.iter().copied())
            .collect();
        if pool.is_empty() {
            return Err(PasstableError::ExhaustedCharset(
                "every allowed character is blocked".into(),
            ));
        }

        let mut free: Vec<usize> = (0..req.length).collect();
        let mut slots: Vec<Option<char>> = vec![None; req.length];

        for category in &categories {
            for _ in 0..category.min {
                let index = free.swap_remove(rng.random_range(0..free.len()));
                slots[index] = category.chars.choose(rng).copied();
            }
        }

        let password: String = slots
            .into_iter()
            .map(|slot| match slot {
                Some(c) => Ok(c),
                None => pool.choose(rng).copied().ok_or_else(|| {
                    PasstableError::ExhaustedCharset("character pool is empty".into())
                }),
            })
            .collect::<Result<_>>()?;

        Ok(Zeroizing::new(password))
    }

    /// Build the working sets in generation order: lowercase, symbols,
    /// uppercase, numbers.
    fn categories(&self, req: &Requirements) -> Result<Vec<Category>> {
        let symbols = if self.easy_symbols {
            EASY_SYMBOL_CHARS
        } else {
            SYMBOL_CHARS
        };
        let specs = [
            ("lowercase letters", self.lowercase, req.min_lowercase, LOWERCASE_CHARS),
            ("symbols", self.symbols, req.min_symbols, symbols),
            ("uppercase letters", self.uppercase, req.min_uppercase, UPPERCASE_CHARS),
            ("numbers", self.numbers, req.min_numbers, NUMBER_CHARS),
        ];

        let mut categories = Vec::with_capacity(specs.len());
        for (name, enabled, min, set) in specs {
            if !enabled {
                if min > 0 {
                    return Err(PasstableError::InvalidParameters(format!(
                        "{min} {name} required, but {name} are disabled"
                    )));
                }
                categories.push(Category {
                    name,
                    enabled,
                    min,
                    chars: Vec::new(),
                });
                continue;
            }

            let chars: Vec<char> = set.chars().filter(|c| !self.blocked.contains(c)).collect();
            if chars.is_empty() && min > 0 {
                return Err(PasstableError::ExhaustedCharset(format!(
                    "{min} {name} required, but all of them are blocked"
                )));
            }
            categories.push(Category {
                name,
                enabled,
                min,
                chars,
            });
        }

        let enabled: Vec<&str> = categories
            .iter()
            .filter(|c| c.enabled)
            .map(|c| c.name)
            .collect();
        tracing::trace!(categories = ?enabled, "generator configured");
        Ok(categories)
    }
}
