//! `passtable generate`: print a random password.
//!
//! Starts from the `[generator]` table in `.passtable.toml` and applies
//! any command-line overrides on top.

use crate::config::Settings;
use crate::errors::Result;
use crate::generator::{PasswordGenerator, Requirements};

/// Command-line overrides for the generator.
#[derive(Debug, Default, Clone)]
pub struct GenerateArgs {
    pub length: Option<usize>,
    pub min_lower: Option<usize>,
    pub min_upper: Option<usize>,
    pub min_numbers: Option<usize>,
    pub min_symbols: Option<usize>,
    pub no_lowercase: bool,
    pub no_uppercase: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub full_symbols: bool,
    pub block: Option<String>,
}

/// Execute the `generate` command.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let (generator, requirements) = configure(&settings, args);
    let password = generator.generate(&requirements)?;
    println!("{}", password.as_str());
    Ok(())
}

/// Merge the configured defaults with the overrides.
fn configure(settings: &Settings, args: &GenerateArgs) -> (PasswordGenerator, Requirements) {
    let mut generator = settings.password_generator();
    generator.lowercase &= !args.no_lowercase;
    generator.uppercase &= !args.no_uppercase;
    generator.numbers &= !args.no_numbers;
    generator.symbols &= !args.no_symbols;
    if args.full_symbols {
        generator.easy_symbols = false;
    }
    if let Some(block) = &args.block {
        generator.block_chars(block);
    }

    let mut requirements = settings.requirements();
    if let Some(v) = args.length {
        requirements.length = v;
    }
    if let Some(v) = args.min_lower {
        requirements.min_lowercase = v;
    }
    if let Some(v) = args.min_upper {
        requirements.min_uppercase = v;
    }
    if let Some(v) = args.min_numbers {
        requirements.min_numbers = v;
    }
    if let Some(v) = args.min_symbols {
        requirements.min_symbols = v;
    }

    // A category switched off here drops its configured minimum; an
    // explicit minimum is kept and reported by the generator.
    if args.no_lowercase && args.min_lower.is_none() {
        requirements.min_lowercase = 0;
    }
    if args.no_uppercase && args.min_upper.is_none() {
        requirements.min_uppercase = 0;
    }
    if args.no_numbers && args.min_numbers.is_none() {
        requirements.min_numbers = 0;
    }
    if args.no_symbols && args.min_symbols.is_none() {
        requirements.min_symbols = 0;
    }

    (generator, requirements)
}
