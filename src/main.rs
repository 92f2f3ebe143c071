use clap::Parser;
use passtable::cli::commands::generate::GenerateArgs;
use passtable::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `passtable=debug`).
const LOG_ENV: &str = "PASSTABLE_LOG";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passtable::cli::commands::init::execute(&cli),
        Commands::List { json } => passtable::cli::commands::list::execute(&cli, json),
        Commands::Add {
            ref tag,
            ref note,
            ref username,
            ref password,
            generate,
        } => passtable::cli::commands::add::execute(
            &cli,
            tag,
            note,
            username,
            password.as_deref(),
            generate,
        ),
        Commands::Show { number, reveal } => {
            passtable::cli::commands::show::execute(&cli, number, reveal)
        }
        Commands::Edit {
            number,
            ref tag,
            ref note,
            ref username,
            ref password,
        } => passtable::cli::commands::edit::execute(
            &cli,
            number,
            tag.as_deref(),
            note.as_deref(),
            username.as_deref(),
            password.as_deref(),
        ),
        Commands::Delete { number, force } => {
            passtable::cli::commands::delete::execute(&cli, number, force)
        }
        Commands::Search {
            ref query,
            ref tag,
            ref color,
        } => passtable::cli::commands::search::execute(
            &cli,
            query.as_deref(),
            tag.as_deref(),
            color,
        ),
        Commands::Move { from, to } => {
            passtable::cli::commands::reorder::execute_move(&cli, from, to)
        }
        Commands::Swap { a, b } => passtable::cli::commands::reorder::execute_swap(&cli, a, b),
        Commands::Copy { number } => passtable::cli::commands::copy::execute(&cli, number),
        Commands::Generate {
            length,
            min_lower,
            min_upper,
            min_numbers,
            min_symbols,
            no_lowercase,
            no_uppercase,
            no_numbers,
            no_symbols,
            full_symbols,
            ref block,
        } => {
            let args = GenerateArgs {
                length,
                min_lower,
                min_upper,
                min_numbers,
                min_symbols,
                no_lowercase,
                no_uppercase,
                no_numbers,
                no_symbols,
                full_symbols,
                block: block.clone(),
            };
            passtable::cli::commands::generate::execute(&args)
        }
        Commands::Passwd => passtable::cli::commands::passwd::execute(&cli),
        Commands::Version => passtable::cli::commands::version::execute(),
        Commands::Completions { ref shell } => {
            passtable::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passtable::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
