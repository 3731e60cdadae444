//! freestyle-trainer CLI
//!
//! Interactive terminal trainer: shows a random word, looks up its rhyme
//! group, grows the dictionary as you go.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use freestyle_trainer::store::{
    DICTIONARY_FILENAME, Store, default_dictionary_path, starter_dictionary,
};
use freestyle_trainer::tui;

#[derive(Parser)]
#[command(name = "freestyle-trainer")]
#[command(about = "Random prompt words with rhyme lookup in the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (default: ./dictionary.txt, else the data directory)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive training session (the default)
    Train {
        /// Seed for the word selection, for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print dictionary statistics without entering the trainer
    Status,

    /// Create a starter dictionary
    Init {
        /// Overwrite an existing dictionary
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let path = resolve_dictionary_path(cli.dictionary);

    let result = match cli.command {
        Some(Commands::Train { seed }) => cmd_train(path, seed),
        Some(Commands::Status) => cmd_status(path),
        Some(Commands::Init { force }) => cmd_init(path, force),
        None => cmd_train(path, None),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// PATH RESOLUTION
// ============================================================================

/// Resolve the dictionary path: explicit flag wins; otherwise a
/// `dictionary.txt` in the working directory; otherwise the per-user data
/// directory location.
fn resolve_dictionary_path(flag: Option<PathBuf>) -> PathBuf {
    match flag {
        Some(path) => path,
        None => {
            let local = PathBuf::from(DICTIONARY_FILENAME);
            if local.exists() {
                local
            } else {
                default_dictionary_path()
            }
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_train(path: PathBuf, seed: Option<u64>) -> Result<(), String> {
    tui::run(Store::new(path), seed).map_err(|e| e.to_string())
}

fn cmd_status(path: PathBuf) -> Result<(), String> {
    let store = Store::new(&path);
    let dict = store.load().map_err(|e| e.to_string())?;

    let word_count: usize = dict.groups.iter().map(|g| g.words.len()).sum();

    println!("Dictionary: {}", path.display());
    println!("Groups:     {}", dict.len());
    println!("Words:      {}", word_count);
    println!();

    for (i, group) in dict.groups.iter().enumerate() {
        println!("  [{}] {}", i + 1, group.words.join(", "));
    }

    Ok(())
}

fn cmd_init(path: PathBuf, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let store = Store::new(&path);
    store
        .save(&starter_dictionary())
        .map_err(|e| e.to_string())?;

    println!("Created starter dictionary: {}", path.display());
    println!("Run `freestyle-trainer` to start training.");

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
