//! Mauka Dictionary - Main entrypoint.
//!
//! Each subcommand opens the configured dictionary file, performs one
//! operation on it and, for changes, writes the file back.

use clap::{Parser, Subcommand};
use mauka_dict_lib::config::{ConfigLoader, DictionaryConfig, LogConfig, ENV_PREFIX};
use mauka_dict_lib::data_structures::olelo_trie::OleloTrieError;
use mauka_dict_lib::dictionary::DictionaryStore;
use mauka_dict_lib::error::{
    report_error, set_error_reporter, ErrorContext, MaukaError, MaukaResult, TracingErrorReporter,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// Command line arguments for the Mauka Dictionary.
#[derive(Parser, Debug)]
#[command(name = "mauka-dict", version, author, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary file to use instead of `storage.path`
    #[arg(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Insert a word, replacing its meaning if it already exists
    Insert {
        /// Word to insert
        word: String,

        /// Meaning of the word; multiple arguments are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        meaning: Vec<String>,
    },

    /// Check whether a word is in the dictionary
    Search {
        /// Word to look for
        word: String,
    },

    /// Show the meaning of a word
    Meaning {
        /// Word to look up
        word: String,
    },

    /// Show every word starting with a prefix
    Prefix {
        /// Prefix to list
        prefix: String,
    },

    /// Delete a word
    Delete {
        /// Word to delete
        word: String,
    },

    /// Show every word in the dictionary
    List,

    /// Validate the configuration
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr.
fn init_logging(log: &LogConfig) -> MaukaResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| MaukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Writes one `word: meaning` line with both parts as stored.
fn write_entry<W: Write>(out: &mut W, word: &[u8], meaning: &[u8]) -> io::Result<()> {
    out.write_all(word)?;
    out.write_all(b": ")?;
    out.write_all(meaning)?;
    out.write_all(b"\n")
}

/// Executes one subcommand against the configured dictionary.
fn run(command: Command, config: DictionaryConfig) -> MaukaResult<()> {
    match command {
        Command::Insert { word, meaning } => {
            let mut store = DictionaryStore::open(&config.storage)?;
            store.trie_mut().insert(&word, meaning.join(" "));
            store.persist()?;
            println!("{word} inserted successfully.");
        }
        Command::Search { word } => {
            let store = DictionaryStore::open(&config.storage)?;
            if store.trie().search(&word) {
                println!("{word} found.");
            } else {
                println!("{word} not found in the dictionary.");
            }
        }
        Command::Meaning { word } => {
            let store = DictionaryStore::open(&config.storage)?;
            match store.trie().get_meaning(&word) {
                Some(meaning) => {
                    let mut out = io::stdout().lock();
                    write!(out, "{word} found: ")?;
                    out.write_all(meaning)?;
                    writeln!(out)?;
                }
                None => println!("{word} not found in the dictionary."),
            }
        }
        Command::Prefix { prefix } => {
            let store = DictionaryStore::open(&config.storage)?;
            match store.trie().words_with_prefix(&prefix) {
                Ok(words) => {
                    let mut out = io::stdout().lock();
                    writeln!(out, "Words starting with \"{prefix}\":")?;
                    for (word, meaning) in words {
                        write_entry(&mut out, &word, meaning)?;
                    }
                }
                Err(OleloTrieError::KeyNotFound(_)) => {
                    println!("No words found with prefix \"{prefix}\".");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Delete { word } => {
            let mut store = DictionaryStore::open(&config.storage)?;
            match store.trie_mut().delete_word(&word) {
                Ok(()) => {
                    store.persist()?;
                    println!("Deleted word \"{word}\" successfully.");
                }
                Err(OleloTrieError::KeyNotFound(_)) => println!("Word \"{word}\" not found."),
                Err(OleloTrieError::NotACompleteWord(_)) => {
                    println!("Word \"{word}\" not found as a complete word.");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::List => {
            let store = DictionaryStore::open(&config.storage)?;
            let mut out = io::stdout().lock();
            for (word, meaning) in store.trie() {
                write_entry(&mut out, &word, meaning)?;
            }
        }
        Command::Validate => {
            info!(path = %config.storage.path.display(), "Configuration validated successfully");
            println!("Configuration is valid.");
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&DictionaryConfig::default())
                .map_err(|e| MaukaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Logging follows the configured settings when they load, defaults otherwise
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let result = loaded
        .and_then(|config| match args.dictionary {
            Some(path) => config.with_dictionary_path(path),
            None => Ok(config),
        })
        .map_err(MaukaError::from)
        .and_then(|config| run(args.command, config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&ErrorContext::new(e, "mauka-dict"));
            ExitCode::FAILURE
        }
    }
}
