use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use keytap_cli::commands::{build_ops, code_ops, config_ops, edit_ops, session_ops};
use keytap_cli::logging;

#[derive(Parser)]
#[command(name = "taptool", about = "Keypad code index and translation tool")]
struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,

    /// Custom settings TOML file
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the code index from corpus partition files
    Build {
        /// Directory holding the per-length word list files
        words_dir: String,
        /// Output index file
        output_file: String,
        /// Abort if any partition fails to load
        #[arg(long)]
        strict: bool,
    },
    /// Encode free text as keypad digits
    Encode {
        /// Text to encode; non-letters pass through unchanged
        text: String,
    },
    /// Decode digit groups into candidate words
    Decode {
        /// Index file
        index_file: String,
        /// Digit groups (quote to pass several, space- or hyphen-separated)
        input: String,
        /// Maximum grid width in columns
        #[arg(long)]
        width: Option<usize>,
    },
    /// Look up one code in the index
    Lookup {
        /// Index file
        index_file: String,
        /// Digit code
        code: String,
    },
    /// Show index stats
    Info {
        /// Index file
        index_file: String,
    },
    /// Add a word under its computed code
    Add {
        /// Index file
        index_file: String,
        /// Word (letters only after normalization)
        word: String,
    },
    /// Add a translation for a specific code
    AddTranslation {
        /// Index file
        index_file: String,
        /// Digit code the word must encode to
        code: String,
        /// Word (letters only after normalization)
        word: String,
    },
    /// Interactive encode/decode session
    Session {
        /// Index file
        index_file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let _guard = logging::init_tracing(cli.log_file.as_deref().map(Path::new));

    if let Some(file) = &cli.settings {
        let content = std::fs::read_to_string(file).unwrap_or_else(|e| {
            eprintln!("Error reading {file}: {e}");
            process::exit(1);
        });
        if let Err(e) = keytap_core::settings::init_custom(content) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Build {
            words_dir,
            output_file,
            strict,
        } => build_ops::build(&words_dir, &output_file, strict),
        Command::Encode { text } => code_ops::encode(&text),
        Command::Decode {
            index_file,
            input,
            width,
        } => code_ops::decode(&index_file, &input, width),
        Command::Lookup { index_file, code } => code_ops::lookup(&index_file, &code),
        Command::Info { index_file } => code_ops::info(&index_file),
        Command::Add { index_file, word } => edit_ops::add_word(&index_file, &word),
        Command::AddTranslation {
            index_file,
            code,
            word,
        } => edit_ops::add_translation(&index_file, &code, &word),
        Command::Session { index_file } => session_ops::session(&index_file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
