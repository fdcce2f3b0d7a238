use clap::{Parser, Subcommand};
use langcat::RegistryOptions;
use langcat_cli::{
    check::{print_check, run_check},
    languages::print_languages,
    translate::{print_plural_forms, print_translation},
    validation::{validate_directory, validate_language_code},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported languages and their plural form counts.
    Languages {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load every language from a translation directory and report problems.
    Check {
        /// Directory holding `<language>.json` files
        #[arg(short, long)]
        dir: String,

        /// Language whose keys every other language must provide
        #[arg(short, long, default_value = langcat::REFERENCE_LANGUAGE)]
        reference: String,

        /// Fail loading when plural entries have the wrong number of forms
        #[arg(long)]
        strict: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve one message the way an application would.
    Translate {
        /// Directory holding `<language>.json` files
        #[arg(short, long)]
        dir: String,

        /// Language to translate into
        #[arg(short, long)]
        lang: String,

        /// Language used when the key is missing
        #[arg(short, long, default_value = langcat::REFERENCE_LANGUAGE)]
        reference: String,

        /// Count for plural messages
        #[arg(short, long)]
        count: Option<u64>,

        /// Message key
        key: String,

        /// Values for the message's substitution slots
        args: Vec<String>,
    },

    /// Show which plural form each count selects.
    Plural {
        /// Language whose plural rule to apply
        #[arg(short, long)]
        lang: String,

        /// Counts to classify
        #[arg(required = true)]
        counts: Vec<u64>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LANGCAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with(message: String) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn main() {
    init_tracing();
    let args = Args::parse();

    match args.commands {
        Commands::Languages { json } => print_languages(json),
        Commands::Check {
            dir,
            reference,
            strict,
            json,
        } => {
            validate_directory(&dir).unwrap_or_else(|e| exit_with(e));
            let reference = validate_language_code(&reference).unwrap_or_else(|e| exit_with(e));

            let options = RegistryOptions::new()
                .with_reference_language(reference)
                .with_strict(strict);
            let outcome = run_check(&dir, options).unwrap_or_else(|e| exit_with(e));
            print_check(&outcome, json);
            if !outcome.is_clean() {
                std::process::exit(1);
            }
        }
        Commands::Translate {
            dir,
            lang,
            reference,
            count,
            key,
            args,
        } => {
            validate_directory(&dir).unwrap_or_else(|e| exit_with(e));
            let lang = validate_language_code(&lang).unwrap_or_else(|e| exit_with(e));
            let reference = validate_language_code(&reference).unwrap_or_else(|e| exit_with(e));

            let options = RegistryOptions::new().with_reference_language(reference);
            print_translation(&dir, options, lang, &key, count, &args);
        }
        Commands::Plural { lang, counts } => {
            let lang = validate_language_code(&lang).unwrap_or_else(|e| exit_with(e));
            if let Err(e) = print_plural_forms(lang, &counts) {
                exit_with(e);
            }
        }
    }
}
