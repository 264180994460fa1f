//! Command-line interface for hyphcorpus
//! This binary extracts the most frequent words of a book and writes them, with their
//! hyphenation points, as a test corpus for hyphenation implementations.
//!
//! Usage:
//!   hyphcorpus `<input>` `<output>` [--language `<code>`] [--min-length `<n>`] [--max-words `<n>`]
//!   hyphcorpus --list-languages [--backend `<name>`]     - List languages of a backend
//!
//! Settings come from the embedded defaults, then `hyphcorpus.toml` in the working
//! directory (or the file given with --config), then command-line flags.

mod report;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use hyphcorpus_config::{ConfigError, HyphcorpusConfig, Loader, LOCAL_CONFIG_FILE};
use hyphcorpus_core::oracle::{OracleBackend, OracleRegistry};
use hyphcorpus_core::pipeline;
use log::LevelFilter;
use std::io::Write;
use std::path::{Path, PathBuf};

fn cli() -> Command {
    Command::new("hyphcorpus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate hyphenation test data from a text file or e-book")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input text file (.txt) or packaged document (.epub)")
                .value_parser(value_parser!(PathBuf))
                .required_unless_present("list-languages")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file for the hyphenation test data")
                .value_parser(value_parser!(PathBuf))
                .required_unless_present("list-languages")
                .index(2),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Language code for the hyphenation oracle (default: de_DE)"),
        )
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .value_parser(value_parser!(usize))
                .help("Minimum word length (default: 6)"),
        )
        .arg(
            Arg::new("max-words")
                .long("max-words")
                .value_parser(value_parser!(usize))
                .help("Maximum number of words to include, 0 for all (default: 5000)"),
        )
        .arg(
            Arg::new("min-prefix")
                .long("min-prefix")
                .value_parser(value_parser!(usize))
                .help("Minimum characters permitted before the first hyphen (default: 2)"),
        )
        .arg(
            Arg::new("min-suffix")
                .long("min-suffix")
                .value_parser(value_parser!(usize))
                .help("Minimum characters permitted after the last hyphen (default: 2)"),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .help("Hyphenation backend (default: patterns)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .help("List the languages supported by the hyphenation backend")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not print statistics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress (-v) or details (-vv) to stderr")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: invalid configuration: {}", e);
        std::process::exit(1);
    });
    let registry = OracleRegistry::with_defaults();

    if matches.get_flag("list-languages") {
        handle_list_languages_command(&registry, &config.hyphenation.backend);
        return;
    }

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("input is required unless listing languages");
    let output = matches
        .get_one::<PathBuf>("output")
        .expect("output is required unless listing languages");
    handle_generate_command(
        &registry,
        &config,
        input,
        output,
        matches.get_flag("quiet"),
    );
}

/// Default level is warn; -v info, -vv debug. RUST_LOG overrides both.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    let _ = builder.try_init();
}

/// Defaults, then a config file, then explicit flags.
fn load_config(matches: &ArgMatches) -> Result<HyphcorpusConfig, ConfigError> {
    let loader = match matches.get_one::<PathBuf>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG_FILE),
    };

    let count = |name: &str| matches.get_one::<usize>(name).map(|v| *v as i64);

    loader
        .set_override_option("hyphenation.backend", matches.get_one::<String>("backend").cloned())?
        .set_override_option("hyphenation.language", matches.get_one::<String>("language").cloned())?
        .set_override_option("hyphenation.min_prefix", count("min-prefix"))?
        .set_override_option("hyphenation.min_suffix", count("min-suffix"))?
        .set_override_option("selection.min_length", count("min-length"))?
        .set_override_option("selection.max_words", count("max-words"))?
        .build()
}

/// Handle the generate command
fn handle_generate_command(
    registry: &OracleRegistry,
    config: &HyphcorpusConfig,
    input: &Path,
    output: &Path,
    quiet: bool,
) {
    let options = config.pipeline_options();
    let summary = pipeline::run(input, output, &options, registry).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if !quiet {
        print!("{}", report::format_summary(&summary));
    }
}

/// Handle the list-languages command
fn handle_list_languages_command(registry: &OracleRegistry, backend: &str) {
    let backend = registry.get(backend).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable backends:");
        for name in registry.list_backends() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    print!("{}", language_listing(backend));
}

fn language_listing(backend: &dyn OracleBackend) -> String {
    let mut out = match backend.description() {
        "" => format!("Languages supported by '{}':\n\n", backend.name()),
        description => format!(
            "Languages supported by '{}' ({}):\n\n",
            backend.name(),
            description
        ),
    };
    for language in backend.languages() {
        out.push_str(&format!("  {}\n", language));
    }
    out
}
