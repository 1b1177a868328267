//! Command-line interface for tagchunk
//!
//! Reads tagged text (one sentence per line, `word/TAG` tokens separated by spaces)
//! from a file or stdin.
//!
//! Usage:
//!   tagchunk match `<pattern>` [`<path>`]     - Print every span the pattern matches
//!   tagchunk constituents [`<path>`]          - Print the phrase chunks of each sentence
//!
//! Global flags: --format text|json|yaml, --config `<file>`, -v

use std::error::Error;
use std::io::Read;
use std::sync::Arc;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tagchunk::config::{Loaded, Loader, OutputFormat, TagchunkConfig};
use tagchunk::{read_tagged, Constituent, Match, Pattern, PatternCache, Sentence};

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(leaf(&matches).get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Tagged text file (reads stdin when omitted)")
            .value_name("PATH")
    };

    Command::new("tagchunk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pattern search and phrase chunking over tagged sentences")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .value_parser(["text", "json", "yaml"])
                .help("Output format (overrides output.format)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log debug output to stderr (-vv for trace)"),
        )
        .subcommand(
            Command::new("match")
                .about("Print every non-overlapping span a pattern matches")
                .arg(
                    Arg::new("pattern")
                        .help("Tag pattern, e.g. 'ADJ+ NOUN'")
                        .required(true)
                        .index(1),
                )
                .arg(path_arg().index(2)),
        )
        .subcommand(
            Command::new("constituents")
                .about("Split each sentence into labeled phrase chunks")
                .arg(path_arg().index(1)),
        )
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Global flags propagate down, so the subcommand's matches see all of them.
fn leaf(matches: &ArgMatches) -> &ArgMatches {
    matches.subcommand().map_or(matches, |(_, sub)| sub)
}

fn run(matches: &ArgMatches) -> CliResult<()> {
    let loaded = load_config(leaf(matches))?;

    match matches.subcommand() {
        Some(("match", sub)) => {
            let pattern = sub.get_one::<String>("pattern").ok_or("missing pattern")?;
            let sentences = read_input(sub.get_one::<String>("path"))?;
            handle_match_command(&loaded.config, pattern, &sentences)
        }
        Some(("constituents", sub)) => {
            let sentences = read_input(sub.get_one::<String>("path"))?;
            handle_constituents_command(&loaded, &sentences)
        }
        _ => Err("no subcommand given".into()),
    }
}

fn load_config(matches: &ArgMatches) -> CliResult<Loaded> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.layer(path, true);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set("output.format", format.as_str())?;
    }
    Ok(loader.load()?)
}

fn read_input(path: Option<&String>) -> CliResult<Vec<Sentence>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path, e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            buf
        }
    };
    let sentences = read_tagged(&text);
    debug!(sentences = sentences.len(), "read input");
    Ok(sentences)
}

/// Handle the match command
fn handle_match_command(
    config: &TagchunkConfig,
    source: &str,
    sentences: &[Sentence],
) -> CliResult<()> {
    let pattern = if config.matching.use_cache {
        PatternCache::global().get_or_compile(source)?
    } else {
        Arc::new(Pattern::compile(source)?)
    };

    let found: Vec<Vec<Match>> = sentences.iter().map(|s| pattern.find_all(s)).collect();

    let output: String = match config.output.format {
        OutputFormat::Text => found
            .iter()
            .flatten()
            .map(|m| format!("{}\n", m))
            .collect(),
        OutputFormat::Json => serde_json::to_string_pretty(&found)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(&found)?,
    };
    print!("{}", output);
    Ok(())
}

/// Handle the constituents command
fn handle_constituents_command(loaded: &Loaded, sentences: &[Sentence]) -> CliResult<()> {
    let Loaded { config, grammar } = loaded;
    let chunked: Vec<Vec<Constituent>> =
        sentences.iter().map(|s| grammar.constituents(s)).collect();

    let output: String = match config.output.format {
        OutputFormat::Text => chunked
            .iter()
            .map(|chunks| format!("{}\n", bracketed(chunks, config.output.show_labels)))
            .collect(),
        OutputFormat::Json => serde_json::to_string_pretty(&chunked)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(&chunked)?,
    };
    print!("{}", output);
    Ok(())
}

/// `[NP my/PRON cat/NOUN] !/PUNC`: labeled chunks in brackets, the rest bare.
fn bracketed(chunks: &[Constituent], show_labels: bool) -> String {
    chunks
        .iter()
        .map(|c| match (c.is_labeled(), show_labels) {
            (false, _) => c.to_string(),
            (true, true) => format!("[{} {}]", c.label, c),
            (true, false) => format!("[{}]", c),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
