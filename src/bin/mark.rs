//! Command-line interface for mark
//! This binary parses files with the reference grammar and prints or checks the resulting tree.
//!
//! Usage:
//!   mark inspect `<path>` [--format `<format>`] [--config `<file>`] [--line-numbers]  - Print the tree
//!   mark check `<path>`                                                           - Report whether the file lexes
//!   mark list-formats                                                           - List available output formats
//!
//! Set `RUST_LOG=mark_parser=debug` (or `trace`) to see what the lexer is doing.

use clap::{Arg, ArgAction, ArgMatches, Command};
use mark_parser::mark::ast::snapshot_from_node;
use mark_parser::mark::config::{Loader, MarkConfig};
use mark_parser::mark::formats::{
    FormatError, FormatRegistry, TreevizFormatter, TreevizOptions,
};
use mark_parser::mark::{LexerOptions, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when `--config` is not given
const LOCAL_CONFIG: &str = "mark.toml";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let matches = Command::new("mark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting how mark documents are lexed")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("inspect")
                .about("Parse a file and print its tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to inspect")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'json', 'yaml')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("line-numbers")
                        .long("line-numbers")
                        .short('n')
                        .help("Prefix treeviz lines with source line numbers")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a file and report whether it lexes cleanly")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to check")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("inspect", inspect_matches)) => handle_inspect_command(inspect_matches),
        Some(("check", check_matches)) => handle_check_command(check_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Layer the config file (explicit or local) and CLI flags over the defaults
fn load_config(matches: &ArgMatches) -> MarkConfig {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };

    if let Ok(Some(format)) = matches.try_get_one::<String>("format") {
        loader = loader
            .set_override("inspect.format", format.as_str())
            .unwrap_or_else(|e| fail(e));
    }
    if matches!(matches.try_get_one::<bool>("line-numbers"), Ok(Some(&true))) {
        loader = loader
            .set_override("inspect.show_line_numbers", true)
            .unwrap_or_else(|e| fail(e));
    }

    loader
        .build()
        .unwrap_or_else(|e| fail(format!("invalid configuration: {}", e)))
}

fn read_source(matches: &ArgMatches) -> (String, String) {
    let path = matches
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_else(|| fail("missing path"));
    let source = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| fail(format!("cannot read {}: {}", path, e)));
    (path, source)
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) {
    let config = load_config(matches);

    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::new(TreevizOptions {
        show_line_numbers: config.inspect.show_line_numbers,
        label_width: config.inspect.label_width,
    }));
    if !registry.has(&config.inspect.format) {
        fail(FormatError::FormatNotFound(config.inspect.format.clone()));
    }

    let (path, source) = read_source(matches);
    let tree = Parser::new(&source)
        .with_options(LexerOptions::from(&config.lexer))
        .tree()
        .unwrap_or_else(|e| fail(format!("{}: {}", path, e)));

    let Some(root) = tree else {
        info!(%path, "empty document");
        return;
    };

    let output = registry
        .serialize(&snapshot_from_node(&root), &config.inspect.format)
        .unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let (path, source) = read_source(matches);

    match Parser::new(&source)
        .with_options(LexerOptions::from(&config.lexer))
        .tree()
    {
        Ok(Some(root)) => println!("{}: ok ({} top-level blocks)", path, root.children().len()),
        Ok(None) => println!("{}: ok (empty)", path),
        Err(e) => fail(format!("{}: {}", path, e)),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {}", name);
        if !description.is_empty() {
            println!("    {}", description);
        }
    }
}
