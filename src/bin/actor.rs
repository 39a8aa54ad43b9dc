//! Command-line interface for actor files
//!
//! Usage:
//!   actor check `<path>`                                 - Parse a file and report errors
//!   actor fmt `<path>` [--write [--force]]               - Print (or rewrite) the canonical form
//!   actor inspect `<path>` [--format json|yaml|tree]     - Dump the parsed model or the line tree
//!
//! Global options: `--config <file>` layers a TOML file over the built-in defaults, `--verbose`
//! turns on debug logging (`RUST_LOG` takes precedence). `ACTOR_*` environment variables override
//! both the defaults and the file.

use actor_lang::actor::config::{ActorConfig, ConfigLoader};
use actor_lang::actor::formats::{to_treeviz_str, ActorWriter};
use actor_lang::actor::lexing::lex;
use actor_lang::actor::loader::{load_actor_file, write_actor_file};
use actor_lang::actor::parsing::Parser;
use clap::{Arg, ArgAction, ArgMatches, Command};

fn main() {
    let matches = Command::new("actor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking, formatting and inspecting actor files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("check")
                .about("Parse an actor file and report the first error")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("fmt")
                .about("Print the canonical form of an actor file")
                .arg(path_arg())
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .help("Rewrite the file in place instead of printing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Rewrite even when untagged goals would be dropped")
                        .requires("write")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Dump the parsed actor or the lexed line tree")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["json", "yaml", "tree"])
                        .default_value("json"),
                ),
        )
        .get_matches();

    // Global arguments only propagate down, so read them from the subcommand.
    let Some((name, sub)) = matches.subcommand() else {
        unreachable!()
    };
    init_logging(sub.get_flag("verbose"));
    let config = load_config(sub);

    match name {
        "check" => handle_check_command(required(sub, "path"), &config),
        "fmt" => handle_fmt_command(
            required(sub, "path"),
            sub.get_flag("write"),
            sub.get_flag("force"),
            &config,
        ),
        "inspect" => {
            handle_inspect_command(required(sub, "path"), required(sub, "format"), &config)
        }
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the actor file")
        .required(true)
        .index(1)
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(format!("Missing argument '{}'", name)))
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(matches: &ArgMatches) -> ActorConfig {
    let loader = match matches.get_one::<String>("config") {
        Some(path) => ConfigLoader::new().with_file(path),
        None => ConfigLoader::new(),
    };
    loader
        .with_env()
        .load()
        .unwrap_or_else(|e| fail(format!("Invalid configuration: {}", e)))
}

fn parser(config: &ActorConfig) -> Parser {
    Parser::with_options(config.parser_options())
}

fn handle_check_command(path: &str, config: &ActorConfig) {
    let actor = load_actor_file(path, &parser(config)).unwrap_or_else(|e| fail(e));
    println!("{}: ok, {}", path, actor);
}

fn handle_fmt_command(path: &str, write: bool, force: bool, config: &ActorConfig) {
    let actor = load_actor_file(path, &parser(config)).unwrap_or_else(|e| fail(e));
    let writer = ActorWriter::with_options(config.writer_options());

    let dropped = writer.dropped_goals(&actor);
    if dropped > 0 {
        if write && !force {
            fail(format!(
                "{}: {} untagged goal(s) would be dropped, set writer.always_emit_goal_list or pass --force",
                path, dropped
            ));
        }
        tracing::warn!(path, dropped, "untagged goals are only written next to a tagged goal");
    }

    if write {
        write_actor_file(&actor, path, &writer).unwrap_or_else(|e| fail(e));
        return;
    }

    let output = writer.render(&actor).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

fn handle_inspect_command(path: &str, format: &str, config: &ActorConfig) {
    if format == "tree" {
        let source = std::fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("Failed to read {}: {}", path, e)));
        print!("{}", to_treeviz_str(&lex(&source)));
        return;
    }

    let actor = load_actor_file(path, &parser(config)).unwrap_or_else(|e| fail(e));
    let output = match format {
        "yaml" => serde_yaml::to_string(&actor).unwrap_or_else(|e| fail(e)),
        _ => serde_json::to_string_pretty(&actor)
            .map(|json| format!("{}\n", json))
            .unwrap_or_else(|e| fail(e)),
    };
    print!("{}", output);
}
