//! Command-line interface for tomlet
//! Parses a file and prints its tokens or document tree for inspection.
//!
//! Usage:
//!   tomlet `<path>` [--format `<format>`] [--config `<file>`]  - Parse a file and print it
//!   tomlet --list-formats                                   - List all available formats
//!
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use clap::{Arg, ArgAction, Command};
use tomlet::tomlet::config::{Loader, ToolConfig};
use tomlet::tomlet::processor::{available_formats, Processor, ProcessingSpec};

fn main() {
    env_logger::init();

    let matches = Command::new("tomlet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting tomlet configuration files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the file to parse")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: ast-treeviz)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("format"),
    );
    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Error: a path is required unless listing formats");
        std::process::exit(1);
    };
    handle_parse_command(path, &config);
}

fn load_config(config_path: Option<&String>, format: Option<&String>) -> ToolConfig {
    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the default parse command
fn handle_parse_command(path: &str, config: &ToolConfig) {
    let spec = ProcessingSpec::from_string(&config.output.format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for format in available_formats() {
            eprintln!("  {}", format);
        }
        std::process::exit(1);
    });

    log::debug!("parsing {} as {}", path, spec.name());
    let output = Processor::from_config(config)
        .process_file(path, &spec)
        .unwrap_or_else(|e| {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
