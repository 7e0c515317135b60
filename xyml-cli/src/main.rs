// Command-line interface for xyml
//
// This binary converts element trees between XYML, XML and JSON, re-renders XYML
// documents and selects elements out of them. The core capabilities live in the xyml crate;
// this is a thin shell around its FormatRegistry and transforms.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  xyml <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  xyml convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  xyml format <input>                         - Re-render as XYML in the configured style
//  xyml select <input> <name> [--attr k=v]     - Print matching elements as XYML
//  xyml --list-formats                         - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Known keys (style, indent, pretty) override the
// configuration; the rest are passed to the target format.
// Example:
//  xyml quiz.xyml --to xml --extra-indent 2

use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};
use xyml::transforms::{render_selection, select};
use xyml::{FormatRegistry, RenderStyle};
use xyml_config::{Loader, XymlConfig};

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn from_arg() -> Arg {
    Arg::new("from")
        .long("from")
        .help("Source format (auto-detected from file extension if not specified)")
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("xyml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting element trees between XYML, XML and JSON")
        .long_about(
            "xyml is a command-line tool for working with XYML element trees.\n\n\
            Commands:\n  \
            - convert: Transform between xyml, xml and json\n  \
            - format:  Re-render an XYML file (field or canonical style)\n  \
            - select:  Print the elements with a given name\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            xyml quiz.xyml --to xml                      # Convert to XML (stdout)\n  \
            xyml quiz.xml --to json -o quiz.json         # Convert to a JSON file\n  \
            xyml format quiz.xyml --extra-style canonical\n  \
            xyml select quiz.xyml question --attr level=2",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an xyml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Increase log verbosity on stderr (-d info, -dd debug, -ddd trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - xyml: XYML list notation (.xyml, .yaml, .yml)\n  \
                    - xml:  XML markup (.xml)\n  \
                    - json: JSON interchange (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(input_arg())
                .arg(from_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Re-render an XYML file")
                .long_about(
                    "Parse an XYML file and render it again.\n\n\
                    The style comes from the configuration (render.style) and can be\n\
                    overridden with --extra-style field|canonical.\n\n\
                    Output is always written to stdout.",
                )
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("select")
                .about("Print the elements with a given name as XYML")
                .arg(input_arg())
                .arg(
                    Arg::new("name")
                        .help("Element name to look for")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("attr")
                        .long("attr")
                        .value_name("KEY=VALUE")
                        .help("Only keep elements whose attribute KEY equals VALUE"),
                )
                .arg(from_arg()),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["convert", "format", "select", "help"].contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    setup_logging(matches.get_count("debug"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    let registry = config.format_registry();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("input is required");
            };
            let Some(to) = sub_matches.get_one::<String>("to") else {
                fail("--to is required");
            };
            let from = resolve_from(&registry, input, sub_matches.get_one::<String>("from"));
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        Some(("format", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("input is required");
            };
            handle_convert_command(&registry, input, "xyml", "xyml", None, &extra_params);
        }
        Some(("select", sub_matches)) => {
            let (Some(input), Some(name)) = (
                sub_matches.get_one::<String>("input"),
                sub_matches.get_one::<String>("name"),
            ) else {
                fail("input and name are required");
            };
            let from = resolve_from(&registry, input, sub_matches.get_one::<String>("from"));
            let attr = sub_matches.get_one::<String>("attr").map(|raw| {
                raw.split_once('=').unwrap_or_else(|| {
                    fail(&format!("Invalid --attr '{raw}', expected KEY=VALUE"))
                })
            });
            handle_select_command(&registry, input, &from, name, attr, config.render.style);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    debug!(?filter, "logging initialized");
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Explicit `--from`, or the format matching the input's extension.
fn resolve_from(registry: &FormatRegistry, input: &str, explicit: Option<&String>) -> String {
    if let Some(from) = explicit {
        return from.to_string();
    }
    match registry.detect_format_from_filename(input) {
        Some(detected) => {
            info!(input, format = %detected, "detected source format");
            detected
        }
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    // Validate formats exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = read_input(input);

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            info!(path, "wrote output");
        }
        None => print!("{result}"),
    }
}

/// Handle the select command
fn handle_select_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    name: &str,
    attr: Option<(&str, &str)>,
    style: RenderStyle,
) {
    let source = read_input(input);
    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let found = select(&doc, name, attr);
    if found.is_empty() {
        eprintln!("No element named '{name}' found");
        std::process::exit(1);
    }
    print!("{}", render_selection(&found, style));
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            println!(
                "  {:<6} {} (.{})",
                format_name,
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> XymlConfig {
    let loader = Loader::new().with_optional_file("xyml.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut XymlConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("style") {
        config.render.style = raw.parse().unwrap_or_else(|e: String| fail(&e));
    }
    if let Some(raw) = extra_params.remove("indent") {
        config.xml.indent = raw.parse().unwrap_or_else(|_| {
            fail(&format!("Invalid value '{raw}' for --extra-indent"))
        });
    }
    if let Some(raw) = extra_params.remove("pretty") {
        config.json.pretty = parse_bool_arg("pretty", &raw);
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
