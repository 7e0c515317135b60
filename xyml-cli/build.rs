use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_FORMATS: &[&str] = &["xyml", "xml", "json"];

fn format_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
        .value_hint(ValueHint::Other)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("xyml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting element trees between XYML, XML and JSON")
        .arg_required_else_help(true)
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
                .help("Path to an xyml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Increase log verbosity on stderr")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats")
                .arg(input_arg())
                .arg(format_arg("from").help("Source format"))
                .arg(format_arg("to").help("Target format").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Re-render an XYML file")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("select")
                .about("Print the elements with a given name as XYML")
                .arg(input_arg())
                .arg(Arg::new("name").help("Element name").required(true).index(2))
                .arg(Arg::new("attr").long("attr").help("KEY=VALUE filter"))
                .arg(format_arg("from").help("Source format")),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "xyml", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "xyml", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "xyml", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
