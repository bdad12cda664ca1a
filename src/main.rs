//! ctext - print text in named ANSI colors

use clap::{Parser, Subcommand};
use ctext::{Colorizer, Registry};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctext")]
#[command(about = "Print text in named ANSI colors")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Register a custom color before running, e.g. `orange='\e[38;5;202m'`
    #[arg(long = "define", value_name = "NAME=ESCAPE", value_parser = parse_define, global = true)]
    defines: Vec<(String, String)>,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print TEXT in COLOR, followed by a reset
    Paint {
        color: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List available colors, each shown in itself (default)
    List,
    /// Show the ways colors can be combined
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let palette = ctext::palette();
    for (name, value) in cli.defines {
        palette.set(name, value);
    }

    match run(palette, cli.command.unwrap_or(Command::List)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ctext: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(palette: &Registry, command: Command) -> ctext::Result<()> {
    match command {
        Command::Paint { color, text } => {
            let painted = palette.colorizer(&color)?.apply(&text.join(" "))?;
            println!("{painted}");
        }
        Command::List => {
            for name in palette.list_keys() {
                println!("{}", Colorizer::new(palette.clone(), name));
            }
        }
        Command::Demo => demo(palette)?,
    }
    Ok(())
}

fn demo(palette: &Registry) -> ctext::Result<()> {
    let blue = palette.colorizer("blue")?;
    let red = palette.colorizer("red")?;
    let default = palette.colorizer("default")?;

    println!("{}", blue.apply("this text is blue")?);
    println!("{}", ctext::color("blue")?.apply("this text is also blue")?);
    println!("{}", &blue + "blue text" + &red + " now red" + &default);

    if !palette.contains("orange") {
        palette.set("orange", "\x1b[38;5;202m");
    }
    println!(
        "{}",
        palette.colorizer("orange")?.apply("this text is orange")?
    );
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse `NAME=ESCAPE`, accepting shell-typeable spellings of ESC
fn parse_define(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=ESCAPE, got '{arg}'"))?;
    if name.is_empty() {
        return Err("color name is empty".into());
    }
    Ok((name.to_owned(), unescape(value)))
}

fn unescape(value: &str) -> String {
    ["\\u001b", "\\x1b", "\\033", "\\e"]
        .iter()
        .fold(value.to_owned(), |acc, spelling| acc.replace(spelling, "\x1b"))
}
