//! tinct command-line front end
//!
//! Parse, convert, and adjust CSS colors, and generate box style variables
//! from a JSON description.
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG` or pass `-v`.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use owo_colors::OwoColorize;
use tinct_color::named::all_named_colors;
use tinct_color::{Color, Hsla, OutputEncoding, ParsedColor, Rgba, serialize};
use tinct_common::warning::clear_warnings;
use tinct_style::{BoxProps, StyleConfig, StyleStrategy, box_style_vars};

/// tinct - CSS color normalization and conversion
#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Show every representation of a few colors
    tinct parse red '#abc' 'rgb(0 0 0 / 50%)' 0xff00ffff

    # Convert to a single encoding
    tinct convert 'hsl(120, 100%, 25%)' --to hex

    # Darken by 15 percentage points of lightness
    tinct darken cornflowerblue 15

    # Shaded box variables as JSON
    tinct box-vars box.json --strategy shaded --json
"#)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse colors and print every representation
    Parse {
        /// Colors: hex, rgb()/hsl(), names, var(--x), or packed 0xRRGGBBAA
        #[arg(required = true, value_name = "COLOR", value_parser = parse_color_arg)]
        colors: Vec<Color>,
    },

    /// Convert a color to one encoding
    Convert {
        /// Color to convert
        #[arg(value_parser = parse_color_arg)]
        color: Color,

        /// Output encoding: hex, packed, or hsla
        #[arg(short, long, default_value = "hex", value_parser = OutputEncoding::from_str)]
        to: OutputEncoding,
    },

    /// Raise a color's lightness
    Lighten {
        /// Color to adjust
        #[arg(value_parser = parse_color_arg)]
        color: Color,

        /// Percentage points to add
        amount: f64,
    },

    /// Lower a color's lightness
    Darken {
        /// Color to adjust
        #[arg(value_parser = parse_color_arg)]
        color: Color,

        /// Percentage points to subtract
        amount: f64,
    },

    /// List the named colors
    Names,

    /// Generate box style variables from a JSON file (`-` for stdin)
    BoxVars {
        /// JSON with `size` and optional `surfaceColor`
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Surface color layout: flat or shaded
        #[arg(long, value_parser = StyleStrategy::from_str)]
        strategy: Option<StyleStrategy>,

        /// Color encoding (defaults to the layout's own)
        #[arg(long, value_parser = OutputEncoding::from_str)]
        encoding: Option<OutputEncoding>,

        /// Print a JSON object instead of an inline style
        #[arg(long)]
        json: bool,
    },
}

/// Numeric arguments (`0xff0000ff`, `4278190335`) are packed colors;
/// anything else is CSS text.
fn parse_color_arg(arg: &str) -> Result<Color, String> {
    if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16)
            .map(Color::Packed)
            .map_err(|e| format!("invalid packed color '{arg}': {e}"));
    }
    if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
        return arg
            .parse()
            .map(Color::Packed)
            .map_err(|e| format!("invalid packed color '{arg}': {e}"));
    }
    Ok(Color::from(arg))
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// A truecolor block showing the color (alpha ignored).
fn swatch(rgba: Rgba) -> String {
    let [r, g, b, _] = rgba.to_packed().to_be_bytes();
    "████".truecolor(r, g, b).to_string()
}

fn concrete(color: &Color) -> Result<Rgba> {
    color
        .parse()?
        .into_rgba()
        .with_context(|| format!("cannot adjust {color}"))
}

fn print_parsed(input: &Color, parsed: &ParsedColor) {
    println!("{}", input.bold());
    match parsed {
        ParsedColor::Deferred(reference) => {
            println!("  deferred  {reference} {}", "(resolved by the stylesheet)".dimmed());
        }
        ParsedColor::Rgba(rgba) => {
            let packed = rgba.to_packed();
            println!("  rgba      {}, {}, {}, {}", rgba.r, rgba.g, rgba.b, rgba.a);
            println!("  hex       {}", rgba.to_hex_string());
            println!("  packed    0x{packed:08x} ({packed})");
            println!("  hsla      {}", rgba.to_hsla());
            println!("  swatch    {}", swatch(*rgba));
        }
    }
}

fn run_parse(colors: &[Color]) -> Result<()> {
    let mut failures = 0usize;
    for color in colors {
        match color.parse() {
            Ok(parsed) => print_parsed(color, &parsed),
            Err(err) => {
                failures += 1;
                eprintln!("{} {err}", "error:".red().bold());
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} colors could not be parsed", colors.len());
    }
    Ok(())
}

fn print_adjusted(adjusted: Hsla) {
    let rgba = adjusted.to_rgba();
    println!("{adjusted}");
    println!("{} {}", rgba.to_hex_string(), swatch(rgba));
}

fn read_props(file: &Path) -> Result<BoxProps> {
    let text = if file.as_os_str() == "-" {
        let mut buf = String::new();
        let _ = io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read box props from stdin")?;
        buf
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("invalid box props in {}", file.display()))
}

fn run_box_vars(
    file: &Path,
    strategy: Option<StyleStrategy>,
    encoding: Option<OutputEncoding>,
    json: bool,
) -> Result<()> {
    let props = read_props(file)?;

    let mut config = StyleConfig::for_strategy(strategy.unwrap_or_default());
    if let Some(encoding) = encoding {
        config.encoding = encoding;
    }
    log::debug!("generating box variables with {config:?}");

    clear_warnings();
    let vars = box_style_vars(&props, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&vars)?);
    } else {
        println!("{vars}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Parse { colors } => run_parse(&colors)?,
        Command::Convert { color, to } => {
            println!("{}", serialize(&color.parse()?, to));
        }
        Command::Lighten { color, amount } => {
            print_adjusted(concrete(&color)?.to_hsla().lighten(amount));
        }
        Command::Darken { color, amount } => {
            print_adjusted(concrete(&color)?.to_hsla().darken(amount));
        }
        Command::Names => {
            for (name, packed) in all_named_colors() {
                let rgba = Rgba::from_packed(packed);
                println!("{} {name:<22} #{packed:08x}", swatch(rgba));
            }
        }
        Command::BoxVars {
            file,
            strategy,
            encoding,
            json,
        } => run_box_vars(&file, strategy, encoding, json)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_arguments_are_packed() {
        assert_eq!(parse_color_arg("0xff0000ff"), Ok(Color::Packed(0xff00_00ff)));
        assert_eq!(parse_color_arg("0XFF"), Ok(Color::Packed(0xff)));
        assert_eq!(parse_color_arg("4278190335"), Ok(Color::Packed(0xff00_00ff)));
    }

    #[test]
    fn test_other_arguments_are_css() {
        assert_eq!(parse_color_arg("red"), Ok(Color::from("red")));
        assert_eq!(parse_color_arg("#123"), Ok(Color::from("#123")));
    }

    #[test]
    fn test_bad_packed_argument() {
        assert!(parse_color_arg("0xzz").is_err());
        assert!(parse_color_arg("99999999999").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_box_vars_flags() {
        let cli = Cli::try_parse_from([
            "tinct", "box-vars", "box.json", "--strategy", "Shaded", "--encoding", "hex", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::BoxVars {
                strategy, encoding, json, ..
            } => {
                assert_eq!(strategy, Some(StyleStrategy::Shaded));
                assert_eq!(encoding, Some(OutputEncoding::Hex));
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
