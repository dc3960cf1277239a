//! Command-line options.
//! `chiton [FILE] [-f FACTOR] [--heuristic manhattan|zero] [-r] [-n N] [--json]`

use std::ffi::OsString;
use std::path::PathBuf;

use chiton_paths::Heuristic;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Arg, ArgAction, Command, value_parser};

/// Tiling factor used for part 2 unless overridden.
pub const DEFAULT_FACTOR: usize = 5;
/// Number of path cells printed from each end unless overridden.
pub const DEFAULT_SHOW: usize = 10;

fn make_options_parser() -> Command {
    Command::new("chiton")
        .about("Cheapest orthogonal path across a grid of digit costs")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Grid of digits, one row per line; `-` or absent reads stdin")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("factor")
                .short('f')
                .long("factor")
                .value_name("N")
                .help(format!(
                    "How many times part 2 tiles the grid along each axis [default: {DEFAULT_FACTOR}]"
                ))
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("heuristic")
                .long("heuristic")
                .ignore_case(true)
                .help(format!(
                    "Frontier estimate; `zero` runs plain Dijkstra [default: {}]",
                    Heuristic::default()
                ))
                .value_parser(
                    PossibleValuesParser::new(Heuristic::NAMES).try_map(|h| h.parse::<Heuristic>()),
                ),
        )
        .arg(
            Arg::new("render")
                .short('r')
                .long("render")
                .help("Draw each grid with the cheapest path overlaid")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show")
                .short('n')
                .long("show")
                .value_name("N")
                .help(format!(
                    "Print the first and last N cells of each path [default: {DEFAULT_SHOW}]"
                ))
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit one JSON object per part instead of text")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// `None` means standard input.
    pub input: Option<PathBuf>,
    pub factor: usize,
    pub heuristic: Heuristic,
    pub render: bool,
    pub show: usize,
    pub json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: None,
            factor: DEFAULT_FACTOR,
            heuristic: Heuristic::default(),
            render: false,
            show: DEFAULT_SHOW,
            json: false,
        }
    }
}

impl Options {
    /// Parse options from a full argument list (binary name first).
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        let defaults = Options::default();

        Ok(Options {
            input: matches
                .get_one::<PathBuf>("input")
                .filter(|p| p.as_os_str() != "-")
                .cloned(),
            factor: matches
                .get_one::<usize>("factor")
                .copied()
                .unwrap_or(defaults.factor),
            heuristic: matches
                .get_one::<Heuristic>("heuristic")
                .copied()
                .unwrap_or(defaults.heuristic),
            render: matches.get_flag("render"),
            show: matches
                .get_one::<usize>("show")
                .copied()
                .unwrap_or(defaults.show),
            json: matches.get_flag("json"),
        })
    }
}
