//! Cheapest path across a grid of digit costs, on the grid as given (part 1)
//! and on the grid tiled `--factor` times (part 2).
//!
//! Run: cargo run --bin chiton -- input.txt

mod options;
mod render;

use std::error::Error;
use std::io::Read;

use chiton_core::{CostGrid, Point};
use chiton_paths::find_path_with;
use serde::Serialize;

use options::Options;

/// One solved part, as printed by `--json`.
#[derive(Debug, Serialize)]
struct PartReport<'a> {
    part: u8,
    width: i32,
    height: i32,
    cost: i32,
    steps: usize,
    head: &'a [Point],
    tail: &'a [Point],
}

fn main() {
    let env = env_logger::Env::new()
        .filter_or("CHITON_LOG", "warn")
        .write_style("CHITON_LOG_STYLE");
    env_logger::init_from_env(env);

    let options = match Options::from_args(std::env::args_os()) {
        Ok(o) => o,
        Err(e) => e.exit(),
    };
    log::debug!("options: {options:?}");

    if let Err(e) = run(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let text = read_input(options)?;
    let seed: CostGrid = text.parse()?;
    log::info!("loaded {}x{} grid", seed.width(), seed.height());

    solve(options, 1, &seed)?;
    let expanded = seed.expand(options.factor)?;
    solve(options, 2, &expanded)?;
    Ok(())
}

fn read_input(options: &Options) -> Result<String, Box<dyn Error>> {
    match &options.input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("reading {}: {e}", path.display()).into()),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn solve(options: &Options, part: u8, grid: &CostGrid) -> Result<(), Box<dyn Error>> {
    let cp = find_path_with(grid, options.heuristic)?;

    if options.render {
        println!("{}", render::render_path(grid, &cp.path));
    }

    let head = cp.head(options.show);
    let tail = cp.tail(options.show);
    if options.json {
        let report = PartReport {
            part,
            width: grid.width(),
            height: grid.height(),
            cost: cp.cost,
            steps: cp.steps(),
            head,
            tail,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        if options.show > 0 {
            println!(
                "{} {}",
                render::format_points(head),
                render::format_points(tail)
            );
        }
        println!("part {part}: cost={}", cp.cost);
    }
    Ok(())
}
