// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: read a graph description, solve, print the
//! coloring.

use anyhow::{bail, Context, Result};
use clap::Parser;
use map_coloring::{parse_description, populate_graph, solve, HeuristicLevel, Palette};
use std::fs::File;
use std::io::{stdin, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mapcolor", about = "Color a graph described on stdin or in a file")]
struct Args {
    /// Description file; stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Heuristic level a..e. Overrides the description header when given.
    #[arg(long)]
    heuristic: Option<char>,

    /// Palette size.
    #[arg(long, default_value_t = 4)]
    colors: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(stdin())),
    };

    let description = parse_description(reader).context("parsing description")?;

    // An explicit --heuristic wins over the description header.
    let selector = args
        .heuristic
        .or(description.heuristic)
        .unwrap_or('a');
    let Some(level) = HeuristicLevel::from_char(selector) else {
        bail!("unknown heuristic level '{}' (expected a..e)", selector);
    };

    let graph = populate_graph(&description).context("populating graph")?;
    let palette = Palette::of_size(args.colors);

    match solve(&graph, &palette, level.config()) {
        Some(solution) => {
            for v in graph.ids() {
                println!("{}: {}.", graph.vertex(v).name(), palette.name(solution.color(v)));
            }
        }
        None => println!("Impossible"),
    }
    Ok(())
}
