use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use volley::breakdown;
use volley::curve::CumulativeCurve;
use volley::data;
use volley::domain::{ShotType, Situation};
use volley::print;
use volley::summary::ShotSummary;
use volley::view::ShotView;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV or JSON file containing the shot log
    file: Option<PathBuf>,

    /// player to analyse; omit to analyse the whole log
    #[clap(short, long)]
    player: Option<String>,

    /// minimum xG threshold for the view
    #[clap(short = 't', long = "min-xg", default_value_t = 0.0)]
    min_xg: f64,

    /// restrict to a situation (may be repeated)
    #[clap(short = 's', long = "situation", value_parser = parse_situation)]
    situations: Vec<Situation>,

    /// restrict to a shot type (may be repeated)
    #[clap(short = 'b', long = "shot-type", value_parser = parse_shot_type)]
    shot_types: Vec<ShotType>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.file
            .as_ref()
            .ok_or(anyhow!("shot file must be specified"))?;
        Ok(())
    }
}

fn parse_situation(s: &str) -> anyhow::Result<Situation> {
    s.parse().map_err(|_| anyhow!("unsupported situation {s}"))
}

fn parse_shot_type(s: &str) -> anyhow::Result<ShotType> {
    s.parse().map_err(|_| anyhow!("unsupported shot type {s}"))
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let shots = data::load(args.file.unwrap())?;
    info!("loaded {} shots", shots.len());

    let view = ShotView {
        player: args.player,
        situations: (!args.situations.is_empty()).then_some(args.situations),
        shot_types: (!args.shot_types.is_empty()).then_some(args.shot_types),
        min_xg: args.min_xg,
    };
    let selected = view.select(&shots);
    info!("{} shots in view (min xG {})", selected.len(), view.min_xg);

    let summary = ShotSummary::collect(selected.iter().copied());
    info!(
        "summary:\n{}",
        Console::default().render(&print::tabulate_summary(&summary))
    );

    let situations = breakdown::by_situation(selected.iter().copied());
    info!(
        "by situation:\n{}",
        Console::default().render(&print::tabulate_breakdown("Situation", &situations))
    );

    let shot_types = breakdown::by_shot_type(selected.iter().copied());
    info!(
        "by shot type:\n{}",
        Console::default().render(&print::tabulate_breakdown("Shot type", &shot_types))
    );

    let curve = CumulativeCurve::build(selected.iter().copied());
    match curve.peak() {
        Some(peak) => info!(
            "peak overperformance {:+.2} after shot {} of {} (ascending xG)",
            peak.value,
            peak.index,
            curve.len() - 1
        ),
        None => info!("no overperformance peak"),
    }

    Ok(())
}
