use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use rustc_hash::FxHashMap;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use volley::data;
use volley::domain::Shot;
use volley::print;
use volley::summary::ShotSummary;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV or JSON file containing the shot log
    file: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.file
            .as_ref()
            .ok_or(anyhow!("shot file must be specified"))?;
        Ok(())
    }
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

    let mut by_player: FxHashMap<&str, Vec<&Shot>> = FxHashMap::default();
    for shot in &shots {
        by_player.entry(&shot.player).or_default().push(shot);
    }

    let mut rows: Vec<(String, ShotSummary)> = by_player
        .into_iter()
        .map(|(player, shots)| (player.to_string(), ShotSummary::collect(shots)))
        .collect();
    rows.sort_by(|(_, a), (_, b)| b.xg_delta().total_cmp(&a.xg_delta()));

    info!(
        "{} players:\n{}",
        rows.len(),
        Console::default().render(&print::tabulate_players(&rows))
    );

    Ok(())
}
