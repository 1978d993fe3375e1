use crate::reports;
use clap::{Args, ValueEnum};
use frameforge_core::catalog::{HardwareCatalog, Part};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartsKind {
    Cpus,
    Gpus,
    Games,
}

#[derive(Args, Debug, Clone)]
pub struct PartsArgs {
    #[arg(value_enum)]
    pub kind: PartsKind,

    /// Case-insensitive substring matched against id and name.
    #[arg(short, long)]
    pub filter: Option<String>,
}

fn matches_filter(filter: &Option<String>, id: &str, name: &str) -> bool {
    match filter {
        Some(f) => {
            let f = f.to_lowercase();
            id.to_lowercase().contains(&f) || name.to_lowercase().contains(&f)
        }
        None => true,
    }
}

/// Fastest first.
fn ranked<'a, T: Part>(items: &'a [T], filter: &Option<String>) -> Vec<&'a T> {
    let mut out: Vec<&T> = items
        .iter()
        .filter(|p| matches_filter(filter, p.id(), p.name()))
        .collect();
    out.sort_by(|a, b| b.score().total_cmp(&a.score()));
    out
}

pub fn run(args: PartsArgs, catalog: &HardwareCatalog) {
    match args.kind {
        PartsKind::Cpus => {
            let cpus = ranked(catalog.cpus.all(), &args.filter);
            if cpus.is_empty() {
                println!("No CPUs found matching criteria.");
                return;
            }
            reports::print_cpus(&cpus, catalog.cpus.max_score());
        }
        PartsKind::Gpus => {
            let gpus = ranked(catalog.gpus.all(), &args.filter);
            if gpus.is_empty() {
                println!("No GPUs found matching criteria.");
                return;
            }
            reports::print_gpus(&gpus, catalog.gpus.max_score());
        }
        PartsKind::Games => {
            let mut games: Vec<_> = catalog
                .games
                .all()
                .iter()
                .filter(|g| matches_filter(&args.filter, &g.id, &g.name))
                .collect();
            if games.is_empty() {
                println!("No games found matching criteria.");
                return;
            }
            games.sort_by(|a, b| a.name.cmp(&b.name));
            let rows: Vec<_> = games
                .into_iter()
                .map(|g| (g, catalog.baselines.by_game_id(&g.id).is_some()))
                .collect();
            reports::print_games(&rows);
        }
    }
}
