mod store;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use ndollar::synth::{perturb, PerturbCfg, ReplayToken};
use ndollar::Query;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "ndollar")]
#[command(about = "Learn and recognize multistroke gestures against a JSON library file")]
struct Cmd {
    /// Library file (JSON object of name -> strokes); created when absent
    #[arg(long, default_value = "gestures.json")]
    library: PathBuf,

    /// Optional JSON file with recognizer tuning; missing fields take defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Learn (or replace) a gesture from a strokes file
    Learn {
        #[arg(long)]
        name: String,
        #[arg(long)]
        strokes: PathBuf,
    },
    /// Recognize a strokes file; prints the best match as JSON or `null`
    Recognize {
        #[arg(long)]
        strokes: PathBuf,
        /// Only match gestures learned with the same number of strokes
        #[arg(long)]
        strict: bool,
        /// Only match these gesture names
        #[arg(long, value_delimiter = ',')]
        among: Vec<String>,
    },
    /// Remove a gesture from the library
    Forget {
        #[arg(long)]
        name: String,
    },
    /// Print one gesture's strokes, or the whole library document
    Export {
        #[arg(long)]
        name: Option<String>,
    },
    /// List gestures with stroke and template counts
    List,
    /// Print a reproducible perturbed copy of a strokes file
    Synth {
        #[arg(long)]
        strokes: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
}

#[derive(Serialize)]
struct Entry<'a> {
    name: &'a str,
    strokes: usize,
    templates: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = store::load_config(cmd.config.as_deref())?;
    match cmd.action {
        Action::Learn { name, strokes } => {
            let mut rec = store::load_library(&cmd.library, cfg)?;
            let learned = rec.learn(&name, Some(store::load_strokes(&strokes)?))?;
            store::save_library(&cmd.library, &rec)?;
            tracing::info!(name, strokes = learned.len(), "learn");
        }
        Action::Recognize {
            strokes,
            strict,
            among,
        } => {
            let rec = store::load_library(&cmd.library, cfg)?;
            let mut query = Query::any();
            if strict {
                query = query.strict();
            }
            if !among.is_empty() {
                query = query.among(among);
            }
            let result = rec.recognize_strokes(&query, &store::load_strokes(&strokes)?)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Action::Forget { name } => {
            let mut rec = store::load_library(&cmd.library, cfg)?;
            if rec.forget(&name).is_none() {
                bail!("no gesture named {name:?} in {}", cmd.library.display());
            }
            store::save_library(&cmd.library, &rec)?;
            tracing::info!(name, "forget");
        }
        Action::Export { name } => {
            let rec = store::load_library(&cmd.library, cfg)?;
            let json = match name.as_deref() {
                Some(name) => rec.export(Some(name))?,
                None => rec.export_library()?,
            };
            println!("{json}");
        }
        Action::List => {
            let rec = store::load_library(&cmd.library, cfg)?;
            let entries: Vec<Entry> = rec
                .library()
                .iter()
                .map(|g| Entry {
                    name: g.name(),
                    strokes: g.stroke_count(),
                    templates: g.templates().len(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Action::Synth {
            strokes,
            seed,
            index,
        } => {
            let input = store::load_strokes(&strokes)?;
            let out = perturb(&input, PerturbCfg::default(), ReplayToken { seed, index });
            println!("{}", ndollar::library::strokes_to_json(&out)?);
        }
    }
    Ok(())
}
