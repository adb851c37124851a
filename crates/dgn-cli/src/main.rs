use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use dgn_cli::{load_config, Cli, Commands, DgnConfig, Session};
use tracing::{debug, error};
use tracing_subscriber::FmtSubscriber;

mod commands;

use commands::edit::Edit;
use commands::{analyze, completions, edit, show, Output};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    };
    let level = match cli.log_level.map(Ok).unwrap_or_else(|| config.log_level()) {
        Ok(level) => level,
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a global tracing subscriber was already set");
    }

    if let Err(err) = run(&cli, &config) {
        error!("{err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli, config: &DgnConfig) -> Result<()> {
    let path: PathBuf = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data.graph_file.clone());
    let out = Output {
        format: cli.format,
        precision: config.report.cost_precision,
    };
    debug!(path = %path.display(), command = ?cli.command, "running command");

    let open = || Session::open(&path).with_context(|| format!("loading {}", path.display()));
    let open_for_edit = || {
        Session::open_or_empty(&path).with_context(|| format!("loading {}", path.display()))
    };

    match &cli.command {
        Commands::ShowFile => {
            let session = Session::open_or_empty(&path)?;
            show::show_file(&session, &out)
                .with_context(|| format!("reading {}", path.display()))
        }
        Commands::ShowGraph => show::show_graph(&open()?, &out),
        Commands::Stats => show::stats(&open()?, &out),
        Commands::Degrees => show::degrees(&open()?, &out),
        Commands::InsertVertex { id, name, weight } => edit::apply(
            &mut open_for_edit()?,
            Edit::InsertCity {
                id: *id,
                name: name.clone(),
                weight: *weight,
            },
            &out,
        ),
        Commands::InsertEdge { src, dst, weight } => edit::apply(
            &mut open_for_edit()?,
            Edit::InsertLink {
                src: *src,
                dst: *dst,
                weight: *weight,
            },
            &out,
        ),
        Commands::RemoveVertex { id } => {
            edit::apply(&mut open()?, Edit::RemoveCity { id: *id }, &out)
        }
        Commands::RemoveEdge { src, dst } => edit::apply(
            &mut open()?,
            Edit::RemoveLink {
                src: *src,
                dst: *dst,
            },
            &out,
        ),
        Commands::Connectivity => analyze::connectivity(&open()?, &out),
        Commands::ShortestPath { src, dst } => analyze::path(&open()?, *src, *dst, &out),
        Commands::AllPairs => analyze::all_pairs(&open()?, &out),
        Commands::Eulerian => analyze::eulerian(&open()?, &out),
        Commands::Coloring => analyze::coloring(&open()?, &out),
        Commands::Save { to } => {
            let mut session = open()?;
            session
                .save_as(to)
                .with_context(|| format!("saving {}", to.display()))?;
            println!("Graph saved to {}", to.display());
            Ok(())
        }
        Commands::Completions { shell, out: target } => {
            completions::generate_completions(*shell, target.as_deref())
        }
    }
}
