//! Command-line surface of the `scene-baker` binary.

use std::{
    ffi::OsString,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use log::LevelFilter;

use crate::{
    data_structures::triplet::{MaterialOutcome, TextureTriplet},
    resources::{load_document, resolve_triplets, texture::material_outcomes},
};

/// Text printed by `--howto`.
pub const HOWTO: &str = "TODO";

/// A single `--howto` or `--json` occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Howto,
    Json(PathBuf),
}

/// Command-line arguments.
///
/// Build with [`Args::parse_ordered`] or [`Args::try_parse_ordered_from`] so
/// that [`Args::actions`] reflects the order flags were given in.
#[derive(Parser, Debug)]
#[command(name = "scene-baker", version, about = "GLTF scene baker", long_about = None)]
pub struct Args {
    /// Print baking instructions
    #[arg(long, num_args = 0, default_missing_value = "true", action = ArgAction::Append)]
    pub howto: Vec<bool>,

    /// List the base color, normal and metallic-roughness image of every PBR material in PATH
    #[arg(long = "json", value_name = "PATH")]
    pub json: Vec<PathBuf>,

    /// Report materials with broken references and continue with the rest
    #[arg(long)]
    pub keep_going: bool,

    /// Join every image uri onto the directory of its scene file
    #[arg(long)]
    pub resolve_paths: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(skip)]
    actions: Vec<Action>,
}

impl Args {
    /// Parse the process arguments, exiting with a usage error on failure.
    pub fn parse_ordered() -> Self {
        Self::try_parse_ordered_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_ordered_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(itr)?;
        let mut args = Self::from_arg_matches(&matches)?;
        args.actions = ordered_actions(&matches, &args.json);
        Ok(args)
    }

    /// `--howto` and `--json` occurrences in command-line order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Log to stderr at `level` unless `RUST_LOG` says otherwise.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if let Err(e) = builder.try_init() {
        eprintln!("Warning: Could not initialize logger: {}", e);
    }
}

fn ordered_actions(matches: &ArgMatches, json: &[PathBuf]) -> Vec<Action> {
    let howto = matches
        .indices_of("howto")
        .into_iter()
        .flatten()
        .map(|index| (index, Action::Howto));
    let json = matches
        .indices_of("json")
        .into_iter()
        .flatten()
        .zip(json)
        .map(|(index, path)| (index, Action::Json(path.clone())));

    let mut actions: Vec<_> = howto.chain(json).collect();
    actions.sort_by_key(|(index, _)| *index);
    actions.into_iter().map(|(_, action)| action).collect()
}

pub fn print_howto(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{HOWTO}")
}

/// Run every action requested by `args` in command-line order, writing
/// results to `out`. The first failing action stops the run.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    for action in args.actions() {
        match action {
            Action::Howto => print_howto(out)?,
            Action::Json(path) => bake(path, args, out)
                .with_context(|| format!("Failed to bake {}", path.display()))?,
        }
    }
    Ok(())
}

fn bake(path: &Path, args: &Args, out: &mut impl Write) -> Result<()> {
    let base = args
        .resolve_paths
        .then(|| path.parent().unwrap_or(Path::new("")));
    let mut emit = |triplet: TextureTriplet| match base {
        Some(dir) => writeln!(out, "{}", triplet.rebased(dir)),
        None => writeln!(out, "{triplet}"),
    };

    if !args.keep_going {
        let mut emitted = 0;
        for triplet in resolve_triplets(path)? {
            emit(triplet?)?;
            emitted += 1;
        }
        log::info!("{}: {emitted} texture sets", path.display());
        return Ok(());
    }

    let document = load_document(path)?;
    let (mut emitted, mut skipped, mut failed) = (0, 0, 0);
    for outcome in material_outcomes(&document) {
        match outcome {
            MaterialOutcome::Emitted(triplet) => {
                emit(triplet)?;
                emitted += 1;
            }
            MaterialOutcome::Skipped(_) => skipped += 1,
            MaterialOutcome::Failed(e) => {
                log::error!("{} ({}): {e}", path.display(), e.kind());
                failed += 1;
            }
        }
    }
    log::info!(
        "{}: {emitted} texture sets, {skipped} materials skipped, {failed} failed",
        path.display()
    );
    if failed > 0 {
        bail!("{failed} of {} materials could not be resolved", document.materials.len());
    }
    Ok(())
}
