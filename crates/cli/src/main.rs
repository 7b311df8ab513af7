use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quadmax::prelude::{random_points, Bounds2, RandomCfg, ReplayToken, Vec2};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod doc;
mod provenance;

use doc::{BoundsDoc, ResultDoc, TaskDoc};
use provenance::Provenance;

#[derive(Parser)]
#[command(name = "quadmax")]
#[command(about = "Find four points whose simple quadrilateral encloses the most others")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write a point document with random grid points
    Random(RandomArgs),
    /// Solve a point document; optionally write the result as JSON
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the problem statement
    Task,
}

#[derive(Args)]
struct RandomArgs {
    #[arg(long)]
    count: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Draw index within the seed's stream
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long, default_value_t = 30)]
    cols: u32,
    #[arg(long, default_value_t = 30)]
    rows: u32,
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    min_x: f64,
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    min_y: f64,
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    max_x: f64,
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    max_y: f64,
    #[arg(long)]
    out: PathBuf,
}

impl RandomArgs {
    fn cfg(&self) -> Result<RandomCfg> {
        let bounds = Bounds2::new(
            Vec2::new(self.min_x, self.min_y),
            Vec2::new(self.max_x, self.max_y),
        )
        .context("--min-x/--min-y/--max-x/--max-y")?;
        Ok(RandomCfg {
            cols: self.cols,
            rows: self.rows,
            bounds,
        })
    }

    fn token(&self) -> ReplayToken {
        ReplayToken {
            seed: self.seed,
            index: self.index,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    run(Cmd::parse())
}

fn run(cmd: Cmd) -> Result<()> {
    match cmd.action {
        Action::Random(args) => random(&args).map(drop),
        Action::Solve { input, out } => {
            let (res, _) = solve(&input, out.as_deref())?;
            println!("{}", summary(&res));
            Ok(())
        }
        Action::Task => {
            println!("{}", quadmax::TASK_TEXT);
            Ok(())
        }
    }
}

/// Draw the points, write the document and its provenance; returns the document.
fn random(args: &RandomArgs) -> Result<TaskDoc> {
    let cfg = args.cfg()?;
    let tok = args.token();
    tracing::info!(
        count = args.count,
        seed = tok.seed,
        index = tok.index,
        out = %args.out.display(),
        "random"
    );
    let points = random_points(cfg, args.count, tok).context("drawing random points")?;
    let task = TaskDoc::new(cfg.bounds, &points);
    task.save(&args.out)?;
    let params = serde_json::json!({
        "count": args.count,
        "seed": tok.seed,
        "index": tok.index,
        "grid": [cfg.cols, cfg.rows],
        "bounds": BoundsDoc::from(cfg.bounds),
    });
    Provenance::new("random", params, &args.out).write()?;
    Ok(task)
}

/// Solve a point document; with `out`, also write the result and its
/// provenance and return the provenance path.
fn solve(input: &Path, out: Option<&Path>) -> Result<(ResultDoc, Option<PathBuf>)> {
    tracing::info!(input = %input.display(), "solve");
    let task = TaskDoc::load(input)?;
    let mut core = task.to_core()?;
    core.solve();
    let res = ResultDoc::from_core(&core).context("core reported unsolved after solve")?;

    let Some(out) = out else {
        return Ok((res, None));
    };
    res.save(out)?;
    let params = serde_json::json!({ "points": core.len() });
    let prov = Provenance::new("solve", params, out)
        .with_input(input)
        .write()?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "result written");
    Ok((res, Some(prov)))
}

fn summary(res: &ResultDoc) -> String {
    let n = res.vertices.len() + res.enclosed.len() + res.outside.len();
    if res.vertices.is_empty() {
        format!("no simple quadrilateral among {n} points")
    } else {
        format!(
            "vertices {:?} enclose {} of {n} points",
            res.vertices, res.enclosed_count
        )
    }
}
