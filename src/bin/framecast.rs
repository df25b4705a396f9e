use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "framecast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one frame description as JSON.
    Frame(FrameArgs),
    /// Print the resolved scene timeline.
    Timeline(TimelineArgs),
    /// Print a fingerprint per frame for determinism checks.
    Digest(DigestArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct DigestArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Evaluate frames on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (defaults to rayon's choice).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Digest(args) => cmd_digest(args),
    }
}

fn read_comp_json(path: &Path) -> anyhow::Result<framecast::Composition> {
    framecast::Composition::from_path(path)
        .with_context(|| format!("load composition '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = read_comp_json(&args.in_path)?;
    let desc = framecast::Evaluator::eval_frame(&comp, framecast::FrameIndex(args.frame))?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&desc)
    } else {
        serde_json::to_string(&desc)
    }
    .context("serialize frame description")?;
    println!("{json}");
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let comp = read_comp_json(&args.in_path)?;
    let timeline = comp.timeline()?;
    let decl = comp.decl()?;
    println!(
        "{} {}x{} @ {}/{} fps, {} frames",
        decl.id, decl.width, decl.height, decl.fps.num, decl.fps.den, decl.duration_frames
    );
    for (window, scene) in timeline.windows().iter().zip(&comp.scenes) {
        let transition = match &scene.transition_out {
            Some(t) => format!(" -> {} {}f", t.kind, t.duration_frames),
            None => String::new(),
        };
        println!(
            "{:>3} {:<24} [{}, {}) {}{}",
            window.index,
            scene.id,
            window.start.0,
            window.end.0,
            scene.component.kind_name(),
            transition
        );
    }
    Ok(())
}

fn cmd_digest(args: DigestArgs) -> anyhow::Result<()> {
    let comp = read_comp_json(&args.in_path)?;
    let span = comp.duration_frames()?;
    let range = framecast::FrameRange::new(framecast::FrameIndex(0), framecast::FrameIndex(span))?;
    let threading = framecast::EvalThreading {
        parallel: args.parallel,
        threads: args.threads,
        ..framecast::EvalThreading::default()
    };
    let digests = framecast::digest_frames(&comp, range, &threading)?;
    for (f, d) in digests.iter().enumerate() {
        println!("{f} {d}");
    }
    Ok(())
}
