use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use wavyte_reveal::{ComposedReveal, Fps, FrameIndex, Preview, RevealConfig};

#[derive(Parser, Debug)]
#[command(name = "wavyte-reveal", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a reveal document and print its plan as JSON.
    Plan(PlanArgs),
    /// Compose a reveal document and print its render tree as markup.
    Markup(MarkupArgs),
    /// Sample a composed reveal over time.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input reveal JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Emit the render tree instead of the plan.
    #[arg(long, default_value_t = false)]
    tree: bool,
}

#[derive(Parser, Debug)]
struct MarkupArgs {
    /// Input reveal JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input reveal JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Sampling rate for the frame sequence.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Sample a single instant (seconds after trigger) instead of a frame sequence.
    #[arg(long)]
    at: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Markup(args) => cmd_markup(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = RevealConfig::from_path(&args.in_path)?;
    let composed = cfg.compose();
    let json = if args.tree {
        serde_json::to_string_pretty(&composed.to_node())
    } else {
        serde_json::to_string_pretty(&composed)
    }
    .context("encode plan JSON")?;
    emit(args.out.as_ref(), &json)
}

fn cmd_markup(args: MarkupArgs) -> anyhow::Result<()> {
    let cfg = RevealConfig::from_path(&args.in_path)?;
    let markup = wavyte_reveal::to_markup(&cfg.compose().to_node())?;
    emit(args.out.as_ref(), &markup)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = RevealConfig::from_path(&args.in_path)?;
    let fps = Fps::new(args.fps, 1)?;

    let json = match (cfg.compose(), args.at) {
        (ComposedReveal::Text(plan), Some(t)) => {
            serde_json::to_string_pretty(&Preview::sample_text(&plan, t))
        }
        (ComposedReveal::Text(plan), None) => {
            serde_json::to_string_pretty(&Preview::sample_text_frames(&plan, fps))
        }
        (ComposedReveal::Section(plan), at) => {
            let times: Vec<f64> = match at {
                Some(t) => vec![t],
                None => {
                    let last = fps.secs_to_frames_ceil(plan.delay() + plan.duration());
                    (0..=last).map(|f| fps.frame_to_secs(FrameIndex(f))).collect()
                }
            };
            let samples: Vec<serde_json::Value> = times
                .into_iter()
                .map(|t| {
                    let (progress, style) = Preview::sample_section(&plan, t);
                    serde_json::json!({ "time": t, "progress": progress, "style": style })
                })
                .collect();
            serde_json::to_string_pretty(&samples)
        }
    }
    .context("encode preview JSON")?;
    emit(None, &json)
}

fn emit(out: Option<&PathBuf>, content: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{content}").context("write stdout")?;
        }
    }
    Ok(())
}
