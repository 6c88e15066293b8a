use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "segmix", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform an ingest segment into output parts and device timelines.
    Transform(TransformArgs),
    /// Print the source registry built from a studio config.
    Sources(SourcesArgs),
}

#[derive(Parser, Debug)]
struct TransformArgs {
    /// Ingest segment JSON.
    #[arg(long)]
    segment: PathBuf,

    /// Studio config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Exit with an error if the transform reported any notes.
    #[arg(long)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct SourcesArgs {
    /// Studio config JSON.
    #[arg(long)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Transform(args) => cmd_transform(args),
        Command::Sources(args) => cmd_sources(args),
    }
}

fn cmd_transform(args: TransformArgs) -> anyhow::Result<()> {
    let studio = segmix::StudioConfig::from_path(&args.config)?;
    let segment = segmix::IngestSegment::from_path(&args.segment)?;

    let notes = segmix::NoteCollector::new();
    let out = segmix::transform_segment(&notes, &studio, &segment);
    let notes = notes.take();
    for note in &notes {
        eprintln!("note: {note}");
    }

    let json = serde_json::to_string_pretty(&out).context("serialize output segment")?;
    match &args.out {
        Some(path) => {
            write_output(path, &json)?;
            eprintln!("wrote {} ({} parts)", path.display(), out.parts.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write output segment")?;
        }
    }

    if args.strict && !notes.is_empty() {
        anyhow::bail!("transform reported {} note(s)", notes.len());
    }
    Ok(())
}

fn write_output(path: &Path, json: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("write output '{}'", path.display()))
}

fn cmd_sources(args: SourcesArgs) -> anyhow::Result<()> {
    let studio = segmix::StudioConfig::from_path(&args.config)?;
    let notes = segmix::NoteCollector::new();
    let registry = segmix::SourceRegistry::from_config(&notes, &studio);
    for note in notes.take() {
        eprintln!("note: {note}");
    }

    for source in registry.sources() {
        match &source.ptz_device {
            Some(device) => println!(
                "{} {} -> input {} (ptz {device})",
                source.kind, source.id, source.port
            ),
            None => println!("{} {} -> input {}", source.kind, source.id, source.port),
        }
    }
    Ok(())
}
