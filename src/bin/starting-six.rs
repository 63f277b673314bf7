use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use starting_six::{
    MatchdaySixRecord, Position, RenderOpts, RenderPaths, Starting6Layout, find_replay_json,
    latest_replay, list_matchdays, list_seasons, probe_image, render_matchday_starting6,
};

/// Environment variable consulted when `--base` is not given.
const BASE_DIR_ENV: &str = "STARTING6_BASE_DIR";

#[derive(Parser, Debug)]
#[command(name = "starting-six", version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a matchday's Starting Six card as a PNG.
    Render(RenderArgs),
    /// Print season, games and lineup of a matchday record.
    Inspect(InspectArgs),
    /// List seasons and matchdays of a replay directory.
    List(ListArgs),
    /// Print format, size and color type of an image.
    Probe(ProbeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input matchday record JSON.
    #[arg(long = "in", conflicts_with = "root", required_unless_present = "root")]
    in_path: Option<PathBuf>,

    /// Replay directory; the latest season and matchday are rendered.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Base directory holding `assets/` and `output/` (default: $STARTING6_BASE_DIR or `.`).
    #[arg(long)]
    base: Option<PathBuf>,

    /// Template file name inside `assets/templates`.
    #[arg(long)]
    template: Option<String>,

    /// Output file name inside `output/`, or an absolute path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Season text for the sub-header (default: "SAISON <season>").
    #[arg(long)]
    season_label: Option<String>,

    /// Layout JSON overriding colors, geometry and fonts.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Skip the watermark.
    #[arg(long, default_value_t = false)]
    no_watermark: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input matchday record JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Replay directory (`<season>/<matchday>/replay_matchday.json`).
    #[arg(long)]
    root: PathBuf,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Image file to inspect.
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::List(args) => cmd_list(args),
        Command::Probe(args) => cmd_probe(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let json_path = match (args.in_path, args.root) {
        (Some(p), _) => p,
        (None, Some(root)) => latest_replay(&root)?,
        (None, None) => anyhow::bail!("either --in or --root is required"),
    };

    let base = args
        .base
        .or_else(|| std::env::var_os(BASE_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let paths = RenderPaths::new(base);

    let mut opts = RenderOpts {
        season_label: args.season_label,
        out_name: args.out,
        watermark: !args.no_watermark,
        ..RenderOpts::default()
    };
    if let Some(template) = args.template {
        opts.template_name = template;
    }
    if let Some(layout) = &args.layout {
        opts.layout = Starting6Layout::from_path(layout)?;
    }

    let out = render_matchday_starting6(&json_path, &paths, &opts)
        .with_context(|| format!("render '{}'", json_path.display()))?;
    println!("{}", out.display());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let record = MatchdaySixRecord::from_path(&args.in_path)?;
    let summary = record.summary();

    println!("season:   {}", summary.season);
    println!("matchday: {}", record.matchday_label());
    if let Some(ts) = &record.timestamp {
        println!("time:     {ts}");
    }
    println!("games:    {}", summary.games);
    for g in &record.games {
        let score = match (g.home_goals, g.away_goals) {
            (Some(h), Some(a)) => format!("{h}:{a}"),
            _ => "-:-".to_owned(),
        };
        println!("  {} {score} {}", g.home, g.away);
    }

    let six = record.starting_six()?;
    println!(
        "starting six: {} F / {} D / {} G",
        summary.forwards, summary.defense, summary.goalies
    );
    for pos in Position::ALL {
        for p in six.players.iter().filter(|p| p.pos == pos) {
            let number = p.number.as_deref().unwrap_or("-");
            println!("  {pos}  #{number:<3} {:<28} {}", p.display_name(), p.team);
        }
    }
    if let Err(e) = six.lineup() {
        eprintln!("warning: {e}");
    }
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let seasons = list_seasons(&args.root)?;
    if seasons.is_empty() {
        println!("no seasons under {}", args.root.display());
        return Ok(());
    }
    for season in seasons {
        println!("{}", dir_name(&season));
        for matchday in list_matchdays(&season)? {
            let mark = if find_replay_json(&matchday).is_some() {
                "*"
            } else {
                " "
            };
            println!("  {mark} {}", dir_name(&matchday));
        }
    }
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let info = probe_image(&args.path)?;
    println!("format: {}", info.format);
    println!("size:   {}x{}", info.width, info.height);
    println!("color:  {}", info.color);
    println!("alpha:  {}", if info.has_alpha { "yes" } else { "no" });
    Ok(())
}

fn dir_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
