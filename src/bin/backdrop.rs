use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "backdrop", version)]
struct Cli {
    /// Log at DEBUG level on stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render frames `0..N` as a numbered PNG sequence.
    Sequence(SequenceArgs),
    /// Write the static portfolio content as JSON.
    Content(ContentArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Backdrop config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pointer script JSON: `[{"frame": N, "x": X, "y": Y}, ...]`.
    #[arg(long)]
    pointer: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    scene: SceneArgs,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    scene: SceneArgs,
}

#[derive(Parser, Debug)]
struct ContentArgs {
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Content(args) => cmd_content(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<(backdrop::BackdropConfig, backdrop::PointerScript)> {
    let mut cfg = match &args.config {
        Some(path) => backdrop::BackdropConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => backdrop::BackdropConfig::default(),
    };
    cfg.apply_env_overrides()
        .context("apply environment overrides")?;

    let script = match &args.pointer {
        Some(path) => read_pointer_script(path)?,
        None => backdrop::PointerScript::default(),
    };
    Ok((cfg, script))
}

fn read_pointer_script(path: &Path) -> anyhow::Result<backdrop::PointerScript> {
    Ok(backdrop::PointerScript::from_path(path)
        .with_context(|| format!("load pointer script '{}'", path.display()))?)
}

fn make_backend(cfg: &backdrop::BackdropConfig) -> anyhow::Result<Box<dyn backdrop::RenderBackend>> {
    let settings = backdrop::render_settings(cfg);
    Ok(backdrop::create_backend(backdrop::BackendKind::Cpu, &settings)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (cfg, script) = load_scene(&args.scene)?;
    let mut backend = make_backend(&cfg)?;

    let frame = backdrop::render_frame(
        &cfg,
        backdrop::FrameIndex(args.frame),
        &script,
        backend.as_mut(),
    )?;
    backdrop::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let (cfg, script) = load_scene(&args.scene)?;
    let mut backend = make_backend(&cfg)?;
    let mut sink = backdrop::PngSequenceSink::new(&args.out_dir);

    let stats = backdrop::render_sequence(&cfg, args.frames, &script, backend.as_mut(), &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_content(args: ContentArgs) -> anyhow::Result<()> {
    let json = backdrop::PortfolioContent::builtin().to_json_pretty()?;
    match args.out {
        Some(path) => {
            backdrop::ensure_parent_dir(&path)?;
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("write content '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{json}").context("write content to stdout")?;
        }
    }
    Ok(())
}
