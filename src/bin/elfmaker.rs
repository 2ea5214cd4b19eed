use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use elfmaker::{
    AssetCatalog, Catalog, CategoryChoice, Character, ExportOpts, Fps, FrameTicker, FsImageLoader,
    IdScope, Liveness, ManualClock, RenderMode,
};

#[derive(Parser, Debug)]
#[command(name = "elfmaker", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one frame as SVG.
    Svg(SvgArgs),
    /// Run the frame loop offline and write numbered SVG frames.
    Frames(FramesArgs),
    /// Composite a still pose over the background and write a PNG.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Asset catalog JSON (defaults to the built-in catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Category choice JSON (defaults to the default choice).
    #[arg(long)]
    choice: Option<PathBuf>,

    /// Root for relative background paths (defaults to the catalog's directory).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Extra CSS file appended to the catalog style.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Fixed id for the SVG root instead of a generated one.
    #[arg(long)]
    scope: Option<String>,

    /// Start a dance at this time (seconds).
    #[arg(long)]
    dance_at: Option<f64>,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Time of the frame in seconds.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Omit CSS animation.
    #[arg(long)]
    still: bool,

    /// Output path; stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of frames.
    #[arg(long, default_value_t = 60)]
    count: u64,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Omit CSS animation.
    #[arg(long)]
    still: bool,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Time of the snapshot in seconds.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Output size relative to the catalog layout.
    #[arg(long, default_value_t = 2.0)]
    scale: f64,

    /// Background magnification.
    #[arg(long, default_value_t = 1.2)]
    zoom: f64,

    /// Write a `data:` URL instead of PNG bytes.
    #[arg(long)]
    data_url: bool,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Export(args) => cmd_export(args),
    }
}

struct Setup {
    elf: Character<ManualClock>,
    clock: ManualClock,
    dance_at: Option<Duration>,
    assets_root: PathBuf,
}

fn secs(v: f64, what: &str) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(v).with_context(|| format!("invalid {what} '{v}'"))
}

fn setup(common: &CommonArgs) -> anyhow::Result<Setup> {
    let catalog = match &common.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(),
    };
    let catalog: Arc<dyn AssetCatalog + Send + Sync> = Arc::new(catalog);

    let clock = ManualClock::starting_at(Duration::ZERO);
    let mut elf = Character::with_clock(catalog, clock.clone());
    if let Some(path) = &common.choice {
        elf.set_category_choice(CategoryChoice::from_path(path)?);
    }
    if let Some(path) = &common.style {
        let css = std::fs::read_to_string(path)
            .with_context(|| format!("read style '{}'", path.display()))?;
        elf.set_extra_style(css);
    }
    if let Some(name) = &common.scope {
        elf = elf.with_scope(IdScope::named(name.as_str())?);
    }

    let dance_at = common
        .dance_at
        .map(|v| secs(v, "--dance-at"))
        .transpose()?;

    let assets_root = match (&common.assets, &common.catalog) {
        (Some(root), _) => root.clone(),
        (None, Some(catalog)) => catalog
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
        (None, None) => PathBuf::from("."),
    };

    Ok(Setup {
        elf,
        clock,
        dance_at,
        assets_root,
    })
}

/// Move the clock to `at`, starting the dance on the way if it was requested earlier.
fn seek(s: &mut Setup, at: Duration) {
    if let Some(d) = s.dance_at.filter(|d| *d <= at) {
        s.clock.set(d);
        s.elf.dance();
    }
    s.clock.set(at);
}

fn mode(still: bool) -> RenderMode {
    if still {
        RenderMode::Static
    } else {
        RenderMode::Live
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let mut s = setup(&args.common)?;
    let at = secs(args.at, "--at")?;
    seek(&mut s, at);

    let svg = s.elf.render_at(at, mode(args.still)).to_svg(None)?;

    match &args.out {
        Some(out) => {
            ensure_parent(out)?;
            std::fs::write(out, svg).with_context(|| format!("write svg '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{svg}"),
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut s = setup(&args.common)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let ticker = FrameTicker::new(Fps::new(args.fps, 1)?);
    let live = Liveness::new();
    let mode = mode(args.still);
    let mut written = 0u64;
    let mut danced = false;

    let clock = s.clock.clone();
    let stats = ticker.run(&clock, &live, |now| {
        if !danced && s.dance_at.is_some_and(|d| now >= d) {
            s.elf.dance();
            danced = true;
        }
        let svg = s.elf.render_at(now, mode).to_svg(None)?;
        let path = args.out_dir.join(format!("frame_{written:05}.svg"));
        std::fs::write(&path, svg).with_context(|| format!("write '{}'", path.display()))?;

        written += 1;
        if written >= args.count {
            live.detach();
        }
        Ok(())
    })?;

    eprintln!(
        "wrote {} frames to {} ({} coalesced)",
        stats.frames,
        args.out_dir.display(),
        stats.coalesced
    );
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let mut s = setup(&args.common)?;
    let at = secs(args.at, "--at")?;
    seek(&mut s, at);

    let opts = ExportOpts {
        resolution_scale: args.scale,
        background_zoom: args.zoom,
    };
    let loader = FsImageLoader::new(&s.assets_root);
    let image = pollster::block_on(s.elf.export_image(&loader, &opts))?;

    ensure_parent(&args.out)?;
    if args.data_url {
        std::fs::write(&args.out, image.to_data_url())
    } else {
        std::fs::write(&args.out, &image.png)
    }
    .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        image.width,
        image.height
    );
    Ok(())
}
