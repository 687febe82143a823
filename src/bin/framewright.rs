use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "framewright", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print export/normalized dimensions and scale factors for a ratio.
    Resolve(ResolveArgs),
    /// List registered shapes.
    Shapes,
    /// Print the geometry descriptor for a shape box.
    Shape(ShapeArgs),
    /// Print the default frame for a new slot.
    Slot(SlotArgs),
    /// Map a normalized template to export pixels.
    Export(ExportArgs),
    /// Map an export-space template back to normalized space.
    Import(ImportArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Ratio identifier (`16:9`, `728x90`).
    #[arg(long)]
    ratio: String,

    /// Ratio policy JSON overriding the built-in constants.
    #[arg(long)]
    policy: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ShapeArgs {
    /// Shape id (`star`, `regularPolygon`, `flowchart/process`, ...).
    #[arg(long)]
    id: String,

    /// Box width.
    #[arg(long)]
    width: f64,

    /// Box height.
    #[arg(long)]
    height: f64,

    /// Shape options as JSON (`{"sides":8}`).
    #[arg(long)]
    options: Option<String>,

    /// Also print an SVG path for the outline.
    #[arg(long, default_value_t = false)]
    outline: bool,

    /// Asset path table JSON, needed for outlines of asset shapes.
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SlotArgs {
    /// Slot content type.
    #[arg(long = "type", value_enum)]
    slot_type: SlotTypeChoice,

    /// Canvas width.
    #[arg(long)]
    width: f64,

    /// Canvas height.
    #[arg(long)]
    height: f64,

    /// Slot name; enables naming heuristics.
    #[arg(long)]
    name: Option<String>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input template JSON (normalized space).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output template JSON; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Round frames to whole pixels.
    #[arg(long, default_value_t = false)]
    snap: bool,
}

#[derive(Parser, Debug)]
struct ImportArgs {
    /// Input template JSON (export space).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output template JSON; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SlotTypeChoice {
    Text,
    Image,
    Button,
    Shape,
}

impl From<SlotTypeChoice> for framewright::SlotType {
    fn from(value: SlotTypeChoice) -> Self {
        match value {
            SlotTypeChoice::Text => Self::Text,
            SlotTypeChoice::Image => Self::Image,
            SlotTypeChoice::Button => Self::Button,
            SlotTypeChoice::Shape => Self::Shape,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Shapes => write_json(&framewright::shape_definitions().collect::<Vec<_>>(), None),
        Command::Shape(args) => cmd_shape(args),
        Command::Slot(args) => cmd_slot(args),
        Command::Export(args) => cmd_export(args),
        Command::Import(args) => cmd_import(args),
    }
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let policy = match &args.policy {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read ratio policy '{}'", path.display()))?;
            serde_json::from_str(&s).with_context(|| "parse ratio policy JSON")?
        }
        None => framewright::RatioPolicy::default(),
    };
    write_json(&policy.resolve(&args.ratio), None)
}

fn cmd_shape(args: ShapeArgs) -> anyhow::Result<()> {
    let options = args
        .options
        .as_deref()
        .map(serde_json::from_str::<framewright::ShapeOptions>)
        .transpose()
        .with_context(|| "parse shape options JSON")?;

    let descriptor =
        framewright::shape_geometry(&args.id, args.width, args.height, options.as_ref())
            .with_context(|| format!("unknown shape id '{}'", args.id))?;

    if !args.outline {
        return write_json(&descriptor, None);
    }

    let assets = match &args.assets {
        Some(path) => framewright::AssetPathTable::from_path(path)?,
        None => framewright::AssetPathTable::new(),
    };
    let outline = descriptor.outline(&assets)?;
    write_json(
        &serde_json::json!({
            "descriptor": descriptor,
            "outline": outline.to_svg(),
        }),
        None,
    )
}

fn cmd_slot(args: SlotArgs) -> anyhow::Result<()> {
    let slot_type = args.slot_type.into();
    let frame = match &args.name {
        Some(name) => {
            framewright::default_slot_frame_by_name(name, slot_type, args.width, args.height)
        }
        None => framewright::default_slot_frame(slot_type, args.width, args.height),
    };
    write_json(&frame, None)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let template = framewright::Template::from_path(&args.in_path)?;
    template.validate()?;

    let mut out = template.to_export_space();
    if args.snap {
        out = out.snapped();
    }
    write_json(&out, args.out.as_deref())
}

fn cmd_import(args: ImportArgs) -> anyhow::Result<()> {
    let template = framewright::Template::from_path(&args.in_path)?;
    template.validate()?;
    write_json(&template.to_normalized_space(), args.out.as_deref())
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).with_context(|| "serialize output JSON")?;
    match out {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "wrote template");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").with_context(|| "write stdout")?;
        }
    }
    Ok(())
}
