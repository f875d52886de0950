use alphamap::{export, load_raster, Canvas, DisplayPalette, PackedAlpha};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::{
    fs,
    io::{BufWriter, Write},
    path::PathBuf,
    sync::Arc,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack the alpha channel of an image into a 320x240 map with 2 bits per pixel.
    /// Images of any other size are resized first
    Encode {
        input: PathBuf,
        output: PathBuf,

        #[command(flatten)]
        args: EncodeArgs,
    },

    /// Decode a packed map and save it as a PNG image
    #[command(visible_alias = "decode")]
    View {
        input: PathBuf,

        #[command(flatten)]
        args: ViewArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    colog::init();

    match args.command {
        Commands::Encode {
            input,
            output,
            args,
        } => encode(input, output, args),
        Commands::View { input, args } => view(input, args),
    }
}

#[derive(Args, Debug, Clone)]
struct EncodeArgs {
    #[arg(short, long, default_value = "raw")]
    format: OutputFormat,

    /// Name of the array when exporting as C source
    #[arg(short, long, default_value = "world_map")]
    symbol: String,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    /// Headerless packed bytes
    Raw,

    /// A C array definition for inclusion in calculator firmware
    CArray,
}

fn encode(input: PathBuf, output: PathBuf, args: EncodeArgs) -> anyhow::Result<()> {
    if let OutputFormat::CArray = args.format {
        anyhow::ensure!(
            export::is_c_identifier(&args.symbol),
            "'{}' is not a valid C identifier",
            args.symbol
        );
    }

    let raster = load_raster(&input, Canvas::SCREEN)
        .with_context(|| format!("Failed to load image '{}'", input.display()))?;
    let packed = alphamap::encode(&raster)?;

    match args.format {
        OutputFormat::Raw => {
            fs::write(&output, packed.as_bytes())
                .with_context(|| format!("Failed to write '{}'", output.display()))?;
        }
        OutputFormat::CArray => {
            let file = fs::File::create(&output)
                .with_context(|| format!("Failed to create '{}'", output.display()))?;
            let mut writer = BufWriter::new(file);

            export::write_c_array(&packed, &args.symbol, &mut writer)
                .and_then(|_| writer.flush())
                .with_context(|| format!("Failed to write '{}'", output.display()))?;
        }
    }

    log::info!(
        "Wrote {} bytes to '{}' with CRC: {:#010x}",
        packed.len(),
        output.display(),
        packed.crc()
    );

    Ok(())
}

#[derive(Args, Debug, Clone)]
struct ViewArgs {
    /// Where to save the decoded image. Defaults to the input path with a png extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render with the colors the calculator draws instead of white with alpha
    #[arg(short, long)]
    device: bool,

    /// Render with a custom device palette. Implies --device
    #[arg(short, long)]
    palette: Option<PathBuf>,
}

fn view(input: PathBuf, args: ViewArgs) -> anyhow::Result<()> {
    let bytes =
        fs::read(&input).with_context(|| format!("Failed to read '{}'", input.display()))?;
    let packed = PackedAlpha::from_bytes(bytes, Canvas::SCREEN).with_context(|| {
        format!("'{}' is not a packed {} map", input.display(), Canvas::SCREEN)
    })?;

    log::info!(
        "Loaded map '{}' with CRC: {:#010x}",
        input.display(),
        packed.crc()
    );

    let palette = match &args.palette {
        Some(path) => Some(Arc::new(DisplayPalette::open(path).with_context(|| {
            format!("Failed to load palette '{}'", path.display())
        })?)),
        None if args.device => Some(DisplayPalette::device()),
        None => None,
    };

    let image = match &palette {
        Some(palette) => {
            log::info!("Rendering with palette '{}'", palette.name);
            palette.preview(&packed)
        }
        None => packed.to_image(),
    };

    let output = args.output.unwrap_or_else(|| input.with_extension("png"));
    anyhow::ensure!(
        output != input,
        "Refusing to overwrite the input map, pass --output"
    );

    image
        .save(&output)
        .with_context(|| format!("Failed to save '{}'", output.display()))?;
    log::info!("Saved decoded map to '{}'", output.display());

    Ok(())
}
