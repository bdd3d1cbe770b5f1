use anyhow::Result;
use clap::{Parser, ValueEnum};
use image::RgbaImage;
use sheaf_media::Rotation;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheaf", about = "Assemble images into a single PDF", version)]
struct Cli {
    /// Input image files, in page order
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long)]
    output: PathBuf,

    /// Rotate every page clockwise before assembly
    #[arg(long, value_enum)]
    rotate: Option<RotateArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RotateArg {
    Cw90,
    Cw180,
    Cw270,
}

impl From<RotateArg> for Rotation {
    fn from(arg: RotateArg) -> Self {
        match arg {
            RotateArg::Cw90 => Self::Clockwise90,
            RotateArg::Cw180 => Self::Clockwise180,
            RotateArg::Cw270 => Self::Clockwise270,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut pages: Vec<RgbaImage> = Vec::with_capacity(cli.images.len());
    for path in &cli.images {
        pages.push(sheaf_media::load_image(path).await?);
    }

    if let Some(arg) = cli.rotate {
        let rotation = Rotation::from(arg);
        pages = pages.iter().map(|page| rotation.apply(page)).collect();
    }

    let count = pages.len();
    sheaf_media::save_pdf(&cli.output, pages).await?;
    println!("Assembled {} page(s) → {}", count, cli.output.display());

    Ok(())
}
