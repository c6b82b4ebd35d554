use clap::Parser;
use hearth::{display, FireplaceConfig, Palette};
use std::io;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(author = "Terminal Art Generator")]
#[command(version = "0.1.0")]
#[command(about = "A flickering fireplace in your terminal", long_about = None)]
struct Cli {
    /// Grid rows (row 0 is the base of the fire)
    #[arg(short, long, default_value = "18")]
    rows: usize,

    /// Grid columns
    #[arg(short, long, default_value = "25")]
    cols: usize,

    /// Seconds per frame
    #[arg(short, long, default_value = "0.1")]
    time: f32,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Palette preset: classic, ice, neon
    #[arg(short, long, default_value = "classic")]
    palette: String,

    /// Extinguish chance at the low end of the death curve
    #[arg(long, default_value = "0.20")]
    min_chance: f64,

    /// Extinguish chance at the high end of the death curve
    #[arg(long, default_value = "0.45")]
    max_chance: f64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let palette = Palette::preset(&cli.palette).unwrap_or_else(|| {
        eprintln!("Unknown palette: {}. Using classic.", cli.palette);
        eprintln!("Available: classic, ice, neon");
        Palette::classic()
    });

    let mut config = FireplaceConfig::with_palette(palette);
    config.rows = cli.rows;
    config.cols = cli.cols;
    config.min_chance = cli.min_chance;
    config.max_chance = cli.max_chance;

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    display::run(&config, cli.seed, cli.time)
}
