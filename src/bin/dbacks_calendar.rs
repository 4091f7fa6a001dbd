use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use dbacks_calendar::{CalendarImage, ScheduleIndex};
use log::info;

/// Print a large-print Diamondbacks calendar page for one regular season month
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Month name, March through September
    month: String,

    /// Season schedule JSON: [{"date", "homegame", "teamcode", "firstpitch"}, ...]
    #[arg(short, long, value_name = "FILE")]
    schedule: PathBuf,

    /// Where to write the PNG, defaults to `<month>.png`
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Print an `<img>` element with the page embedded instead of writing a file
    #[arg(long)]
    html: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let file = File::open(&cli.schedule)
        .with_context(|| format!("opening schedule {}", cli.schedule.display()))?;
    let schedule = ScheduleIndex::from_reader(BufReader::new(file))?;
    info!("Loaded {} games", schedule.len());

    let image = CalendarImage::new(&cli.month, &schedule)?;

    if cli.html {
        println!("{}", image.as_image_element());
        return Ok(());
    }

    let out = cli
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}.png", image.month().name().to_lowercase())));
    std::fs::write(&out, image.png_bytes())
        .with_context(|| format!("writing {}", out.display()))?;
    info!("Wrote {}", out.display());
    Ok(())
}
