use core::fmt::Debug;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{fmt::Display, str::FromStr};

use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
struct Opts {
    /// Seed for the stipple pattern, as hex bytes. Defaults to one derived from the clock.
    #[clap(long)]
    seed: Option<Seed>,
    /// Where to write the PNG.
    #[clap(short, long, default_value = "catface.png")]
    output: PathBuf,
    /// Also write the recorded points and colors as JSON.
    #[clap(long)]
    scene_json: Option<PathBuf>,
    /// Log more; repeat for more detail.
    #[clap(short, action = clap::ArgAction::Count)]
    verbose: u8,
    #[clap(flatten)]
    config: catface::config::Config,
}

#[derive(Clone)]
struct Seed(pub Vec<u8>);
impl Seed {
    fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        Seed(nanos.to_le_bytes().to_vec())
    }
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
impl FromStr for Seed {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes: Vec<u8> = hex::decode(s).context("seed must be hex bytes")?;
        Ok(Seed(bytes))
    }
}
impl Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}
impl Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let settings = opts.config.validate().context("invalid configuration")?;
    let seed = opts.seed.unwrap_or_else(Seed::from_clock);
    tracing::info!(%seed, width = settings.width(), height = settings.height(), "drawing");

    let palette = catface::color::Palette::from_bundle();
    let mut rng = catface::rand::Rng::from_seed(seed.as_bytes());
    let scene = catface::art::draw(&settings, &palette, &mut rng)?;

    if let Some(path) = &opts.scene_json {
        let json = serde_json::to_string(&scene).context("failed to serialize scene")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write scene to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote scene");
    }

    let dt = catface::paint::rasterize(&scene, &settings);
    dt.write_png(&opts.output)
        .with_context(|| format!("failed to write {}", opts.output.display()))?;
    eprintln!("wrote png: {}", opts.output.display());
    Ok(())
}
