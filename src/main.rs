use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use planet_texture::config::DEFAULT_DATA_DIR;
use planet_texture::export::{self, DEFAULT_OUTPUT_DIR};
use planet_texture::{render_planet, PlanetConfig};

#[derive(Parser, Debug)]
#[command(name = "planet_texture")]
#[command(about = "Generate stylized high-tech planet surface textures")]
struct Args {
    /// Planet resource name (looked up as <DATA_DIR>/<RESOURCE>.properties or .json)
    resource: Option<String>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory holding planet resources
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Directory the JPEG is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

fn main() {
    let args = Args::parse();

    // Nothing to do without a resource.
    let Some(resource) = args.resource.clone() else {
        return;
    };

    if let Err(e) = run(&args, &resource) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, resource: &str) -> Result<(), Box<dyn Error>> {
    let config = PlanetConfig::load(&args.data_dir, resource)?;

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("Generating planet '{}' with seed: {}", config.name, seed);
    println!("Map size: {}x{}", config.width, config.height);
    println!(
        "{} equators, {} megacities (up to {} suburbs each), {} plates",
        config.equator_count.max(0),
        config.megacity_count.max(0),
        config.max_suburbs_per_megacity.max(0),
        config.plate_density.max(0)
    );

    let image = render_planet(&config, &mut rng)?;
    let path = export::save_planet_image(&image, &args.output_dir, &config.name)?;

    println!("Your planet map was generated here : {}", path.display());
    Ok(())
}
