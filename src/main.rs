use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;

use ocean_wavefield::prelude::*;

/// Command-line tool to generate propagating irregular ocean wave frames
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid resolution (grid_size x grid_size)
    #[arg(short, long, default_value_t = 210)]
    grid_size: usize,

    /// Number of sinusoidal wave components to sum
    #[arg(short, long, default_value_t = 1000)]
    num_waves: usize,

    /// Characteristic length scale of the waves
    #[arg(short, long, default_value_t = 10.0)]
    length_scale: f64,

    /// Wave propagation speed
    #[arg(short, long, default_value_t = 1.0)]
    speed: f64,

    /// Number of frames to generate
    #[arg(short, long, default_value_t = 5000)]
    frames: usize,

    /// Time interval between frames
    #[arg(short, long, default_value_t = 0.2)]
    time_interval: f64,

    /// Random seed for wave generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Colormap for rendered frames (blues or viridis)
    #[arg(short, long, default_value = "blues")]
    colormap: String,

    /// Number of discrete color bands per frame
    #[arg(long, default_value_t = 120)]
    levels: usize,

    /// Lower bound of the fixed color scale
    #[arg(long, default_value_t = -3.0)]
    vmin: f64,

    /// Upper bound of the fixed color scale
    #[arg(long, default_value_t = 3.5)]
    vmax: f64,

    /// Output directory for frame images
    #[arg(short, long, default_value = "figs")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let colormap = args.colormap.parse::<Colormap>().map_err(|e| anyhow!(e))?;
    let options = RenderOptions {
        colormap,
        vmin: args.vmin,
        vmax: args.vmax,
        levels: args.levels,
    };
    let params = FieldParams {
        grid_size: args.grid_size,
        num_waves: args.num_waves,
        length_scale: args.length_scale,
        speed: args.speed,
    };

    println!("Generating irregular ocean wave field...");
    println!(
        "Grid: {}x{} with {} wave components",
        args.grid_size, args.grid_size, args.num_waves
    );
    println!(
        "Wave parameters: length scale={}, speed={}, seed={}",
        args.length_scale, args.speed, args.seed
    );
    println!(
        "Animation: {} frames at {}s intervals",
        args.frames, args.time_interval
    );

    // Create output directory
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut wave_params: Option<WaveParameterSet> = None;

    let start_time = Instant::now();

    for frame in 0..args.frames {
        let time = frame as f64 * args.time_interval;

        // Frame 0 establishes the wave parameters; every later frame reuses them
        let (field, generated) = generate_wave_field(&params, time, wave_params.take(), &mut rng)?;
        wave_params = Some(generated);

        if frame == 0 {
            let (min, max) = field.value_range();
            println!("Wave height range: min = {:.4} m, max = {:.4} m", min, max);
        }

        save_frame(&field, &options, &args.output, frame)
            .with_context(|| format!("writing frame {}", frame))?;

        if frame % 100 == 0 {
            println!("Generated frame {}/{}", frame + 1, args.frames);
        }
    }

    let elapsed = start_time.elapsed();
    println!("Done in {:.2?}", elapsed);
    println!("Frames saved in the directory '{}'", args.output.display());

    Ok(())
}
