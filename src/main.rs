
use torus_life::{
    config::{Args, Settings, Source},
    draw::Renderer,
    proc::Runner,
    seed, Grid,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use std::{fs, io::stdin, path::Path};

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();

    let settings = Args::parse().into_settings()?;
    info!("starting with {settings:?}");

    let grid = initial_grid(&settings.source)?;
    debug!(
        "seeded {}x{} board with {} live cells",
        grid.width(),
        grid.height(),
        grid.population()
    );

    run(grid, &settings)
}

fn run(grid: Grid, settings: &Settings) -> Result<()> {
    let mut runner = Runner::new(grid).with_delay(settings.delay);

    if settings.quiet {
        runner.run(settings.generations, None)?;
    } else {
        let mut renderer = Renderer::stdout();
        debug!("animate: {}", renderer.animate());
        let res = runner.run(settings.generations, Some(&mut renderer));
        renderer.finish().context("restoring terminal")?;
        res?;
    }

    let last = runner.grid();
    info!("finished at generation {}", last.generation());
    if settings.quiet {
        println!(
            "generation {}: {} of {} cells alive",
            last.generation(),
            last.population(),
            last.width() * last.height()
        );
    }
    Ok(())
}

fn initial_grid(source: &Source) -> Result<Grid> {
    match source {
        Source::Random {
            width,
            height,
            density,
            seed: rng_seed,
        } => {
            info!(
                "seeding {width}x{height} board at {}% density",
                density.percent()
            );
            let mut rng = match rng_seed {
                Some(n) => StdRng::seed_from_u64(*n),
                None => StdRng::from_entropy(),
            };
            Ok(seed::random_grid(*width, *height, *density, &mut rng)?)
        }
        Source::Pattern(path) => {
            let text = read_pattern(path)?;
            text.parse::<Grid>()
                .with_context(|| format!("parsing pattern {}", path.display()))
        }
    }
}

/// Reads a pattern file, or stdin up to the first blank line when the path is `-`.
fn read_pattern(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return readlines();
    }
    fs::read_to_string(path).with_context(|| format!("reading pattern {}", path.display()))
}

fn readlines() -> Result<String> {
    let mut s = String::new();
    for w in stdin().lines() {
        let w = w.context("reading pattern from stdin")?;
        if !w.is_empty() {
            s.push_str(&w);
            s.push('\n')
        } else {
            break
        }
    }
    Ok(s)
}
