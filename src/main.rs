//! Headless racer.
//!
//! Drives the road demo without a display: an autopilot holds the throttle and
//! steers for the middle of the road, and every so often the frame is saved as
//! a PNG.
//!
//! ```bash
//! racer --seed 7 --frames 600 --snapshot-every 60 --out frames/
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gfx::Framebuffer;
use racer_fx_common::{run_frame, Overlay};
use racer_fx_road as fx;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use fx::game::{SEGMENT_SLOT, SPEED_SLOT};
use fx::physics::{Controls, TICK_RATE};

#[derive(Parser)]
#[command(name = "racer")]
#[command(author, version, about = "Pseudo-3D road racer, headless")]
struct Args {
    /// Track seed. Random if not given.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random segments after the starting straight
    #[arg(long, default_value_t = fx::DEFAULT_SEGMENTS)]
    segments: usize,

    /// Frames to run, one tick each
    #[arg(long, default_value_t = 600)]
    frames: usize,

    /// Save every Nth frame (0 saves nothing)
    #[arg(long, default_value_t = 0)]
    snapshot_every: usize,

    /// Directory for saved frames
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

/// Logs the overlay once a second instead of drawing it.
struct LogOverlay {
    scores: [i32; 2],
    frame: usize,
}

impl Overlay for LogOverlay {
    fn set_score(&mut self, slot: usize, value: i32) {
        self.scores[slot] = value;
        if slot == SPEED_SLOT && self.frame % TICK_RATE as usize == 0 {
            tracing::info!(
                frame = self.frame,
                segment = self.scores[SEGMENT_SLOT],
                speed = self.scores[SPEED_SLOT],
                "driving"
            );
        }
    }
}

/// Steers toward the middle of the road and never lifts.
fn autopilot(game: &fx::Game) -> Controls {
    let middle = game.track.config().screen_width as f32 / 2.;
    Controls {
        accelerate: true,
        steer: ((middle - game.player.x) / 8.).max(-1.).min(1.),
    }
}

fn save_png(fb: &Framebuffer<Vec<u8>>, path: &Path) -> Result<()> {
    let img = image::RgbaImage::from_fn(
        fx::WIDTH as u32,
        fx::HEIGHT as u32,
        |x, y| {
            let p = fb.get(x as usize, y as usize).unwrap_or(0);
            image::Rgba(fx::palette::rgba(p))
        },
    );
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, segments = args.segments, "starting");

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = fx::Game::new(fx::Config::default(), args.segments, &mut rng)
        .context("building track")?;

    if args.snapshot_every > 0 {
        std::fs::create_dir_all(&args.out)
            .with_context(|| format!("creating {}", args.out.display()))?;
    }

    let mut fb =
        Framebuffer::new(vec![0; fx::WIDTH * fx::HEIGHT], fx::WIDTH, fx::HEIGHT);
    let mut overlay = LogOverlay {
        scores: [0; 2],
        frame: 0,
    };

    for frame in 0..args.frames {
        overlay.frame = frame;
        let controls = autopilot(&game);
        run_frame(&mut game, &controls, 1, &mut fb, &mut overlay);

        if args.snapshot_every > 0 && frame % args.snapshot_every == 0 {
            save_png(&fb, &args.out.join(format!("frame{:05}.png", frame)))?;
        }
    }

    tracing::info!(
        z = game.camera.z,
        segment = game.camera.segment,
        laps = game.camera.z / f64::from(game.track.length()),
        "done"
    );
    Ok(())
}
