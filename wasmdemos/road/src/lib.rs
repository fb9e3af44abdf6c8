mod utils;

use gfx::Framebuffer;
use racer_fx_common::{run_frame, FixedStep, Overlay};
use racer_fx_road as fx;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use fx::physics::Controls;

/// Most ticks we'll run to catch up after the tab was in the background.
const MAX_TICKS_PER_FRAME: usize = 8;

#[derive(Default)]
struct Scores([i32; 2]);

impl Overlay for Scores {
    fn set_score(&mut self, slot: usize, value: i32) {
        if let Some(s) = self.0.get_mut(slot) {
            *s = value;
        }
    }
}

#[wasm_bindgen]
pub struct Demo {
    game: fx::Game,
    rng: SmallRng,
    clock: FixedStep,
    framebuffer8: Framebuffer<Vec<u8>>,
    framebuffer32: Vec<u32>,
    scores: Scores,
}

#[wasm_bindgen]
impl Demo {
    pub fn new(seed: u32) -> Self {
        // Good a place as any...
        self::utils::set_panic_hook();

        let mut rng = SmallRng::seed_from_u64(u64::from(seed));
        let game = match fx::Game::new(
            fx::Config::default(),
            fx::DEFAULT_SEGMENTS,
            &mut rng,
        ) {
            Ok(game) => game,
            Err(e) => wasm_bindgen::throw_str(&e.to_string()),
        };

        Demo {
            game,
            rng,
            clock: FixedStep::new(
                fx::physics::TIMESTEP_MS,
                MAX_TICKS_PER_FRAME,
            ),
            framebuffer8: Framebuffer::new(
                vec![0; fx::WIDTH * fx::HEIGHT],
                fx::WIDTH,
                fx::HEIGHT,
            ),
            framebuffer32: vec![0xFF_00_FF_00; fx::WIDTH * fx::HEIGHT],
            scores: Scores::default(),
        }
    }

    pub fn framebuffer(&self) -> *const u32 {
        self.framebuffer32.as_ptr()
    }

    pub fn width(&self) -> u32 {
        fx::WIDTH as u32
    }

    pub fn height(&self) -> u32 {
        fx::HEIGHT as u32
    }

    /// Index of the segment the car is on.
    pub fn segment(&self) -> i32 {
        self.scores.0[fx::game::SEGMENT_SLOT]
    }

    pub fn speed(&self) -> i32 {
        self.scores.0[fx::game::SPEED_SLOT]
    }

    pub fn regenerate(&mut self) {
        self.game.regenerate(fx::DEFAULT_SEGMENTS, &mut self.rng);
    }

    /// Advances by `elapsed_ms` of wall time and redraws.
    pub fn step(&mut self, elapsed_ms: f32, accelerate: bool, steer: f32) {
        let controls = Controls { accelerate, steer };
        let ticks = self.clock.ticks(elapsed_ms);
        run_frame(
            &mut self.game,
            &controls,
            ticks,
            &mut self.framebuffer8,
            &mut self.scores,
        );

        for (dest, &src) in self
            .framebuffer32
            .iter_mut()
            .zip(self.framebuffer8.pixels())
        {
            *dest = fx::palette::abgr(src);
        }
    }
}
