//! The whole game state, driven by a host through `Demo`.

use gfx::Surface;
use racer_fx_common::{Demo, Overlay};
use rand::Rng;

use crate::palette::SKY;
use crate::physics::{self, Camera, Controls, Player};
use crate::segment::Track;
use crate::{Config, ConfigError};

/// Overlay slot showing the current segment index.
pub const SEGMENT_SLOT: usize = 0;
/// Overlay slot showing speed, in distance per second.
pub const SPEED_SLOT: usize = 1;

#[derive(Clone, Debug)]
pub struct Game {
    pub track: Track,
    pub camera: Camera,
    pub player: Player,
}

impl Game {
    /// Starts a game on a fresh track of `segments` random segments.
    pub fn new(
        config: Config,
        segments: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        let mut track = Track::new(config)?;
        track.generate(segments, rng);
        Ok(Game::on_track(track))
    }

    /// Starts a game at the beginning of `track`.
    pub fn on_track(track: Track) -> Self {
        let x = track.config().screen_width as f32 / 2.;
        Game {
            track,
            camera: Camera::default(),
            player: Player { x, vel: 0. },
        }
    }

    /// Throws the track away for a new one and goes back to the start.
    pub fn regenerate(&mut self, segments: usize, rng: &mut impl Rng) {
        self.track.generate(segments, rng);
        self.camera = Camera::default();
        self.player = Player {
            x: self.track.config().screen_width as f32 / 2.,
            vel: 0.,
        };
    }

    pub fn speed(&self) -> f32 {
        self.player.vel * physics::TICK_RATE
    }
}

impl Demo for Game {
    type Controls = Controls;

    fn advance(&mut self, controls: &Controls) {
        let width = self.track.config().screen_width as f32;
        physics::advance(
            &self.track,
            &mut self.camera,
            &mut self.player,
            controls,
            width,
        );
    }

    fn render_frame<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(
            0,
            0,
            surface.width() as i32,
            surface.height() as i32,
            SKY,
        );
        self.track.render(surface, &self.camera);
    }

    fn render_overlay<O: Overlay>(&self, ui: &mut O) {
        ui.set_score(SEGMENT_SLOT, self.camera.segment as i32);
        ui.set_score(SPEED_SLOT, self.speed() as i32);
    }
}
