//! Pseudo-3D road racer.
//!
//! The road is drawn one scanline at a time: each line between the bottom of
//! the screen and the horizon is mapped to a world depth by a precomputed
//! table, and track curvature is integrated up the screen to bend the road.
//! There is no 3D geometry anywhere in here.

use smart_default::SmartDefault;
use thiserror::Error;

pub mod blit;
pub mod game;
pub mod palette;
pub mod physics;
pub mod render;
pub mod segment;
pub mod table;

pub use game::Game;
pub use segment::{Segment, Track};

pub const WIDTH: usize = 160;
pub const HEIGHT: usize = 120;

/// Number of random segments in a freshly started game.
pub const DEFAULT_SEGMENTS: usize = 20;

/// Tunables for the projection and the look of the road.
#[derive(Clone, Debug, PartialEq, SmartDefault)]
pub struct Config {
    #[default(WIDTH)]
    pub screen_width: usize,
    #[default(HEIGHT)]
    pub screen_height: usize,
    /// Height of the horizon in pixels, counted from the bottom of the screen.
    #[default(75)]
    pub horizon: usize,
    /// Camera height in world units.
    #[default(1000.)]
    pub camera_height: f32,
    /// Road width at the horizon.
    #[default(10.)]
    pub road_width_min: f32,
    /// Road width at the bottom of the screen.
    #[default(160.)]
    pub road_width_max: f32,
    /// Width of the lane dividers on the nearest line.
    #[default(4.)]
    pub line_width: f32,
    /// Width of the edge bands on the nearest line. These are drawn outside
    /// the road.
    #[default(16.)]
    pub edge_width: f32,
    /// World depth covered by each light or dark stripe.
    #[default(16.)]
    pub stripe_size: f32,
    #[default(3)]
    pub lanes: usize,
    /// Horizontal shift per unit of depth per unit of curvature. Larger values
    /// make turns more dramatic.
    #[default(0.02)]
    pub exaggeration: f32,
    /// Skip painting a line's ground band when it matches the background that
    /// was already filled in.
    #[default(true)]
    pub skip_default_ground: bool,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("horizon of {horizon} lines must be nonzero and below the screen height of {screen_height}")]
    Horizon { horizon: usize, screen_height: usize },
    #[error("road width range {min}..{max} is empty or negative")]
    RoadWidth { min: f32, max: f32 },
    #[error("camera height must be positive, got {0}")]
    CameraHeight(f32),
    #[error("stripe size must be positive, got {0}")]
    StripeSize(f32),
    #[error("a road needs at least one lane")]
    NoLanes,
    #[error("a track needs at least one segment")]
    EmptyTrack,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon == 0 || self.horizon >= self.screen_height {
            return Err(ConfigError::Horizon {
                horizon: self.horizon,
                screen_height: self.screen_height,
            });
        }
        if !(self.road_width_min >= 0.
            && self.road_width_min <= self.road_width_max)
        {
            return Err(ConfigError::RoadWidth {
                min: self.road_width_min,
                max: self.road_width_max,
            });
        }
        if !(self.camera_height > 0.) {
            return Err(ConfigError::CameraHeight(self.camera_height));
        }
        if !(self.stripe_size > 0.) {
            return Err(ConfigError::StripeSize(self.stripe_size));
        }
        if self.lanes == 0 {
            return Err(ConfigError::NoLanes);
        }
        Ok(())
    }
}
