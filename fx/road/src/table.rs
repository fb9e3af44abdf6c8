//! Scanline lookup table.
//!
//! Everything about a road line that depends only on its distance from the
//! bottom of the screen is computed once, when the track is built, and then
//! read back every frame.

use crate::Config;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry {
    /// World depth imaged by this line, relative to the camera.
    pub depth: f32,
    /// Width of the road surface in pixels.
    pub road_width: f32,
    /// Width of each lane divider in pixels.
    pub divider_width: f32,
    /// Width of each edge band in pixels.
    pub edge_width: f32,
}

impl Entry {
    fn compute(sy: usize, config: &Config) -> Entry {
        let horizon = config.horizon as f32;
        // 1 at the bottom of the screen, approaching 0 at the horizon.
        let scaler = 1. - sy as f32 / horizon;
        Entry {
            depth: project(-config.camera_height, sy as f32, horizon),
            road_width: config.road_width_min
                + (config.road_width_max - config.road_width_min) * scaler,
            divider_width: f32::max(1., config.line_width * scaler),
            edge_width: f32::max(1., config.edge_width * scaler),
        }
    }
}

/// Projects a screen line to a world depth by similar triangles.
///
/// `wy` is the world height of the thing being looked at relative to the
/// camera (negative for the ground), and `sy` counts up from the bottom of the
/// screen. Blows up as `sy` approaches `horizon`.
pub fn project(wy: f32, sy: f32, horizon: f32) -> f32 {
    wy / (sy - horizon)
}

/// One `Entry` per line, bottom of the screen first.
#[derive(Clone, Debug)]
pub struct Table {
    entries: Vec<Entry>,
}

impl Table {
    pub fn compute(config: &Config) -> Table {
        let entries: Vec<Entry> = (0..config.horizon)
            .map(|sy| Entry::compute(sy, config))
            .collect();
        tracing::debug!(
            horizon = config.horizon,
            near = entries.first().map(|e| e.depth),
            far = entries.last().map(|e| e.depth),
            "computed scanline table"
        );
        Table { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, sy: usize) -> &Entry {
        &self.entries[sy]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}
