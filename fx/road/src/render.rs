use gfx::Surface;

use crate::blit::blit_line;
use crate::palette::{GROUND, STRIPES};
use crate::physics::Camera;
use crate::segment::{Segment, Track};

/// Picks the stripe for a line imaging world depth `z`.
///
/// Stripes are fixed in world space: each is `stripe_size` deep, and they
/// alternate dark (0) and light (1).
pub fn stripe_index(z: f64, stripe_size: f32) -> usize {
    let stripe_size = f64::from(stripe_size);
    if z.rem_euclid(stripe_size * 2.) >= stripe_size {
        1
    } else {
        0
    }
}

/// Curvature to integrate for a line `segment_z` into the current segment.
///
/// Lines that reach past the end of the current segment are looking at the
/// next one, and bend with it. This is what makes a turn appear in the
/// distance and roll toward the camera instead of snapping in.
pub fn line_curvature(cur: &Segment, next: &Segment, segment_z: f32) -> f32 {
    if segment_z >= cur.length {
        next.curvature
    } else {
        cur.curvature
    }
}

/// Draws the road into the bottom `horizon` rows of `fb`, as seen from
/// `camera`.
///
/// Rows above the horizon are left alone. Every road row is repainted, so the
/// result depends only on the arguments.
///
/// # Panics
///
/// If `fb` isn't taller than the horizon.
pub fn render<S: Surface>(track: &Track, fb: &mut S, camera: &Camera) {
    let config = track.config();
    let table = track.table();
    let height = fb.height();
    assert!(
        table.len() < height,
        "horizon of {} lines doesn't fit in {} rows",
        table.len(),
        height,
    );

    // Background for whatever the lines don't cover.
    fb.fill_rect(
        0,
        (height - table.len()) as i32,
        fb.width() as i32,
        table.len() as i32,
        GROUND,
    );

    let cur = track.get_segment(camera.segment);
    let next = track.get_next_segment(camera.segment);

    let mut x_center = fb.width() as f32 / 2.;
    // Amount to shift x_center by on each line. This is the running integral
    // of curvature up the screen.
    let mut x_shift = cur.curvature;

    // Bottom of the screen up.
    for (y, line) in table.iter().enumerate() {
        let screen_y = (height - y - 1) as i32;
        let world_z = camera.z + f64::from(line.depth);
        let segment_z = camera.segment_pos + line.depth;

        let stripe = &STRIPES[stripe_index(world_z, config.stripe_size)];

        // Farther lines swing farther per unit of curvature.
        let xf = line.depth * config.exaggeration;
        x_shift += line_curvature(cur, next, segment_z);
        x_center += x_shift * xf;

        blit_line(
            fb,
            x_center,
            screen_y,
            line,
            stripe,
            config.lanes,
            config.skip_default_ground,
        );
    }
}
