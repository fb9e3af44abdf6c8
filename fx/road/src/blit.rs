//! Single-line road painter.

use gfx::Surface;

use crate::palette::{Stripe, GROUND};
use crate::table::Entry;

/// Paints one road line at row `y`, centered on `x_center`.
///
/// Bands go down left to right and back to front: ground, road surface, the
/// two edge bands just outside the road, then `lanes - 1` evenly spaced
/// dividers. Edge bands whose road edge is already off screen are skipped.
///
/// If `skip_ground` is set and the stripe's ground is the background color,
/// the ground band is assumed to be there already and is not repainted.
pub fn blit_line<S: Surface>(
    fb: &mut S,
    x_center: f32,
    y: i32,
    line: &Entry,
    stripe: &Stripe,
    lanes: usize,
    skip_ground: bool,
) {
    let half = line.road_width / 2.;
    let x1 = x_center - half;
    let x2 = x_center + half;

    if !(skip_ground && stripe.ground == GROUND) {
        fb.draw_hspan(0, y, fb.width() as i32 - 1, stripe.ground);
    }

    fb.draw_hspan(x1 as i32, y, x2 as i32, stripe.surface);

    if x1 > 0. {
        fb.draw_hspan((x1 - line.edge_width) as i32, y, x1 as i32, stripe.sides);
    }
    if x2 < fb.width() as f32 {
        fb.draw_hspan(x2 as i32, y, (x2 + line.edge_width) as i32, stripe.sides);
    }

    if stripe.lines != stripe.surface {
        let half_divider = line.divider_width / 2.;
        for n in 1..lanes {
            let center = x1 + line.road_width * (n as f32 / lanes as f32);
            fb.draw_hspan(
                (center - half_divider) as i32,
                y,
                (center + half_divider) as i32,
                stripe.lines,
            );
        }
    }
}
