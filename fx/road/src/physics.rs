//! Car physics, one fixed tick at a time.
//!
//! The road renderer doesn't care how the camera moves; it only reads the
//! `Camera`. This is the simple arcade model that moves it.

use crate::segment::Track;

/// Ticks per second.
pub const TICK_RATE: f32 = 60.;
pub const TIMESTEP_MS: f32 = 1000. / TICK_RATE;

pub const ACCELERATION: f32 = 0.03;
pub const MAX_VELOCITY: f32 = 3.;
/// Velocity kept per tick while coasting.
pub const FRICTION: f32 = 0.98;
/// Coasting below this speed stops the car.
pub const STOP_VELOCITY: f32 = 0.1;
/// Velocity kept per tick while off the road.
pub const OFFROAD_BRAKING: f32 = 0.95;
/// Lateral push per unit of curvature at full speed.
pub const CORNERING_FORCE: f32 = 80.;
/// Lateral steering speed in pixels per tick.
pub const STEER_SPEED: f32 = 120. / TICK_RATE;
/// The road edges, as far as the car is concerned.
pub const ROAD_LEFT: f32 = 16.;
pub const ROAD_RIGHT: f32 = 144.;

/// Where we are along the track.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera {
    /// Total distance traveled. Kept wide so that small steps still register
    /// after a long drive.
    pub z: f64,
    /// Index of the segment we're on.
    pub segment: usize,
    /// Distance traveled within that segment.
    pub segment_pos: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Player {
    /// Screen position of the car.
    pub x: f32,
    /// Forward distance per tick.
    pub vel: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Controls {
    pub accelerate: bool,
    /// -1 steers full left, 1 full right.
    pub steer: f32,
}

/// Runs one tick.
///
/// `screen_width` bounds the car's lateral position.
pub fn advance(
    track: &Track,
    camera: &mut Camera,
    player: &mut Player,
    controls: &Controls,
    screen_width: f32,
) {
    let segment = *track.get_segment(camera.segment);
    let mut vel = player.vel;

    player.x += controls.steer.max(-1.).min(1.) * STEER_SPEED;

    if controls.accelerate {
        vel += ACCELERATION;
    } else {
        vel *= FRICTION;
        if vel < STOP_VELOCITY {
            vel = 0.;
        }
    }

    if player.x < ROAD_LEFT || player.x > ROAD_RIGHT {
        vel *= OFFROAD_BRAKING;
    }

    vel = vel.max(0.).min(MAX_VELOCITY);

    // Following a curve takes force; without it we drift to the outside.
    if segment.is_curve() {
        let scaler = vel / MAX_VELOCITY;
        player.x += segment.curvature * -CORNERING_FORCE * scaler * scaler;
    }
    player.x = player.x.max(0.).min(screen_width);

    camera.z += f64::from(vel);
    camera.segment_pos += vel;
    if camera.segment_pos >= segment.length {
        camera.segment = track.next_index(camera.segment);
        camera.segment_pos -= segment.length;
        tracing::trace!(segment = camera.segment, z = camera.z, "next segment");
    }

    player.vel = vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;
    use crate::Config;

    fn track(segments: Vec<Segment>) -> Track {
        Track::from_segments(Config::default(), segments).unwrap()
    }

    fn player(vel: f32) -> Player {
        Player { x: 80., vel }
    }

    const GAS: Controls = Controls {
        accelerate: true,
        steer: 0.,
    };

    const COAST: Controls = Controls {
        accelerate: false,
        steer: 0.,
    };

    #[test]
    fn accelerates_to_top_speed() {
        let t = track(vec![Segment::straight(1.0e6)]);
        let mut cam = Camera::default();
        let mut p = player(0.);
        advance(&t, &mut cam, &mut p, &GAS, 160.);
        assert!((p.vel - ACCELERATION).abs() < 1e-6);
        assert!((cam.z - f64::from(ACCELERATION)).abs() < 1e-6);
        for _ in 0..1000 {
            advance(&t, &mut cam, &mut p, &GAS, 160.);
        }
        assert_eq!(p.vel, MAX_VELOCITY);
    }

    #[test]
    fn coasting_slows_then_stops() {
        let t = track(vec![Segment::straight(1.0e6)]);
        let mut cam = Camera::default();
        let mut p = player(1.);
        advance(&t, &mut cam, &mut p, &COAST, 160.);
        assert!((p.vel - 0.98).abs() < 1e-6);

        let mut p = player(0.1);
        advance(&t, &mut cam, &mut p, &COAST, 160.);
        assert_eq!(p.vel, 0.);
    }

    #[test]
    fn offroad_brakes() {
        let t = track(vec![Segment::straight(1.0e6)]);
        let mut cam = Camera::default();
        let mut p = Player { x: 150., vel: 2. };
        advance(&t, &mut cam, &mut p, &GAS, 160.);
        assert!((p.vel - 2.03 * 0.95).abs() < 1e-5);
    }

    #[test]
    fn curves_push_to_the_outside() {
        let t = track(vec![Segment {
            curvature: 0.04,
            length: 1.0e6,
        }]);
        let mut cam = Camera::default();
        let mut p = player(MAX_VELOCITY);
        advance(&t, &mut cam, &mut p, &GAS, 160.);
        // Right turn, full speed: pushed left by 0.04 * 80.
        assert!((p.x - (80. - 3.2)).abs() < 1e-4, "{}", p.x);

        let t = track(vec![Segment {
            curvature: -0.04,
            length: 1.0e6,
        }]);
        let mut p = player(MAX_VELOCITY);
        advance(&t, &mut cam, &mut p, &GAS, 160.);
        assert!(p.x > 80.);
    }

    #[test]
    fn steering_is_bounded() {
        let t = track(vec![Segment::straight(1.0e6)]);
        let mut cam = Camera::default();
        let mut p = player(0.);
        let hard_right = Controls {
            accelerate: false,
            steer: 5.,
        };
        advance(&t, &mut cam, &mut p, &hard_right, 160.);
        assert_eq!(p.x, 80. + STEER_SPEED);
        for _ in 0..200 {
            advance(&t, &mut cam, &mut p, &hard_right, 160.);
        }
        assert_eq!(p.x, 160.);
    }

    #[test]
    fn distance_keeps_counting_after_a_long_drive() {
        let t = track(vec![Segment::straight(1.0e6)]);
        let mut cam = Camera {
            z: 600_000.,
            segment: 0,
            segment_pos: 0.,
        };
        let mut p = player(0.);
        advance(&t, &mut cam, &mut p, &GAS, 160.);
        assert!((cam.z - 600_000.03).abs() < 1e-4, "{}", cam.z);
    }

    #[test]
    fn crosses_segments_and_wraps() {
        let t = track(vec![Segment::straight(10.), Segment::straight(5.)]);
        let mut cam = Camera {
            z: 9.,
            segment: 0,
            segment_pos: 9.,
        };
        let mut p = player(2.);
        advance(&t, &mut cam, &mut p, &COAST, 160.);
        assert_eq!(cam.segment, 1);
        assert!((cam.segment_pos - (9. + 1.96 - 10.)).abs() < 1e-5);

        cam.segment_pos = 4.5;
        advance(&t, &mut cam, &mut p, &COAST, 160.);
        assert_eq!(cam.segment, 0);
        assert!(cam.segment_pos >= 0. && cam.segment_pos < 10.);
    }
}
