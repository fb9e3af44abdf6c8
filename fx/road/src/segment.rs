//! Track layout.

use gfx::Surface;
use rand::Rng;

use crate::physics::Camera;
use crate::table::Table;
use crate::{Config, ConfigError};

/// A run of track with constant curvature.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Horizontal shift added per scanline. Negative turns left.
    pub curvature: f32,
    /// World depth covered by the segment.
    pub length: f32,
}

impl Segment {
    /// Every track opens with this, so the player starts on a straight.
    pub const START: Segment = Segment {
        curvature: 0.,
        length: 800.,
    };

    pub fn straight(length: f32) -> Self {
        Segment {
            curvature: 0.,
            length,
        }
    }

    pub fn is_curve(&self) -> bool {
        self.curvature != 0.
    }

    /// Picks one random segment. Straights come up twice as often as either
    /// kind of turn.
    pub fn random(rng: &mut impl Rng) -> Self {
        // Note that gen_range excludes its upper bound.
        match rng.gen_range(1u8, 5) {
            1 => Segment {
                curvature: rng.gen_range(1i32, 5) as f32 * -0.01,
                length: rng.gen_range(5i32, 8) as f32 * 50.,
            },
            2 => Segment {
                curvature: rng.gen_range(1i32, 5) as f32 * 0.01,
                length: rng.gen_range(5i32, 8) as f32 * 50.,
            },
            _ => Segment::straight(rng.gen_range(3i32, 7) as f32 * 100.),
        }
    }
}

/// A circular sequence of segments, plus the scanline table used to draw it.
///
/// A `Track` always holds at least one segment, so index arithmetic on it
/// never divides by zero.
#[derive(Clone, Debug)]
pub struct Track {
    config: Config,
    table: Table,
    segments: Vec<Segment>,
}

impl Track {
    /// Creates a track holding only the starting straight.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Track::from_segments(config, vec![Segment::START])
    }

    /// Creates a track with a fixed layout.
    pub fn from_segments(
        config: Config,
        segments: Vec<Segment>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if segments.is_empty() {
            return Err(ConfigError::EmptyTrack);
        }
        let table = Table::compute(&config);
        Ok(Track {
            config,
            table,
            segments,
        })
    }

    /// Replaces the layout with the starting straight followed by `n` random
    /// segments. The scanline table is untouched.
    pub fn generate(&mut self, n: usize, rng: &mut impl Rng) {
        self.segments.clear();
        self.segments.reserve(n + 1);
        self.segments.push(Segment::START);
        for _ in 0..n {
            self.segments.push(Segment::random(rng));
        }
        tracing::debug!(
            segments = self.segments.len(),
            length = self.length(),
            "generated track"
        );
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Total world depth of one lap.
    pub fn length(&self) -> f32 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// Looks up segment `index`, wrapping around the end of the track.
    pub fn get_segment(&self, index: usize) -> &Segment {
        &self.segments[index % self.segments.len()]
    }

    /// Looks up the segment after `index`, wrapping around the end of the
    /// track.
    pub fn get_next_segment(&self, index: usize) -> &Segment {
        &self.segments[(index % self.segments.len() + 1) % self.segments.len()]
    }

    /// Index of the segment after `index`.
    pub fn next_index(&self, index: usize) -> usize {
        (index % self.segments.len() + 1) % self.segments.len()
    }

    /// Draws the road as seen from `camera`. See `render::render`.
    pub fn render<S: Surface>(&self, fb: &mut S, camera: &Camera) {
        crate::render::render(self, fb, camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(11181981)
    }

    fn is_valid_random(s: &Segment) -> bool {
        if s.is_curve() {
            let steps = (s.curvature.abs() / 0.01).round();
            (1. ..=4.).contains(&steps)
                && (s.curvature.abs() - steps * 0.01).abs() < 1e-6
                && [250., 300., 350.].contains(&s.length)
        } else {
            [300., 400., 500., 600.].contains(&s.length)
        }
    }

    #[test]
    fn new_track_is_start_straight() {
        let track = Track::new(Config::default()).unwrap();
        assert_eq!(track.segments(), &[Segment::START]);
    }

    #[test]
    fn generate_zero() {
        let mut track = Track::new(Config::default()).unwrap();
        track.generate(20, &mut rng());
        track.generate(0, &mut rng());
        assert_eq!(track.len(), 1);
        assert_eq!(*track.get_segment(0), Segment {
            curvature: 0.,
            length: 800.
        });
    }

    #[test]
    fn generate_n() {
        let mut track = Track::new(Config::default()).unwrap();
        let mut rng = rng();
        for &n in &[1, 5, 20, 200] {
            track.generate(n, &mut rng);
            assert_eq!(track.len(), n + 1);
            assert_eq!(track.segments()[0], Segment::START);
            for s in &track.segments()[1..] {
                assert!(is_valid_random(s), "bad segment {:?}", s);
            }
        }
    }

    #[test]
    fn generation_is_reproducible() {
        let mut a = Track::new(Config::default()).unwrap();
        let mut b = Track::new(Config::default()).unwrap();
        a.generate(50, &mut rng());
        b.generate(50, &mut rng());
        assert_eq!(a.segments(), b.segments());
    }

    #[test]
    fn generation_covers_all_kinds() {
        let mut track = Track::new(Config::default()).unwrap();
        track.generate(400, &mut rng());
        let segs = &track.segments()[1..];
        let left = segs.iter().filter(|s| s.curvature < 0.).count();
        let right = segs.iter().filter(|s| s.curvature > 0.).count();
        let straight = segs.len() - left - right;
        assert!(left > 0 && right > 0);
        // Straights are drawn on two of four branches.
        assert!(straight > left && straight > right);
    }

    #[test]
    fn next_segment_wraps() {
        let segs = vec![
            Segment::START,
            Segment {
                curvature: 0.02,
                length: 300.,
            },
            Segment::straight(400.),
        ];
        let track = Track::from_segments(Config::default(), segs).unwrap();
        assert_eq!(track.get_next_segment(2), track.get_segment(0));
        assert_eq!(track.get_next_segment(0).curvature, 0.02);
        assert_eq!(track.next_index(2), 0);
        // Out-of-range indices wrap too.
        assert_eq!(track.get_segment(4).curvature, 0.02);
        assert_eq!(track.get_next_segment(5), &Segment::START);
        assert_eq!(track.length(), 1500.);
    }

    #[test]
    fn next_index_at_the_top_of_the_range() {
        let segs = vec![
            Segment::START,
            Segment::straight(300.),
            Segment::straight(400.),
        ];
        let track = Track::from_segments(Config::default(), segs).unwrap();
        let next = track.next_index(usize::MAX);
        assert!(next < track.len());
        assert_eq!(track.get_segment(next), track.get_next_segment(usize::MAX));
    }

    #[test]
    fn empty_track_rejected() {
        assert_eq!(
            Track::from_segments(Config::default(), vec![]).unwrap_err(),
            ConfigError::EmptyTrack
        );
    }

    #[test]
    fn bad_config_rejected() {
        let config = Config {
            horizon: 500,
            ..Config::default()
        };
        assert!(Track::new(config).is_err());
    }
}
