#![no_std]

use gfx::Surface;

/// Interface between a game and the host that drives it.
///
/// Hosts call the three phases in a fixed order every displayed frame:
/// zero or more `advance` ticks, then `render_frame`, then `render_overlay`.
/// See `run_frame`.
pub trait Demo {
    type Controls;

    /// Runs one fixed-length simulation tick.
    fn advance(&mut self, controls: &Self::Controls);

    /// Paints the current state into `surface`, replacing all of it.
    fn render_frame<S: Surface>(&self, surface: &mut S);

    /// Publishes whatever the host should show on top of the frame.
    fn render_overlay<O: Overlay>(&self, ui: &mut O);
}

/// Receiver for the numbers a demo wants shown over the picture.
pub trait Overlay {
    fn set_score(&mut self, slot: usize, value: i32);
}

/// Turns irregular host frame times into a whole number of fixed ticks.
#[derive(Copy, Clone, Debug)]
pub struct FixedStep {
    period_ms: f32,
    max_ticks: usize,
    remainder_ms: f32,
}

impl FixedStep {
    pub fn new(period_ms: f32, max_ticks: usize) -> Self {
        assert!(period_ms > 0.);
        FixedStep {
            period_ms,
            max_ticks,
            remainder_ms: 0.,
        }
    }

    /// Accounts for `elapsed_ms` of wall time and returns the number of ticks
    /// to run now. Leftover time carries into the next call. If the host fell
    /// more than `max_ticks` behind, the backlog is dropped.
    pub fn ticks(&mut self, elapsed_ms: f32) -> usize {
        self.remainder_ms += elapsed_ms.max(0.);
        let ticks = (self.remainder_ms / self.period_ms) as usize;
        if ticks > self.max_ticks {
            self.remainder_ms = 0.;
            self.max_ticks
        } else {
            self.remainder_ms -= ticks as f32 * self.period_ms;
            ticks
        }
    }
}

/// Runs one host frame: `ticks` simulation steps, then the picture, then the
/// overlay.
pub fn run_frame<D, S, O>(
    demo: &mut D,
    controls: &D::Controls,
    ticks: usize,
    surface: &mut S,
    ui: &mut O,
) where
    D: Demo,
    S: Surface,
    O: Overlay,
{
    for _ in 0..ticks {
        demo.advance(controls);
    }
    demo.render_frame(surface);
    demo.render_overlay(ui);
}
