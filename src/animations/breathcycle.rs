use rand::Rng;

use crate::animations::{frames, Animation, CYCLE_PALETTE};
use crate::channel::{EYE_PIXELS, RING_PIXELS};
use crate::color::{self, Breath, Color};

const BREATH_SECONDS: f32 = 1.8;
const HOLD_SECONDS: f32 = 0.5;

/// Walks the fixed palette in order and breathes each color a random number
/// of times before advancing. All pixels of the channel share one color.
/// The ring variant breathes down to a dim floor instead of black.
pub struct BreathCycle {
    fps: u32,
    pixel_count: usize,
    floor_scale: f32,
    max_repeats: u32,
    palette_index: usize,
    repeats_left: u32,
    floor: Color,
    phase: Phase,
}

enum Phase {
    Breathing(Breath),
    Holding(u32),
}

impl BreathCycle {
    pub fn eye(fps: u32) -> BreathCycle {
        BreathCycle::new(fps, EYE_PIXELS, 0.0, 5)
    }

    pub fn ring(fps: u32) -> BreathCycle {
        BreathCycle::new(fps, RING_PIXELS, 0.03, 3)
    }

    fn new(fps: u32, pixel_count: usize, floor_scale: f32, max_repeats: u32) -> BreathCycle {
        let mut cycle = BreathCycle {
            fps,
            pixel_count,
            floor_scale,
            max_repeats,
            palette_index: 0,
            repeats_left: rand::thread_rng().gen_range(1..=max_repeats),
            floor: color::black(),
            phase: Phase::Holding(0),
        };
        cycle.start_breath();
        cycle
    }

    fn start_breath(&mut self) {
        let peak = color::named_color(CYCLE_PALETTE[self.palette_index]);
        self.floor = color::scale(peak, self.floor_scale);
        let length = frames(self.fps, BREATH_SECONDS).max(4);
        self.phase = Phase::Breathing(Breath::new(peak, self.floor, length));
    }
}

impl Animation for BreathCycle {
    fn next_frame(&mut self) -> Option<Vec<Color>> {
        loop {
            match &mut self.phase {
                Phase::Breathing(breath) => match breath.next() {
                    Some(color) => return Some(vec![color; self.pixel_count]),
                    None => self.phase = Phase::Holding(frames(self.fps, HOLD_SECONDS)),
                },
                Phase::Holding(remaining) => {
                    if *remaining > 0 {
                        *remaining -= 1;
                        return Some(vec![self.floor; self.pixel_count]);
                    }
                    self.repeats_left -= 1;
                    if self.repeats_left == 0 {
                        self.palette_index = (self.palette_index + 1) % CYCLE_PALETTE.len();
                        self.repeats_left = rand::thread_rng().gen_range(1..=self.max_repeats);
                    }
                    self.start_breath();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak_of_cycle(cycle: &mut BreathCycle, fps: u32) -> Color {
        let half = frames(fps, BREATH_SECONDS) / 2;
        let mut frame = Vec::new();
        for _ in 0..half {
            frame = cycle.next_frame().unwrap();
        }
        frame[0]
    }

    #[test]
    fn palette_advances_in_fixed_order() {
        let fps = 24;
        let mut cycle = BreathCycle::eye(fps);
        let cycle_len = frames(fps, BREATH_SECONDS) / 2 * 2 + frames(fps, HOLD_SECONDS);

        // The peak color only ever moves forward through the palette.
        let mut seen = vec![peak_of_cycle(&mut cycle, fps)];
        // Drain the rest of the first cycle.
        let half = frames(fps, BREATH_SECONDS) / 2;
        for _ in 0..cycle_len - half {
            cycle.next_frame().unwrap();
        }
        for _ in 0..40 {
            let peak = peak_of_cycle(&mut cycle, fps);
            for _ in 0..cycle_len - half {
                cycle.next_frame().unwrap();
            }
            if peak != *seen.last().unwrap() {
                seen.push(peak);
            }
        }

        let palette: Vec<Color> = CYCLE_PALETTE.iter().map(|n| color::named_color(n)).collect();
        assert_eq!(seen[0], palette[0]);
        for pair in seen.windows(2) {
            let from = palette.iter().position(|c| *c == pair[0]).unwrap();
            let to = palette.iter().position(|c| *c == pair[1]).unwrap();
            assert_eq!(to, (from + 1) % palette.len());
        }
        // 40 cycles at up to 5 repeats per color crosses at least one boundary
        assert!(seen.len() >= 2);
    }

    #[test]
    fn eye_variant_holds_black() {
        let fps = 24;
        let mut cycle = BreathCycle::eye(fps);
        let breath_len = frames(fps, BREATH_SECONDS) / 2 * 2;
        for _ in 0..breath_len {
            cycle.next_frame().unwrap();
        }
        assert_eq!(cycle.next_frame().unwrap(), vec![color::black(); EYE_PIXELS]);
    }

    #[test]
    fn ring_variant_floor_is_dim_but_lit() {
        let fps = 24;
        let mut cycle = BreathCycle::ring(fps);
        let breath_len = frames(fps, BREATH_SECONDS) / 2 * 2;
        for _ in 0..breath_len {
            cycle.next_frame().unwrap();
        }
        let hold = cycle.next_frame().unwrap();
        assert_eq!(hold.len(), RING_PIXELS);
        // First palette color is red: 255 * 0.03 rounds to 8
        assert_eq!(hold[0], palette::Srgb::new(8, 0, 0));
    }
}
