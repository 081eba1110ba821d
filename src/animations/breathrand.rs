use crate::animations::{frames, Animation};
use crate::channel::EYE_PIXELS;
use crate::color::{self, Breath, Color};

const BREATH_SECONDS: f32 = 1.8;
const HOLD_SECONDS: f32 = 0.5;

/// Every cycle draws one random named color per eye, breathes them up from
/// black and back, then holds dark before drawing fresh colors.
pub struct EyeBreathRandom {
    fps: u32,
    phase: Phase,
}

enum Phase {
    Breathing(Vec<Breath>),
    Holding(u32),
}

impl EyeBreathRandom {
    pub fn new(fps: u32) -> EyeBreathRandom {
        EyeBreathRandom {
            fps,
            phase: Phase::Breathing(Self::draw_breaths(fps)),
        }
    }

    fn draw_breaths(fps: u32) -> Vec<Breath> {
        // Two frames per half is the floor, whatever the frame rate.
        let length = frames(fps, BREATH_SECONDS).max(4);
        (0..EYE_PIXELS)
            .map(|_| Breath::new(color::random_named_color(), color::black(), length))
            .collect()
    }
}

impl Animation for EyeBreathRandom {
    fn next_frame(&mut self) -> Option<Vec<Color>> {
        loop {
            match &mut self.phase {
                Phase::Breathing(breaths) => {
                    // All breaths share one length, so they exhaust together.
                    let frame: Option<Vec<Color>> = breaths.iter_mut().map(|b| b.next()).collect();
                    match frame {
                        Some(frame) => return Some(frame),
                        None => self.phase = Phase::Holding(frames(self.fps, HOLD_SECONDS)),
                    }
                }
                Phase::Holding(remaining) => {
                    if *remaining == 0 {
                        self.phase = Phase::Breathing(Self::draw_breaths(self.fps));
                        continue;
                    }
                    *remaining -= 1;
                    return Some(vec![color::black(); EYE_PIXELS]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_shape_at_24_fps() {
        let fps = 24;
        let mut breath = EyeBreathRandom::new(fps);
        let breath_len = (frames(fps, BREATH_SECONDS) / 2) * 2;

        let mut cycle: Vec<Vec<Color>> = Vec::new();
        for _ in 0..breath_len {
            cycle.push(breath.next_frame().unwrap());
        }
        // Starts and ends at the black valley
        assert_eq!(cycle[0], vec![color::black(); EYE_PIXELS]);
        assert_eq!(cycle[breath_len as usize - 1], vec![color::black(); EYE_PIXELS]);
        // Peak at the half boundary is a named color per eye, never black
        for pixel in &cycle[breath_len as usize / 2] {
            assert_ne!(*pixel, color::black());
        }

        // Dark hold afterwards
        for _ in 0..frames(fps, HOLD_SECONDS) {
            assert_eq!(breath.next_frame().unwrap(), vec![color::black(); EYE_PIXELS]);
        }

        // Next cycle begins at the valley again
        assert_eq!(breath.next_frame().unwrap(), vec![color::black(); EYE_PIXELS]);
    }

    #[test]
    fn frames_are_eye_sized() {
        let mut breath = EyeBreathRandom::new(24);
        for _ in 0..200 {
            assert_eq!(breath.next_frame().unwrap().len(), EYE_PIXELS);
        }
    }
}
