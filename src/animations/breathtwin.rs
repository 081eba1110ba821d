use crate::animations::{frames, Animation};
use crate::channel::EYE_PIXELS;
use crate::color::{self, Breath, Color};

const BREATH_SECONDS: f32 = 1.8;
const HOLD_SECONDS: f32 = 1.0;
// The breath floor is a faint shadow of each color instead of full black.
const FLOOR_SCALE: f32 = 0.002;

/// Pairs the eyes (0,1) and (2,3), gives each pair its own random named
/// color and breathes both pairs down to a near-black floor.
pub struct EyeBreathTwin {
    fps: u32,
    floors: Vec<Color>,
    phase: Phase,
}

enum Phase {
    Breathing(Vec<Breath>),
    Holding(u32),
}

impl EyeBreathTwin {
    pub fn new(fps: u32) -> EyeBreathTwin {
        let (floors, breaths) = Self::draw_pairs(fps);
        EyeBreathTwin {
            fps,
            floors,
            phase: Phase::Breathing(breaths),
        }
    }

    fn draw_pairs(fps: u32) -> (Vec<Color>, Vec<Breath>) {
        let left = color::random_named_color();
        let right = color::random_named_color();
        let colors = [left, left, right, right];
        let floors: Vec<Color> = colors.iter().map(|c| color::scale(*c, FLOOR_SCALE)).collect();
        let length = frames(fps, BREATH_SECONDS).max(4);
        let breaths = colors
            .iter()
            .zip(&floors)
            .map(|(peak, floor)| Breath::new(*peak, *floor, length))
            .collect();
        (floors, breaths)
    }
}

impl Animation for EyeBreathTwin {
    fn next_frame(&mut self) -> Option<Vec<Color>> {
        loop {
            match &mut self.phase {
                Phase::Breathing(breaths) => {
                    let frame: Option<Vec<Color>> = breaths.iter_mut().map(|b| b.next()).collect();
                    match frame {
                        Some(frame) => return Some(frame),
                        None => self.phase = Phase::Holding(frames(self.fps, HOLD_SECONDS)),
                    }
                }
                Phase::Holding(remaining) => {
                    if *remaining == 0 {
                        let (floors, breaths) = Self::draw_pairs(self.fps);
                        self.floors = floors;
                        self.phase = Phase::Breathing(breaths);
                        continue;
                    }
                    *remaining -= 1;
                    return Some(self.floors.clone());
                }
            }
        }
    }
}
