use crate::animations::Animation;
use crate::channel::EYE_PIXELS;
use crate::color::{self, Color};

/// Square wave at white, starting off. Each phase lasts one second of frames.
pub struct EyeBlink {
    phase_frames: u32,
    remaining: u32,
    on: bool,
}

impl EyeBlink {
    pub fn new(fps: u32) -> EyeBlink {
        EyeBlink {
            phase_frames: fps,
            remaining: fps,
            on: false,
        }
    }
}

impl Animation for EyeBlink {
    fn next_frame(&mut self) -> Option<Vec<Color>> {
        let color = if self.on {
            color::white()
        } else {
            color::black()
        };
        self.remaining -= 1;
        if self.remaining == 0 {
            self.on = !self.on;
            self.remaining = self.phase_frames;
        }
        Some(vec![color; EYE_PIXELS])
    }
}

/// Like `EyeBlink`, but every on phase lights all eyes in one freshly drawn
/// random color.
pub struct EyeBlinkRandom {
    phase_frames: u32,
    remaining: u32,
    on: bool,
    color: Color,
}

impl EyeBlinkRandom {
    pub fn new(fps: u32) -> EyeBlinkRandom {
        EyeBlinkRandom {
            phase_frames: fps,
            remaining: fps,
            on: false,
            color: color::random_color(),
        }
    }
}

impl Animation for EyeBlinkRandom {
    fn next_frame(&mut self) -> Option<Vec<Color>> {
        let color = if self.on { self.color } else { color::black() };
        self.remaining -= 1;
        if self.remaining == 0 {
            self.on = !self.on;
            self.remaining = self.phase_frames;
            if self.on {
                self.color = color::random_color();
            }
        }
        Some(vec![color; EYE_PIXELS])
    }
}
