use crate::animations::{frames, Animation};
use crate::channel::RING_PIXELS;
use crate::color::{self, Color, Transition};

const WINDOW: usize = 2;
const MOVE_SECONDS: f32 = 0.1;
const TRANSITION_SECONDS: f32 = 0.5;

/// A two-pixel window wanders around the ring, advancing one position every
/// 0.1 s. The lit pixels feed off a shared color transition; whenever it runs
/// out, a fresh random target is drawn and the ramp restarts from the
/// previous target.
pub struct RandomWheel {
    hold_frames: u32,
    transition_frames: u32,
    hold: u32,
    position: usize,
    target: Color,
    transition: Transition,
    state: Vec<Color>,
}

impl RandomWheel {
    pub fn new(fps: u32) -> RandomWheel {
        let target = color::named_color("green");
        // Below 10 fps the move interval truncates to zero frames and a
        // 0.5 s ramp can fall under the two-frame minimum; clamp both.
        let hold_frames = frames(fps, MOVE_SECONDS).max(1);
        let transition_frames = frames(fps, TRANSITION_SECONDS).max(2);
        RandomWheel {
            hold_frames,
            transition_frames,
            hold: 0,
            position: 0,
            target,
            transition: Transition::new(color::white(), target, transition_frames),
            state: vec![color::black(); RING_PIXELS],
        }
    }

    fn next_window_color(&mut self) -> Color {
        match self.transition.next() {
            Some(color) => color,
            None => {
                let next_target = color::random_color();
                self.transition = Transition::new(self.target, next_target, self.transition_frames);
                self.target = next_target;
                self.transition.next().expect("a fresh transition is never empty")
            }
        }
    }
}

impl Animation for RandomWheel {
    fn next_frame(&mut self) -> Option<Vec<Color>> {
        if self.hold == 0 {
            debug_assert!(self.position < RING_PIXELS);
            let mut state = vec![color::black(); RING_PIXELS];
            for i in self.position..self.position + WINDOW {
                state[i % RING_PIXELS] = self.next_window_color();
            }
            self.state = state;
            self.position = (self.position + 1) % RING_PIXELS;
            self.hold = self.hold_frames;
        }
        self.hold -= 1;
        Some(self.state.clone())
    }
}
