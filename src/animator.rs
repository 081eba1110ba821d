use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::channel::ChannelState;
use crate::intervaltimer::IntervalTimer;
use crate::output::LedOutput;

/// Owns the output loop: every tick it pulls one frame from each channel,
/// merges them ring-first and commits the result, then sleeps off the rest
/// of the frame interval. The run flag is checked once per tick, so shutdown
/// latency is bounded by about one frame.
pub struct Animator {
    ring: Arc<Mutex<ChannelState>>,
    eye: Arc<Mutex<ChannelState>>,
    output: LedOutput,
    fps: u32,
    running: Arc<AtomicBool>,
}

impl Animator {
    pub fn new(
        ring: Arc<Mutex<ChannelState>>,
        eye: Arc<Mutex<ChannelState>>,
        output: LedOutput,
        fps: u32,
        running: Arc<AtomicBool>,
    ) -> Animator {
        assert!(fps > 0, "frame rate must be nonzero");
        Animator {
            ring,
            eye,
            output,
            fps,
            running,
        }
    }

    pub fn run(&mut self) {
        let mut timer = IntervalTimer::new(self.fps as f32, true);
        while self.running.load(Ordering::Relaxed) {
            let mut frame = self.ring.lock().unwrap().next_frame();
            frame.extend(self.eye.lock().unwrap().next_frame());
            self.output.commit(&frame);
            timer.sleep_until_next_tick();
        }
        log::info!("Animation loop stopped");
    }
}
