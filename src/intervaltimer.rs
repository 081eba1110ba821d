use std::thread;
use std::time::{Duration, Instant};

pub struct IntervalTimer {
    interval: Duration,
    last_tick: Instant,
    thread_name: String,
    measure_fps: bool,
    last_fps_print: Instant,
    frames: u32,
}

impl IntervalTimer {
    pub fn new(freq_hz: f32, measure_fps: bool) -> IntervalTimer {
        let frame_duration_microsec = 1000.0 / freq_hz * 1000.0;
        let cur_thread = thread::current();
        let thread_name = if let Some(name) = cur_thread.name() {
            name
        } else {
            "unnamed"
        };

        IntervalTimer {
            interval: Duration::from_micros(frame_duration_microsec as u64),
            last_tick: Instant::now(),
            thread_name: thread_name.to_string(),
            measure_fps,
            last_fps_print: Instant::now(),
            frames: 0,
        }
    }

    /// Sleeps off the rest of the current interval. An overrun tick is
    /// reported and the next interval starts immediately; missed frames are
    /// never caught up, so drift accumulates.
    pub fn sleep_until_next_tick(&mut self) -> bool {
        if self.measure_fps {
            self.update_fps();
        }

        let now = Instant::now();
        let next_tick = self.last_tick + self.interval;
        if next_tick > now {
            thread::sleep(next_tick - now);
            self.last_tick = next_tick;
            false
        } else {
            log::debug!(
                "{} update took {:?}, budget is {:?}",
                self.thread_name,
                now - self.last_tick,
                self.interval
            );
            self.last_tick = now;
            true
        }
    }

    fn update_fps(&mut self) {
        self.frames += 1;

        if Instant::now() - self.last_fps_print > Duration::from_secs(1) {
            log::debug!("{} FPS: {}", self.thread_name, self.frames);
            self.frames = 0;
            self.last_fps_print = Instant::now();
        }
    }
}
