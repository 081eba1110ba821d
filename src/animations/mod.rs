pub(crate) mod blink;
pub(crate) mod breathcycle;
pub(crate) mod breathrand;
pub(crate) mod breathtwin;
pub(crate) mod randomwheel;

use crate::color::Color;

/// A resumable animation for one channel. Each call advances the machine by
/// one tick and yields one frame; `None` means the sequence is exhausted.
pub trait Animation {
    fn next_frame(&mut self) -> Option<Vec<Color>>;
}

/// Number of frames that cover `duration` seconds at the given frame rate.
pub fn frames(fps: u32, duration: f32) -> u32 {
    (duration * fps as f32) as u32
}

/// Palette shared by the cycle-breath animations, iterated in this order.
pub const CYCLE_PALETTE: [&str; 6] = ["red", "green", "blue", "cyan", "purple", "white"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counts_truncate() {
        assert_eq!(frames(24, 1.0), 24);
        assert_eq!(frames(24, 1.8), 43);
        assert_eq!(frames(24, 0.1), 2);
        assert_eq!(frames(24, 0.5), 12);
        assert_eq!(frames(2, 1.0), 2);
    }
}
