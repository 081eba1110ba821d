use palette::Srgb;
use rand::Rng;

// Authoring colors are 8 bit per component; the TLC59711 wants 16 bit.
pub type Color = Srgb<u8>;

pub const OUTPUT_MAX: u16 = 65535;

// Names eligible for a random draw. Black is resolvable but never drawn.
const COLOR_NAMES: [&str; 10] = [
    "red", "green", "blue", "yellow", "cyan", "purple", "white", "orange", "pink", "brown",
];

pub fn black() -> Color {
    Srgb::new(0, 0, 0)
}

pub fn white() -> Color {
    Srgb::new(255, 255, 255)
}

pub fn named_color(name: &str) -> Color {
    match name {
        "red" => Srgb::new(255, 0, 0),
        "green" => Srgb::new(0, 255, 0),
        "blue" => Srgb::new(0, 0, 255),
        "yellow" => Srgb::new(255, 255, 0),
        "cyan" => Srgb::new(0, 255, 255),
        "purple" => Srgb::new(255, 0, 255),
        "white" => Srgb::new(255, 255, 255),
        "black" => Srgb::new(0, 0, 0),
        "orange" => Srgb::new(255, 165, 0),
        "pink" => Srgb::new(255, 192, 203),
        "brown" => Srgb::new(165, 42, 42),
        _ => {
            log::debug!("Unknown color name '{}', using black", name);
            black()
        }
    }
}

pub fn random_named_color() -> Color {
    let name = COLOR_NAMES[rand::thread_rng().gen_range(0..COLOR_NAMES.len())];
    named_color(name)
}

pub fn random_color() -> Color {
    let mut rng = rand::thread_rng();
    Srgb::new(rng.gen(), rng.gen(), rng.gen())
}

/// Componentwise `color * factor`, rounded. Used for the near-black breath floors.
pub fn scale(color: Color, factor: f32) -> Color {
    Srgb::new(
        scale_channel(color.red, factor),
        scale_channel(color.green, factor),
        scale_channel(color.blue, factor),
    )
}

fn scale_channel(c: u8, factor: f32) -> u8 {
    (c as f32 * factor).round().clamp(0.0, 255.0) as u8
}

/// Expand an authoring color to the 16 bit output range at the given
/// brightness percentage. 65535 / 255 == 257, so this is exact integer math.
pub fn scale_brightness(color: Color, brightness_percent: u8) -> [u16; 3] {
    assert!(
        brightness_percent <= 100,
        "brightness is a percentage, got {}",
        brightness_percent
    );
    [
        brighten_channel(color.red, brightness_percent),
        brighten_channel(color.green, brightness_percent),
        brighten_channel(color.blue, brightness_percent),
    ]
}

fn brighten_channel(c: u8, brightness_percent: u8) -> u16 {
    // Round half up, then clamp to the output range.
    let scaled = (c as u32 * 257 * brightness_percent as u32 + 50) / 100;
    scaled.min(OUTPUT_MAX as u32) as u16
}

/// Finite linear ramp between two colors. Yields exactly `frame_count`
/// colors; the first is `from`, the last is `to`.
pub struct Transition {
    from: Color,
    to: Color,
    frame_count: u32,
    position: u32,
}

impl Transition {
    pub fn new(from: Color, to: Color, frame_count: u32) -> Transition {
        assert!(
            frame_count >= 2,
            "a transition needs at least two frames, got {}",
            frame_count
        );
        Transition {
            from,
            to,
            frame_count,
            position: 0,
        }
    }
}

impl Iterator for Transition {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.position >= self.frame_count {
            return None;
        }
        let k = self.position as f32 / (self.frame_count - 1) as f32;
        self.position += 1;
        Some(Srgb::new(
            lerp_channel(self.from.red, self.to.red, k),
            lerp_channel(self.from.green, self.to.green, k),
            lerp_channel(self.from.blue, self.to.blue, k),
        ))
    }
}

fn lerp_channel(from: u8, to: u8, k: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * k).round() as u8
}

/// Ramp valley -> peak -> valley. Both halves are floor(total / 2) frames
/// long, so an odd total loses one frame.
pub struct Breath {
    up: Transition,
    down: Transition,
}

impl Breath {
    pub fn new(peak: Color, valley: Color, total_frame_count: u32) -> Breath {
        let half = total_frame_count / 2;
        Breath {
            up: Transition::new(valley, peak, half),
            down: Transition::new(peak, valley, half),
        }
    }
}

impl Iterator for Breath {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        self.up.next().or_else(|| self.down.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_resolve() {
        assert_eq!(named_color("red"), Srgb::new(255, 0, 0));
        assert_eq!(named_color("orange"), Srgb::new(255, 165, 0));
        assert_eq!(named_color("doesnotexist"), black());
    }

    #[test]
    fn random_named_color_is_never_black() {
        for _ in 0..200 {
            assert_ne!(random_named_color(), black());
        }
    }

    #[test]
    fn transition_hits_both_endpoints() {
        for frame_count in [2u32, 3, 12, 43] {
            let from = Srgb::new(10, 200, 0);
            let to = Srgb::new(255, 0, 128);
            let frames: Vec<Color> = Transition::new(from, to, frame_count).collect();
            assert_eq!(frames.len(), frame_count as usize);
            assert_eq!(frames[0], from);
            assert_eq!(frames[frame_count as usize - 1], to);
        }
    }

    #[test]
    fn transition_is_monotonic_per_channel() {
        let frames: Vec<Color> = Transition::new(black(), white(), 10).collect();
        for pair in frames.windows(2) {
            assert!(pair[1].red >= pair[0].red);
        }
    }

    #[test]
    #[should_panic(expected = "at least two frames")]
    fn transition_rejects_single_frame() {
        Transition::new(black(), white(), 1);
    }

    #[test]
    fn breath_is_symmetric() {
        let peak = Srgb::new(200, 100, 50);
        let frames: Vec<Color> = Breath::new(peak, black(), 42).collect();
        assert_eq!(frames.len(), 42);
        assert_eq!(frames[0], black());
        // The peak sits at the half boundary, once per half.
        assert_eq!(frames[20], peak);
        assert_eq!(frames[21], peak);
        assert_eq!(frames[41], black());
    }

    #[test]
    fn breath_floors_odd_totals() {
        let frames: Vec<Color> = Breath::new(white(), black(), 43).collect();
        assert_eq!(frames.len(), 42);
    }

    #[test]
    fn full_brightness_expands_to_sixteen_bit() {
        assert_eq!(scale_brightness(white(), 100), [65535, 65535, 65535]);
        assert_eq!(scale_brightness(Srgb::new(1, 0, 0), 100), [257, 0, 0]);
        assert_eq!(scale_brightness(Srgb::new(128, 64, 32), 100), [32896, 16448, 8224]);
    }

    #[test]
    fn zero_brightness_is_dark() {
        assert_eq!(scale_brightness(white(), 0), [0, 0, 0]);
        assert_eq!(scale_brightness(Srgb::new(12, 34, 56), 0), [0, 0, 0]);
    }

    #[test]
    fn dimmed_brightness_rounds_half_up() {
        // 255 * 257 * 70 / 100 = 45874.5 -> 45875
        assert_eq!(scale_brightness(white(), 70), [45875, 45875, 45875]);
    }

    #[test]
    fn near_black_floor_is_not_black() {
        let floor = scale(white(), 0.002);
        assert_eq!(floor, Srgb::new(1, 1, 1));
    }
}
