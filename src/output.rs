use crate::channel::{EYE_PIXELS, RING_PIXELS};
use crate::color::{self, Color};

pub const DEVICE_PIXELS: usize = 12;

// Hardware wiring orders: merged frame position -> device pixel index.
// Device pixel 0 is unpopulated.
const RING_ORDER: [usize; RING_PIXELS] = [1, 2, 3, 6, 7, 4, 5];
const EYE_ORDER: [usize; EYE_PIXELS] = [8, 9, 10, 11];

/// The bus transport underneath the driver. Both calls may fail; failures
/// are logged by the driver and the frame still counts as delivered.
pub trait PixelBus {
    fn set_pixel(&mut self, index: usize, color: [u16; 3]) -> Result<(), String>;
    fn flush(&mut self) -> Result<(), String>;
}

/// Maps merged logical frames onto device pixels, scales brightness and only
/// writes pixels that changed since the last commit. The diff cache is keyed
/// by device pixel index and replaced wholesale after every commit.
pub struct LedOutput {
    bus: Box<dyn PixelBus + Send>,
    brightness: u8,
    last_written: Vec<Option<[u16; 3]>>,
}

impl LedOutput {
    pub fn new(bus: Box<dyn PixelBus + Send>, brightness: u8) -> LedOutput {
        assert!(
            brightness <= 100,
            "brightness is a percentage, got {}",
            brightness
        );
        LedOutput {
            bus,
            brightness,
            last_written: vec![None; DEVICE_PIXELS],
        }
    }

    /// Commit one merged frame, ring positions first, then eyes.
    pub fn commit(&mut self, frame: &[Color]) {
        debug_assert_eq!(frame.len(), RING_PIXELS + EYE_PIXELS);

        let mut written = self.last_written.clone();
        for (&device_index, &color) in RING_ORDER.iter().chain(EYE_ORDER.iter()).zip(frame) {
            let scaled = color::scale_brightness(color, self.brightness);
            if self.last_written[device_index] != Some(scaled) {
                if let Err(err) = self.bus.set_pixel(device_index, scaled) {
                    log::error!("Pixel write failed for index {}: {}", device_index, err);
                }
            }
            written[device_index] = Some(scaled);
        }

        if let Err(err) = self.bus.flush() {
            log::error!("Pixel flush failed: {}", err);
        }
        self.last_written = written;
    }
}

/// Stand-in bus for running without the LED hardware attached.
pub struct ConsoleBus;

impl PixelBus for ConsoleBus {
    fn set_pixel(&mut self, index: usize, color: [u16; 3]) -> Result<(), String> {
        log::trace!("set_pixel {} -> {:?}", index, color);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), String> {
        log::trace!("flush");
        Ok(())
    }
}
