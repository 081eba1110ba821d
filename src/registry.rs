use std::sync::{Arc, Mutex};

use crate::animations::blink::{EyeBlink, EyeBlinkRandom};
use crate::animations::breathcycle::BreathCycle;
use crate::animations::breathrand::EyeBreathRandom;
use crate::animations::breathtwin::EyeBreathTwin;
use crate::animations::randomwheel::RandomWheel;
use crate::animations::Animation;
use crate::channel::{Channel, ChannelState};

pub struct ModeEntry {
    pub label: &'static str,
    pub identifier: &'static str,
    pub channel: Channel,
    factory: fn(u32) -> Box<dyn Animation + Send>,
}

// The identifier prefix names the channel; lookups go through this table
// only, never through dynamic dispatch by name.
const MODES: &[ModeEntry] = &[
    ModeEntry {
        label: "White Blink",
        identifier: "eye-blink",
        channel: Channel::Eye,
        factory: |fps| Box::new(EyeBlink::new(fps)),
    },
    ModeEntry {
        label: "Random Blink",
        identifier: "eye-blink-random",
        channel: Channel::Eye,
        factory: |fps| Box::new(EyeBlinkRandom::new(fps)),
    },
    ModeEntry {
        label: "Random Breath",
        identifier: "eye-breath-random",
        channel: Channel::Eye,
        factory: |fps| Box::new(EyeBreathRandom::new(fps)),
    },
    ModeEntry {
        label: "Twin Breath",
        identifier: "eye-breath-twin-random",
        channel: Channel::Eye,
        factory: |fps| Box::new(EyeBreathTwin::new(fps)),
    },
    ModeEntry {
        label: "Cycle Breath",
        identifier: "eye-breath-cycle",
        channel: Channel::Eye,
        factory: |fps| Box::new(BreathCycle::eye(fps)),
    },
    ModeEntry {
        label: "Random Wheel",
        identifier: "ring-random-wheel",
        channel: Channel::Ring,
        factory: |fps| Box::new(RandomWheel::new(fps)),
    },
    ModeEntry {
        label: "Breath",
        identifier: "ring-breath-cycle",
        channel: Channel::Ring,
        factory: |fps| Box::new(BreathCycle::ring(fps)),
    },
];

/// Immutable mode catalog, built once at startup. Animations are created
/// lazily on activation with the configured frame rate baked in.
pub struct ModeRegistry {
    fps: u32,
}

impl ModeRegistry {
    pub fn new(fps: u32) -> ModeRegistry {
        assert!(fps > 0, "frame rate must be nonzero");
        ModeRegistry { fps }
    }

    pub fn entries() -> impl Iterator<Item = &'static ModeEntry> {
        MODES.iter()
    }

    pub fn resolve(&self, identifier: &str) -> Option<(Channel, Box<dyn Animation + Send>)> {
        MODES
            .iter()
            .find(|entry| entry.identifier == identifier)
            .map(|entry| (entry.channel, (entry.factory)(self.fps)))
    }
}

/// The activation entry point handed to the command side. An unknown
/// identifier is a logged no-op, never an error.
pub struct ModeControl {
    registry: ModeRegistry,
    ring: Arc<Mutex<ChannelState>>,
    eye: Arc<Mutex<ChannelState>>,
}

impl ModeControl {
    pub fn new(
        registry: ModeRegistry,
        ring: Arc<Mutex<ChannelState>>,
        eye: Arc<Mutex<ChannelState>>,
    ) -> ModeControl {
        ModeControl {
            registry,
            ring,
            eye,
        }
    }

    /// Activation from a channel-keyed setting (`ring_mode`/`eye_mode`). An
    /// identifier that belongs to the other channel is a configuration
    /// mistake; it is skipped with a warning instead of being routed across.
    pub fn activate_on(&self, channel: Channel, identifier: &str) {
        match ModeRegistry::entries().find(|entry| entry.identifier == identifier) {
            Some(entry) if entry.channel != channel => {
                log::warn!(
                    "Mode {} drives the {:?} channel, ignoring it for {:?}",
                    identifier,
                    entry.channel,
                    channel
                );
            }
            _ => self.activate(identifier),
        }
    }

    pub fn activate(&self, identifier: &str) {
        match self.registry.resolve(identifier) {
            Some((Channel::Ring, animation)) => {
                log::debug!("Showing LED mode {}", identifier);
                self.ring.lock().unwrap().activate(animation);
            }
            Some((Channel::Eye, animation)) => {
                log::debug!("Showing LED mode {}", identifier);
                self.eye.lock().unwrap().activate(animation);
            }
            None => log::debug!("LED mode {} not found", identifier),
        }
    }
}
