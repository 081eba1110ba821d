use crate::animations::Animation;
use crate::color::{self, Color};

pub const RING_PIXELS: usize = 7;
pub const EYE_PIXELS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Ring,
    Eye,
}

impl Channel {
    pub fn pixel_count(&self) -> usize {
        match self {
            Channel::Ring => RING_PIXELS,
            Channel::Eye => EYE_PIXELS,
        }
    }
}

/// Holds the active animation for one channel. Idle channels render all-off.
/// An exhausted animation is dropped and the channel falls back to idle; it
/// is never restarted implicitly.
pub struct ChannelState {
    channel: Channel,
    animation: Option<Box<dyn Animation + Send>>,
}

impl ChannelState {
    pub fn new(channel: Channel) -> ChannelState {
        ChannelState {
            channel,
            animation: None,
        }
    }

    /// Hard cut: any running animation is replaced without draining.
    pub fn activate(&mut self, animation: Box<dyn Animation + Send>) {
        self.animation = Some(animation);
    }

    /// Always yields exactly `pixel_count` colors, in every state.
    pub fn next_frame(&mut self) -> Vec<Color> {
        match self.animation.as_mut().and_then(|a| a.next_frame()) {
            Some(frame) => {
                debug_assert_eq!(frame.len(), self.channel.pixel_count());
                frame
            }
            None => {
                self.animation = None;
                vec![color::black(); self.channel.pixel_count()]
            }
        }
    }
}
