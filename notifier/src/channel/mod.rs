mod event_channel;
mod event_hub;

pub use event_channel::{EventChannel, SlotId};
pub use event_hub::EventHub;
