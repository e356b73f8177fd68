pub mod channel;
pub mod registry;

pub use channel::{EventChannel, EventHub, SlotId};
pub use common::{
    error::{NotifyError, NotifyResult, ResponseError, ResponseResult},
    subject_observer::{Observer, ObserverRef, Subject},
};
pub use registry::{ObservableState, ObserverRegistry};
