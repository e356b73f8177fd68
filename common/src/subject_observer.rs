use std::rc::Weak;

use crate::error::{NotifyResult, ResponseResult};

/// Non-owning handle to an observer of `S`.
pub type ObserverRef<S> = Weak<dyn Observer<S>>;

/// Reacts to notifications sent by a subject of type `S`.
///
/// Observers pull whatever they need from `source`; the subject never pushes
/// a payload.
pub trait Observer<S: ?Sized> {
    fn update(&self, source: &S) -> ResponseResult;
}

pub trait Subject: Sized {
    /// Appends `observer`. The same observer may be attached several times.
    fn attach<O>(&mut self, observer: Weak<O>) -> NotifyResult
    where
        O: Observer<Self> + 'static;

    /// Removes every entry pointing to `observer`. Unknown observers are ignored.
    fn detach<O>(&mut self, observer: Weak<O>)
    where
        O: Observer<Self> + 'static;

    /// Calls every attached observer in attachment order, stopping at the first failure.
    fn notify(&self) -> NotifyResult;
}
