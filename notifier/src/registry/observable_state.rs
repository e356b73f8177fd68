use std::rc::Weak;

use common::{
    error::NotifyResult,
    subject_observer::{Observer, Subject},
};

use super::ObserverRegistry;

/// A value broadcast to observers on demand.
///
/// Changing the value never notifies by itself: callers decide when to call
/// [`Subject::notify`].
pub struct ObservableState<T> {
    state: T,
    observers: ObserverRegistry<Self>,
}

impl<T: Default> Default for ObservableState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> ObservableState<T> {
    pub fn new(state: T) -> Self {
        ObservableState {
            state,
            observers: ObserverRegistry::new(),
        }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn set_state(&mut self, state: T) {
        self.state = state;
    }

    /// Number of attached observers still alive.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T> Subject for ObservableState<T> {
    fn attach<O>(&mut self, observer: Weak<O>) -> NotifyResult
    where
        O: Observer<Self> + 'static,
    {
        self.observers.attach(observer)
    }

    fn detach<O>(&mut self, observer: Weak<O>)
    where
        O: Observer<Self> + 'static,
    {
        self.observers.detach(observer)
    }

    fn notify(&self) -> NotifyResult {
        self.observers.notify(self)
    }
}
