use std::rc::Weak;

use common::{
    error::{NotifyError, NotifyResult},
    subject_observer::{Observer, ObserverRef},
};
use log::{debug, trace, warn};

/// Ordered list of non-owning observer handles, meant to be embedded in a subject.
pub struct ObserverRegistry<S> {
    observers: Vec<ObserverRef<S>>,
}

impl<S> Default for ObserverRegistry<S> {
    fn default() -> Self {
        Self { observers: vec![] }
    }
}

impl<S> ObserverRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer`, dropping entries whose observer no longer exists.
    pub fn attach<O>(&mut self, observer: Weak<O>) -> NotifyResult
    where
        O: Observer<S> + 'static,
    {
        if observer.strong_count() == 0 {
            return Err(NotifyError::InvalidObserver);
        }
        let observer: ObserverRef<S> = observer;
        let pruned = self.prune();
        self.observers.push(observer);
        debug!(
            "Observer attached, {pruned} dropped entries pruned, {} registered",
            self.observers.len()
        );
        Ok(())
    }

    /// Removes every entry of `observer`. Other entries are left untouched.
    pub fn detach<O>(&mut self, observer: Weak<O>)
    where
        O: Observer<S> + 'static,
    {
        let observer: ObserverRef<S> = observer;
        let before = self.observers.len();
        self.observers.retain(|obs| !Weak::ptr_eq(obs, &observer));
        debug!(
            "Observer detached, {} entries removed, {} registered",
            before - self.observers.len(),
            self.observers.len()
        );
    }

    pub fn notify(&self, source: &S) -> NotifyResult {
        for (position, handle) in self.observers.iter().enumerate() {
            let Some(observer) = handle.upgrade() else {
                trace!("Skipping dropped observer at position {position}");
                continue;
            };
            trace!("Notifying observer at position {position}");
            observer.update(source).map_err(|source| {
                warn!("Notification halted at position {position}: {source}");
                NotifyError::Halted { position, source }
            })?;
        }
        Ok(())
    }

    /// Number of attached observers still alive.
    pub fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|obs| obs.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&mut self) -> usize {
        let before = self.observers.len();
        self.observers.retain(|obs| obs.strong_count() > 0);
        before - self.observers.len()
    }
}
