use std::{
    any::Any,
    fmt,
    rc::{Rc, Weak},
};

use common::error::{NotifyError, NotifyResult, ResponseResult};
use log::{debug, trace, warn};

type Callback = Box<dyn Fn() -> ResponseResult>;

/// Handle returned by a registration, used to unregister it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct Slot {
    id: SlotId,
    label: String,
    callback: Callback,
    target: Option<Weak<dyn Any>>,
}

impl Slot {
    fn is_live(&self) -> bool {
        self.target
            .as_ref()
            .map_or(true, |target| target.strong_count() > 0)
    }
}

/// Named list of zero-argument callbacks, fired in registration order.
pub struct EventChannel {
    name: String,
    slots: Vec<Slot>,
    next_id: u64,
}

impl EventChannel {
    pub fn new(name: impl Into<String>) -> Self {
        EventChannel {
            name: name.into(),
            slots: vec![],
            next_id: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn register<F>(&mut self, callback: F) -> SlotId
    where
        F: Fn() -> ResponseResult + 'static,
    {
        let label = format!("{}#{}", self.name, self.next_id);
        self.register_named(label, callback)
    }

    pub fn register_named<F>(&mut self, label: impl Into<String>, callback: F) -> SlotId
    where
        F: Fn() -> ResponseResult + 'static,
    {
        self.push_slot(label.into(), Box::new(callback), None)
    }

    /// Registers `method` bound to `target` without keeping `target` alive.
    ///
    /// Once `target` is dropped the slot is skipped, then removed by the next
    /// registration change.
    pub fn register_method<T>(
        &mut self,
        label: impl Into<String>,
        target: &Rc<T>,
        method: fn(&T) -> ResponseResult,
    ) -> SlotId
    where
        T: 'static,
    {
        let weak_target = Rc::downgrade(target);
        let liveness: Weak<dyn Any> = weak_target.clone();
        let label = label.into();
        let trace_label = label.clone();
        let callback = move || match weak_target.upgrade() {
            Some(target) => method(&target),
            None => {
                trace!("Skipping {trace_label}, its target was dropped");
                Ok(())
            }
        };
        self.push_slot(label, Box::new(callback), Some(liveness))
    }

    /// Returns whether a slot was removed. Unknown ids are ignored.
    pub fn unregister(&mut self, id: SlotId) -> bool {
        self.prune();
        let before = self.slots.len();
        self.slots.retain(|slot| slot.id != id);
        let removed = before != self.slots.len();
        debug!(
            "Channel {} unregister slot {id}: {}",
            self.name,
            if removed { "removed" } else { "unknown" }
        );
        removed
    }

    fn push_slot(
        &mut self,
        label: String,
        callback: Callback,
        target: Option<Weak<dyn Any>>,
    ) -> SlotId {
        let pruned = self.prune();
        let id = SlotId(self.next_id);
        self.next_id += 1;
        debug!(
            "Channel {} registered {label} as slot {id}, {pruned} dropped slots pruned",
            self.name
        );
        self.slots.push(Slot {
            id,
            label,
            callback,
            target,
        });
        id
    }

    fn prune(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(Slot::is_live);
        before - self.slots.len()
    }

    pub fn fire(&self) -> NotifyResult {
        if self.is_empty() {
            trace!("Channel {} fired without subscribers", self.name);
            return Ok(());
        }
        for (position, slot) in self.slots.iter().enumerate() {
            if !slot.is_live() {
                trace!("Channel {} skipping dropped {}", self.name, slot.label);
                continue;
            }
            trace!("Channel {} invoking {}", self.name, slot.label);
            (slot.callback)().map_err(|source| {
                warn!(
                    "Channel {} halted at {} (position {position}): {source}",
                    self.name, slot.label
                );
                NotifyError::Halted { position, source }
            })?;
        }
        Ok(())
    }

    /// Labels of the live slots, in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter(|slot| slot.is_live())
            .map(|slot| slot.label.as_str())
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_live()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
