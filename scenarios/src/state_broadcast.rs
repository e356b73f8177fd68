use std::{cell::RefCell, rc::Rc};

use notifier::{NotifyResult, ObservableState, Observer, ResponseResult, Subject};

use crate::Transcript;

pub type StringSubject = ObservableState<String>;

/// Copies the subject state on every notification and reports it.
pub struct StateWatcher {
    name: String,
    observed_state: RefCell<Option<String>>,
    transcript: Transcript,
}

impl StateWatcher {
    pub fn new(name: impl Into<String>, transcript: Transcript) -> Self {
        StateWatcher {
            name: name.into(),
            observed_state: RefCell::new(None),
            transcript,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn observed_state(&self) -> Option<String> {
        self.observed_state.borrow().clone()
    }
}

impl Observer<StringSubject> for StateWatcher {
    fn update(&self, source: &StringSubject) -> ResponseResult {
        let state = source.state().clone();
        self.transcript
            .write(format!("Observer {}'s new state is {}", self.name, state));
        *self.observed_state.borrow_mut() = Some(state);
        Ok(())
    }
}

/// Attaches one watcher per name, sets `state` and notifies once.
pub fn run(names: &[String], state: &str, transcript: &Transcript) -> NotifyResult {
    let mut subject = StringSubject::default();
    let watchers = names
        .iter()
        .map(|name| Rc::new(StateWatcher::new(name.as_str(), transcript.clone())))
        .collect::<Vec<_>>();
    for watcher in &watchers {
        subject.attach(Rc::downgrade(watcher))?;
    }

    subject.set_state(state.to_string());
    subject.notify()?;

    for watcher in &watchers {
        subject.detach(Rc::downgrade(watcher));
    }
    Ok(())
}
