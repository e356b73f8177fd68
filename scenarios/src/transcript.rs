use std::{cell::RefCell, rc::Rc};

use log::debug;

/// Lines written by scenario observers, shared by every observer of a run.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, line: impl Into<String>) {
        let line = line.into();
        debug!("{line}");
        self.lines.borrow_mut().push(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}
