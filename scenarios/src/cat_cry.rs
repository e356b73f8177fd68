use std::rc::Rc;

use notifier::{EventChannel, NotifyResult, ResponseResult};

use crate::Transcript;

pub struct Cat {
    cried: EventChannel,
    transcript: Transcript,
}

impl Cat {
    pub fn new(transcript: Transcript) -> Self {
        Cat {
            cried: EventChannel::new("cat-cried"),
            transcript,
        }
    }

    /// Channel fired each time the cat cries.
    pub fn cried(&mut self) -> &mut EventChannel {
        &mut self.cried
    }

    pub fn cry(&self) -> NotifyResult {
        self.transcript.write("Cat Cry..");
        self.cried.fire()
    }
}

pub struct Mouse {
    name: String,
    transcript: Transcript,
}

impl Mouse {
    pub fn new(name: impl Into<String>, transcript: Transcript) -> Self {
        Mouse {
            name: name.into(),
            transcript,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run_away(&self) -> ResponseResult {
        self.transcript
            .write(format!("{} starts running away", self.name));
        Ok(())
    }
}

pub struct Master {
    transcript: Transcript,
}

impl Master {
    pub fn new(transcript: Transcript) -> Self {
        Master { transcript }
    }

    pub fn wake_up(&self) -> ResponseResult {
        self.transcript.write("Master wakes up");
        Ok(())
    }
}

/// The baby of the house, reacting twice to the same cry.
pub struct LittleMaster {
    transcript: Transcript,
}

impl LittleMaster {
    pub fn new(transcript: Transcript) -> Self {
        LittleMaster { transcript }
    }

    pub fn wake_up(&self) -> ResponseResult {
        self.transcript.write("Baby wakes up....");
        Ok(())
    }

    pub fn start_crying(&self) -> ResponseResult {
        self.transcript.write("Baby starts crying.....");
        Ok(())
    }
}

/// Wires the mice, the master and the baby to a cat, then makes it cry.
pub fn run(mouse_names: &[String], transcript: &Transcript) -> NotifyResult {
    let mut cat = Cat::new(transcript.clone());

    let mice = mouse_names
        .iter()
        .map(|name| Rc::new(Mouse::new(name.as_str(), transcript.clone())))
        .collect::<Vec<_>>();
    for mouse in &mice {
        let label = format!("{}::run_away", mouse.name());
        cat.cried().register_method(label, mouse, Mouse::run_away);
    }

    let master = Rc::new(Master::new(transcript.clone()));
    cat.cried()
        .register_method("Master::wake_up", &master, Master::wake_up);

    let little_master = Rc::new(LittleMaster::new(transcript.clone()));
    cat.cried()
        .register_method("Master2::wake_up", &little_master, LittleMaster::wake_up);
    cat.cried().register_method(
        "Master2::start_crying",
        &little_master,
        LittleMaster::start_crying,
    );

    cat.cry()
}
