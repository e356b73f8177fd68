use common::error::NotifyResult;
use log::trace;

use super::EventChannel;

/// Several independently firable channels owned by one subject.
#[derive(Default)]
pub struct EventHub {
    channels: Vec<EventChannel>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&self, name: &str) -> Option<&EventChannel> {
        self.channels.iter().find(|channel| channel.name() == name)
    }

    /// Returns the channel called `name`, creating it when missing.
    pub fn channel_mut(&mut self, name: &str) -> &mut EventChannel {
        let index = match self.channels.iter().position(|c| c.name() == name) {
            Some(index) => index,
            None => {
                self.channels.push(EventChannel::new(name));
                self.channels.len() - 1
            }
        };
        &mut self.channels[index]
    }

    pub fn fire(&self, name: &str) -> NotifyResult {
        match self.channel(name) {
            Some(channel) => channel.fire(),
            None => {
                trace!("No channel named {name}, nothing to fire");
                Ok(())
            }
        }
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|channel| channel.name())
    }
}

#[cfg(test)]
mod tests {
    use common::error::{NotifyError, ResponseError};
    use common_test::Journal;

    use super::EventHub;

    #[test]
    fn test_channel_mut_should_create_channels_once() {
        // Given
        let mut hub = EventHub::new();

        // When
        hub.channel_mut("cry");
        hub.channel_mut("purr");
        hub.channel_mut("cry");

        // Then
        assert_eq!(vec!["cry", "purr"], hub.channel_names().collect::<Vec<_>>());
    }

    #[test]
    fn test_fire_should_only_reach_the_named_channel() {
        // Given
        let journal = Journal::new();
        let mut hub = EventHub::new();
        for name in ["cry", "purr"] {
            let journal = journal.clone();
            hub.channel_mut(name).register(move || {
                journal.record(name);
                Ok(())
            });
        }

        // When
        hub.fire("purr").unwrap();

        // Then
        assert_eq!(vec!["purr"], journal.entries());
    }

    #[test]
    fn test_fire_should_ignore_unknown_channel() {
        // Given
        let hub = EventHub::new();

        // When
        let result = hub.fire("unknown");

        // Then
        assert_eq!(Ok(()), result);
        assert!(hub.channel("unknown").is_none(), "Should not create channels");
    }

    #[test]
    fn test_fire_should_propagate_channel_failure() {
        // Given
        let mut hub = EventHub::new();
        hub.channel_mut("cry")
            .register(|| Err(ResponseError::Failed("boom".to_string())));

        // When
        let result = hub.fire("cry");

        // Then
        assert!(matches!(
            result,
            Err(NotifyError::Halted { position: 0, .. })
        ));
    }
}
