use serde::Deserialize;
use strum::{Display, EnumIter};

pub mod cat_cry;
pub mod state_broadcast;
mod transcript;

pub use transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Scenario {
    /// One stateful subject, observers attached to a list.
    StateBroadcast,
    /// One subject firing a single event to several callbacks.
    CatCry,
}
