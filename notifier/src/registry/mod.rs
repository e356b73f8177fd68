mod observable_state;
mod observer_registry;

pub use observable_state::ObservableState;
pub use observer_registry::ObserverRegistry;
