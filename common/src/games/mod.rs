mod notifier;
mod session_rng;

pub mod connect_four;

pub use notifier::{Controls, Notification, Notifier};
pub use session_rng::SessionRng;

#[cfg(test)]
pub(crate) use notifier::testing;
