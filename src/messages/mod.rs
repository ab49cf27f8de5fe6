//! Localised message bundles.
//!
//! Message texts are addressed by key; keys ending in `_N` take `N`
//! positional arguments written as `{0}`, `{1}`, ...

mod bundle;
mod catalog;
pub mod keys;

pub use bundle::{substitute, MessageBundle, MessageContainer};
pub use catalog::{MessageCatalog, MessagesError};

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
