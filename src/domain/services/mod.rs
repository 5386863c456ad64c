//! Domain Services
//!
//! Stateless steps of the export pipeline. All I/O goes through ports.

pub mod config_fetcher;
pub mod resource_enumerator;
pub mod stack_resolver;

pub use config_fetcher::{ConfigFetcher, DEFAULT_CONCURRENCY};
pub use resource_enumerator::{enumerate_functions, Enumeration};
pub use stack_resolver::{StackResolver, STACK_NAME_PROMPT};
