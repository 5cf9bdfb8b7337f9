#[macro_use]
extern crate log;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate async_trait;

/// Client side
pub mod client;
mod error;
/// Remote code emitted for each operation
pub mod protocol;
mod utils;

#[cfg(test)]
mod mock;
