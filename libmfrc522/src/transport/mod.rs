// mfrc522-rs/libmfrc522/src/transport/mod.rs

pub mod mock;
/// MFRC522 over `embedded-hal` SPI.
pub mod spi;
/// The [`Transport`] trait.
pub mod traits;

pub use mock::{MockTransport, Reply, VirtualCard};
pub use spi::{NoPin, SpiTransport};
pub use traits::Transport;
