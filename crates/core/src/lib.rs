pub mod error;
pub mod event;
pub mod ring;

pub use error::{GraphError, Result};
pub use event::Message;
pub use ring::SampleRing;
