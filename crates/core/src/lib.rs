pub mod error;
pub mod event;
pub mod state;

pub use error::{MonitorError, Result};
pub use event::Message;
pub use state::{HostFacts, ProcessInfo, SystemSnapshot};
