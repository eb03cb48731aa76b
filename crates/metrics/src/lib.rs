pub mod sampler;
pub mod units;
pub mod window;

pub use sampler::{CpuSampler, TickSnapshot};
pub use window::RollingWindow;
