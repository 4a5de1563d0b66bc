mod controls;
mod playback;
mod seed;
mod session;

pub use controls::Controls;
pub use playback::{FramePlan, PlaybackState, Scheduler, Wake};
pub use seed::SeedAccumulator;
pub use session::Session;
