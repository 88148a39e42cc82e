pub mod orchestration;

pub use orchestration::{run_release_check, CheckArgs, ReleaseReport};
