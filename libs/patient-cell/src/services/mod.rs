pub mod dashboard;
pub mod sessions;

pub use dashboard::*;
pub use sessions::*;
