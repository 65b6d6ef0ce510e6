pub mod booking;
pub mod wizard;

pub use booking::*;
pub use wizard::*;
