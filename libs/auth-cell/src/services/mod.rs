pub mod auth;
pub mod forms;

pub use auth::AuthService;
pub use forms::*;
