pub mod admin;
pub mod application;
pub mod avatar;
pub mod forms;
pub mod role;
pub mod time_text;
pub mod user;

pub use admin::*;
pub use application::*;
pub use avatar::fallback_color;
pub use role::Role;
pub use user::*;
