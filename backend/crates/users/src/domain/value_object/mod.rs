pub mod email;
pub mod user_password;

// Re-exports
pub use email::Email;
pub use user_password::{RawPassword, UserPassword};
