pub mod config;
pub mod constants;
pub mod keymap;
pub mod particles;
pub mod patterns;
pub mod pointer;
pub mod profile;
pub mod scenes;
pub mod scheduler;
pub mod session;

pub use config::*;
pub use profile::*;
pub use scenes::*;
pub use session::*;
