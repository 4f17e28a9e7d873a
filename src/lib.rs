pub mod config;
pub mod types;
pub mod utils;

pub use types::{Stringer, User};
pub use utils::add;
