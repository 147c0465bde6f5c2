pub mod color_token;
pub mod priority;

pub use color_token::{ColorToken, DisplayColor};
pub use priority::Priority;
