pub mod models;
mod podcasts;

pub use models::*;
pub use podcasts::*;
