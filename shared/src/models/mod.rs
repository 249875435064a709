//! Domain models for the Mitra farming assistant

mod advisory;
mod market;
mod user;
mod weather;

pub use advisory::*;
pub use market::*;
pub use user::*;
pub use weather::*;
