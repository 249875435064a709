//! Business logic services for the Mitra farming assistant

pub mod advisory;
pub mod auth;
pub mod market;
pub mod weather;

pub use advisory::AdvisoryService;
pub use auth::{AuthService, ProfileStore};
pub use weather::{WeatherSelections, WeatherService};
