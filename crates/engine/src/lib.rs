//! Arena Engine library.
//!
//! Server-side code around the arena domain: storage, battle orchestration,
//! character management and the HTTP API.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the ports
//! - `infrastructure/` - Port traits and their implementations
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment-driven settings

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::AppConfig;
