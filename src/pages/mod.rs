//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod evolution;
pub mod products;
pub mod settings;

pub use dashboard::Dashboard;
pub use evolution::Evolution;
pub use products::Products;
pub use settings::Settings;
