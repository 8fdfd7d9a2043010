//! Pages
//!
//! Top-level page components for each route.

pub mod analytics;
pub mod data_hub;
pub mod features;
pub mod home;
pub mod landing;
pub mod profile;
pub mod research;
pub mod settings;

pub use analytics::Analytics;
pub use data_hub::DataHub;
pub use features::Features;
pub use home::Home;
pub use landing::Landing;
pub use profile::Profile;
pub use research::Research;
pub use settings::Settings;
