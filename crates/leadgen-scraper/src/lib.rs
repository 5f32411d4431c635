pub mod client;
pub mod collector;
pub mod error;
pub mod geo;
pub mod harvest;
pub mod pacing;
pub mod types;

pub use client::PlacesClient;
pub use collector::LeadCollector;
pub use error::CollectError;
pub use geo::resolve_center;
pub use harvest::EmailHarvester;
pub use pacing::Pacing;
