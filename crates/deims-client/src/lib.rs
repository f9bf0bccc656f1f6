// deims-client: Async Rust client for the DEIMS-SDR site registry API

pub mod client;
pub mod error;
pub mod geo;
pub mod id;
pub mod models;
pub mod transport;

mod geoserver;
mod networks;
mod sites;

pub use client::{DEFAULT_BASE_URL, DeimsClient};
pub use error::Error;
pub use geo::{haversine_distance_m, sites_within_radius};
pub use id::normalize_site_id;
pub use models::{
    DeimsId, Feature, FeatureCollection, NetworkListing, Point, SiteListing, SiteRecord,
};
pub use transport::TransportConfig;
