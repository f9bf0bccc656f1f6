// Network endpoints

use tracing::debug;

use crate::client::DeimsClient;
use crate::error::Error;
use crate::models::NetworkListing;

impl DeimsClient {
    /// List all networks known to the registry.
    ///
    /// `GET api/networks`. Network identifiers use the same scheme as
    /// site identifiers and can be passed straight to
    /// [`Self::list_sites`](DeimsClient::list_sites).
    pub async fn list_networks(&self) -> Result<Vec<NetworkListing>, Error> {
        debug!("listing networks");
        self.get("api/networks").await
    }
}
