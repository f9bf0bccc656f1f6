// Site endpoints
//
// Listing and lookup against `api/sites`, plus the radius search, which
// the registry does not offer server-side: it is served by composing the
// unfiltered listing with the local proximity filter.

use tracing::debug;

use crate::client::DeimsClient;
use crate::error::Error;
use crate::geo;
use crate::id::normalize_site_id;
use crate::models::{SiteListing, SiteRecord};

impl DeimsClient {
    /// List site records, optionally restricted to one network.
    ///
    /// `GET api/sites`, with `network={suffix}` when a network identifier
    /// is given (accepted in any form understood by
    /// [`normalize_site_id`]). `verified_only` keeps only records whose
    /// verification flag is set; the registry does not support this
    /// filter server-side, so it is applied locally after retrieval.
    pub async fn list_sites(
        &self,
        network: Option<&str>,
        verified_only: bool,
    ) -> Result<Vec<SiteListing>, Error> {
        let mut sites: Vec<SiteListing> = match network {
            Some(network) => {
                let suffix = normalize_site_id(network)?;
                debug!(network = suffix, "listing sites by network");
                self.get_with_params("api/sites", &[("network", suffix.to_owned())])
                    .await?
            }
            None => {
                debug!("listing all sites");
                self.get("api/sites").await?
            }
        };

        if verified_only {
            sites.retain(|site| site.verified);
        }
        Ok(sites)
    }

    /// Fetch the full record of one site.
    ///
    /// `GET api/sites/{suffix}`. The input is normalized first, so full
    /// URLs, compact forms, and bare identifiers are all accepted. A
    /// registry 404 maps to [`Error::SiteNotFound`] carrying the
    /// normalized identifier.
    pub async fn get_site_by_id(&self, site_id: &str) -> Result<SiteRecord, Error> {
        let suffix = normalize_site_id(site_id)?;
        debug!(id = suffix, "fetching site record");

        self.get(&format!("api/sites/{suffix}"))
            .await
            .map_err(|e| match e {
                Error::Api { status: 404, .. } => Error::SiteNotFound {
                    id: suffix.to_owned(),
                },
                other => other,
            })
    }

    /// Fetch all sites and keep those within `distance_m` metres of
    /// `(lat, lon)`.
    ///
    /// Convenience composition of [`Self::list_sites`] (unfiltered) and
    /// [`geo::sites_within_radius`]; results keep the registry's listing
    /// order.
    pub async fn sites_within_radius(
        &self,
        lat: f64,
        lon: f64,
        distance_m: f64,
    ) -> Result<Vec<SiteListing>, Error> {
        let candidates = self.list_sites(None, false).await?;
        Ok(geo::sites_within_radius(lat, lon, distance_m, candidates))
    }
}
