// GeoServer WFS endpoints
//
// Site geometry (boundaries, station coordinates) lives in a GeoServer
// instance beside the registry API, queried one site at a time with a
// CQL filter on the full DEIMS.ID URL. Responses are requested as
// GeoJSON and features from multiple sites are concatenated in input
// order.

use tracing::debug;

use crate::client::DeimsClient;
use crate::error::Error;
use crate::id::normalize_site_id;
use crate::models::{Feature, FeatureCollection, ID_PREFIX};

const WFS_PATH: &str = "geoserver/deims/ows";

impl DeimsClient {
    /// Fetch boundary polygons for one or more sites.
    ///
    /// WFS layer `deims:deims_sites_boundaries`. Sites without a
    /// published boundary simply contribute no features.
    pub async fn get_site_boundaries(&self, site_ids: &[&str]) -> Result<FeatureCollection, Error> {
        self.get_features("deims:deims_sites_boundaries", site_ids)
            .await
    }

    /// Fetch station coordinate points for one or more sites.
    ///
    /// WFS layer `deims:deims_qa_sites`.
    pub async fn get_site_coordinates(
        &self,
        site_ids: &[&str],
    ) -> Result<FeatureCollection, Error> {
        self.get_features("deims:deims_qa_sites", site_ids).await
    }

    /// Query one WFS layer per site id and merge the features.
    async fn get_features(
        &self,
        layer: &str,
        site_ids: &[&str],
    ) -> Result<FeatureCollection, Error> {
        let mut features: Vec<Feature> = Vec::new();

        for site_id in site_ids {
            let suffix = normalize_site_id(site_id)?;
            debug!(layer, id = suffix, "fetching WFS features");

            let collection: FeatureCollection = self
                .get_with_params(
                    WFS_PATH,
                    &[
                        ("service", "WFS".to_owned()),
                        ("version", "2.0.0".to_owned()),
                        ("request", "GetFeature".to_owned()),
                        ("typeName", layer.to_owned()),
                        ("srsName", "EPSG:4326".to_owned()),
                        ("CQL_FILTER", format!("deimsid='{ID_PREFIX}{suffix}'")),
                        ("outputFormat", "application/json".to_owned()),
                    ],
                )
                .await?;
            features.extend(collection.features);
        }

        let total = u64::try_from(features.len()).ok();
        Ok(FeatureCollection {
            total_features: total,
            features,
        })
    }
}
