//! Record types for DEIMS-SDR API responses.
//!
//! The listing endpoints return flat projections; the detail endpoint nests
//! the bulk of the payload under `attributes`. Fields the crate does not
//! model explicitly are retained in a flattened catch-all rather than
//! silently dropped.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Canonical prefix of a full DEIMS.ID URL.
pub const ID_PREFIX: &str = "https://deims.org/";

// ── Identifier ───────────────────────────────────────────────────────

/// A DEIMS.ID as transmitted by the API: `{ "prefix": ..., "suffix": ... }`.
///
/// The suffix is the bare identifier used in lookup paths; `Display`
/// renders the full URL form. Identifiers are opaque case-sensitive
/// strings and are deliberately not parsed as UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeimsId {
    #[serde(default)]
    pub prefix: Option<String>,
    pub suffix: String,
}

impl DeimsId {
    /// Construct from a bare suffix, using the canonical prefix.
    pub fn from_suffix(suffix: impl Into<String>) -> Self {
        Self {
            prefix: Some(ID_PREFIX.to_owned()),
            suffix: suffix.into(),
        }
    }
}

impl fmt::Display for DeimsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix.as_deref().unwrap_or(ID_PREFIX);
        write!(f, "{prefix}{}", self.suffix)
    }
}

// ── Coordinates ──────────────────────────────────────────────────────

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    /// Parse a WKT point string as transmitted by the API, e.g.
    /// `POINT (14.4414 47.8417)`. WKT order is longitude first.
    ///
    /// Returns `None` for anything that does not parse; a site with an
    /// unparseable coordinate is treated as having no coordinate.
    pub fn from_wkt(s: &str) -> Option<Self> {
        let inner = s
            .trim()
            .strip_prefix("POINT")?
            .trim()
            .strip_prefix('(')?
            .strip_suffix(')')?;
        let mut parts = inner.split_whitespace();
        let lon: f64 = parts.next()?.parse().ok()?;
        let lat: f64 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { lat, lon })
    }
}

/// Deserialize an optional WKT string into an optional [`Point`].
///
/// Lenient on purpose: absent, null, or malformed coordinate strings all
/// map to `None` so that one bad record cannot fail a whole listing.
fn point_from_wkt<'de, D>(deserializer: D) -> Result<Option<Point>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Point::from_wkt))
}

// ── Site listing ─────────────────────────────────────────────────────

/// Site projection returned by `GET api/sites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteListing {
    pub id: DeimsId,
    /// Display name, e.g. `"Zöbelboden - Austria"`.
    pub title: String,
    /// Station coordinate; `None` when the record carries none.
    #[serde(default, deserialize_with = "point_from_wkt")]
    pub coordinates: Option<Point>,
    /// Last-modified timestamp of the record.
    #[serde(default)]
    pub changed: Option<DateTime<FixedOffset>>,
    /// Network the record was listed under, when listing by network.
    #[serde(default)]
    pub network: Option<String>,
    /// Whether the site is a verified member of that network.
    /// Absent outside network listings; defaults to `false`.
    #[serde(default)]
    pub verified: bool,
}

// ── Site detail ──────────────────────────────────────────────────────

/// Full site record returned by `GET api/sites/{suffix}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub id: DeimsId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub changed: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub attributes: SiteAttributes,
}

impl SiteRecord {
    /// The station coordinate from the geographic attribute group.
    pub fn coordinates(&self) -> Option<Point> {
        self.attributes.geographic.as_ref()?.coordinates
    }
}

/// Attribute groups of a site detail record. Groups the crate does not
/// model stay available through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteAttributes {
    #[serde(default)]
    pub general: Option<GeneralInfo>,
    #[serde(default)]
    pub geographic: Option<GeographicInfo>,
    #[serde(default)]
    pub affiliation: Option<AffiliationInfo>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// `attributes.general` — descriptive metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralInfo {
    #[serde(rename = "abstract", default)]
    pub site_abstract: Option<String>,
    #[serde(default)]
    pub keywords: Vec<Label>,
    #[serde(default)]
    pub status: Option<Label>,
}

/// `attributes.geographic` — location metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeographicInfo {
    #[serde(default, deserialize_with = "point_from_wkt")]
    pub coordinates: Option<Point>,
    #[serde(default)]
    pub country: Vec<String>,
    #[serde(default)]
    pub elevation: Option<Elevation>,
}

/// `attributes.affiliation` — network memberships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffiliationInfo {
    #[serde(default)]
    pub networks: Vec<NetworkAffiliation>,
}

/// One network membership of a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAffiliation {
    pub network: NetworkRef,
    #[serde(default)]
    pub verified: bool,
}

/// Reference to a network from an affiliation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRef {
    pub name: String,
    pub id: DeimsId,
}

/// A labelled vocabulary term (keyword, status, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub label: String,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Elevation range in metres above sea level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub avg: Option<f64>,
}

// ── Networks ─────────────────────────────────────────────────────────

/// Network projection returned by `GET api/networks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkListing {
    pub id: DeimsId,
    pub title: String,
}

// ── GeoJSON (geoserver endpoints) ────────────────────────────────────

/// Minimal GeoJSON feature collection returned by the WFS endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCollection {
    #[serde(default)]
    pub total_features: Option<u64>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One GeoJSON feature. Geometry shapes vary (points, polygons,
/// multipolygons), so the geometry is kept as opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub geometry: Value,
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}
