use serde::{Deserialize, Serialize};

/// Input parameters for a city prices lookup.
///
/// Both fields must be non-empty after trimming whitespace; the client
/// rejects anything else before touching the network.
#[derive(Debug, Clone)]
pub struct PriceQuery {
    pub city: String,
    pub country: String,
}

impl PriceQuery {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self { city: city.into(), country: country.into() }
    }
}

/// A single price entry from the Numbeo API.
///
/// Every field is optional: upstream data may omit any of them, and
/// "no data" is not the same as zero. Downstream rendering relies on
/// that distinction to print "N/A" instead of a bogus numeric value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_points: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_price: Option<f64>,
}

/// Full payload of the `city_prices` endpoint.
///
/// `prices` keeps the API response order; consumers group consecutive
/// items that share a `category` into sections without re-sorting.
/// An absent `prices` array decodes to an empty vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityPricesResult {
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<PriceItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors_12months: Option<i64>,

    /// 1-12 when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_last_update: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_last_update: Option<u32>,
}
