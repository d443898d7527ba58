use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::model::{CityPricesResult, PriceQuery};

const BASE_URL: &str = "https://www.numbeo.com/api";
const CITY_PRICES_ENDPOINT: &str = "city_prices";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Numbeo city prices API.
///
/// Holds the API key and a `reqwest::Client`; the underlying connection
/// pool is shared across calls and released when the client is dropped.
/// All methods take `&self`, so a single instance can serve multiple
/// sequential calls.
#[derive(Debug, Clone)]
pub struct NumbeoClient {
    api_key: String,
    http: Client,
}

impl NumbeoClient {
    /// Creates a client with 30 second connect and request timeouts.
    pub fn new(api_key: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(FetchError::InvalidArgument(
                "API key must not be empty".to_string(),
            ));
        }

        let http = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self { api_key, http })
    }

    /// Fetches cost-of-living prices for a city/country pair.
    ///
    /// Validates the query before any network activity, then issues a
    /// single GET to the `city_prices` endpoint. Non-2xx statuses come
    /// back as [`FetchError::Api`] with the raw body captured; a 2xx
    /// response that does not decode as the expected schema becomes
    /// [`FetchError::MalformedResponse`]. Missing optional fields in the
    /// payload stay unset rather than defaulting to zero.
    pub async fn fetch_city_prices(
        &self,
        query: &PriceQuery,
    ) -> Result<CityPricesResult, FetchError> {
        validate_query(query)?;

        let url = format!("{BASE_URL}/{CITY_PRICES_ENDPOINT}");
        let request = self
            .http
            .get(&url)
            .query(&[
                ("city", query.city.as_str()),
                ("country", query.country.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .header(header::ACCEPT, "application/json")
            .build()
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        info!("fetching prices for {} in {}", query.city, query.country);
        debug!("request URL: {}", redact(request.url().as_str(), &self.api_key));

        let res = self
            .http
            .execute(request)
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;
        debug!("response received: {} bytes", body.len());

        let result = decode_response(status, &body)?;
        info!("successfully fetched {} price items", result.prices.len());

        Ok(result)
    }
}

fn validate_query(query: &PriceQuery) -> Result<(), FetchError> {
    if query.city.trim().is_empty() {
        return Err(FetchError::InvalidArgument(
            "city must not be empty".to_string(),
        ));
    }
    if query.country.trim().is_empty() {
        return Err(FetchError::InvalidArgument(
            "country must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Maps a status/body pair to the decoded payload or the matching error.
fn decode_response(status: StatusCode, body: &str) -> Result<CityPricesResult, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Api {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))
}

/// Replaces the API key in a URL string before it hits any trace output.
fn redact(url: &str, api_key: &str) -> String {
    url.replace(api_key, "***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_api_key() {
        let err = NumbeoClient::new("   ").unwrap_err();
        assert!(matches!(err, FetchError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn empty_city_fails_before_any_network_call() {
        let client = NumbeoClient::new("KEY").expect("client");
        let query = PriceQuery::new("", "United States");

        let err = client.fetch_city_prices(&query).await.unwrap_err();

        let FetchError::InvalidArgument(msg) = err else {
            panic!("expected InvalidArgument, got {err:?}");
        };
        assert!(msg.contains("city"));
    }

    #[tokio::test]
    async fn whitespace_country_fails_before_any_network_call() {
        let client = NumbeoClient::new("KEY").expect("client");
        let query = PriceQuery::new("Lisbon", "  \t");

        let err = client.fetch_city_prices(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidArgument(_)));
    }

    #[test]
    fn non_2xx_status_becomes_api_error_with_body() {
        let err =
            decode_response(StatusCode::FORBIDDEN, r#"{"error":"invalid key"}"#).unwrap_err();

        let FetchError::Api { status, body } = err else {
            panic!("expected Api error");
        };
        assert_eq!(status, 403);
        assert_eq!(body, r#"{"error":"invalid key"}"#);
    }

    #[test]
    fn non_json_error_body_is_still_captured() {
        let err = decode_response(StatusCode::BAD_GATEWAY, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Api { status: 502, .. }));
    }

    #[test]
    fn unparseable_2xx_body_is_malformed() {
        let err = decode_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn wrong_top_level_shape_is_malformed() {
        let err = decode_response(StatusCode::OK, "[1, 2, 3]").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn decodes_successful_response() {
        let body = r#"{
            "name": "Berlin",
            "country": "Germany",
            "currency": "EUR",
            "prices": [
                {"item_name": "Cappuccino (regular)", "category": "Restaurants", "average_price": 3.4}
            ]
        }"#;

        let result = decode_response(StatusCode::OK, body).expect("decode");

        assert_eq!(result.city_name.as_deref(), Some("Berlin"));
        assert_eq!(result.prices.len(), 1);
        assert_eq!(result.prices[0].average_price, Some(3.4));
        assert!(result.prices[0].lowest_price.is_none());
    }

    #[test]
    fn redact_hides_the_key() {
        let url = "https://www.numbeo.com/api/city_prices?city=Oslo&api_key=SECRET123";
        let redacted = redact(url, "SECRET123");

        assert!(!redacted.contains("SECRET123"));
        assert!(redacted.ends_with("api_key=***"));
    }
}
