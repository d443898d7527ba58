use clap::Parser;

use numbeo_core::{FileConfig, NumbeoClient, PriceQuery, format_report, resolve_api_key};

const DEFAULT_CITY: &str = "San Francisco, CA";
const DEFAULT_COUNTRY: &str = "United States";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "numbeo",
    version,
    about = "Fetch cost-of-living prices for a city from the Numbeo API"
)]
pub struct Cli {
    /// City and country, e.g. `numbeo "San Francisco, CA" "United States"`.
    /// Defaults are used unless both are given.
    #[arg(value_name = "CITY COUNTRY")]
    pub location: Vec<String>,

    /// API key, overriding the NUMBEO_API_KEY environment variable and
    /// the config file.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let file_config = FileConfig::load()?;
        let api_key = resolve_api_key(self.api_key.as_deref(), &file_config)?;

        let (city, country) = resolve_location(&self.location);

        let client = NumbeoClient::new(api_key)?;
        let result = client
            .fetch_city_prices(&PriceQuery::new(city, country))
            .await?;

        print!("{}", format_report(&result));

        Ok(())
    }
}

/// Two or more positional args select city and country; anything less
/// falls back to the defaults. A single stray argument is ignored on
/// purpose to stay compatible with lenient invocation.
fn resolve_location(args: &[String]) -> (String, String) {
    match args {
        [city, country, ..] => (city.clone(), country.clone()),
        _ => (DEFAULT_CITY.to_string(), DEFAULT_COUNTRY.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_use_defaults() {
        let (city, country) = resolve_location(&[]);
        assert_eq!(city, DEFAULT_CITY);
        assert_eq!(country, DEFAULT_COUNTRY);
    }

    #[test]
    fn single_stray_arg_is_ignored() {
        let (city, country) = resolve_location(&["Lisbon".to_string()]);
        assert_eq!(city, DEFAULT_CITY);
        assert_eq!(country, DEFAULT_COUNTRY);
    }

    #[test]
    fn two_args_select_city_and_country() {
        let args = vec!["Lisbon".to_string(), "Portugal".to_string()];
        let (city, country) = resolve_location(&args);
        assert_eq!(city, "Lisbon");
        assert_eq!(country, "Portugal");
    }

    #[test]
    fn extra_args_beyond_two_are_ignored() {
        let args = vec![
            "Lisbon".to_string(),
            "Portugal".to_string(),
            "extra".to_string(),
        ];
        let (city, country) = resolve_location(&args);
        assert_eq!(city, "Lisbon");
        assert_eq!(country, "Portugal");
    }

    #[test]
    fn parses_api_key_flag() {
        let cli = Cli::parse_from(["numbeo", "Lisbon", "Portugal", "--api-key", "abc"]);
        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        assert_eq!(cli.location.len(), 2);
    }
}
