use std::path::PathBuf;

use thiserror::Error;

/// Failures produced by [`crate::NumbeoClient`].
///
/// Every variant is terminal for a single run: nothing is retried, the
/// caller reports the error and exits. `Api` and `MalformedResponse`
/// carry enough of the response to be logged without re-issuing the
/// request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Bad input to the client; never reaches the network.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Connectivity problem: DNS, connect, timeout, or a failed body read.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// A 2xx response whose body is not JSON or does not match the
    /// expected schema.
    #[error("malformed API response: {0}")]
    MalformedResponse(String),
}

/// Failures while resolving configuration, before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "API key not configured.\n\
         Set your Numbeo API key in one of the following ways:\n\
         1. Pass it on the command line: --api-key YOUR_KEY\n\
         2. Set the NUMBEO_API_KEY environment variable\n\
         3. Add it to numbeo.toml:\n\
            [api]\n\
            key = \"YOUR_KEY\""
    )]
    MissingApiKey,

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
