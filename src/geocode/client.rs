//! Remote transport seam for the geocoder
//!
//! The geocoder only sees these two traits, so tests can drive it with
//! canned responses and no network.

use log::debug;

/// A response from the remote geocoding service
pub trait RemoteResponse {
    /// Whether the request failed
    fn error(&self) -> bool;
    /// The response body text
    fn content(&self) -> String;
}

/// A client able to perform a GET request against the geocoding service
pub trait RemoteClient {
    /// Performs a GET request and returns the response
    fn get(&self, url: &str) -> Box<dyn RemoteResponse>;
}

/// Blocking HTTP client backed by reqwest
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

/// Response wrapper carrying either a body or a transport failure
struct HttpResponse {
    body: Option<String>,
}

impl HttpClient {
    /// Creates a new blocking HTTP client
    pub fn new() -> Self {
        HttpClient {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl RemoteClient for HttpClient {
    fn get(&self, url: &str) -> Box<dyn RemoteResponse> {
        debug!("GET {}", url);

        let body = self.client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .ok();

        Box::new(HttpResponse { body })
    }
}

impl RemoteResponse for HttpResponse {
    fn error(&self) -> bool {
        self.body.is_none()
    }

    fn content(&self) -> String {
        self.body.clone().unwrap_or_default()
    }
}
