//! Service Endpoint Catalogue
//!
//! Endpoints of the deployed CargoDham service. The guide only documents them;
//! nothing here issues requests.

/// HTTP method of a documented endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A documented endpoint, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
}

impl Endpoint {
    const fn new(method: HttpMethod, path: &'static str, description: &'static str) -> Self {
        Self {
            method,
            path,
            description,
        }
    }

    /// Absolute URL by plain concatenation (no slash normalisation).
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }
}

/// Endpoints listed in the console report.
pub const CONSOLE_ENDPOINTS: [Endpoint; 6] = [
    Endpoint::new(HttpMethod::Get, "/", "API info"),
    Endpoint::new(HttpMethod::Get, "/health", "Health check"),
    Endpoint::new(HttpMethod::Post, "/api/login", "Login"),
    Endpoint::new(HttpMethod::Get, "/api/track/AWB_NUMBER", "Track order"),
    Endpoint::new(HttpMethod::Get, "/api/wallet", "Wallet balance"),
    Endpoint::new(HttpMethod::Get, "/api/orders", "Get orders"),
];

/// Full endpoint list written to the summary document.
pub const SUMMARY_ENDPOINTS: [Endpoint; 9] = [
    Endpoint::new(HttpMethod::Get, "/", "API information"),
    Endpoint::new(HttpMethod::Get, "/health", "Health check"),
    Endpoint::new(HttpMethod::Post, "/api/login", "Login to CargoDham"),
    Endpoint::new(HttpMethod::Get, "/api/track/:awb", "Track shipment"),
    Endpoint::new(HttpMethod::Post, "/api/rate", "Calculate rates"),
    Endpoint::new(HttpMethod::Post, "/api/book", "Book order"),
    Endpoint::new(HttpMethod::Get, "/api/wallet", "Wallet balance"),
    Endpoint::new(HttpMethod::Get, "/api/orders", "Get orders"),
    Endpoint::new(HttpMethod::Post, "/api/cancel", "Cancel order"),
];

/// Sample AWB number used in the quick-test commands.
pub const SAMPLE_AWB: &str = "20056414613650";
