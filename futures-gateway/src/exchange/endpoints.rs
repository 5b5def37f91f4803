//! Binance USDT-M futures endpoints for production and testnet.

/// Endpoint configuration for the futures API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuturesEndpoints {
    /// REST API base URL
    pub rest_url: String,
}

impl FuturesEndpoints {
    /// Endpoints for the selected environment.
    pub fn for_environment(testnet: bool) -> Self {
        if testnet {
            Self::testnet()
        } else {
            Self::production()
        }
    }

    /// Production endpoints.
    pub fn production() -> Self {
        Self {
            rest_url: "https://fapi.binance.com".to_string(),
        }
    }

    /// Testnet endpoints (simulated funds).
    pub fn testnet() -> Self {
        Self {
            rest_url: "https://testnet.binancefuture.com".to_string(),
        }
    }
}

/// REST API endpoint paths.
pub mod paths {
    /// Test connectivity
    pub const PING: &str = "/fapi/v1/ping";

    /// New order / cancel order
    pub const ORDER: &str = "/fapi/v1/order";

    /// Open orders
    pub const OPEN_ORDERS: &str = "/fapi/v1/openOrders";

    /// Balance listing (v2)
    pub const BALANCE: &str = "/fapi/v2/balance";

    /// Position risk (v2)
    pub const POSITION_RISK: &str = "/fapi/v2/positionRisk";
}
