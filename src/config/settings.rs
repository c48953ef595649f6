use std::env;

use rust_decimal::Decimal;

/// Planning constants used for projected revenue. These are configuration,
/// not a market feed: yield in tons per hectare, price in currency per ton.
#[derive(Debug, Clone)]
pub struct MarketAssumptions {
    pub estimated_yield: Decimal,
    pub market_price: Decimal,
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            estimated_yield: Decimal::from(5),
            market_price: Decimal::from(12_000),
        }
    }
}

impl MarketAssumptions {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let estimated_yield = env::var("ESTIMATED_YIELD_TONS_PER_HECTARE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.estimated_yield);

        let market_price = env::var("MARKET_PRICE_PER_TON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.market_price);

        Self {
            estimated_yield,
            market_price,
        }
    }
}

/// Application settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub bind_addr: String,
    pub market: MarketAssumptions,
}

impl AppSettings {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://agripartner.db?mode=rwc".to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self {
            database_url,
            bind_addr,
            market: MarketAssumptions::from_env(),
        }
    }
}
