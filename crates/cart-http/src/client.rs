//! # HTTP Inventory Client
//!
//! `InventoryLookup` implementation over the catalog's REST API:
//! `GET /stock/{id}` and `GET /products/{id}`. Responses are plain JSON
//! records; prices arrive as decimal amounts and are converted to cents
//! at the boundary.

use crate::config::InventoryApiConfig;
use async_trait::async_trait;
use cart_core::{CartError, CartResult, InventoryLookup, Price, Product, ProductId, Stock};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Inventory source backed by an HTTP catalog API
pub struct HttpInventory {
    config: InventoryApiConfig,
    client: Client,
}

impl HttpInventory {
    /// Create a new HTTP inventory client
    pub fn new(config: InventoryApiConfig) -> CartResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CartError::Configuration(format!("HTTP client build failed: {e}")))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> CartResult<Self> {
        Self::new(InventoryApiConfig::from_env()?)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        not_found: CartError,
    ) -> CartResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CartError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(not_found),
            status if !status.is_success() => Err(CartError::Network(format!(
                "inventory API returned {status} for {url}"
            ))),
            _ => response
                .json::<T>()
                .await
                .map_err(|e| CartError::Serialization(e.to_string())),
        }
    }
}

/// Wire form of a stock record
#[derive(Debug, Deserialize)]
struct StockDto {
    id: ProductId,
    amount: u32,
}

/// Wire form of a product record
#[derive(Debug, Deserialize)]
struct ProductDto {
    id: ProductId,
    title: String,
    /// Decimal price (e.g. `179.9`)
    price: f64,
    #[serde(default)]
    image: Option<String>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            price: Price::new(dto.price),
            image_url: dto.image,
        }
    }
}

#[async_trait]
impl InventoryLookup for HttpInventory {
    #[instrument(skip(self))]
    async fn stock(&self, product_id: ProductId) -> CartResult<Stock> {
        let url = self.config.stock_url(product_id);
        let dto: StockDto = self
            .get_json(&url, CartError::StockNotFound { product_id })
            .await?;

        debug!(product_id = dto.id, amount = dto.amount, "stock fetched");
        Ok(Stock::new(dto.id, dto.amount))
    }

    #[instrument(skip(self))]
    async fn product(&self, product_id: ProductId) -> CartResult<Product> {
        let url = self.config.product_url(product_id);
        let dto: ProductDto = self
            .get_json(&url, CartError::ProductNotFound { product_id })
            .await?;

        debug!(product_id = dto.id, title = %dto.title, "product fetched");
        Ok(dto.into())
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
