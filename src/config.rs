use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{PatternError, Result};
use crate::template::PaymentMethod;

/// What the demo binary runs. Every field falls back to its default, so an
/// empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub verbose: bool,
    pub color: bool,
    pub color_keys: Vec<String>,
    pub orders: Vec<OrderRequest>,
    pub payments: Vec<PaymentRequest>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderRequest {
    pub product_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentRequest {
    pub method: String,
    pub amount: f64,
}

impl PaymentRequest {
    pub fn payment_method(&self) -> Result<PaymentMethod> {
        self.method.parse()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            verbose: false,
            color: true,
            color_keys: ["red", "Green", "BLUE", "purple"]
                .into_iter()
                .map(String::from)
                .collect(),
            orders: vec![
                OrderRequest {
                    product_id: "LAPTOP-15".into(),
                    amount: 72_000.0,
                },
                OrderRequest {
                    product_id: "".into(),
                    amount: 499.0,
                },
                OrderRequest {
                    product_id: "HEADPHONES-3".into(),
                    amount: 0.0,
                },
            ],
            payments: vec![
                PaymentRequest {
                    method: PaymentMethod::CreditCard.to_string(),
                    amount: 1500.0,
                },
                PaymentRequest {
                    method: PaymentMethod::Upi.to_string(),
                    amount: 500.0,
                },
            ],
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        // Reject bad payment methods at load time, not halfway through a run.
        for payment in &config.payments {
            payment.payment_method()?;
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| PatternError::config_read(path, err))?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded demo config");
        Ok(config)
    }
}
