//! # Design Patterns in Rust
//!
//! Three small, independent pattern demos:
//!
//! ## Abstract Factory
//! - `ColorFactory` maps case-insensitive keys to `Color` variants
//! - Unknown or missing keys give `None`, never an error
//!
//! ## Facade
//! - `OrderFacade` hides inventory, payment, shipping and notification
//!   behind one `place_order` call
//! - Collaborators are traits, so tests inject mocks
//!
//! ## Template Method
//! - `process_payment` fixes the validate -> debit -> receipt order
//! - `CreditCardPayment` and `UpiPayment` supply the steps
//!
//! Every demo writes to an injected `std::io::Write` sink instead of stdout.
//!
//! Run the whole sequence with: `cargo run --bin patterns-demo`

pub mod config;
pub mod demo;
pub mod error;
pub mod facade;
pub mod factory;
pub mod logger;
pub mod template;

pub use config::{DemoConfig, OrderRequest, PaymentRequest};
pub use demo::run_demo;
pub use error::{PatternError, Result};
pub use facade::{
    InventoryService, NotificationService, OrderFacade, OrderOutcome, PaymentService,
    ShippingService,
};
pub use factory::{AbstractFactory, Color, ColorFactory, Shape};
pub use template::{process_payment, CreditCardPayment, PaymentMethod, PaymentSteps, UpiPayment};
