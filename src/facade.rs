//! Facade over the four order subsystems.
//!
//! Each subsystem sits behind its own one-method trait so tests can swap in
//! mocks. `OrderFacade::new()` wires up the stub implementations.

use std::io::Write;
use tracing::{debug, info};

use crate::error::Result;

/* ============================================================
 * Collaborators
 * ============================================================
 */

pub trait InventoryService {
    fn is_in_stock(&self, product_id: &str) -> bool;
}

pub trait PaymentService {
    fn make_payment(&self, amount: f64) -> bool;
}

pub trait ShippingService {
    fn ship_product(&self, product_id: &str);
}

pub trait NotificationService {
    fn send_order_confirmation(&self);
}

/// Every non-empty product id is in stock.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubInventory;

impl InventoryService for StubInventory {
    fn is_in_stock(&self, product_id: &str) -> bool {
        let in_stock = !product_id.is_empty();
        info!(product_id, in_stock, "checking inventory");
        in_stock
    }
}

/// Accepts any finite, strictly positive amount.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubPayment;

impl PaymentService for StubPayment {
    fn make_payment(&self, amount: f64) -> bool {
        let accepted = amount.is_finite() && amount > 0.0;
        info!(amount, accepted, "processing payment");
        accepted
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StubShipping;

impl ShippingService for StubShipping {
    fn ship_product(&self, product_id: &str) {
        info!(product_id, "shipping product");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StubNotifier;

impl NotificationService for StubNotifier {
    fn send_order_confirmation(&self) {
        info!("sending order confirmation");
    }
}

/* ============================================================
 * Outcome
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    OutOfStock,
    PaymentFailed,
    Placed,
}

impl OrderOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            OrderOutcome::OutOfStock => "Product out of stock",
            OrderOutcome::PaymentFailed => "Payment failed",
            OrderOutcome::Placed => "Order placed successfully 🎉",
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, OrderOutcome::Placed)
    }
}

/* ============================================================
 * Facade
 * ============================================================
 */

pub struct OrderFacade<I, P, S, N> {
    inventory: I,
    payment: P,
    shipping: S,
    notifier: N,
}

impl OrderFacade<StubInventory, StubPayment, StubShipping, StubNotifier> {
    pub fn new() -> Self {
        Self::with_services(StubInventory, StubPayment, StubShipping, StubNotifier)
    }
}

impl Default for OrderFacade<StubInventory, StubPayment, StubShipping, StubNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, P, S, N> OrderFacade<I, P, S, N>
where
    I: InventoryService,
    P: PaymentService,
    S: ShippingService,
    N: NotificationService,
{
    pub fn with_services(inventory: I, payment: P, shipping: S, notifier: N) -> Self {
        OrderFacade {
            inventory,
            payment,
            shipping,
            notifier,
        }
    }

    /// Stock check, payment, shipping, confirmation. Stops at the first
    /// failed check and writes exactly one status line to `out`.
    pub fn place_order<W: Write + ?Sized>(
        &self,
        out: &mut W,
        product_id: &str,
        amount: f64,
    ) -> Result<OrderOutcome> {
        let outcome = self.run_steps(product_id, amount);
        debug!(product_id, amount, ?outcome, "order finished");
        writeln!(out, "{}", outcome.message())?;
        Ok(outcome)
    }

    fn run_steps(&self, product_id: &str, amount: f64) -> OrderOutcome {
        if !self.inventory.is_in_stock(product_id) {
            return OrderOutcome::OutOfStock;
        }
        if !self.payment.make_payment(amount) {
            return OrderOutcome::PaymentFailed;
        }

        self.shipping.ship_product(product_id);
        self.notifier.send_order_confirmation();
        OrderOutcome::Placed
    }
}
