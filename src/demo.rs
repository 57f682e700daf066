use std::io::Write;
use tracing::info;

use crate::config::DemoConfig;
use crate::error::Result;
use crate::facade::OrderFacade;
use crate::factory::{AbstractFactory, ColorFactory};
use crate::template::process_payment;

pub const SEPARATOR: &str = "------";

/// Runs the three demos back to back. `header` renders each section title,
/// which lets the binary style them without the core emitting ANSI codes.
pub fn run_demo<W, H>(config: &DemoConfig, out: &mut W, header: H) -> Result<()>
where
    W: Write,
    H: Fn(&str) -> String,
{
    writeln!(out, "{}", header("Abstract factory"))?;
    run_factory(config, out)?;

    writeln!(out, "\n{}", header("Facade"))?;
    run_facade(config, out)?;

    writeln!(out, "\n{}", header("Template method"))?;
    run_template(config, out)?;

    out.flush()?;
    Ok(())
}

fn run_factory<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let factory = ColorFactory::new();
    for key in &config.color_keys {
        match factory.get_color(Some(key)) {
            Some(color) => writeln!(out, "{key} -> {color}")?,
            None => writeln!(out, "{key} -> (none)")?,
        }
    }
    Ok(())
}

fn run_facade<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let facade = OrderFacade::new();
    let mut placed = 0;
    for order in &config.orders {
        write!(out, "[{} @ {}] ", order.product_id, order.amount)?;
        if facade.place_order(out, &order.product_id, order.amount)?.is_placed() {
            placed += 1;
        }
    }
    info!(placed, total = config.orders.len(), "orders processed");
    Ok(())
}

fn run_template<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    for (i, payment) in config.payments.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{SEPARATOR}")?;
        }
        let method = payment.payment_method()?;
        process_payment(method.processor(), out, payment.amount)?;
    }
    Ok(())
}
