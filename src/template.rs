//! Template method for payments.
//!
//! The step order lives in [`process_payment`], a free function, so no
//! payment type can reorder or skip a step. Variants only fill in the
//! steps themselves.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::debug;

use crate::error::{PatternError, Result};

pub trait PaymentSteps {
    fn validate(&self, out: &mut dyn Write) -> io::Result<()>;

    fn debit(&self, out: &mut dyn Write, amount: f64) -> io::Result<()>;

    fn send_receipt(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Sending payment receipt")
    }
}

/// Validate, debit, receipt. Each step runs exactly once, whatever the amount.
pub fn process_payment<P, W>(processor: &P, out: &mut W, amount: f64) -> Result<()>
where
    P: PaymentSteps + ?Sized,
    W: Write,
{
    debug!(amount, "validate");
    processor.validate(out)?;
    debug!(amount, "debit");
    processor.debit(out, amount)?;
    debug!(amount, "receipt");
    processor.send_receipt(out)?;
    Ok(())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPayment;

impl PaymentSteps for CreditCardPayment {
    fn validate(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Validating credit card details")
    }

    fn debit(&self, out: &mut dyn Write, amount: f64) -> io::Result<()> {
        writeln!(out, "Debiting ₹{amount} from credit card")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpiPayment;

impl PaymentSteps for UpiPayment {
    fn validate(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Validating UPI ID")
    }

    fn debit(&self, out: &mut dyn Write, amount: f64) -> io::Result<()> {
        writeln!(out, "Debiting ₹{amount} via UPI")
    }
}

/* ============================================================
 * Payment method selection
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    Upi,
}

impl PaymentMethod {
    pub fn processor(&self) -> &'static dyn PaymentSteps {
        match self {
            PaymentMethod::CreditCard => &CreditCardPayment,
            PaymentMethod::Upi => &UpiPayment,
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "credit_card" | "creditcard" | "card" => Ok(PaymentMethod::CreditCard),
            "upi" => Ok(PaymentMethod::Upi),
            _ => Err(PatternError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CreditCard => f.write_str("credit_card"),
            PaymentMethod::Upi => f.write_str("upi"),
        }
    }
}
