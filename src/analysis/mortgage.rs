use serde::{Deserialize, Serialize};

/// Fixed-rate financing terms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageTerms {
    pub down_payment_percent: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

impl Default for MortgageTerms {
    fn default() -> Self {
        Self {
            down_payment_percent: 20.0,
            annual_rate_percent: 6.5,
            term_years: 30,
        }
    }
}

/// Derived financing figures for one property price.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageQuote {
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_payment: f64,
}

/// Standard amortization formula: `M = P·r·(1+r)^n / ((1+r)^n − 1)` with
/// `r` the monthly rate and `n` the number of monthly payments.
/// Degenerates to `P/n` exactly when the rate is zero.
pub fn monthly_payment(loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    let payments = f64::from(term_years * 12);
    if payments == 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return loan_amount / payments;
    }

    let growth = (1.0 + monthly_rate).powf(payments);
    loan_amount * monthly_rate * growth / (growth - 1.0)
}

pub fn quote(property_price: f64, terms: MortgageTerms) -> MortgageQuote {
    let down_payment = property_price * terms.down_payment_percent / 100.0;
    let loan_amount = property_price - down_payment;
    MortgageQuote {
        down_payment,
        loan_amount,
        monthly_payment: monthly_payment(loan_amount, terms.annual_rate_percent, terms.term_years),
    }
}
