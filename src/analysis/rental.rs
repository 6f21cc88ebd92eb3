use crate::analysis::mortgage::{self, MortgageTerms};
use crate::models::PropertyRecord;
use serde::{Deserialize, Serialize};

/// Adjustable assumptions behind a rental cash-flow estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalAssumptions {
    pub monthly_rent: f64,
    pub vacancy_rate_percent: f64,
    pub management_fee_percent: f64,
    pub maintenance_percent: f64,
    pub monthly_insurance: f64,
}

impl RentalAssumptions {
    /// Seed the estimate from the purchase price: rent at 0.8% of price
    /// per month, insurance at 0.5% per year, both rounded to the steps
    /// the input controls use.
    pub fn seeded_from_price(price: i64) -> Self {
        let price = price as f64;
        Self {
            monthly_rent: (price * 0.008 / 100.0).round() * 100.0,
            vacancy_rate_percent: 5.0,
            management_fee_percent: 10.0,
            maintenance_percent: 5.0,
            monthly_insurance: (price * 0.005 / 12.0 / 10.0).round() * 10.0,
        }
    }
}

/// Monthly cash-flow breakdown for one property.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEstimate {
    pub effective_rental_income: f64,
    pub mortgage_payment: f64,
    pub management_fee: f64,
    pub maintenance_cost: f64,
    pub monthly_property_tax: f64,
    pub monthly_hoa_fee: f64,
    pub monthly_insurance: f64,
    pub total_expenses: f64,
    pub cash_flow: f64,
    /// Cash flow as a share of effective income, for the loss/profit gauge.
    pub cash_flow_percent: f64,
}

/// Derive monthly cash flow. Financing is held at the calculator
/// defaults: 20% down on a 30-year fixed note.
pub fn estimate(
    price: i64,
    annual_property_tax: i64,
    monthly_hoa_fee: i64,
    assumptions: &RentalAssumptions,
) -> CashFlowEstimate {
    let financing = mortgage::quote(price as f64, MortgageTerms::default());

    let effective_rental_income =
        assumptions.monthly_rent * (1.0 - assumptions.vacancy_rate_percent / 100.0);
    let management_fee = assumptions.monthly_rent * assumptions.management_fee_percent / 100.0;
    let maintenance_cost = assumptions.monthly_rent * assumptions.maintenance_percent / 100.0;
    let monthly_property_tax = annual_property_tax as f64 / 12.0;
    let monthly_hoa_fee = monthly_hoa_fee as f64;

    let total_expenses = financing.monthly_payment
        + management_fee
        + maintenance_cost
        + monthly_property_tax
        + monthly_hoa_fee
        + assumptions.monthly_insurance;

    let cash_flow = effective_rental_income - total_expenses;
    let cash_flow_percent = if effective_rental_income == 0.0 {
        0.0
    } else {
        cash_flow / effective_rental_income * 100.0
    };

    CashFlowEstimate {
        effective_rental_income,
        mortgage_payment: financing.monthly_payment,
        management_fee,
        maintenance_cost,
        monthly_property_tax,
        monthly_hoa_fee,
        monthly_insurance: assumptions.monthly_insurance,
        total_expenses,
        cash_flow,
        cash_flow_percent,
    }
}

/// Estimate for a fetched record with assumptions seeded from its price.
pub fn estimate_for_record(record: &PropertyRecord) -> CashFlowEstimate {
    estimate(
        record.price,
        record.property_tax,
        record.hoa_fee,
        &RentalAssumptions::seeded_from_price(record.price),
    )
}
