pub mod mortgage;
pub mod rental;

pub use mortgage::{monthly_payment, quote, MortgageQuote, MortgageTerms};
pub use rental::{estimate, estimate_for_record, CashFlowEstimate, RentalAssumptions};
