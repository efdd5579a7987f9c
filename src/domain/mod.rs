//! Pure salary, tax and recommendation logic.

pub mod allocation;
pub mod catalog;
pub mod money;
pub mod tax;

pub use allocation::{allocate, Allocation, InvestmentCapacity};
pub use catalog::{
    recommend, InvestmentOption, Recommendation, RiskLevel, SplitAmount, SplitGuidance,
    TimeHorizon,
};
pub use money::{convert_code, is_accepted_amount, to_inr, Conversion, Currency, Money, MAX_AMOUNT};
pub use tax::{assess, compute_tax, BracketSlice, TaxBracket};
