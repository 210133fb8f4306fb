//! Public home endpoint payloads (status and savings)

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Open/closed status payload for the marketing site header
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GymStatus {
    pub is_open: bool,
    /// Friendly pt-BR message, e.g. "Estamos abertos! Fechamento às 23:00"
    pub message: String,
    /// "Aberto" or "Fechado"
    pub status: String,
    /// Next transition label: "Abertura" or "Fechamento"
    pub next_status: String,
    /// Next transition time, day-prefixed when it falls on another day
    pub next_time: String,
    /// Current wall-clock time, HH:MM
    pub current_time: String,
    /// pt-BR day name, e.g. "Segunda"
    pub day_name: String,
}

/// Billing cycle accepted by the savings simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

/// Annual savings simulation result
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSavings {
    /// Normalized monthly baseline, rounded to whole currency units
    pub monthly_price: i64,
    /// Discounted annualized price
    pub yearly_price: i64,
    /// Absolute amount saved against twelve monthly payments
    pub savings: i64,
    pub discount_percentage: u32,
    pub billing_cycle: BillingCycle,
}

/// Query parameters for the savings simulator
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SavingsQuery {
    /// Price as entered on the pricing page (monthly or yearly, per cycle)
    pub monthly_price: f64,
    pub billing_cycle: BillingCycle,
}
