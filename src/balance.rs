use crate::domain::{Asset, Debt, Event, User};
use crate::error::Result;

/// A user's full position across one event: what they fronted and what
/// they owe.
#[derive(Clone, Debug)]
pub struct PaymentSummary {
    pub user: User,
    pub assets: Vec<Asset>,
    pub debts: Vec<Debt>,
}

impl PaymentSummary {
    pub fn asset_sum(&self) -> i64 {
        self.assets.iter().map(|asset| asset.price).sum()
    }

    pub fn debt_sum(&self) -> i64 {
        self.debts.iter().map(|debt| debt.price).sum()
    }

    /// Net balance. Positive: the user is owed money. Negative: they owe.
    pub fn total(&self) -> i64 {
        self.asset_sum() - self.debt_sum()
    }
}

// One summary per roster member, in roster order. Settlement scans balances
// in exactly this order, so the ordering is part of the contract.
pub fn payment_summaries(event: &Event) -> Result<Vec<PaymentSummary>> {
    event
        .users
        .iter()
        .map(|user| {
            Ok(PaymentSummary {
                user: user.clone(),
                assets: event.assets_for_user(user)?,
                debts: event.debts_for_user(user)?,
            })
        })
        .collect()
}
