use serde::Serialize;
use tracing::debug;

use crate::balance::{payment_summaries, PaymentSummary};
use crate::domain::{Event, User};
use crate::error::{Result, SplitError};

/// One directed transfer: `payer` sends `price` to `payee`.
#[derive(Clone, Debug, Serialize)]
pub struct Exchange {
    pub price: i64,
    pub payee: User,
    pub payer: User,
}

/// Working balance for one user during a settlement run. Built fresh per
/// run, mutated in place as exchanges resolve, discarded afterwards.
#[derive(Clone, Debug)]
pub struct TmpSummary {
    pub user: User,
    pub total: i64,
}

impl TmpSummary {
    pub fn new(user: User, total: i64) -> Self {
        Self { user, total }
    }

    pub fn from_summary(summary: &PaymentSummary) -> Self {
        Self {
            user: summary.user.clone(),
            total: summary.total(),
        }
    }

    pub fn done(&self) -> bool {
        self.total == 0
    }
}

/// Nets the balance at `first` against the one at `second`, zeroing at least
/// one of them, and returns the transfer that makes it so.
///
/// Defined only for one strictly positive and one strictly negative total;
/// anything else fails with `InvalidResolve` and leaves both entries
/// untouched.
pub fn resolve(balances: &mut [TmpSummary], first: usize, second: usize) -> Result<Exchange> {
    let a = balances[first].total;
    let b = balances[second].total;
    if a.signum() * b.signum() >= 0 {
        return Err(SplitError::InvalidResolve {
            first: a,
            second: b,
        });
    }

    let overlap = a.abs().min(b.abs());
    if a + b == 0 {
        balances[first].total = 0;
        balances[second].total = 0;
    } else if a.abs() < b.abs() {
        balances[first].total = 0;
        balances[second].total = a + b;
    } else {
        balances[first].total = a + b;
        balances[second].total = 0;
    }

    // Creditor and debtor are read off the updated totals. On a tie (exact
    // cancellation) both picks fall back to the first operand.
    let payee = if balances[first].total >= balances[second].total {
        first
    } else {
        second
    };
    let payer = if balances[first].total <= balances[second].total {
        first
    } else {
        second
    };
    Ok(Exchange {
        price: overlap,
        payee: balances[payee].user.clone(),
        payer: balances[payer].user.clone(),
    })
}

/// Greedy netting loop: repeatedly pairs the first creditor with the first
/// debtor, in input order, until fewer than two unsettled balances remain or
/// every remaining one has the same sign (rounding residue).
///
/// Returns the exchanges in resolution order together with the final
/// balances, so a caller can inspect any leftover residue; nothing here
/// renormalizes or reports it. At most `n - 1` exchanges for `n` inputs.
pub fn settle(mut balances: Vec<TmpSummary>) -> Result<(Vec<Exchange>, Vec<TmpSummary>)> {
    let mut exchanges = Vec::new();
    loop {
        let unsettled: Vec<usize> = balances
            .iter()
            .enumerate()
            .filter(|(_, summary)| !summary.done())
            .map(|(index, _)| index)
            .collect();
        if unsettled.len() < 2 {
            break;
        }

        let pos = unsettled.iter().copied().find(|&i| balances[i].total > 0);
        let neg = unsettled.iter().copied().find(|&i| balances[i].total < 0);
        let (pos, neg) = match (pos, neg) {
            (Some(pos), Some(neg)) => (pos, neg),
            // Everything left carries the same sign: nothing to pair.
            _ => break,
        };

        let exchange = resolve(&mut balances, pos, neg)?;
        debug!(
            price = exchange.price,
            payer = %exchange.payer.id,
            payee = %exchange.payee.id,
            "resolved exchange"
        );
        exchanges.push(exchange);
    }
    Ok((exchanges, balances))
}

/// Full pipeline for one event: aggregate per-user balances in roster
/// order, reduce each to its net total, then settle.
pub fn settle_event(event: &Event) -> Result<(Vec<Exchange>, Vec<TmpSummary>)> {
    let summaries = payment_summaries(event)?;
    settle(summaries.iter().map(TmpSummary::from_summary).collect())
}
