//! Payload shapes for the request/response plumbing around the core.

use serde::{Deserialize, Serialize};

use crate::balance::PaymentSummary;
use crate::domain::{Event, Payment, User, UserId};
use crate::error::{Result, SplitError};
use crate::exchange::Exchange;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserJson {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PaymentJson {
    pub id: String,
    pub price: i64,
    pub payer_id: String,
    pub payee_ids: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventJson {
    pub id: String,
    pub users: Vec<UserJson>,
    pub payments: Vec<PaymentJson>,
}

impl EventJson {
    /// Resolves payment payer/payee ids against the roster. Any id without a
    /// roster member behind it fails the whole conversion.
    pub fn into_event(self) -> Result<Event> {
        let users: Vec<User> = self
            .users
            .into_iter()
            .map(|user| User::new(user.id, user.name))
            .collect();
        let payments = self
            .payments
            .into_iter()
            .map(|payment| {
                let payer = lookup(&users, &UserId::new(payment.payer_id))?;
                let payees = payment
                    .payee_ids
                    .into_iter()
                    .map(|id| lookup(&users, &UserId::new(id)))
                    .collect::<Result<Vec<User>>>()?;
                Ok(Payment {
                    id: payment.id,
                    price: payment.price,
                    payer,
                    payees,
                })
            })
            .collect::<Result<Vec<Payment>>>()?;
        Ok(Event {
            id: self.id,
            users,
            payments,
        })
    }
}

fn lookup(users: &[User], id: &UserId) -> Result<User> {
    users
        .iter()
        .find(|user| user.id == *id)
        .cloned()
        .ok_or_else(|| SplitError::UserNotFound(id.clone()))
}

/// Per-user aggregation output, reduced to the net total.
#[derive(Clone, Debug, Serialize)]
pub struct SummaryJson {
    pub user_id: String,
    pub total: i64,
}

impl From<&PaymentSummary> for SummaryJson {
    fn from(summary: &PaymentSummary) -> Self {
        Self {
            user_id: summary.user.id.as_str().to_owned(),
            total: summary.total(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ExchangeJson {
    pub price: i64,
    pub payee_id: String,
    pub payer_id: String,
}

impl From<&Exchange> for ExchangeJson {
    fn from(exchange: &Exchange) -> Self {
        Self {
            price: exchange.price,
            payee_id: exchange.payee.id.as_str().to_owned(),
            payer_id: exchange.payer.id.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::payment_summaries;
    use crate::exchange::settle_event;

    fn raw_event() -> EventJson {
        serde_json::from_value(serde_json::json!({
            "id": "trip",
            "users": [
                { "id": "x", "name": "Xavi" },
                { "id": "y", "name": "Yuki" },
                { "id": "z", "name": "Zoe" }
            ],
            "payments": [
                { "id": "dinner", "price": 100, "payer_id": "x", "payee_ids": ["x", "y", "z"] }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn event_payloads_resolve_ids_against_the_roster() {
        let event = raw_event().into_event().unwrap();
        assert_eq!(event.payments[0].payer.name, "Xavi");
        assert_eq!(event.payments[0].payees.len(), 3);
    }

    #[test]
    fn unknown_payment_ids_fail_the_conversion() {
        let mut payload = raw_event();
        payload.payments[0].payer_id = "ghost".to_string();
        assert_eq!(
            payload.into_event().unwrap_err(),
            SplitError::UserNotFound(UserId::new("ghost"))
        );

        let mut payload = raw_event();
        payload.payments[0].payee_ids.push("ghost".to_string());
        assert_eq!(
            payload.into_event().unwrap_err(),
            SplitError::UserNotFound(UserId::new("ghost"))
        );
    }

    #[test]
    fn summaries_reduce_to_net_totals() {
        let event = raw_event().into_event().unwrap();
        let summaries = payment_summaries(&event).unwrap();
        let payload: Vec<SummaryJson> = summaries.iter().map(SummaryJson::from).collect();
        let totals: Vec<i64> = payload.iter().map(|s| s.total).collect();
        assert_eq!(totals, vec![67, -33, -33]);
    }

    #[test]
    fn settlement_output_serializes_as_id_pairs() {
        let event = raw_event().into_event().unwrap();
        let (exchanges, _) = settle_event(&event).unwrap();
        let payload: Vec<ExchangeJson> = exchanges.iter().map(ExchangeJson::from).collect();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "price": 33, "payee_id": "x", "payer_id": "y" },
                { "price": 33, "payee_id": "x", "payer_id": "z" }
            ])
        );
    }
}
