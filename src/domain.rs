use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitError};

/// User identity. Two users are the same person iff their ids match,
/// whatever their display names say.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
        }
    }
}

/// Amount credited to a payment's payer: always the full price.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Asset {
    pub price: i64,
    pub owner: User,
}

/// One payee's share of a payment, after the equal split.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Debt {
    pub price: i64,
    pub debtor: User,
}

/// One payer fronting `price` on behalf of all `payees` (which may include
/// the payer). `price` is a positive amount in the smallest currency unit,
/// and `payees` must be non-empty.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Payment {
    pub id: String,
    pub price: i64,
    pub payer: User,
    pub payees: Vec<User>,
}

impl Payment {
    // Per-payee share by integer floor division. The `price % payees`
    // remainder is attributed to nobody and silently drops off the debt side.
    pub fn debt(&self, debtor: &User) -> Debt {
        let share = self.price / self.payees.len() as i64;
        Debt {
            price: share,
            debtor: debtor.clone(),
        }
    }

    pub fn asset(&self, owner: &User) -> Asset {
        Asset {
            price: self.price,
            owner: owner.clone(),
        }
    }

    pub fn involves_payee(&self, id: &UserId) -> bool {
        self.payees.iter().any(|payee| payee.id == *id)
    }
}

/// One group event: the user roster plus the payment history.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Event {
    pub id: String,
    pub users: Vec<User>,
    pub payments: Vec<Payment>,
}

impl Event {
    pub fn contains(&self, id: &UserId) -> bool {
        self.users.iter().any(|user| user.id == *id)
    }

    /// Every share `u` owes across the event, one `Debt` per payment that
    /// lists them as a payee.
    pub fn debts_for_user(&self, u: &User) -> Result<Vec<Debt>> {
        if !self.contains(&u.id) {
            return Err(SplitError::UserNotFound(u.id.clone()));
        }
        Ok(self
            .payments
            .iter()
            .filter(|payment| payment.involves_payee(&u.id))
            .map(|payment| payment.debt(u))
            .collect())
    }

    /// Everything `u` fronted across the event, one `Asset` per payment
    /// they paid for.
    pub fn assets_for_user(&self, u: &User) -> Result<Vec<Asset>> {
        if !self.contains(&u.id) {
            return Err(SplitError::UserNotFound(u.id.clone()));
        }
        Ok(self
            .payments
            .iter()
            .filter(|payment| payment.payer.id == u.id)
            .map(|payment| payment.asset(u))
            .collect())
    }
}
