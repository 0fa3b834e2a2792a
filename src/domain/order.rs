//! Order domain entity.
//! Framework-agnostic representation of a submitted project brief and its
//! payment state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Length of a generated order id.
pub const ORDER_ID_LEN: usize = 8;

/// Short, human-shareable order reference (8 uppercase alphanumerics when
/// generated). Lookups accept any string and simply miss on malformed ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn generate() -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ORDER_ID_LEN);
        Self(id.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Paid,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Fields collected from the order form. `project_type` is the raw pricing
/// key, not the display form.
#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    pub project_type: String,
    pub client_email: String,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

/// Domain entity representing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Order {
    pub order_id: OrderId,
    /// Display form, e.g. "It Solution".
    pub project_type: String,
    pub client_email: String,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub quote: i64,
    pub status: OrderStatus,
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Builds a fresh PENDING order. The quote is fixed here and never
    /// recomputed.
    pub fn new(new_order: NewOrder, quote: i64) -> Self {
        Self {
            order_id: OrderId::generate(),
            project_type: display_project_type(&new_order.project_type),
            client_email: new_order.client_email,
            description: new_order.description,
            budget: non_blank(new_order.budget),
            timeline: non_blank(new_order.timeline),
            quote,
            status: OrderStatus::Pending,
            payment_method: None,
            created_at: Utc::now(),
            paid_at: None,
        }
    }
}

/// Turns a raw project type key into its display form: underscores become
/// spaces and every word is title-cased ("it_solution" -> "It Solution").
pub fn display_project_type(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_is_letter = false;
    for ch in raw.replace('_', " ").chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
