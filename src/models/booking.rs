use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::forms::{FieldErrors, FieldSpec, FormModel, Rules};
use crate::forms::validate::{parse_date, parse_money};
use crate::table::{FieldValue, Record};
use crate::utils::format_money_plain;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "confirmed" => Self::Confirmed,
            "completed" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Pending,
        }
    }
}

/// Workshop service booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Zero until the record has been stored
    pub id: i64,
    pub reference: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service: String,
    pub scheduled_for: NaiveDate,
    pub status: BookingStatus,
    /// Quoted amount in minor units
    pub amount: i64,
}

impl Booking {
    pub fn new(customer_name: &str, customer_phone: &str, service: &str, scheduled_for: NaiveDate) -> Self {
        Self {
            id: 0,
            reference: Self::generate_reference(),
            customer_name: customer_name.to_string(),
            customer_phone: customer_phone.to_string(),
            service: service.to_string(),
            scheduled_for,
            status: BookingStatus::Pending,
            amount: 0,
        }
    }

    /// Short customer-facing reference such as `BK-1F3A9C0E`
    pub fn generate_reference() -> String {
        let id = Uuid::new_v4().simple().to_string();
        format!("BK-{}", id[..8].to_uppercase())
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

impl Record for Booking {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        let text = |s: &str| (!s.is_empty()).then(|| FieldValue::from(s));
        match key {
            "id" => Some(FieldValue::Integer(self.id)),
            "reference" => text(&self.reference),
            "customer_name" => text(&self.customer_name),
            "customer_phone" => text(&self.customer_phone),
            "service" => text(&self.service),
            "scheduled_for" => Some(FieldValue::Date(self.scheduled_for)),
            "status" => Some(FieldValue::Text(self.status.to_string())),
            "amount" => Some(FieldValue::Money(self.amount)),
            _ => None,
        }
    }

    fn sortable_fields() -> &'static [&'static str] {
        &[
            "reference",
            "customer_name",
            "service",
            "scheduled_for",
            "status",
            "amount",
        ]
    }
}

const STATUS_OPTIONS: &[&str] = &["pending", "confirmed", "completed", "cancelled"];

const BOOKING_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("customer_name", "Customer"),
    FieldSpec::text("customer_phone", "Phone"),
    FieldSpec::text("service", "Service"),
    FieldSpec::text("scheduled_for", "Scheduled for"),
    FieldSpec::choice("status", "Status", STATUS_OPTIONS),
    FieldSpec::text("amount", "Amount"),
];

/// Editable string form of a [`Booking`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub service: String,
    pub scheduled_for: String,
    pub status: String,
    pub amount: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            customer_phone: String::new(),
            service: String::new(),
            scheduled_for: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            status: BookingStatus::Pending.to_string(),
            amount: "0.00".to_string(),
        }
    }
}

impl From<&Booking> for BookingForm {
    fn from(b: &Booking) -> Self {
        Self {
            customer_name: b.customer_name.clone(),
            customer_phone: b.customer_phone.clone(),
            service: b.service.clone(),
            scheduled_for: b.scheduled_for.format("%Y-%m-%d").to_string(),
            status: b.status.to_string(),
            amount: format_money_plain(b.amount),
        }
    }
}

impl BookingForm {
    /// Apply validated form values onto `base`, keeping its id and reference
    pub fn apply_to(&self, base: &Booking) -> Option<Booking> {
        Some(Booking {
            id: base.id,
            reference: base.reference.clone(),
            customer_name: self.customer_name.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            service: self.service.trim().to_string(),
            scheduled_for: parse_date(&self.scheduled_for)?,
            status: BookingStatus::from(self.status.as_str()),
            amount: parse_money(&self.amount)?,
        })
    }
}

impl FormModel for BookingForm {
    fn fields() -> &'static [FieldSpec] {
        BOOKING_FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "customer_name" => self.customer_name.clone(),
            "customer_phone" => self.customer_phone.clone(),
            "service" => self.service.clone(),
            "scheduled_for" => self.scheduled_for.clone(),
            "status" => self.status.clone(),
            "amount" => self.amount.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let slot = match key {
            "customer_name" => &mut self.customer_name,
            "customer_phone" => &mut self.customer_phone,
            "service" => &mut self.service,
            "scheduled_for" => &mut self.scheduled_for,
            "status" => &mut self.status,
            "amount" => &mut self.amount,
            _ => return,
        };
        *slot = value.to_string();
    }

    fn validate(&self) -> FieldErrors {
        Rules::new()
            .required("customer_name", "Customer", &self.customer_name)
            .required("customer_phone", "Phone", &self.customer_phone)
            .phone("customer_phone", &self.customer_phone)
            .required("service", "Service", &self.service)
            .date("scheduled_for", &self.scheduled_for)
            .money("amount", &self.amount)
            .finish()
    }
}
