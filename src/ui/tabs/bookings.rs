//! Bookings tab

use ratatui::{layout::Constraint, widgets::Cell};

use crate::models::{Booking, BookingForm};
use crate::table::SortOrder;
use crate::ui::theme::Theme;
use crate::ui::widgets::table::ColumnDef;
use crate::utils::{format_money, truncate};

use super::records::{RecordsTab, TabRecord};

pub type BookingsTab = RecordsTab<Booking>;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("reference", "Reference", Constraint::Length(12)),
    ColumnDef::new("customer_name", "Customer", Constraint::Min(18)),
    ColumnDef::new("service", "Service", Constraint::Length(20)),
    ColumnDef::new("scheduled_for", "Date", Constraint::Length(10)),
    ColumnDef::new("status", "Status", Constraint::Length(10)),
    ColumnDef::new("amount", "Amount", Constraint::Length(13)),
];

impl TabRecord for Booking {
    const NOUN: &'static str = "Booking";
    const DEFAULT_ORDER_BY: &'static str = "scheduled_for";
    // Latest bookings first
    const DEFAULT_ORDER: SortOrder = SortOrder::Descending;

    type Form = BookingForm;

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        let status = self.status.to_string();
        vec![
            Cell::from(self.reference.clone()).style(theme.accent()),
            Cell::from(truncate(&self.customer_name, 32).to_string()),
            Cell::from(truncate(&self.service, 20).to_string()),
            Cell::from(self.scheduled_for.format("%Y-%m-%d").to_string()),
            Cell::from(status.clone()).style(theme.status_style(&status)),
            Cell::from(format!("{:>12}", format_money(self.amount))),
        ]
    }

    fn label(&self) -> String {
        self.reference.clone()
    }

    fn blank_form() -> BookingForm {
        BookingForm::default()
    }

    fn to_form(&self) -> BookingForm {
        BookingForm::from(self)
    }

    fn from_form(form: &BookingForm, base: Option<&Self>) -> Option<Self> {
        match base {
            Some(base) => form.apply_to(base),
            None => {
                let date = crate::forms::validate::parse_date(&form.scheduled_for)?;
                form.apply_to(&Booking::new("", "", "", date))
            }
        }
    }
}
