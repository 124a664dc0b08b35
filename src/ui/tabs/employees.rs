//! Employees tab

use ratatui::{layout::Constraint, widgets::Cell};

use crate::models::{Employee, EmployeeForm};
use crate::ui::theme::Theme;
use crate::ui::widgets::table::ColumnDef;
use crate::utils::{format_money, truncate};

use super::records::{RecordsTab, TabRecord};

pub type EmployeesTab = RecordsTab<Employee>;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("code", "Code", Constraint::Length(9)),
    ColumnDef::new("full_name", "Name", Constraint::Min(18)),
    ColumnDef::new("department", "Department", Constraint::Length(14)),
    ColumnDef::new("designation", "Designation", Constraint::Length(18)),
    ColumnDef::new("basic_salary", "Salary", Constraint::Length(13)),
    ColumnDef::new("status", "Status", Constraint::Length(10)),
    ColumnDef::new("joined_on", "Joined", Constraint::Length(10)),
];

impl TabRecord for Employee {
    const NOUN: &'static str = "Employee";
    const DEFAULT_ORDER_BY: &'static str = "code";

    type Form = EmployeeForm;

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        let status = self.status.to_string();
        vec![
            Cell::from(self.code.clone()).style(theme.accent()),
            Cell::from(truncate(&self.full_name, 32).to_string()),
            Cell::from(self.department.clone()),
            Cell::from(truncate(&self.designation, 18).to_string()).style(theme.dim()),
            Cell::from(format!("{:>12}", format_money(self.basic_salary))),
            Cell::from(status.clone()).style(theme.status_style(&status)),
            Cell::from(self.joined_on.format("%Y-%m-%d").to_string()).style(theme.dim()),
        ]
    }

    fn label(&self) -> String {
        self.code.clone()
    }

    fn blank_form() -> EmployeeForm {
        EmployeeForm::default()
    }

    fn to_form(&self) -> EmployeeForm {
        EmployeeForm::from(self)
    }

    fn from_form(form: &EmployeeForm, base: Option<&Self>) -> Option<Self> {
        match base {
            Some(base) => form.apply_to(base),
            None => form.apply_to(&Employee::new("", "", "")),
        }
    }
}
