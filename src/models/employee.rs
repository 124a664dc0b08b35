use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::forms::{FieldErrors, FieldSpec, FormModel, Rules};
use crate::forms::validate::{parse_date, parse_money};
use crate::table::{FieldValue, Record};
use crate::utils::format_money_plain;

/// Employment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::OnLeave => write!(f, "on leave"),
            Self::Terminated => write!(f, "terminated"),
        }
    }
}

impl From<&str> for EmployeeStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "active" => Self::Active,
            "on leave" | "on_leave" => Self::OnLeave,
            "terminated" => Self::Terminated,
            _ => Self::Active,
        }
    }
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Zero until the record has been stored
    pub id: i64,
    pub code: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    /// Monthly basic salary in minor units
    pub basic_salary: i64,
    pub status: EmployeeStatus,
    pub joined_on: NaiveDate,
}

impl Employee {
    pub fn new(full_name: &str, email: &str, department: &str) -> Self {
        Self {
            id: 0,
            code: String::new(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            department: department.to_string(),
            designation: String::new(),
            basic_salary: 0,
            status: EmployeeStatus::Active,
            joined_on: Local::now().date_naive(),
        }
    }

    /// Employee code derived from the row id, e.g. `EMP-0042`
    pub fn code_for(id: i64) -> String {
        format!("EMP-{:04}", id)
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

impl Record for Employee {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        let text = |s: &str| (!s.is_empty()).then(|| FieldValue::from(s));
        match key {
            "id" => Some(FieldValue::Integer(self.id)),
            "code" => text(&self.code),
            "full_name" => text(&self.full_name),
            "email" => text(&self.email),
            "phone" => text(&self.phone),
            "department" => text(&self.department),
            "designation" => text(&self.designation),
            "basic_salary" => Some(FieldValue::Money(self.basic_salary)),
            "status" => Some(FieldValue::Text(self.status.to_string())),
            "joined_on" => Some(FieldValue::Date(self.joined_on)),
            _ => None,
        }
    }

    fn sortable_fields() -> &'static [&'static str] {
        &[
            "code",
            "full_name",
            "department",
            "designation",
            "basic_salary",
            "status",
            "joined_on",
        ]
    }
}

const STATUS_OPTIONS: &[&str] = &["active", "on leave", "terminated"];

const EMPLOYEE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("full_name", "Full name"),
    FieldSpec::text("email", "Email"),
    FieldSpec::text("phone", "Phone"),
    FieldSpec::text("department", "Department"),
    FieldSpec::text("designation", "Designation"),
    FieldSpec::text("basic_salary", "Basic salary"),
    FieldSpec::choice("status", "Status", STATUS_OPTIONS),
    FieldSpec::text("joined_on", "Joined on"),
];

/// Editable string form of an [`Employee`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub basic_salary: String,
    pub status: String,
    pub joined_on: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            department: String::new(),
            designation: String::new(),
            basic_salary: "0.00".to_string(),
            status: EmployeeStatus::Active.to_string(),
            joined_on: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(e: &Employee) -> Self {
        Self {
            full_name: e.full_name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            department: e.department.clone(),
            designation: e.designation.clone(),
            basic_salary: format_money_plain(e.basic_salary),
            status: e.status.to_string(),
            joined_on: e.joined_on.format("%Y-%m-%d").to_string(),
        }
    }
}

impl EmployeeForm {
    /// Apply validated form values onto `base`, keeping its id and code
    pub fn apply_to(&self, base: &Employee) -> Option<Employee> {
        Some(Employee {
            id: base.id,
            code: base.code.clone(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            department: self.department.trim().to_string(),
            designation: self.designation.trim().to_string(),
            basic_salary: parse_money(&self.basic_salary)?,
            status: EmployeeStatus::from(self.status.as_str()),
            joined_on: parse_date(&self.joined_on)?,
        })
    }
}

impl FormModel for EmployeeForm {
    fn fields() -> &'static [FieldSpec] {
        EMPLOYEE_FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "full_name" => self.full_name.clone(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "department" => self.department.clone(),
            "designation" => self.designation.clone(),
            "basic_salary" => self.basic_salary.clone(),
            "status" => self.status.clone(),
            "joined_on" => self.joined_on.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let slot = match key {
            "full_name" => &mut self.full_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "department" => &mut self.department,
            "designation" => &mut self.designation,
            "basic_salary" => &mut self.basic_salary,
            "status" => &mut self.status,
            "joined_on" => &mut self.joined_on,
            _ => return,
        };
        *slot = value.to_string();
    }

    fn validate(&self) -> FieldErrors {
        Rules::new()
            .required("full_name", "Full name", &self.full_name)
            .required("email", "Email", &self.email)
            .email("email", &self.email)
            .phone("phone", &self.phone)
            .required("department", "Department", &self.department)
            .money("basic_salary", &self.basic_salary)
            .date("joined_on", &self.joined_on)
            .finish()
    }
}
