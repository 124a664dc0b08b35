//! SQLite database implementation

use chrono::{NaiveDate, Utc};
use rusqlite::{params, types::Type, Connection, Row};
use std::sync::{Mutex, MutexGuard};

use crate::data::{DataSource, FetchOutcome, PageQuery};
use crate::models::{Booking, BookingStatus, Employee, EmployeeStatus};

use super::{queries, schema, StoreError};

/// SQLite database wrapper
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create database at the specified path
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            // Create parent directory if needed
            if let Some(parent) = std::path::Path::new(path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            Connection::open(path)?
        };

        // WAL is not available for in-memory databases; ignore the reply row
        conn.pragma_update(None, "journal_mode", "WAL").ok();
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        conn.execute_batch(schema::CREATE_TABLES)?;
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![schema::SCHEMA_VERSION],
        )?;

        tracing::info!("Opened database {}", path);

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Load one page of employees and the number matching the search
    pub fn select_employees(&self, query: &PageQuery) -> Result<(Vec<Employee>, usize), StoreError> {
        let conn = self.lock()?;
        let pattern = query.like_pattern();

        let total: i64 = conn.query_row(
            queries::COUNT_EMPLOYEES_MATCHING,
            params![query.search, pattern],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(queries::SELECT_EMPLOYEES_PAGE)?;
        let rows = stmt.query_map(
            params![query.search, pattern, query.rows_per_page as i64, query.offset() as i64],
            Self::row_to_employee,
        )?;

        let mut employees = Vec::new();
        for row in rows {
            employees.push(row?);
        }
        Ok((employees, total as usize))
    }

    /// Insert or update an employee; returns the stored record
    pub fn upsert_employee(&self, employee: &Employee) -> Result<Employee, StoreError> {
        let mut conn = self.lock()?;
        let now = Utc::now().to_rfc3339();
        let joined_on = employee.joined_on.format("%Y-%m-%d").to_string();

        let mut stored = employee.clone();
        if employee.is_new() {
            let tx = conn.transaction()?;
            tx.execute(
                queries::INSERT_EMPLOYEE,
                params![
                    employee.full_name,
                    employee.email,
                    employee.phone,
                    employee.department,
                    employee.designation,
                    employee.basic_salary,
                    employee.status.to_string(),
                    joined_on,
                    now,
                ],
            )?;
            stored.id = tx.last_insert_rowid();
            stored.code = Employee::code_for(stored.id);
            tx.execute(queries::SET_EMPLOYEE_CODE, params![stored.id, stored.code])?;
            tx.commit()?;
        } else {
            let changed = conn.execute(
                queries::UPDATE_EMPLOYEE,
                params![
                    employee.id,
                    employee.full_name,
                    employee.email,
                    employee.phone,
                    employee.department,
                    employee.designation,
                    employee.basic_salary,
                    employee.status.to_string(),
                    joined_on,
                    now,
                ],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound(employee.id));
            }
        }
        Ok(stored)
    }

    /// Load one page of bookings and the number matching the search
    pub fn select_bookings(&self, query: &PageQuery) -> Result<(Vec<Booking>, usize), StoreError> {
        let conn = self.lock()?;
        let pattern = query.like_pattern();

        let total: i64 = conn.query_row(
            queries::COUNT_BOOKINGS_MATCHING,
            params![query.search, pattern],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(queries::SELECT_BOOKINGS_PAGE)?;
        let rows = stmt.query_map(
            params![query.search, pattern, query.rows_per_page as i64, query.offset() as i64],
            Self::row_to_booking,
        )?;

        let mut bookings = Vec::new();
        for row in rows {
            bookings.push(row?);
        }
        Ok((bookings, total as usize))
    }

    /// Insert or update a booking; returns the stored record
    pub fn upsert_booking(&self, booking: &Booking) -> Result<Booking, StoreError> {
        let conn = self.lock()?;
        let now = Utc::now().to_rfc3339();
        let scheduled_for = booking.scheduled_for.format("%Y-%m-%d").to_string();

        let mut stored = booking.clone();
        if booking.is_new() {
            if stored.reference.is_empty() {
                stored.reference = Booking::generate_reference();
            }
            conn.execute(
                queries::INSERT_BOOKING,
                params![
                    stored.reference,
                    booking.customer_name,
                    booking.customer_phone,
                    booking.service,
                    scheduled_for,
                    booking.status.to_string(),
                    booking.amount,
                    now,
                ],
            )?;
            stored.id = conn.last_insert_rowid();
        } else {
            let changed = conn.execute(
                queries::UPDATE_BOOKING,
                params![
                    booking.id,
                    booking.customer_name,
                    booking.customer_phone,
                    booking.service,
                    scheduled_for,
                    booking.status.to_string(),
                    booking.amount,
                    now,
                ],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound(booking.id));
            }
        }
        Ok(stored)
    }

    /// Delete ids in one transaction; returns (deleted, remaining)
    fn delete_ids(&self, delete_sql: &str, count_sql: &str, ids: &[i64]) -> Result<(usize, usize), StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut deleted = 0;
        {
            let mut stmt = tx.prepare(delete_sql)?;
            for id in ids {
                deleted += stmt.execute(params![id])?;
            }
        }
        let remaining: i64 = tx.query_row(count_sql, [], |row| row.get(0))?;
        tx.commit()?;
        Ok((deleted, remaining as usize))
    }

    pub fn delete_employees(&self, ids: &[i64]) -> Result<(usize, usize), StoreError> {
        self.delete_ids(queries::DELETE_EMPLOYEE, queries::COUNT_EMPLOYEES, ids)
    }

    pub fn delete_bookings(&self, ids: &[i64]) -> Result<(usize, usize), StoreError> {
        self.delete_ids(queries::DELETE_BOOKING, queries::COUNT_BOOKINGS, ids)
    }

    /// Get employee count
    pub fn employee_count(&self) -> Result<i64, StoreError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(queries::COUNT_EMPLOYEES, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Get booking count
    pub fn booking_count(&self) -> Result<i64, StoreError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(queries::COUNT_BOOKINGS, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Populate an empty store with sample employees and bookings
    pub fn seed_demo_data(&self) -> Result<bool, StoreError> {
        if self.employee_count()? > 0 || self.booking_count()? > 0 {
            tracing::info!("Store already has data, skipping seed");
            return Ok(false);
        }

        for employee in super::seed::employees() {
            self.upsert_employee(&employee)?;
        }
        for booking in super::seed::bookings() {
            self.upsert_booking(&booking)?;
        }
        tracing::info!("Seeded demo data");
        Ok(true)
    }

    fn row_to_employee(row: &Row) -> rusqlite::Result<Employee> {
        let status: String = row.get(8)?;
        let joined_on: String = row.get(9)?;
        Ok(Employee {
            id: row.get(0)?,
            code: row.get(1)?,
            full_name: row.get(2)?,
            email: row.get(3)?,
            phone: row.get(4)?,
            department: row.get(5)?,
            designation: row.get(6)?,
            basic_salary: row.get(7)?,
            status: EmployeeStatus::from(status.as_str()),
            joined_on: date_column(9, &joined_on)?,
        })
    }

    fn row_to_booking(row: &Row) -> rusqlite::Result<Booking> {
        let scheduled_for: String = row.get(5)?;
        let status: String = row.get(6)?;
        Ok(Booking {
            id: row.get(0)?,
            reference: row.get(1)?,
            customer_name: row.get(2)?,
            customer_phone: row.get(3)?,
            service: row.get(4)?,
            scheduled_for: date_column(5, &scheduled_for)?,
            status: BookingStatus::from(status.as_str()),
            amount: row.get(7)?,
        })
    }
}

fn date_column(idx: usize, value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl DataSource<Employee> for Database {
    fn fetch_page(&self, query: &PageQuery) -> FetchOutcome<Vec<Employee>> {
        FetchOutcome::from_result(self.select_employees(query), "Load employees")
    }

    fn save(&self, record: &Employee) -> FetchOutcome<Employee> {
        let result = self
            .upsert_employee(record)
            .and_then(|stored| Ok((stored, self.employee_count()? as usize)));
        FetchOutcome::from_result(result, "Save employee")
    }

    fn delete_many(&self, ids: &[i64]) -> FetchOutcome<usize> {
        FetchOutcome::from_result(self.delete_employees(ids), "Delete employees")
    }
}

impl DataSource<Booking> for Database {
    fn fetch_page(&self, query: &PageQuery) -> FetchOutcome<Vec<Booking>> {
        FetchOutcome::from_result(self.select_bookings(query), "Load bookings")
    }

    fn save(&self, record: &Booking) -> FetchOutcome<Booking> {
        let result = self
            .upsert_booking(record)
            .and_then(|stored| Ok((stored, self.booking_count()? as usize)));
        FetchOutcome::from_result(result, "Save booking")
    }

    fn delete_many(&self, ids: &[i64]) -> FetchOutcome<usize> {
        FetchOutcome::from_result(self.delete_bookings(ids), "Delete bookings")
    }
}
