//! Database schema definitions

pub const SCHEMA_VERSION: i32 = 1;

pub const CREATE_TABLES: &str = r#"
    CREATE TABLE IF NOT EXISTS schema_version (
        version INTEGER PRIMARY KEY
    );

    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code TEXT NOT NULL DEFAULT '',
        full_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL DEFAULT '',
        department TEXT NOT NULL,
        designation TEXT NOT NULL DEFAULT '',
        basic_salary INTEGER NOT NULL DEFAULT 0,
        status TEXT NOT NULL,
        joined_on TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        reference TEXT NOT NULL UNIQUE,
        customer_name TEXT NOT NULL,
        customer_phone TEXT NOT NULL,
        service TEXT NOT NULL,
        scheduled_for TEXT NOT NULL,
        status TEXT NOT NULL,
        amount INTEGER NOT NULL DEFAULT 0,
        updated_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_employees_name ON employees(full_name);
    CREATE INDEX IF NOT EXISTS idx_bookings_scheduled ON bookings(scheduled_for);
"#;
