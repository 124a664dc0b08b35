//! Database query definitions
//!
//! Search queries take `?1` = raw search term and `?2` = escaped LIKE
//! pattern; an empty term matches every row.

pub const SELECT_EMPLOYEES_PAGE: &str = r#"
    SELECT id, code, full_name, email, phone, department, designation,
           basic_salary, status, joined_on
    FROM employees
    WHERE ?1 = ''
       OR code LIKE ?2 ESCAPE '\'
       OR full_name LIKE ?2 ESCAPE '\'
       OR email LIKE ?2 ESCAPE '\'
       OR department LIKE ?2 ESCAPE '\'
    ORDER BY id
    LIMIT ?3 OFFSET ?4
"#;

pub const COUNT_EMPLOYEES_MATCHING: &str = r#"
    SELECT COUNT(*) FROM employees
    WHERE ?1 = ''
       OR code LIKE ?2 ESCAPE '\'
       OR full_name LIKE ?2 ESCAPE '\'
       OR email LIKE ?2 ESCAPE '\'
       OR department LIKE ?2 ESCAPE '\'
"#;

pub const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";

pub const INSERT_EMPLOYEE: &str = r#"
    INSERT INTO employees (
        full_name, email, phone, department, designation,
        basic_salary, status, joined_on, updated_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub const SET_EMPLOYEE_CODE: &str = "UPDATE employees SET code = ?2 WHERE id = ?1";

pub const UPDATE_EMPLOYEE: &str = r#"
    UPDATE employees SET
        full_name = ?2,
        email = ?3,
        phone = ?4,
        department = ?5,
        designation = ?6,
        basic_salary = ?7,
        status = ?8,
        joined_on = ?9,
        updated_at = ?10
    WHERE id = ?1
"#;

pub const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";

pub const SELECT_BOOKINGS_PAGE: &str = r#"
    SELECT id, reference, customer_name, customer_phone, service,
           scheduled_for, status, amount
    FROM bookings
    WHERE ?1 = ''
       OR reference LIKE ?2 ESCAPE '\'
       OR customer_name LIKE ?2 ESCAPE '\'
       OR customer_phone LIKE ?2 ESCAPE '\'
       OR service LIKE ?2 ESCAPE '\'
    ORDER BY id
    LIMIT ?3 OFFSET ?4
"#;

pub const COUNT_BOOKINGS_MATCHING: &str = r#"
    SELECT COUNT(*) FROM bookings
    WHERE ?1 = ''
       OR reference LIKE ?2 ESCAPE '\'
       OR customer_name LIKE ?2 ESCAPE '\'
       OR customer_phone LIKE ?2 ESCAPE '\'
       OR service LIKE ?2 ESCAPE '\'
"#;

pub const COUNT_BOOKINGS: &str = "SELECT COUNT(*) FROM bookings";

pub const INSERT_BOOKING: &str = r#"
    INSERT INTO bookings (
        reference, customer_name, customer_phone, service,
        scheduled_for, status, amount, updated_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const UPDATE_BOOKING: &str = r#"
    UPDATE bookings SET
        customer_name = ?2,
        customer_phone = ?3,
        service = ?4,
        scheduled_for = ?5,
        status = ?6,
        amount = ?7,
        updated_at = ?8
    WHERE id = ?1
"#;

pub const DELETE_BOOKING: &str = "DELETE FROM bookings WHERE id = ?1";
