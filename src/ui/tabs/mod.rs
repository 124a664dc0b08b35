//! Tab implementations

pub mod bookings;
pub mod employees;
pub mod records;

pub use bookings::BookingsTab;
pub use employees::EmployeesTab;
