pub mod booking;
pub mod employee;

pub use booking::{Booking, BookingForm, BookingStatus};
pub use employee::{Employee, EmployeeForm, EmployeeStatus};
