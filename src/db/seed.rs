//! Demo records used by `--seed`

use chrono::NaiveDate;

use crate::models::{Booking, BookingStatus, Employee, EmployeeStatus};

const EMPLOYEES: &[(&str, &str, &str, &str, i64, EmployeeStatus, (i32, u32, u32))] = &[
    ("Nimal Perera", "Workshop", "Senior Technician", "0771234501", 12_500_000, EmployeeStatus::Active, (2019, 4, 1)),
    ("Asha Fernando", "Payroll", "Payroll Officer", "0771234502", 9_800_000, EmployeeStatus::Active, (2020, 1, 15)),
    ("Kamal Silva", "Workshop", "Technician", "0771234503", 7_200_000, EmployeeStatus::OnLeave, (2021, 7, 5)),
    ("Dilani Jayasinghe", "Front Office", "Service Advisor", "0771234504", 8_100_000, EmployeeStatus::Active, (2022, 3, 21)),
    ("Ruwan Bandara", "Workshop", "Apprentice", "", 4_500_000, EmployeeStatus::Active, (2023, 9, 1)),
    ("Chamari Wickrama", "Accounts", "Accountant", "0771234506", 11_000_000, EmployeeStatus::Active, (2018, 11, 12)),
    ("Sunil Rathnayake", "Stores", "Storekeeper", "0771234507", 6_300_000, EmployeeStatus::Terminated, (2017, 6, 30)),
    ("Ishara Gunawardena", "Front Office", "Receptionist", "0771234508", 5_600_000, EmployeeStatus::Active, (2024, 2, 5)),
    ("Tharindu Herath", "Workshop", "Painter", "0771234509", 7_900_000, EmployeeStatus::Active, (2020, 8, 17)),
    ("Malini Dissanayake", "Accounts", "Accounts Clerk", "", 5_200_000, EmployeeStatus::Active, (2022, 10, 3)),
    ("Pradeep Kumara", "Workshop", "Electrician", "0771234511", 8_800_000, EmployeeStatus::OnLeave, (2019, 12, 9)),
    ("Nadeesha Senanayake", "Payroll", "HR Assistant", "0771234512", 6_000_000, EmployeeStatus::Active, (2023, 5, 22)),
];

const BOOKINGS: &[(&str, &str, &str, BookingStatus, i64, (i32, u32, u32))] = &[
    ("Saman Jayawardena", "0719876501", "Full service", BookingStatus::Confirmed, 2_500_000, (2025, 3, 4)),
    ("Hiruni Abeysekera", "0719876502", "Oil change", BookingStatus::Completed, 850_000, (2025, 2, 27)),
    ("Lahiru Mendis", "0719876503", "Wheel alignment", BookingStatus::Pending, 400_000, (2025, 3, 8)),
    ("Priyanka Ranasinghe", "0719876504", "Body repair", BookingStatus::Pending, 7_500_000, (2025, 3, 12)),
    ("Chathura Weerasinghe", "0719876505", "Brake pads", BookingStatus::Cancelled, 1_200_000, (2025, 2, 20)),
    ("Anoma Karunaratne", "0719876506", "Air conditioning", BookingStatus::Confirmed, 1_800_000, (2025, 3, 6)),
    ("Janaka Premadasa", "0719876507", "Full service", BookingStatus::Completed, 2_500_000, (2025, 2, 14)),
    ("Sanduni Peiris", "0719876508", "Battery replacement", BookingStatus::Pending, 3_100_000, (2025, 3, 15)),
];

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub fn employees() -> Vec<Employee> {
    EMPLOYEES
        .iter()
        .map(|&(name, department, designation, phone, salary, status, joined)| {
            let handle = name.to_lowercase().replace(' ', ".");
            let mut e = Employee::new(name, &format!("{}@example.com", handle), department);
            e.designation = designation.to_string();
            e.phone = phone.to_string();
            e.basic_salary = salary;
            e.status = status;
            e.joined_on = date(joined);
            e
        })
        .collect()
}

pub fn bookings() -> Vec<Booking> {
    BOOKINGS
        .iter()
        .map(|&(customer, phone, service, status, amount, scheduled)| {
            let mut b = Booking::new(customer, phone, service, date(scheduled));
            b.status = status;
            b.amount = amount;
            b
        })
        .collect()
}
