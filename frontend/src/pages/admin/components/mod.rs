pub mod employee_card;
pub mod employee_form;
pub mod filter;
pub mod stats;

pub use employee_card::EmployeeCard;
pub use employee_form::AddEmployeeForm;
pub use filter::DateFilter;
pub use stats::DashboardStatsRow;
