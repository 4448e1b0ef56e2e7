use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub emp_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    #[serde(default)]
    pub present_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: u32,
    pub present: u32,
    pub absent: u32,
}

/// Payload of the add-employee form. Doubles as the form draft kept in
/// [`crate::state::admin::AdminState`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub emp_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmpId,
    Name,
    Email,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::EmpId,
        EmployeeField::Name,
        EmployeeField::Email,
        EmployeeField::Department,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EmployeeField::EmpId => "emp_id",
            EmployeeField::Name => "name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
        }
    }
}

impl NewEmployee {
    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmpId => &self.emp_id,
            EmployeeField::Name => &self.name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
        }
    }

    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::EmpId => self.emp_id = value,
            EmployeeField::Name => self.name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

fn server_error_code() -> String {
    ApiError::SERVER_ERROR.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default = "server_error_code")]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ApiError {
    pub const SERVER_ERROR: &'static str = "SERVER_ERROR";
    pub const UNKNOWN: &'static str = "UNKNOWN";
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::UNKNOWN.to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::REQUEST_FAILED.to_string(),
            details: None,
        }
    }

    /// Text reported by the backend itself, if this error came from a response body.
    pub fn server_message(&self) -> Option<&str> {
        if self.code == Self::SERVER_ERROR && !self.error.trim().is_empty() {
            Some(&self.error)
        } else {
            None
        }
    }
}
