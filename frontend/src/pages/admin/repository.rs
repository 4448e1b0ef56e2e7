use crate::api::{
    ApiClient, ApiError, AttendanceRecord, DashboardStats, Employee, MarkAttendanceRequest,
    NewEmployee,
};
use chrono::NaiveDate;
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl Default for AdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn fetch_dashboard(
        &self,
        filter_date: Option<NaiveDate>,
    ) -> Result<DashboardStats, ApiError> {
        self.client.get_dashboard(filter_date).await
    }

    pub async fn fetch_attendance(
        &self,
        employee_id: i64,
        filter_date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance(employee_id, filter_date).await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<(), ApiError> {
        self.client.create_employee(payload).await
    }

    pub async fn mark_attendance(&self, payload: &MarkAttendanceRequest) -> Result<(), ApiError> {
        self.client.mark_attendance(payload).await
    }

    pub async fn delete_employee(&self, employee_id: i64) -> Result<(), ApiError> {
        self.client.delete_employee(employee_id).await
    }
}
