use chrono::NaiveDate;

use crate::utils::time::format_date;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, MarkAttendanceRequest},
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        employee_id: i64,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self
            .http_client()
            .get(format!("{}/attendance/{}", base_url, employee_id));
        if let Some(date) = date {
            request = request.query(&[("date", format_date(date))]);
        }
        let response = self.send(request).await?;
        Self::parse_json(response).await
    }

    /// Duplicate submissions for the same employee and date are resolved by the backend.
    pub async fn mark_attendance(&self, payload: &MarkAttendanceRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/attendance", base_url))
                    .json(payload),
            )
            .await?;
        Self::expect_success(response).await
    }
}
