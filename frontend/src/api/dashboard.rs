use chrono::NaiveDate;

use crate::utils::time::format_date;

use super::{
    client::ApiClient,
    types::{ApiError, DashboardStats},
};

impl ApiClient {
    pub async fn get_dashboard(&self, date: Option<NaiveDate>) -> Result<DashboardStats, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self.http_client().get(format!("{}/dashboard", base_url));
        if let Some(date) = date {
            request = request.query(&[("date", format_date(date))]);
        }
        let response = self.send(request).await?;
        Self::parse_json(response).await
    }
}
