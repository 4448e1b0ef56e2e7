use super::{
    client::ApiClient,
    types::{ApiError, Employee, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/employees", base_url)))
            .await?;
        Self::parse_json(response).await
    }

    /// The backend acknowledges creation with a message body; only the status matters here.
    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/employees", base_url))
                    .json(payload),
            )
            .await?;
        Self::expect_success(response).await
    }

    pub async fn delete_employee(&self, employee_id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/employees/{}", base_url, employee_id)),
            )
            .await?;
        Self::expect_success(response).await
    }
}
