use crate::core::client::{check_status, ResourceClient};
use crate::domain::http::{HttpMethod, HttpRequest};
use crate::domain::model::{PasswordReset, User, UserProfileUpdate};
use crate::utils::error::{InventoryError, Result};

impl ResourceClient<User> {
    /// `PUT user/update/{id}` with a bearer token and only the allow-listed
    /// fields. Missing token fails before anything is sent.
    pub fn build_update_profile(
        &self,
        user_id: i64,
        update: &UserProfileUpdate,
        token: Option<&str>,
    ) -> Result<HttpRequest> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| InventoryError::precondition("updating a user profile requires a sign-in token"))?;

        if update.is_empty() {
            return Err(InventoryError::precondition(
                "profile update has no fields to change",
            ));
        }

        let body = serde_json::to_string(update)?;
        let url = self
            .endpoint()
            .url(&format!("user/update/{}", user_id));

        Ok(HttpRequest::new(HttpMethod::Put, url)
            .with_header("Authorization", format!("Bearer {}", token))
            .with_json_body(body))
    }

    pub async fn update_profile(
        &self,
        user_id: i64,
        update: &UserProfileUpdate,
        token: Option<&str>,
    ) -> Result<User> {
        let request = self.build_update_profile(user_id, update, token)?;
        self.parse_record(self.send(request).await?)
    }

    pub fn build_reset_password(&self, user_id: i64, new_password: &str) -> Result<HttpRequest> {
        if new_password.is_empty() {
            return Err(InventoryError::precondition("new password cannot be empty"));
        }

        let body = serde_json::to_string(&PasswordReset {
            new_password: new_password.to_string(),
        })?;
        let url = self
            .endpoint()
            .url(&format!("user/resetPassword/{}", user_id));

        Ok(HttpRequest::new(HttpMethod::Patch, url).with_json_body(body))
    }

    pub async fn reset_password(&self, user_id: i64, new_password: &str) -> Result<()> {
        let request = self.build_reset_password(user_id, new_password)?;
        let response = self.send(request).await?;
        check_status(&response)
    }
}
