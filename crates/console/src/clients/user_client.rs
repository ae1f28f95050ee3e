//! User collection endpoint client.

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use common::AppResult;
use domain::{UpdatedUser, UserPage, UserUpdate, USERS_PATH};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::ReqresClient;

/// Listing, update and delete of users on the external service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// `GET /users?page={page}`
    async fn list_users(&self, page: u32) -> AppResult<UserPage>;

    /// `PUT /users/{id}` with a full replacement of the editable fields.
    /// The echo is empty when the body could not be decoded.
    async fn update_user(&self, id: u32, update: &UserUpdate) -> AppResult<UpdatedUser>;

    /// `DELETE /users/{id}`; any 2xx is success and the body is ignored
    async fn delete_user(&self, id: u32) -> AppResult<()>;
}

fn user_path(id: u32) -> String {
    format!("{}/{}", USERS_PATH, id)
}

#[async_trait]
impl UsersApi for ReqresClient {
    async fn list_users(&self, page: u32) -> AppResult<UserPage> {
        let request = self
            .request(Method::GET, USERS_PATH)
            .await
            .query(&[("page", page)]);
        let response = self.send(request).await?;
        let users: UserPage = response.json().await?;

        debug!(
            "Fetched page {} of {} ({} users)",
            users.page,
            users.total_pages,
            users.data.len()
        );
        Ok(users)
    }

    async fn update_user(&self, id: u32, update: &UserUpdate) -> AppResult<UpdatedUser> {
        let request = self
            .request(Method::PUT, &user_path(id))
            .await
            .json(update);
        let response = self.send(request).await?;

        // any 2xx is a success; the echo is only logged
        let echo = match response.json::<UpdatedUser>().await {
            Ok(echo) => echo,
            Err(e) => {
                debug!("Ignoring unreadable echo for user {}: {}", id, e);
                UpdatedUser::default()
            }
        };

        debug!("User {} updated at {:?}", id, echo.updated_at);
        Ok(echo)
    }

    async fn delete_user(&self, id: u32) -> AppResult<()> {
        let request = self.request(Method::DELETE, &user_path(id)).await;
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_path_appends_id() {
        assert_eq!(user_path(7), "/users/7");
    }
}
