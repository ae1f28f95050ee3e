//! Edit form for a single user handed off by the directory.

use std::sync::Arc;

use tracing::{info, warn};

use common::{AppError, AppResult, MutationAction};
use domain::{EditHandoff, UpdatedUser, User, UserUpdate};

use crate::clients::UsersApi;

/// Edit form seeded from a detached copy of one user.
pub struct UserEditor {
    api: Arc<dyn UsersApi>,
    original: User,
    draft: UserUpdate,
}

impl UserEditor {
    /// Open the editor. Without a handoff there is nothing to edit.
    pub fn open(api: Arc<dyn UsersApi>, handoff: Option<EditHandoff>) -> AppResult<Self> {
        let handoff = handoff.ok_or(AppError::MissingEditSeed)?;
        let original = handoff.user().clone();
        let draft = UserUpdate::from(&original);

        Ok(Self {
            api,
            original,
            draft,
        })
    }

    pub fn user_id(&self) -> u32 {
        self.original.id
    }

    /// The record as it was handed over
    pub fn original(&self) -> &User {
        &self.original
    }

    /// In-progress edits
    pub fn draft(&self) -> &UserUpdate {
        &self.draft
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.draft.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.draft.last_name = last_name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    /// Send the draft as a full replacement. The draft survives a failure.
    pub async fn submit(&self) -> AppResult<UpdatedUser> {
        let id = self.original.id;
        match self.api.update_user(id, &self.draft).await {
            Ok(echo) => {
                info!("Updated user {}", id);
                Ok(echo)
            }
            Err(err) => {
                let err = err.into_mutation(MutationAction::Update);
                warn!(code = err.code(), "Update of user {} failed: {}", id, err);
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for UserEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserEditor")
            .field("original", &self.original)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockall::predicate::eq;

    use crate::clients::MockUsersApi;

    fn janet() -> User {
        User {
            id: 2,
            email: "janet.weaver@reqres.in".to_string(),
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
            avatar: "https://reqres.in/img/faces/2-image.jpg".to_string(),
        }
    }

    #[test]
    fn missing_seed_is_a_hard_error() {
        let result = UserEditor::open(Arc::new(MockUsersApi::new()), None);
        assert!(matches!(result, Err(AppError::MissingEditSeed)));
    }

    #[test]
    fn fields_are_seeded_from_handoff() {
        let editor =
            UserEditor::open(Arc::new(MockUsersApi::new()), Some(EditHandoff::new(janet())))
                .unwrap();

        assert_eq!(editor.user_id(), 2);
        assert_eq!(editor.draft(), &UserUpdate::from(&janet()));
    }

    #[tokio::test]
    async fn submit_sends_full_replacement() {
        let mut api = MockUsersApi::new();
        api.expect_update_user()
            .withf(|id, update| {
                *id == 2
                    && update.first_name == "Jan"
                    && update.last_name == "Weaver"
                    && update.email == "jan@reqres.in"
            })
            .times(1)
            .returning(|_, _| Ok(UpdatedUser::default()));

        let mut editor =
            UserEditor::open(Arc::new(api), Some(EditHandoff::new(janet()))).unwrap();
        editor.set_first_name("Jan");
        editor.set_email("jan@reqres.in");

        editor.submit().await.unwrap();
        // the handed-over copy is not touched
        assert_eq!(editor.original(), &janet());
    }

    #[tokio::test]
    async fn failed_submit_keeps_draft() {
        let mut api = MockUsersApi::new();
        api.expect_update_user()
            .with(eq(2), mockall::predicate::always())
            .returning(|_, _| Err(AppError::Transport("timeout".to_string())));

        let mut editor =
            UserEditor::open(Arc::new(api), Some(EditHandoff::new(janet()))).unwrap();
        editor.set_last_name("Smith");

        let err = editor.submit().await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to update user");
        assert_eq!(editor.draft().last_name, "Smith");
    }
}
