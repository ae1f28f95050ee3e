//! In-memory stand-ins for the reqres service.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use common::{AppError, AppResult};
use console_lib::clients::{AuthApi, UsersApi};
use console_lib::session::{MemoryTokenStore, Session};
use console_lib::state::AppState;
use domain::{Credentials, Paginated, SessionToken, UpdatedUser, User, UserPage, UserUpdate};

pub const VALID_EMAIL: &str = "eve.holt@reqres.in";
pub const VALID_PASSWORD: &str = "cityslicka";
pub const ISSUED_TOKEN: &str = "QpwL5tke4Pnpja7X4";
pub const PER_PAGE: usize = 6;

/// Auth service accepting exactly one email/password pair
pub struct FakeAuthService;

#[async_trait]
impl AuthApi for FakeAuthService {
    async fn login(&self, credentials: &Credentials) -> AppResult<SessionToken> {
        if credentials.email == VALID_EMAIL && credentials.password == VALID_PASSWORD {
            Ok(SessionToken::new(ISSUED_TOKEN))
        } else {
            Err(AppError::Http {
                status: 400,
                body: r#"{"error":"user not found"}"#.to_string(),
            })
        }
    }
}

/// User service serving the twelve demo users in pages of six.
///
/// Deletes and updates are acknowledged but, like the real service, never
/// change what later listings return.
#[derive(Default)]
pub struct FakeUsersService {
    pub calls: Mutex<Vec<String>>,
    pub fail_listing: Mutex<bool>,
    pub fail_mutations: Mutex<bool>,
}

impl FakeUsersService {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn demo_users() -> Vec<User> {
    [
        (1, "George", "Bluth"),
        (2, "Janet", "Weaver"),
        (3, "Emma", "Wong"),
        (4, "Eve", "Holt"),
        (5, "Charles", "Morris"),
        (6, "Tracey", "Ramos"),
        (7, "Michael", "Lawson"),
        (8, "Lindsay", "Ferguson"),
        (9, "Tobias", "Funke"),
        (10, "Byron", "Fields"),
        (11, "George", "Edwards"),
        (12, "Rachel", "Howell"),
    ]
    .into_iter()
    .map(|(id, first, last)| User {
        id,
        email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        first_name: first.to_string(),
        last_name: last.to_string(),
        avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id),
    })
    .collect()
}

#[async_trait]
impl UsersApi for FakeUsersService {
    async fn list_users(&self, page: u32) -> AppResult<UserPage> {
        self.record(format!("GET /users?page={}", page));
        if *self.fail_listing.lock().unwrap() {
            return Err(AppError::Transport("connection reset".to_string()));
        }

        let users = demo_users();
        let start = (page.saturating_sub(1) as usize) * PER_PAGE;
        let data = users.iter().skip(start).take(PER_PAGE).cloned().collect();

        Ok(Paginated {
            page,
            per_page: PER_PAGE as u32,
            total: users.len() as u32,
            total_pages: 2,
            data,
        })
    }

    async fn update_user(&self, id: u32, update: &UserUpdate) -> AppResult<UpdatedUser> {
        self.record(format!("PUT /users/{} {}", id, update.first_name));
        if *self.fail_mutations.lock().unwrap() {
            return Err(AppError::Http {
                status: 500,
                body: String::new(),
            });
        }

        Ok(UpdatedUser {
            first_name: Some(update.first_name.clone()),
            last_name: Some(update.last_name.clone()),
            email: Some(update.email.clone()),
            updated_at: Some("2024-01-01T00:00:00.000Z".to_string()),
        })
    }

    async fn delete_user(&self, id: u32) -> AppResult<()> {
        self.record(format!("DELETE /users/{}", id));
        if *self.fail_mutations.lock().unwrap() {
            return Err(AppError::Transport("timeout".to_string()));
        }
        Ok(())
    }
}

/// App state over the fakes with an in-memory token store.
pub async fn fake_state(
    store: Arc<MemoryTokenStore>,
    users: Arc<FakeUsersService>,
) -> AppState {
    let session = Session::init(store).await;
    AppState::new(Arc::new(FakeAuthService), users, session)
}
