//! Navigation state machine tying the three views together.
//!
//! Login → Users → Edit → Users, driven only by operator actions. The
//! directory outlives a trip through the editor so that returning to it
//! shows the cached page exactly as it was left.

use std::mem;

use tracing::{info, warn};

use common::AppError;
use domain::{Route, MSG_USER_DELETED, MSG_USER_UPDATED};

use crate::components::{LoginOutcome, SessionGate, UserDirectory, UserEditor};
use crate::notice::Notice;
use crate::state::AppState;

/// Operator input understood by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Login email, or the edited user's email
    SetEmail(String),
    SetPassword(String),
    SetFirstName(String),
    SetLastName(String),
    /// Log in, or save the user being edited
    Submit,
    Search(String),
    Previous,
    Next,
    Delete(u32),
    Edit(u32),
    /// Leave the editor without saving
    Cancel,
    Logout,
    /// Direct navigation to a path
    Navigate(Route),
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::SetEmail(_) => "email",
            Action::SetPassword(_) => "password",
            Action::SetFirstName(_) => "first",
            Action::SetLastName(_) => "last",
            Action::Submit => "submit",
            Action::Search(_) => "search",
            Action::Previous => "prev",
            Action::Next => "next",
            Action::Delete(_) => "delete",
            Action::Edit(_) => "edit",
            Action::Cancel => "cancel",
            Action::Logout => "logout",
            Action::Navigate(_) => "goto",
        }
    }
}

/// The view currently on screen, owning its component state.
pub enum Screen {
    Login(SessionGate),
    Users(UserDirectory),
    Edit {
        directory: UserDirectory,
        editor: UserEditor,
    },
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Users(_) => Route::Users,
            Screen::Edit { editor, .. } => Route::EditUser(editor.user_id()),
        }
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Screen({})", self.route())
    }
}

/// The running console.
#[derive(Debug)]
pub struct Console {
    state: AppState,
    screen: Screen,
}

impl Console {
    /// Start on the directory when a session was persisted, else on login.
    pub async fn start(state: AppState) -> Self {
        let screen = if state.session.is_active().await {
            Screen::Users(open_directory(&state).await)
        } else {
            Screen::Login(login_screen(&state))
        };

        Self { state, screen }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one action. Returns the notice to show, if any.
    pub async fn dispatch(&mut self, action: Action) -> Option<Notice> {
        match action {
            Action::Logout => self.logout().await,
            Action::Navigate(route) => self.navigate(route).await,
            action => match self.route() {
                Route::Login => self.on_login(action).await,
                Route::Users => self.on_users(action).await,
                Route::EditUser(_) => self.on_edit(action).await,
            },
        }
    }

    async fn on_login(&mut self, action: Action) -> Option<Notice> {
        let Screen::Login(gate) = &mut self.screen else {
            return None;
        };

        match action {
            Action::SetEmail(email) => gate.set_email(email),
            Action::SetPassword(password) => gate.set_password(password),
            Action::Submit => {
                if gate.submit().await == LoginOutcome::Authenticated {
                    self.screen = Screen::Users(open_directory(&self.state).await);
                }
            }
            other => return Some(unavailable(&other, Route::Login)),
        }
        None
    }

    async fn on_users(&mut self, action: Action) -> Option<Notice> {
        let Screen::Users(directory) = &mut self.screen else {
            return None;
        };

        match action {
            Action::Search(query) => directory.search(query),
            Action::Previous => {
                directory.previous().await;
            }
            Action::Next => {
                directory.next().await;
            }
            Action::Delete(id) => {
                return Some(match directory.delete(id).await {
                    Ok(()) => Notice::info(MSG_USER_DELETED),
                    Err(err) => Notice::from(&err),
                });
            }
            Action::Edit(id) => {
                let opened = directory
                    .edit(id)
                    .and_then(|handoff| UserEditor::open(self.state.users.clone(), Some(handoff)));
                let editor = match opened {
                    Ok(editor) => editor,
                    Err(err) => return Some(Notice::from(&err)),
                };
                if let Screen::Users(directory) = self.take_screen() {
                    info!("Editing user {}", editor.user_id());
                    self.screen = Screen::Edit { directory, editor };
                }
            }
            other => return Some(unavailable(&other, Route::Users)),
        }
        None
    }

    async fn on_edit(&mut self, action: Action) -> Option<Notice> {
        let Screen::Edit { editor, .. } = &mut self.screen else {
            return None;
        };
        let route = Route::EditUser(editor.user_id());

        match action {
            Action::SetFirstName(value) => editor.set_first_name(value),
            Action::SetLastName(value) => editor.set_last_name(value),
            Action::SetEmail(value) => editor.set_email(value),
            Action::Submit => {
                return Some(match editor.submit().await {
                    Ok(_) => {
                        self.back_to_directory();
                        Notice::info(MSG_USER_UPDATED)
                    }
                    Err(err) => Notice::from(&err),
                });
            }
            Action::Cancel => self.back_to_directory(),
            other => return Some(unavailable(&other, route)),
        }
        None
    }

    async fn logout(&mut self) -> Option<Notice> {
        let result = self.state.session.teardown().await;
        self.screen = Screen::Login(login_screen(&self.state));
        info!("Logged out");

        result.err().map(|err| {
            warn!(code = err.code(), "Session store not cleared: {}", err);
            Notice::from(&err)
        })
    }

    async fn navigate(&mut self, route: Route) -> Option<Notice> {
        match route {
            Route::Login => {
                self.screen = Screen::Login(login_screen(&self.state));
                None
            }
            Route::Users => {
                self.show_directory().await;
                None
            }
            Route::EditUser(id) if self.route() == Route::EditUser(id) => None,
            Route::EditUser(id) => {
                // direct navigation carries no record to edit
                let err = AppError::MissingEditSeed;
                warn!(code = err.code(), "Edit of user {} opened without a record", id);
                self.show_directory().await;
                Some(Notice::from(&err))
            }
        }
    }

    /// Show the directory, reusing the live one when there is one.
    async fn show_directory(&mut self) {
        self.screen = match self.take_screen() {
            Screen::Users(directory) | Screen::Edit { directory, .. } => Screen::Users(directory),
            Screen::Login(_) => Screen::Users(open_directory(&self.state).await),
        };
    }

    fn back_to_directory(&mut self) {
        if let Screen::Edit { directory, .. } = self.take_screen() {
            self.screen = Screen::Users(directory);
        }
    }

    /// Move the current screen out, leaving a fresh login view behind.
    fn take_screen(&mut self) -> Screen {
        let placeholder = Screen::Login(login_screen(&self.state));
        mem::replace(&mut self.screen, placeholder)
    }
}

fn login_screen(state: &AppState) -> SessionGate {
    SessionGate::new(state.auth.clone(), state.session.clone())
}

async fn open_directory(state: &AppState) -> UserDirectory {
    let mut directory = UserDirectory::new(state.users.clone());
    directory.enter().await;
    directory
}

fn unavailable(action: &Action, route: Route) -> Notice {
    Notice::error(format!("'{}' is not available on {}", action.label(), route))
}
