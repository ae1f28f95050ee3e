//! User list view: one server page at a time, filtered by a live search.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use common::{AppResult, MutationAction, OptionExt};
use domain::{matching_indices, EditHandoff, PageCursor, User, UserPage};

use crate::clients::UsersApi;

/// Ticket identifying one issued page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    sequence: u64,
}

/// Directory state without any I/O.
///
/// The filtered view is a list of positions into the current page. It is
/// recomputed whenever the page or the query changes and never mutated on
/// its own, so it is always a subset of the page.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    cursor: PageCursor,
    users: Vec<User>,
    query: String,
    visible: Vec<usize>,
    issued: u64,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// The full page as last fetched (minus local deletes)
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Users matching the current query, in page order
    pub fn filtered(&self) -> Vec<&User> {
        self.visible.iter().map(|&index| &self.users[index]).collect()
    }

    /// True when the empty-state indicator should be shown
    pub fn is_view_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Like [`find`](Self::find), but only among users the query lets through
    pub fn find_visible(&self, id: u32) -> Option<&User> {
        self.visible
            .iter()
            .map(|&index| &self.users[index])
            .find(|user| user.id == id)
    }

    /// Issue a ticket for loading `page`. Any older ticket becomes stale.
    pub fn begin_load(&mut self, page: u32) -> PageRequest {
        self.issued += 1;
        PageRequest {
            page,
            sequence: self.issued,
        }
    }

    /// Apply a fetched page if `request` is the latest issued ticket.
    ///
    /// Returns false and leaves the state untouched for stale responses.
    pub fn apply_page(&mut self, request: PageRequest, page: UserPage) -> bool {
        if request.sequence != self.issued {
            debug!(
                "Discarding stale response for page {} (ticket {} < {})",
                request.page, request.sequence, self.issued
            );
            return false;
        }

        self.users = page.data;
        self.cursor.set_total_pages(page.total_pages);
        self.refilter();
        true
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.refilter();
    }

    /// Remove the user with `id` from the page. No-op when absent.
    pub fn remove(&mut self, id: u32) -> bool {
        let Some(position) = self.users.iter().position(|user| user.id == id) else {
            return false;
        };
        self.users.remove(position);
        self.refilter();
        true
    }

    /// Step back one page. `None` when Previous is disabled.
    pub fn previous(&mut self) -> Option<u32> {
        self.cursor.previous()
    }

    /// Step forward one page. `None` when Next is disabled.
    pub fn next(&mut self) -> Option<u32> {
        self.cursor.next()
    }

    fn refilter(&mut self) {
        self.visible = matching_indices(&self.users, &self.query);
    }
}

/// User list view backed by the listing, delete endpoints.
pub struct UserDirectory {
    api: Arc<dyn UsersApi>,
    state: DirectoryState,
}

impl UserDirectory {
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        Self {
            api,
            state: DirectoryState::new(),
        }
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    /// Load the current page. Called when the view is first shown.
    pub async fn enter(&mut self) -> bool {
        let page = self.state.cursor().current();
        self.load(page).await
    }

    /// Fetch `page` and replace the cached page on success.
    ///
    /// Failures are logged only; the view simply does not change.
    pub async fn load(&mut self, page: u32) -> bool {
        let request = self.state.begin_load(page);

        match self.api.list_users(page).await {
            Ok(users) => self.state.apply_page(request, users),
            Err(err) => {
                let err = err.into_fetch();
                error!(code = err.code(), page, "{}", err);
                false
            }
        }
    }

    /// Go to the previous page. Returns false when Previous is disabled.
    pub async fn previous(&mut self) -> bool {
        match self.state.previous() {
            Some(page) => {
                self.load(page).await;
                true
            }
            None => false,
        }
    }

    /// Go to the next page. Returns false when Next is disabled.
    pub async fn next(&mut self) -> bool {
        match self.state.next() {
            Some(page) => {
                self.load(page).await;
                true
            }
            None => false,
        }
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    /// Delete a user on the server, then drop it from the cached page.
    ///
    /// Succeeds for ids not on the page too; the server answers 2xx either way.
    pub async fn delete(&mut self, id: u32) -> AppResult<()> {
        if let Err(err) = self.api.delete_user(id).await {
            let err = err.into_mutation(MutationAction::Delete);
            warn!(code = err.code(), "Delete of user {} failed: {}", id, err);
            return Err(err);
        }

        let removed = self.state.remove(id);
        info!("Deleted user {} (cached: {})", id, removed);
        Ok(())
    }

    /// Hand the full record for `id` to the editor. Only users shown by the
    /// current search can be edited.
    pub fn edit(&self, id: u32) -> AppResult<EditHandoff> {
        self.state
            .find_visible(id)
            .cloned()
            .map(EditHandoff::new)
            .ok_or_not_found()
    }
}

impl std::fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectory")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
