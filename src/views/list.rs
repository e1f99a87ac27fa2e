//! Paginated, sortable user listing.
//!
//! Sorting applies to the page currently loaded, not the whole directory.

use super::ViewError;
use crate::clients::UserApi;
use crate::model::{Page, User};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Column the listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    FirstName,
    LastName,
    Email,
}

impl SortKey {
    fn value(self, user: &User) -> &str {
        match self {
            SortKey::FirstName => &user.first_name,
            SortKey::LastName => &user.last_name,
            SortKey::Email => &user.email,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Arrow shown next to the active column.
    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            key: SortKey::FirstName,
            order: SortOrder::Ascending,
        }
    }
}

impl Sort {
    /// Clicking the active column flips the order; another column starts
    /// ascending.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            let order = match self.order {
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::Ascending,
            };
            Self { key, order }
        } else {
            Self {
                key,
                order: SortOrder::Ascending,
            }
        }
    }

    /// Case-insensitive comparison, ties broken by the raw value.
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        let (a, b) = (self.key.value(a), self.key.value(b));
        let ordering = a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b));
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Previous/next navigation for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub current: u32,
    pub total: u32,
}

impl PageNav {
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous(&self) -> u32 {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u32 {
        (self.current + 1).min(self.total.max(1))
    }

    /// Every page number, 1-based.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListView {
    page: Page<User>,
    sort: Sort,
}

impl UserListView {
    /// Loads page `page` with the default sort (first name, ascending).
    #[instrument(skip(api))]
    pub async fn load<A>(api: &A, page: u32) -> Result<Self, ViewError>
    where
        A: UserApi + ?Sized,
    {
        let page = api.list(page).await.map_err(ViewError::List)?;
        debug!(page = page.page, total_pages = page.total_pages, "Listing loaded");
        Ok(Self {
            page,
            sort: Sort::default(),
        })
    }

    /// Replaces the loaded page, keeping the current sort.
    ///
    /// On failure the previously loaded page stays in place.
    pub async fn go_to<A>(&mut self, api: &A, page: u32) -> Result<(), ViewError>
    where
        A: UserApi + ?Sized,
    {
        self.page = api.list(page).await.map_err(ViewError::List)?;
        Ok(())
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = self.sort.toggle(key);
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn nav(&self) -> PageNav {
        PageNav {
            current: self.page.page,
            total: self.page.total_pages,
        }
    }

    pub fn page(&self) -> &Page<User> {
        &self.page
    }

    /// The loaded users in display order.
    pub fn users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.page.data.iter().collect();
        users.sort_by(|a, b| self.sort.compare(a, b));
        users
    }
}
