use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Shared pagination + search query for the list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllQuery {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

impl FindAllQuery {
    /// `page`/`page_size` come straight off the query string; clamp them
    /// before they reach LIMIT/OFFSET so `?page_size=-1` can't become a
    /// database error.
    pub fn limit(&self) -> i64 {
        self.page_size.max(1) as i64
    }

    pub fn offset(&self) -> i64 {
        (self.page.max(1) as i64 - 1) * self.limit()
    }
}

impl Default for FindAllQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search: String::new(),
        }
    }
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct UserOrdersQuery {
    pub user_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostile_paging_values_are_clamped() {
        let q = FindAllQuery {
            page: -3,
            page_size: -1,
            search: String::new(),
        };
        assert_eq!(q.limit(), 1);
        assert_eq!(q.offset(), 0);

        let q = FindAllQuery {
            page: 0,
            page_size: 0,
            search: String::new(),
        };
        assert_eq!(q.limit(), 1);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn normal_paging_values_pass_through() {
        let q = FindAllQuery {
            page: 3,
            page_size: 10,
            search: String::new(),
        };
        assert_eq!(q.limit(), 10);
        assert_eq!(q.offset(), 20);
    }
}
