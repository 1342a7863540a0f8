// src/rest/query.rs
// ============================================================================
// Module: List Query Parameters
// Description: Builder for `sort`, `page`, `limit`, and `fields` parameters.
// Purpose: Compose list-endpoint query strings without stringly call sites.
// Dependencies: std
// ============================================================================

/// Query parameters accepted by every list endpoint.
///
/// `sort` accepts `field` (ascending) or `-field` (descending); `page` and
/// `limit` paginate; `fields` projects a comma-separated field list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    /// Sort expression, for example `name` or `-age`.
    sort: Option<String>,
    /// One-based page number.
    page: Option<u32>,
    /// Page size.
    limit: Option<u32>,
    /// Comma-separated projection list.
    fields: Option<String>,
}

impl ListQuery {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sort: None,
            page: None,
            limit: None,
            fields: None,
        }
    }

    /// Sorts ascending by the given field.
    #[must_use]
    pub fn sort_asc(mut self, field: &str) -> Self {
        self.sort = Some(field.to_string());
        self
    }

    /// Sorts descending by the given field.
    #[must_use]
    pub fn sort_desc(mut self, field: &str) -> Self {
        self.sort = Some(format!("-{field}"));
        self
    }

    /// Selects a page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Limits the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Projects the given fields.
    #[must_use]
    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = Some(fields.join(","));
        self
    }

    /// Returns true when no parameter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sort.is_none() && self.page.is_none() && self.limit.is_none() && self.fields.is_none()
    }

    /// Returns the query as ordered key/value pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(fields) = &self.fields {
            pairs.push(("fields".to_string(), fields.clone()));
        }
        pairs
    }
}
