//! Route table: URL path to page resolution with query-derived props.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` mounts a single catch-all Leptos route and hands every location to
//! `RouteTable::resolve`, so this table is the only place that knows which
//! page a path shows. Paths not in the table resolve to `Page::NotFound`.
//!
//! DESIGN
//! ======
//! Props are plain `fn(&Query) -> PageProps` pointers: they see nothing but
//! the query string, which keeps resolution pure and easy to test without a
//! browser. Uniqueness of paths and names is checked once, at construction.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::HashSet;

/// Pages the router can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    BodyMap,
    LiteratureList,
    PersonelList,
    Login,
    NotFound,
}

/// Inputs derived from route state and handed to the target page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageProps {
    /// Initial search string for list pages, from `?system=`.
    pub init_search: Option<String>,
}

/// Pure mapping from query state to page props.
pub type PropsFn = fn(&Query) -> PageProps;

/// One row of the route table.
#[derive(Clone, Debug)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
    pub props: Option<PropsFn>,
}

impl RouteEntry {
    #[must_use]
    pub const fn new(path: &'static str, name: &'static str, page: Page) -> Self {
        Self { path, name, page, props: None }
    }

    #[must_use]
    pub fn with_props(mut self, props: PropsFn) -> Self {
        self.props = Some(props);
        self
    }
}

/// Route table configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    #[error("duplicate route name: {0}")]
    DuplicateName(String),
    #[error("route path must start with '/': {0}")]
    InvalidPath(String),
}

/// Decoded URL query parameters, in order of appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Decode a query string, with or without its leading `?`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = url::form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self { pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// First value for `key`. Repeated keys keep their first occurrence.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Result of resolving a location against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub page: Page,
    pub name: &'static str,
    pub props: PageProps,
}

impl Resolution {
    fn not_found() -> Self {
        Self { page: Page::NotFound, name: NOT_FOUND_NAME, props: PageProps::default() }
    }
}

const NOT_FOUND_NAME: &str = "NotFound";

fn search_props(query: &Query) -> PageProps {
    PageProps { init_search: query.get("system").map(str::to_owned) }
}

/// Validated path → page table.
#[derive(Clone, Debug)]
pub struct RouteTable {
    base: String,
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate paths or names.
    ///
    /// # Errors
    ///
    /// Returns a `RouteError` naming the first offending path or name.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(RouteError::InvalidPath(entry.path.to_owned()));
            }
            if !paths.insert(normalize_path(entry.path)) {
                return Err(RouteError::DuplicatePath(entry.path.to_owned()));
            }
            if entry.name == NOT_FOUND_NAME || !names.insert(entry.name) {
                return Err(RouteError::DuplicateName(entry.name.to_owned()));
            }
        }
        Ok(Self { base: "/".to_owned(), entries })
    }

    /// The application's route table.
    ///
    /// # Errors
    ///
    /// Only fails if the table below is edited into an inconsistent state.
    pub fn standard() -> Result<Self, RouteError> {
        Self::new(vec![
            RouteEntry::new("/", "LandingPage", Page::Landing),
            RouteEntry::new("/bodymap", "BodyMap", Page::BodyMap),
            RouteEntry::new("/list", "LiteratureList", Page::LiteratureList).with_props(search_props),
            RouteEntry::new("/personel", "PersonelList", Page::PersonelList).with_props(search_props),
            RouteEntry::new("/login", "LoginPage", Page::Login),
        ])
    }

    /// Serve the table under a path prefix such as `/app`.
    #[must_use]
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = normalize_path(base);
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Resolve a path plus decoded query to a page and its props.
    #[must_use]
    pub fn resolve(&self, path: &str, query: &Query) -> Resolution {
        let Some(path) = self.strip_base(path) else {
            return Resolution::not_found();
        };
        let path = normalize_path(&path);
        self.entries
            .iter()
            .find(|entry| normalize_path(entry.path) == path)
            .map_or_else(Resolution::not_found, |entry| Resolution {
                page: entry.page,
                name: entry.name,
                props: entry.props.map(|f| f(query)).unwrap_or_default(),
            })
    }

    /// Resolve a full href (`/list?system=heart#top`).
    #[must_use]
    pub fn resolve_href(&self, href: &str) -> Resolution {
        let href = href.split('#').next().unwrap_or_default();
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        self.resolve(path, &Query::parse(query))
    }

    /// Path of the entry called `name`, with the base prefix applied.
    #[must_use]
    pub fn path_for(&self, name: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| self.with_base_prefix(entry.path))
    }

    fn strip_base(&self, path: &str) -> Option<String> {
        if self.base == "/" {
            return Some(path.to_owned());
        }
        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest.to_owned())
        } else {
            None
        }
    }

    fn with_base_prefix(&self, path: &str) -> String {
        if self.base == "/" {
            path.to_owned()
        } else if path == "/" {
            self.base.clone()
        } else {
            format!("{}{path}", self.base)
        }
    }
}

/// Build an href with an encoded query string.
#[must_use]
pub fn href_with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish();
    format!("{path}?{query}")
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
