// SPDX-License-Identifier: GPL-3.0-only

/// Pages of the application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// `/list`
    #[default]
    List,
    /// `/list/pokemon/{id}`, the segment is kept verbatim so an invalid id can still be routed to
    Detail(String),
}

impl Route {
    pub const LIST_PATH: &'static str = "/list";

    /// Route for a list card
    pub fn detail(id: impl Into<String>) -> Self {
        Route::Detail(id.into())
    }

    /// Parses an absolute path or the `pokemon/{id}` path relative to the list
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let relative = path
            .strip_prefix(Self::LIST_PATH)
            .unwrap_or(path)
            .trim_matches('/');

        if relative.is_empty() {
            return Some(Route::List);
        }

        let mut segments = relative.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("pokemon"), Some(id), None) => Some(Route::Detail(id.to_string())),
            (Some("pokemon"), None, None) => Some(Route::Detail(String::new())),
            _ => None,
        }
    }

    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Route::List => Self::LIST_PATH.to_string(),
            Route::Detail(id) => format!("{}/pokemon/{id}", Self::LIST_PATH),
        }
    }

    /// Id to query the details of.
    ///
    /// `None` for the list and for segments that are not a positive integer, in which case no
    /// details query must be issued at all.
    pub fn detail_id(&self) -> Option<i64> {
        match self {
            Route::List => None,
            Route::Detail(segment) => segment.trim().parse::<i64>().ok().filter(|id| *id > 0),
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Route::Detail(_))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
