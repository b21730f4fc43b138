// SPDX-License-Identifier: GPL-3.0-only

/// Error of a query as handed to the views, the message is shown verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn from_display(error: impl std::fmt::Display) -> Self {
        Self::new(error.to_string())
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<crate::error::DexError> for QueryError {
    fn from(error: crate::error::DexError) -> Self {
        Self::from_display(error)
    }
}

/// Loading flag, last data and last error of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<QueryError>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> QueryState<T> {
    /// Nothing requested yet, or the query was skipped
    pub fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::idle()
        }
    }

    pub fn resolved(result: Result<T, QueryError>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                ..Self::idle()
            },
            Err(error) => Self {
                error: Some(error),
                ..Self::idle()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DexError;

    #[test]
    fn resolved_clears_loading() {
        let state = QueryState::resolved(Ok(3));
        assert_eq!(state.data, Some(3));
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn errors_keep_the_message_verbatim() {
        let state: QueryState<()> =
            QueryState::resolved(Err(DexError::GraphQl("Failed to fetch".to_string()).into()));
        assert_eq!(state.error.unwrap().message, "Failed to fetch");
    }

    #[test]
    fn idle_and_loading() {
        assert_eq!(QueryState::<u8>::idle(), QueryState::default());
        assert!(!QueryState::<u8>::idle().loading);

        let loading = QueryState::<u8>::loading();
        assert!(loading.loading);
        assert!(loading.data.is_none() && loading.error.is_none());
    }
}
