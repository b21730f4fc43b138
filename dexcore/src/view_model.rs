// SPDX-License-Identifier: GPL-3.0-only

//! State owned by each page. Pages only change through the methods below, which the
//! application calls in response to discrete messages.

use crate::{
    entities::{PokemonDetail, PokemonSummary},
    filter::filter_by_name,
    query::{QueryError, QueryState},
    route::Route,
};

/// What the list page should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus<'a> {
    Loading,
    Failed(&'a str),
    /// The query succeeded but returned nothing
    Empty,
    /// The search filtered everything out
    NoMatches(&'a str),
    Items(&'a [PokemonSummary]),
}

/// State of the list page: the list query and the search input
#[derive(Debug, Clone, Default)]
pub struct ListViewModel {
    query: QueryState<Vec<PokemonSummary>>,
    search: String,
    visible: Vec<PokemonSummary>,
}

impl ListViewModel {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn all(&self) -> &[PokemonSummary] {
        self.query.data.as_deref().unwrap_or_default()
    }

    /// Pokémon left after applying the search
    pub fn visible(&self) -> &[PokemonSummary] {
        &self.visible
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.refresh();
    }

    pub fn begin_loading(&mut self) {
        self.query = QueryState {
            loading: true,
            error: None,
            data: self.query.data.take(),
        };
    }

    pub fn resolve(&mut self, result: Result<Vec<PokemonSummary>, QueryError>) {
        self.query = QueryState::resolved(result);
        self.refresh();
    }

    pub fn status(&self) -> ListStatus<'_> {
        if self.query.loading {
            return ListStatus::Loading;
        }

        if let Some(error) = &self.query.error {
            return ListStatus::Failed(&error.message);
        }

        if self.all().is_empty() {
            return ListStatus::Empty;
        }

        if self.visible.is_empty() {
            return ListStatus::NoMatches(&self.search);
        }

        ListStatus::Items(&self.visible)
    }

    fn refresh(&mut self) {
        self.visible = filter_by_name(self.all(), &self.search);
    }
}

/// What the detail drawer should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus<'a> {
    /// No valid id is routed, nothing was requested
    Skipped,
    Loading,
    Failed(&'a str),
    /// The query succeeded but there is no Pokémon with that id
    Missing,
    Ready(&'a PokemonDetail),
}

/// State of the detail drawer
#[derive(Debug, Clone, Default)]
pub struct DetailViewModel {
    requested: Option<i64>,
    query: QueryState<Option<PokemonDetail>>,
}

impl DetailViewModel {
    pub fn requested(&self) -> Option<i64> {
        self.requested
    }

    /// Follows a route change, returning the id that has to be fetched.
    ///
    /// `None` means no request must be issued, either because the route is not a detail
    /// route or because its id is not valid.
    pub fn navigate(&mut self, route: &Route) -> Option<i64> {
        let id = route.detail_id();
        self.requested = id;
        self.query = match id {
            Some(_) => QueryState::loading(),
            None => QueryState::idle(),
        };
        id
    }

    /// Stores the outcome of the details query for `id`. Returns `false` and drops it when the
    /// user already moved to another Pokémon.
    pub fn resolve(&mut self, id: i64, result: Result<Option<PokemonDetail>, QueryError>) -> bool {
        if self.requested != Some(id) {
            return false;
        }

        self.query = QueryState::resolved(result);
        true
    }

    pub fn status(&self) -> DetailStatus<'_> {
        if self.requested.is_none() {
            return DetailStatus::Skipped;
        }

        if self.query.loading {
            return DetailStatus::Loading;
        }

        if let Some(error) = &self.query.error {
            return DetailStatus::Failed(&error.message);
        }

        match self.query.data.as_ref() {
            Some(Some(detail)) => DetailStatus::Ready(detail),
            _ => DetailStatus::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(id: &str, name: &str) -> PokemonSummary {
        PokemonSummary {
            id: id.to_string(),
            name: Some(name.to_string()),
            types: Vec::new(),
            sprite: String::new(),
        }
    }

    fn starters() -> Vec<PokemonSummary> {
        vec![
            pokemon("1", "Bulbasaur"),
            pokemon("4", "Charmander"),
            pokemon("7", "Squirtle"),
        ]
    }

    fn pikachu() -> PokemonDetail {
        PokemonDetail {
            id: 25,
            name: "Pikachu".to_string(),
            types: vec!["Electric".to_string()],
            sprite: String::new(),
            weight: 60,
            height: 4,
            capture_rate: 190,
            stats: Vec::new(),
        }
    }

    #[test]
    fn list_goes_from_loading_to_items() {
        let mut list = ListViewModel::default();
        list.begin_loading();
        assert_eq!(list.status(), ListStatus::Loading);

        list.resolve(Ok(starters()));
        assert_eq!(list.status(), ListStatus::Items(&starters()));
    }

    #[test]
    fn list_reports_errors_verbatim() {
        let mut list = ListViewModel::default();
        list.begin_loading();
        list.resolve(Err(QueryError::new("Network error")));
        assert_eq!(list.status(), ListStatus::Failed("Network error"));

        list.set_search("char".to_string());
        assert_eq!(list.search(), "char");
    }

    #[test]
    fn list_reports_empty_results() {
        let mut list = ListViewModel::default();
        list.resolve(Ok(Vec::new()));
        assert_eq!(list.status(), ListStatus::Empty);
    }

    #[test]
    fn search_filters_and_clearing_restores() {
        let mut list = ListViewModel::default();
        list.resolve(Ok(starters()));

        list.set_search("char".to_string());
        assert_eq!(list.status(), ListStatus::Items(&[pokemon("4", "Charmander")]));

        list.set_search("pikachu".to_string());
        assert_eq!(list.status(), ListStatus::NoMatches("pikachu"));

        list.set_search(String::new());
        assert_eq!(list.visible(), starters().as_slice());
    }

    #[test]
    fn items_status_borrows_the_visible_list() {
        let mut list = ListViewModel::default();
        list.resolve(Ok(starters()));

        let ListStatus::Items(items) = list.status() else {
            panic!("expected items, got {:?}", list.status());
        };
        assert!(std::ptr::eq(items, list.visible()));
    }

    #[test]
    fn search_applies_to_data_that_arrives_later() {
        let mut list = ListViewModel::default();
        list.set_search("SQUIRTLE".to_string());
        list.resolve(Ok(starters()));
        assert_eq!(list.visible(), &[pokemon("7", "Squirtle")]);
    }

    #[test]
    fn reloading_keeps_previous_data_until_resolved() {
        let mut list = ListViewModel::default();
        list.resolve(Ok(starters()));
        list.begin_loading();
        assert_eq!(list.all().len(), 3);
        assert_eq!(list.status(), ListStatus::Loading);
    }

    #[test]
    fn invalid_ids_skip_the_query() {
        let mut detail = DetailViewModel::default();
        assert_eq!(detail.navigate(&Route::detail("abc")), None);
        assert_eq!(detail.status(), DetailStatus::Skipped);

        assert_eq!(detail.navigate(&Route::List), None);
        assert_eq!(detail.status(), DetailStatus::Skipped);
    }

    #[test]
    fn detail_goes_from_loading_to_ready() {
        let mut detail = DetailViewModel::default();
        assert_eq!(detail.navigate(&Route::detail("25")), Some(25));
        assert_eq!(detail.status(), DetailStatus::Loading);

        assert!(detail.resolve(25, Ok(Some(pikachu()))));
        assert_eq!(detail.status(), DetailStatus::Ready(&pikachu()));
    }

    #[test]
    fn detail_reports_errors_and_missing_pokemon() {
        let mut detail = DetailViewModel::default();
        detail.navigate(&Route::detail("25"));
        detail.resolve(25, Err(QueryError::new("Failed to fetch")));
        assert_eq!(detail.status(), DetailStatus::Failed("Failed to fetch"));

        detail.navigate(&Route::detail("99999"));
        detail.resolve(99999, Ok(None));
        assert_eq!(detail.status(), DetailStatus::Missing);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut detail = DetailViewModel::default();
        detail.navigate(&Route::detail("25"));
        detail.navigate(&Route::detail("150"));

        assert!(!detail.resolve(25, Ok(Some(pikachu()))));
        assert_eq!(detail.status(), DetailStatus::Loading);

        detail.navigate(&Route::List);
        assert!(!detail.resolve(150, Ok(None)));
        assert_eq!(detail.status(), DetailStatus::Skipped);
    }
}
