// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use cosmic::app::{Core, context_drawer};
use cosmic::iced::{Alignment, Length, Task};
use cosmic::widget::{self, about::About, menu};
use cosmic::{Application, ApplicationExt, Apply, Element, cosmic_config, theme};
use dexcore::{
    DexClient,
    display::format_number,
    entities::{PokemonDetail, PokemonSummary},
    query::QueryError,
    route::Route,
    view_model::{DetailStatus, DetailViewModel, ListStatus, ListViewModel},
};
use tracing::{debug, error, info, warn};

use crate::app::{app_menu::MenuAction, context_page::ContextPage, sprite_cache::SpriteCache};
use crate::config::{AppTheme, Config, POKEMON_PER_ROW_OPTIONS};
use crate::fl;
use crate::flags::Flags;

mod app_menu;
mod context_page;
mod details;
mod sprite_cache;
mod style;

pub const APP_ID: &str = "io.github.graphdex.GraphDex";

const POKEAPI_URL: &str = "https://pokeapi.co";
const CARD_SPRITE_SIZE: f32 = 120.0;

/// This is the struct that represents your application.
/// It is used to define the data that will be used by your application.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// Contains the about page information
    about: About,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration handler, `None` when the config could not be opened
    config_handler: Option<cosmic_config::Config>,
    /// Configuration data that persists between application runs.
    config: Config,
    /// Why the http client could not be built, shown by both pages in place of their data
    client: Result<DexClient, QueryError>,
    /// Currently open route
    route: Route,
    /// State of the list page
    list: ListViewModel,
    /// State of the details drawer
    detail: DetailViewModel,
    /// Downloaded sprites
    sprites: SpriteCache,
    /// Labels of the theme dropdown
    theme_labels: Vec<String>,
    /// Labels of the Pokémon per row dropdown
    per_row_labels: Vec<String>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    MenuAction(MenuAction),
    Navigate(Route),
    CloseDetails,
    Search(String),
    ListLoaded(Result<Vec<PokemonSummary>, QueryError>),
    DetailsLoaded(i64, Result<Option<PokemonDetail>, QueryError>),
    SpritesLoaded(Vec<(String, Vec<u8>)>),
    UpdateTheme(usize),
    UpdatePokemonPerRow(usize),
    ReloadData,
}

/// Create a COSMIC application from the app model
impl Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = Flags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .version(env!("CARGO_PKG_VERSION"))
            .license(env!("CARGO_PKG_LICENSE"))
            .comments(fl!("nintendo-text"))
            .links([(fl!("pokeapi-text"), POKEAPI_URL)]);

        let client = DexClient::new(flags.client_config)
            .inspect(|client| info!(endpoint = %client.config().endpoint, "pokéapi client ready"))
            .inspect_err(|e| error!("failed to build the http client: {e}"))
            .map_err(QueryError::from);

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            key_binds: HashMap::new(),
            config_handler: flags.config_handler,
            config: flags.config,
            client,
            route: Route::List,
            list: ListViewModel::default(),
            detail: DetailViewModel::default(),
            sprites: SpriteCache::default(),
            theme_labels: vec![fl!("match-desktop"), fl!("dark"), fl!("light")],
            per_row_labels: POKEMON_PER_ROW_OPTIONS
                .iter()
                .map(|n| n.to_string())
                .collect(),
        };

        let tasks = vec![
            cosmic::command::set_theme(app.config.app_theme.theme()),
            app.load_list(),
            app.navigate(flags.route),
        ];

        (app, Task::batch(tasks))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![
                    menu::Item::Button(fl!("reload-data"), None, MenuAction::Reload),
                    menu::Item::Divider,
                    menu::Item::Button(fl!("settings"), None, MenuAction::Settings),
                    menu::Item::Button(fl!("about"), None, MenuAction::About),
                ],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        self.context_page.display(self)
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let spacing = theme::active().cosmic().spacing;

        let search = widget::search_input(fl!("search"), self.list.search())
            .on_input(Message::Search)
            .on_clear(Message::Search(String::new()))
            .width(Length::Fill);

        let body: Element<'_, Message> = match self.list.status() {
            ListStatus::Loading => centered(widget::text::body(fl!("loading-pokemon"))),
            ListStatus::Failed(message) => centered(
                widget::column()
                    .push(widget::text::title4(fl!("failed-to-load")))
                    .push(widget::text::body(message))
                    .align_x(Alignment::Center)
                    .spacing(spacing.space_xxs),
            ),
            ListStatus::Empty => centered(widget::text::body(fl!("no-pokemon"))),
            ListStatus::NoMatches(query) => {
                centered(widget::text::body(fl!("no-results", query = query)))
            }
            ListStatus::Items(visible) => self.pokemon_grid(visible),
        };

        widget::column()
            .push(widget::container(search).padding(spacing.space_xs))
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::LaunchUrl(url) => {
                if let Err(e) = open::that_detached(&url) {
                    warn!(%url, "failed to open url: {e}");
                }
            }
            Message::ToggleContextPage(context_page) => {
                if self.route.is_detail() {
                    self.leave_details();
                }

                if self.context_page == context_page {
                    // Close the context drawer if the toggled context page is the same.
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    // Open the context drawer to display the requested context page.
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }
            Message::MenuAction(action) => {
                return match action {
                    MenuAction::About => {
                        self.update(Message::ToggleContextPage(ContextPage::About))
                    }
                    MenuAction::Settings => {
                        self.update(Message::ToggleContextPage(ContextPage::Settings))
                    }
                    MenuAction::Reload => self.update(Message::ReloadData),
                };
            }
            Message::Navigate(route) => return self.navigate(route),
            Message::CloseDetails => return self.navigate(Route::List),
            Message::Search(search) => self.list.set_search(search),
            Message::ListLoaded(result) => {
                match &result {
                    Ok(list) => info!(count = list.len(), "pokémon list loaded"),
                    Err(e) => error!("failed to load the pokémon list: {e}"),
                }

                self.list.resolve(result);
                let urls = self.list.all().iter().map(|p| p.sprite.clone());
                let missing = self.sprites.missing(urls);
                return self.load_sprites(missing);
            }
            Message::DetailsLoaded(id, result) => {
                if let Err(e) = &result {
                    error!(id, "failed to load pokémon details: {e}");
                }

                if !self.detail.resolve(id, result) {
                    debug!(id, "dropping details of a pokémon that is no longer open");
                    return Task::none();
                }

                let sprite = match self.detail.status() {
                    DetailStatus::Ready(pokemon) => Some(pokemon.sprite.clone()),
                    _ => None,
                };
                let title = self.update_title();
                let missing = self.sprites.missing(sprite);
                return Task::batch(vec![title, self.load_sprites(missing)]);
            }
            Message::SpritesLoaded(sprites) => {
                for (url, bytes) in sprites {
                    self.sprites.insert(url, bytes);
                }
                debug!(cached = self.sprites.len(), "sprites downloaded");
            }
            Message::UpdateTheme(index) => {
                let Some(app_theme) = AppTheme::ALL.get(index).copied() else {
                    return Task::none();
                };
                self.save_config(|config, handler| config.set_app_theme(handler, app_theme));
                self.config.app_theme = app_theme;
                return cosmic::command::set_theme(self.config.app_theme.theme());
            }
            Message::UpdatePokemonPerRow(index) => {
                let Some(per_row) = POKEMON_PER_ROW_OPTIONS.get(index).copied() else {
                    return Task::none();
                };
                self.save_config(|config, handler| config.set_pokemon_per_row(handler, per_row));
                self.config.pokemon_per_row = per_row;
            }
            Message::ReloadData => {
                if let Ok(client) = &self.client {
                    info!("clearing cached responses");
                    client.clear_cache();
                }

                let list = self.load_list();
                let route = self.route.clone();
                return Task::batch(vec![list, self.navigate(route)]);
            }
        }
        Task::none()
    }
}

impl AppModel {
    /// Settings page of the context drawer
    pub fn settings(&self) -> Element<'_, Message> {
        let theme_selected = AppTheme::ALL
            .iter()
            .position(|app_theme| *app_theme == self.config.app_theme);
        let per_row_selected = POKEMON_PER_ROW_OPTIONS
            .iter()
            .position(|per_row| *per_row == self.config.pokemon_per_row);

        widget::settings::view_column(vec![
            widget::settings::section()
                .title(fl!("appearance"))
                .add(widget::settings::item(
                    fl!("theme"),
                    widget::dropdown(&self.theme_labels, theme_selected, Message::UpdateTheme),
                ))
                .add(widget::settings::item(
                    fl!("pokemon-per-row"),
                    widget::dropdown(
                        &self.per_row_labels,
                        per_row_selected,
                        Message::UpdatePokemonPerRow,
                    ),
                ))
                .into(),
            widget::settings::section()
                .title(fl!("data"))
                .add(widget::settings::item(
                    fl!("reload-data-info"),
                    widget::button::suggested(fl!("reload")).on_press(Message::ReloadData),
                ))
                .into(),
        ])
        .into()
    }

    fn pokemon_grid<'a>(&'a self, pokemon: &'a [PokemonSummary]) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;
        let per_row = self.config.pokemon_per_row.max(1);

        let mut grid = widget::column()
            .spacing(spacing.space_s)
            .padding([spacing.space_none, spacing.space_s]);

        for chunk in pokemon.chunks(per_row) {
            let mut row = widget::row().spacing(spacing.space_s);
            for pokemon in chunk {
                row = row.push(self.pokemon_card(pokemon));
            }
            // Keep the cards of the last row as wide as the others
            for _ in chunk.len()..per_row {
                row = row.push(widget::container(widget::column()).width(Length::Fill));
            }
            grid = grid.push(row);
        }

        widget::scrollable(grid).height(Length::Fill).into()
    }

    fn pokemon_card<'a>(&'a self, pokemon: &'a PokemonSummary) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let sprite: Element<'a, Message> = match self.sprites.get(&pokemon.sprite) {
            Some(handle) => widget::Image::new(handle.clone())
                .content_fit(cosmic::iced::ContentFit::Contain)
                .width(Length::Fixed(CARD_SPRITE_SIZE))
                .height(Length::Fixed(CARD_SPRITE_SIZE))
                .into(),
            None => widget::container(widget::column())
                .width(Length::Fixed(CARD_SPRITE_SIZE))
                .height(Length::Fixed(CARD_SPRITE_SIZE))
                .into(),
        };

        let content = widget::column()
            .push(sprite)
            .push(widget::text::caption(format_number(&pokemon.id)))
            .push(widget::text::heading(pokemon.display_name()))
            .push(widget::text::caption(pokemon.types_label()))
            .align_x(Alignment::Center)
            .spacing(spacing.space_xxxs)
            .width(Length::Fill);

        widget::button::custom(content)
            .on_press(Message::Navigate(Route::detail(pokemon.id.clone())))
            .class(theme::Button::Image)
            .padding(spacing.space_s)
            .width(Length::Fill)
            .into()
    }

    /// Opens `route`, querying the details when it points to a valid Pokémon
    fn navigate(&mut self, route: Route) -> Task<cosmic::Action<Message>> {
        debug!(%route, "navigating");
        self.route = route;
        let fetch = self.detail.navigate(&self.route);

        if self.route.is_detail() {
            self.context_page = ContextPage::PokemonDetails;
            self.core.window.show_context = true;
        } else if self.context_page == ContextPage::PokemonDetails {
            self.core.window.show_context = false;
        }

        let title = self.update_title();

        let Some(id) = fetch else {
            if self.route.is_detail() {
                info!(route = %self.route, "not a valid pokémon id, skipping the details query");
            }
            return title;
        };

        let Some(client) = details_client(&mut self.detail, id, &self.client) else {
            return title;
        };

        let details = Task::perform(
            async move { client.pokemon_details(id).await },
            move |result| {
                cosmic::Action::App(Message::DetailsLoaded(id, result.map_err(QueryError::from)))
            },
        );

        Task::batch(vec![title, details])
    }

    /// Forgets the detail route without touching the context drawer
    fn leave_details(&mut self) {
        self.route = Route::List;
        self.detail.navigate(&self.route);
    }

    fn load_list(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(client) = list_client(&mut self.list, &self.client) else {
            return Task::none();
        };

        Task::perform(
            async move { client.pokemon_list().await },
            |result| cosmic::Action::App(Message::ListLoaded(result.map_err(QueryError::from))),
        )
    }

    fn load_sprites(&self, urls: Vec<String>) -> Task<cosmic::Action<Message>> {
        let Ok(client) = self.client.clone() else {
            return Task::none();
        };
        if urls.is_empty() {
            return Task::none();
        }

        Task::perform(
            async move { client.fetch_sprites(urls).await },
            |sprites| cosmic::Action::App(Message::SpritesLoaded(sprites)),
        )
    }

    fn save_config<F>(&mut self, write: F)
    where
        F: FnOnce(&mut Config, &cosmic_config::Config) -> Result<bool, cosmic_config::Error>,
    {
        let Some(handler) = &self.config_handler else {
            return;
        };

        if let Err(e) = write(&mut self.config, handler) {
            warn!("failed to save config: {e}");
        }
    }

    /// Updates the header and window titles.
    fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let mut window_title = fl!("app-title");

        let header_title = match self.detail.status() {
            DetailStatus::Ready(pokemon) => {
                format!("{} {}", format_number(pokemon.id), pokemon.name)
            }
            _ => String::new(),
        };

        if !header_title.is_empty() {
            window_title.push_str(" — ");
            window_title.push_str(&header_title);
        }

        self.set_header_title(header_title);
        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    widget::container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Client for the list query. Without one the list fails with the reason right away.
fn list_client(
    list: &mut ListViewModel,
    client: &Result<DexClient, QueryError>,
) -> Option<DexClient> {
    match client {
        Ok(client) => {
            list.begin_loading();
            Some(client.clone())
        }
        Err(e) => {
            list.resolve(Err(e.clone()));
            None
        }
    }
}

/// Client for the details query of `id`. Without one the requested details fail with the
/// reason right away instead of staying in the loading state.
fn details_client(
    detail: &mut DetailViewModel,
    id: i64,
    client: &Result<DexClient, QueryError>,
) -> Option<DexClient> {
    match client {
        Ok(client) => Some(client.clone()),
        Err(e) => {
            detail.resolve(id, Err(e.clone()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use dexcore::ClientConfig;

    use super::*;

    fn broken_client() -> Result<DexClient, QueryError> {
        Err(QueryError::new("builder error"))
    }

    #[test]
    fn details_without_a_client_show_the_error() {
        let mut detail = DetailViewModel::default();
        assert_eq!(detail.navigate(&Route::detail("25")), Some(25));
        assert_eq!(detail.status(), DetailStatus::Loading);

        assert!(details_client(&mut detail, 25, &broken_client()).is_none());
        assert_eq!(detail.status(), DetailStatus::Failed("builder error"));
    }

    #[test]
    fn details_with_a_client_keep_loading() {
        let client = DexClient::new(ClientConfig::default()).map_err(QueryError::from);
        let mut detail = DetailViewModel::default();
        detail.navigate(&Route::detail("25"));

        assert!(details_client(&mut detail, 25, &client).is_some());
        assert_eq!(detail.status(), DetailStatus::Loading);
    }

    #[test]
    fn list_without_a_client_shows_the_error() {
        let mut list = ListViewModel::default();
        assert!(list_client(&mut list, &broken_client()).is_none());
        assert_eq!(list.status(), ListStatus::Failed("builder error"));
    }
}
