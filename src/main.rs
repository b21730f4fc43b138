// SPDX-License-Identifier: GPL-3.0-only

use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod flags;
mod i18n;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default()
        .size_limits(cosmic::iced::Limits::NONE.min_width(400.0).min_height(300.0))
        .size(cosmic::iced::Size::new(1200.0, 800.0));

    // Starts the application's event loop with the flags read from config, env and args.
    cosmic::app::run::<app::AppModel>(settings, flags::flags())
}

/// `RUST_LOG` when it is set and valid, `info` otherwise
fn log_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::filter_from;

    #[test]
    fn explicit_levels_are_not_capped_at_info() {
        assert_eq!(
            filter_from(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            filter_from(Some("warn")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn unset_or_blank_defaults_to_info() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter_from(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }
}
