// SPDX-License-Identifier: GPL-3.0-only

use std::collections::{HashMap, HashSet};

use cosmic::iced_core::image;

/// Downloaded sprites, keyed by their url. Owned by the application model.
#[derive(Default)]
pub struct SpriteCache {
    cache: HashMap<String, image::Handle>,
}

impl SpriteCache {
    pub fn insert(&mut self, url: String, bytes: Vec<u8>) {
        self.cache.insert(url, image::Handle::from_bytes(bytes));
    }

    pub fn get(&self, url: &str) -> Option<&image::Handle> {
        self.cache.get(url)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Urls out of `urls` that still have to be downloaded, without blanks or duplicates
    pub fn missing(&self, urls: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut seen = HashSet::new();
        urls.into_iter()
            .filter(|url| !url.trim().is_empty() && !self.cache.contains_key(url))
            .filter(|url| seen.insert(url.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_skips_cached_blank_and_repeated_urls() {
        let mut sprites = SpriteCache::default();
        sprites.insert("https://example.com/1.png".to_string(), vec![1, 2, 3]);

        let missing = sprites.missing([
            "https://example.com/1.png".to_string(),
            String::new(),
            "https://example.com/4.png".to_string(),
            "https://example.com/4.png".to_string(),
        ]);

        assert_eq!(missing, vec!["https://example.com/4.png".to_string()]);
        assert_eq!(sprites.len(), 1);
        assert!(sprites.get("https://example.com/1.png").is_some());
    }
}
