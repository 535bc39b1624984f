//! Frontend configuration.

/// Top-level configuration for the book browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub selectors: PageSelectors,
}

/// Configuration for the book endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every request path (default: same origin)
    pub base_url: String,
    /// Path of the most-popular listing (default: /most_popular_books_json)
    pub most_popular_path: String,
    /// Path prefix of the per-genre listing (default: /books_by_genre_json)
    pub genre_path: String,
    /// Percent-encode the genre segment (default: false, sent verbatim)
    pub encode_genre: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            most_popular_path: "/most_popular_books_json".to_string(),
            genre_path: "/books_by_genre_json".to_string(),
            encode_genre: false,
        }
    }
}

/// Selectors and class names of the server-rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSelectors {
    pub genre_button: String,
    pub active_genre_button: String,
    pub card_container: String,
    pub profile_menu: String,
    pub dropdown: String,
    /// Marker class on the selected genre button
    pub active_class: String,
    /// Marker class on an open dropdown
    pub show_class: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            genre_button: ".book-type".to_string(),
            active_genre_button: ".book-type.active".to_string(),
            card_container: ".book-cards".to_string(),
            profile_menu: ".profile-menu".to_string(),
            dropdown: ".dropdown-content".to_string(),
            active_class: "active".to_string(),
            show_class: "show".to_string(),
        }
    }
}
