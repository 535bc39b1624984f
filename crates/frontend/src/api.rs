//! Client for the book listing endpoints.

use book_types::Book;
use gloo_net::http::Request;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use thiserror::Error;

use crate::config::ApiConfig;

/// Characters escaped when the genre is encoded as a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Errors from book list requests.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("{url} responded with status {status}")]
    Status { status: u16, url: String },

    #[error("Malformed book list: {0}")]
    Decode(gloo_net::Error),
}

/// Result type for book list requests.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Which book list to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookQuery {
    /// Globally most popular books
    MostPopular,
    /// Books of one genre, named by the button label
    Genre(String),
}

/// Client for the book endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct BookApi {
    config: ApiConfig,
}

impl BookApi {
    /// Create a new BookApi with the given config.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Request URL for a query.
    ///
    /// Genres are interpolated verbatim unless `encode_genre` is set, so a
    /// genre containing `/` or `?` changes the request target.
    pub fn url(&self, query: &BookQuery) -> String {
        match query {
            BookQuery::MostPopular => {
                format!("{}{}", self.config.base_url, self.config.most_popular_path)
            }
            BookQuery::Genre(genre) => {
                let segment = if self.config.encode_genre {
                    utf8_percent_encode(genre, PATH_SEGMENT).to_string()
                } else {
                    genre.clone()
                };
                format!(
                    "{}{}/{}",
                    self.config.base_url, self.config.genre_path, segment
                )
            }
        }
    }

    /// Fetch the book list for a query.
    pub async fn fetch(&self, query: &BookQuery) -> Result<Vec<Book>> {
        let url = self.url(query);
        log::debug!("Loading books from {}", url);

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url,
            });
        }

        response
            .json::<Vec<Book>>()
            .await
            .map_err(FetchError::Decode)
    }
}
