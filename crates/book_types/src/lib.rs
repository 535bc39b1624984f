//! Shared types for the bookcase book browser.
//!
//! This crate defines the book records served by the backend's JSON
//! endpoints and the card view model the frontend renders from them.

use serde::{Deserialize, Serialize};

/// Cover shown when a book has no usable thumbnail.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://media.istockphoto.com/id/157181664/photo/ornate-old-book-cover.jpg?s=612x612&w=0&k=20&c=miwxfzz5SZBkr4Ae3nJ1KXgsuE7Z6JFLqIQkHNMgDRQ=";

/// Author line used when a book lists no authors.
pub const UNKNOWN_AUTHOR: &str = "by Unknown Author";

/// A single book record as returned by the book endpoints.
///
/// Only the fields the card needs are modelled; anything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Volume identifier, used to address the details page
    pub id: String,
    /// Bibliographic metadata
    #[serde(rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

/// Bibliographic metadata of a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeInfo {
    pub title: String,
    /// Author names in display order
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageLinks", default)]
    pub image_links: Option<ImageLinks>,
}

/// Cover image links of a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Book {
    /// Create a book with only an id and a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            volume_info: VolumeInfo {
                title: title.into(),
                authors: None,
                description: None,
                image_links: None,
            },
        }
    }

    /// Set the author list.
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.volume_info.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.volume_info.description = Some(description.into());
        self
    }

    /// Set the thumbnail URL.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.volume_info.image_links = Some(ImageLinks {
            thumbnail: Some(thumbnail.into()),
        });
        self
    }

    /// Thumbnail URL if the record carries a non-empty one.
    pub fn thumbnail(&self) -> Option<&str> {
        self.volume_info
            .image_links
            .as_ref()
            .and_then(|links| links.thumbnail.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Display data for one book card.
///
/// Every fallback is resolved here so the view only copies strings into
/// the markup.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCardView {
    /// Volume identifier for the details link
    pub id: String,
    pub title: String,
    /// "by ..." line
    pub author_line: String,
    pub summary: String,
    /// Cover image URL, never empty
    pub image_src: String,
}

impl From<&Book> for BookCardView {
    fn from(book: &Book) -> Self {
        let info = &book.volume_info;
        Self {
            id: book.id.clone(),
            title: info.title.clone(),
            author_line: author_line(info.authors.as_deref()),
            summary: info.description.clone().unwrap_or_default(),
            image_src: book.thumbnail().unwrap_or(PLACEHOLDER_THUMBNAIL).to_string(),
        }
    }
}

/// Format the author line for a card.
pub fn author_line(authors: Option<&[String]>) -> String {
    match authors {
        Some(names) if !names.is_empty() => format!("by {}", names.join(", ")),
        _ => UNKNOWN_AUTHOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_deserialization() {
        let json = r#"{
            "kind": "books#volume",
            "id": "zyTCAlFPjgYC",
            "volumeInfo": {
                "title": "The Google Story",
                "authors": ["David A. Vise", "Mark Malseed"],
                "description": "Here is the story behind one of the most remarkable Internet successes.",
                "pageCount": 207,
                "imageLinks": {
                    "smallThumbnail": "http://books.google.com/small",
                    "thumbnail": "http://books.google.com/thumb"
                }
            }
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();

        assert_eq!(book.id, "zyTCAlFPjgYC");
        assert_eq!(book.volume_info.title, "The Google Story");
        assert_eq!(
            book.volume_info.authors,
            Some(vec!["David A. Vise".to_string(), "Mark Malseed".to_string()])
        );
        assert_eq!(book.thumbnail(), Some("http://books.google.com/thumb"));
    }

    #[test]
    fn test_book_deserialization_minimal() {
        let json = r#"{"id": "abc", "volumeInfo": {"title": "Bare", "imageLinks": {}}}"#;

        let book: Book = serde_json::from_str(json).unwrap();

        assert_eq!(book.volume_info.authors, None);
        assert_eq!(book.volume_info.description, None);
        assert_eq!(book.volume_info.image_links, Some(ImageLinks::default()));
        assert_eq!(book.thumbnail(), None);
    }

    #[test]
    fn test_book_without_volume_info_is_rejected() {
        let json = r#"{"id": "abc"}"#;

        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn test_book_without_title_is_rejected() {
        let json = r#"{"id": "abc", "volumeInfo": {"authors": ["Anon"]}}"#;

        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn test_book_list_keeps_response_order() {
        let json = r#"[
            {"id": "3", "volumeInfo": {"title": "Third"}},
            {"id": "1", "volumeInfo": {"title": "First"}},
            {"id": "2", "volumeInfo": {"title": "Second"}}
        ]"#;

        let books: Vec<Book> = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_author_line_joins_names() {
        let book = Book::new("1", "Title").with_authors(["a", "b", "c"]);

        let card = BookCardView::from(&book);

        assert_eq!(card.author_line, "by a, b, c");
    }

    #[test]
    fn test_author_line_single_author() {
        let book = Book::new("1", "Title").with_authors(["Ursula K. Le Guin"]);

        assert_eq!(BookCardView::from(&book).author_line, "by Ursula K. Le Guin");
    }

    #[test]
    fn test_author_line_absent_authors() {
        let book = Book::new("1", "Title");

        assert_eq!(BookCardView::from(&book).author_line, "by Unknown Author");
    }

    #[test]
    fn test_author_line_empty_authors() {
        let book = Book::new("1", "Title").with_authors(Vec::<String>::new());

        assert_eq!(BookCardView::from(&book).author_line, "by Unknown Author");
    }

    #[test]
    fn test_thumbnail_used_when_present() {
        let book = Book::new("1", "Title").with_thumbnail("http://img/cover.jpg");

        assert_eq!(BookCardView::from(&book).image_src, "http://img/cover.jpg");
    }

    #[test]
    fn test_placeholder_without_image_links() {
        let book = Book::new("1", "Title");

        assert_eq!(BookCardView::from(&book).image_src, PLACEHOLDER_THUMBNAIL);
    }

    #[test]
    fn test_placeholder_without_thumbnail() {
        let mut book = Book::new("1", "Title");
        book.volume_info.image_links = Some(ImageLinks::default());

        assert_eq!(BookCardView::from(&book).image_src, PLACEHOLDER_THUMBNAIL);
    }

    #[test]
    fn test_placeholder_for_empty_thumbnail() {
        let book = Book::new("1", "Title").with_thumbnail("");

        assert_eq!(BookCardView::from(&book).image_src, PLACEHOLDER_THUMBNAIL);
    }

    #[test]
    fn test_card_text_is_verbatim() {
        let book = Book::new("x1", "<b>Bold</b> & Co")
            .with_description("Line one\n<script>alert(1)</script>");

        let card = BookCardView::from(&book);

        assert_eq!(card.id, "x1");
        assert_eq!(card.title, "<b>Bold</b> & Co");
        assert_eq!(card.summary, "Line one\n<script>alert(1)</script>");
    }

    #[test]
    fn test_missing_description_renders_empty() {
        let book = Book::new("1", "Title");

        assert_eq!(BookCardView::from(&book).summary, "");
    }
}
