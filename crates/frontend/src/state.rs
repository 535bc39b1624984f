//! View state for the book browser.
//!
//! Each piece of interactive state is a plain value with an explicit
//! transition function. Components derive classes and markup from these
//! values instead of toggling classes directly.

use std::rc::Rc;

use book_types::Book;
use yew::Reducible;

use crate::api::BookQuery;

/// Genre filter selection over a fixed row of buttons.
///
/// Buttons are addressed by index. The button that was active when the
/// page loaded is the "all genres" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    labels: Vec<String>,
    all_genres: Option<usize>,
    active: Option<usize>,
}

impl FilterBar {
    /// Create a filter bar from button labels and the initially active button.
    pub fn new(labels: Vec<String>, initially_active: Option<usize>) -> Self {
        let active = initially_active.filter(|&i| i < labels.len());
        Self {
            labels,
            all_genres: active,
            active,
        }
    }

    /// Index of the selected button.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Handle a click on the button at `index`.
    ///
    /// Selects the button and returns the list to load, or `None` when the
    /// button was already selected (or does not exist).
    pub fn click(&mut self, index: usize) -> Option<BookQuery> {
        if index >= self.labels.len() || self.is_active(index) {
            return None;
        }
        self.active = Some(index);
        Some(self.query_for(index))
    }

    fn query_for(&self, index: usize) -> BookQuery {
        if self.all_genres == Some(index) {
            BookQuery::MostPopular
        } else {
            BookQuery::Genre(self.labels[index].clone())
        }
    }
}

/// Open/closed state of the profile dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Handle a document click; `inside_menu` tells whether the target is
    /// within the profile menu.
    pub fn click(&mut self, inside_menu: bool) {
        self.open = inside_menu && !self.open;
    }
}

/// A click somewhere in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentClick {
    pub inside_menu: bool,
}

impl Reducible for Dropdown {
    type Action = DocumentClick;

    fn reduce(self: Rc<Self>, action: DocumentClick) -> Rc<Self> {
        let mut next = *self;
        next.click(action.inside_menu);
        Rc::new(next)
    }
}

/// Ticket identifying one issued book list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter deciding which in-flight response may update the list.
#[derive(Debug, Default)]
pub struct RequestGate {
    latest: u64,
}

impl RequestGate {
    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// What the card container currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListContents {
    /// Server-rendered cards, not yet replaced
    #[default]
    Prerendered,
    /// Cards for these books, in response order
    Books(Rc<Vec<Book>>),
}

impl ListContents {
    /// Contents after a request settles. A failed request empties the list.
    pub fn settled<E>(result: Result<Vec<Book>, E>) -> Self {
        Self::Books(Rc::new(result.unwrap_or_default()))
    }

    /// Books to render; empty while the server-rendered cards are shown.
    pub fn books(&self) -> &[Book] {
        match self {
            Self::Prerendered => &[],
            Self::Books(books) => books.as_slice(),
        }
    }
}
