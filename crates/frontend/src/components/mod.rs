//! UI components.
//!
//! `BookCard` and `BookList` render markup; `GenreBar` and `ProfileMenu`
//! drive elements the server already rendered.

mod book_card;
mod book_list;
mod genre_bar;
mod profile_menu;

pub use book_card::BookCard;
pub use book_list::BookList;
pub use genre_bar::GenreBar;
pub use profile_menu::ProfileMenu;
