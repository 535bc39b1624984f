//! Book list component.

use yew::prelude::*;

use crate::components::BookCard;
use crate::state::ListContents;

/// Properties for BookList component.
#[derive(Properties, PartialEq)]
pub struct BookListProps {
    pub contents: ListContents,
}

/// One card per book, in response order.
#[function_component(BookList)]
pub fn book_list(props: &BookListProps) -> Html {
    html! {
        { for props.contents.books().iter().map(|book| {
            html! { <BookCard book={book.clone()} /> }
        })}
    }
}
