//! Book card component.

use book_types::{Book, BookCardView};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for BookCard component.
#[derive(Properties, PartialEq)]
pub struct BookCardProps {
    pub book: Book,
}

/// Book card component.
///
/// Title, author line and summary are inserted as text nodes, never
/// parsed as markup.
#[function_component(BookCard)]
pub fn book_card(props: &BookCardProps) -> Html {
    let card = BookCardView::from(&props.book);
    let details_href = Route::BookDetails {
        id: card.id.clone(),
    }
    .to_path();

    html! {
        <div class="book-card">
            <div class="content-wrapper">
                <img class="book-card-img" src={card.image_src} alt="" />
                <div class="card-content">
                    <div class="book-name">{ card.title }</div>
                    <div class="book-by">{ card.author_line }</div>
                    <div class="book-sum card-sum">{ card.summary }</div>
                </div>
            </div>
            <div class="like-profile"></div>
            <div class="like-name">
                <div class="details-wrapper">
                    <span>{"Explore Details"}</span>
                    <a href={details_href}>{"  HERE"}</a>
                </div>
            </div>
        </div>
    }
}
