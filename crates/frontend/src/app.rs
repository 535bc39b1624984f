//! Root application component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{BookApi, BookQuery};
use crate::components::{BookList, GenreBar, ProfileMenu};
use crate::config::AppConfig;
use crate::page::{CardContainer, PageMounts};
use crate::state::{ListContents, RequestGate};

/// Server routes linked from the browser.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/book_details/:id")]
    BookDetails { id: String },
}

/// Properties for App component.
#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
    pub mounts: PageMounts,
}

/// Main application component.
///
/// Owns the list contents and the request gate. The card list is rendered
/// into the page's card container through a portal.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let contents = use_state(ListContents::default);
    let gate = use_mut_ref(RequestGate::default);

    let on_select = {
        let contents = contents.clone();
        let deps = (
            BookApi::new(props.config.api.clone()),
            props.mounts.cards.clone(),
        );

        use_callback(
            deps,
            move |query: BookQuery, (api, cards): &(BookApi, Option<CardContainer>)| {
                let Some(cards) = cards.clone() else {
                    log::warn!("No card container; ignoring {:?}", query);
                    return;
                };

                let ticket = gate.borrow_mut().issue();
                let api = api.clone();
                let gate = gate.clone();
                let contents = contents.clone();

                wasm_bindgen_futures::spawn_local(async move {
                    let result = api.fetch(&query).await;

                    if !gate.borrow().is_current(ticket) {
                        log::debug!("Dropping stale response for {:?}", query);
                        return;
                    }
                    if let Err(e) = &result {
                        log::error!("Failed to load books for {:?}: {}", query, e);
                    }

                    cards.clear_prerendered();
                    contents.set(ListContents::settled(result));
                });
            },
        )
    };

    let selectors = &props.config.selectors;
    let book_list = props
        .mounts
        .cards
        .as_ref()
        .map(|cards| {
            yew::create_portal(
                html! { <BookList contents={(*contents).clone()} /> },
                cards.host.clone(),
            )
        })
        .unwrap_or_default();

    html! {
        <>
            if let Some(buttons) = props.mounts.genres.clone() {
                <GenreBar
                    {buttons}
                    active_class={selectors.active_class.clone()}
                    {on_select}
                />
            }
            if let Some(parts) = props.mounts.profile.clone() {
                <ProfileMenu {parts} show_class={selectors.show_class.clone()} />
            }
            { book_list }
        </>
    }
}
