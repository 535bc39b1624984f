//! Genre filter controller.
//!
//! The genre buttons are rendered by the server. This component attaches
//! one click listener per button and keeps the active marker in sync with
//! a [`FilterBar`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::Element;
use yew::prelude::*;

use crate::api::BookQuery;
use crate::page::{GenreButtons, set_class};
use crate::state::FilterBar;

/// Properties for GenreBar component.
#[derive(Properties, PartialEq)]
pub struct GenreBarProps {
    pub buttons: GenreButtons,
    /// Class marking the selected button
    pub active_class: AttrValue,
    /// Called with the list to load when the selection changes
    pub on_select: Callback<BookQuery>,
}

/// Genre filter controller component.
#[function_component(GenreBar)]
pub fn genre_bar(props: &GenreBarProps) -> Html {
    let on_select = props.on_select.clone();
    let active_class = props.active_class.clone();

    use_effect_with(props.buttons.clone(), move |buttons| {
        let bar = Rc::new(RefCell::new(FilterBar::new(
            buttons.labels.clone(),
            buttons.active,
        )));
        sync_markers(&buttons.elements, &bar.borrow(), &active_class);

        let listeners: Vec<EventListener> = buttons
            .elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let bar = bar.clone();
                let elements = buttons.elements.clone();
                let on_select = on_select.clone();
                let active_class = active_class.clone();

                EventListener::new_with_options(
                    element,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let query = bar.borrow_mut().click(index);
                        sync_markers(&elements, &bar.borrow(), &active_class);
                        if let Some(query) = query {
                            on_select.emit(query);
                        }
                    },
                )
            })
            .collect();

        move || drop(listeners)
    });

    html! {}
}

/// Put the active marker on the selected button and nowhere else.
fn sync_markers(elements: &[Element], bar: &FilterBar, active_class: &str) {
    for (index, element) in elements.iter().enumerate() {
        set_class(element, active_class, bar.is_active(index));
    }
}
