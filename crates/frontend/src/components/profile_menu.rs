//! Profile dropdown controller.

use gloo_events::EventListener;
use yew::prelude::*;

use crate::page::{ProfileMenuParts, event_within, set_class};
use crate::state::{DocumentClick, Dropdown};

/// Properties for ProfileMenu component.
#[derive(Properties, PartialEq)]
pub struct ProfileMenuProps {
    pub parts: ProfileMenuParts,
    /// Class marking an open dropdown
    pub show_class: AttrValue,
}

/// Profile dropdown controller component.
///
/// A single document-wide listener toggles the dropdown for clicks inside
/// the menu and closes it for clicks anywhere else.
#[function_component(ProfileMenu)]
pub fn profile_menu(props: &ProfileMenuProps) -> Html {
    let dropdown = {
        let initially_open = props
            .parts
            .dropdown
            .class_list()
            .contains(&props.show_class);
        use_reducer_eq(move || Dropdown::new(initially_open))
    };

    {
        let dispatcher = dropdown.dispatcher();
        use_effect_with(props.parts.menu.clone(), move |menu| {
            let menu = menu.clone();
            let listener = menu.owner_document().map(|document| {
                EventListener::new(&document, "click", move |event| {
                    let inside_menu = event_within(event, &menu);
                    if inside_menu {
                        log::debug!("Profile menu clicked");
                    }
                    dispatcher.dispatch(DocumentClick { inside_menu });
                })
            });
            if listener.is_none() {
                log::warn!("Profile menu is detached from the document");
            }

            move || drop(listener)
        });
    }

    {
        let element = props.parts.dropdown.clone();
        let show_class = props.show_class.clone();
        use_effect_with(dropdown.is_open(), move |open| {
            set_class(&element, &show_class, *open);
        });
    }

    html! {}
}
