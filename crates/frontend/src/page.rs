//! Discovery of the server-rendered page the browser attaches to.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, Node};

use crate::config::PageSelectors;

/// Errors while locating the page to attach to.
#[derive(Error, Debug)]
pub enum MountError {
    #[error("No global window")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Document has no body")]
    NoBody,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}

/// Result type for page discovery.
pub type Result<T> = std::result::Result<T, MountError>;

/// The genre filter buttons found on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreButtons {
    pub elements: Vec<Element>,
    /// Trimmed text of each button
    pub labels: Vec<String>,
    /// Button carrying the active marker at load time
    pub active: Option<usize>,
}

/// The card list container and the cards the server rendered into it.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContainer {
    pub host: Element,
    pub prerendered: Vec<Element>,
}

impl CardContainer {
    /// Remove the server-rendered cards. Calling this again is harmless.
    pub fn clear_prerendered(&self) {
        for card in &self.prerendered {
            card.remove();
        }
    }
}

/// The profile menu and its dropdown panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMenuParts {
    pub menu: Element,
    pub dropdown: Element,
}

/// Everything the app attaches to. Missing parts disable only their feature.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMounts {
    pub genres: Option<GenreButtons>,
    pub cards: Option<CardContainer>,
    pub profile: Option<ProfileMenuParts>,
}

impl PageMounts {
    /// Locate the genre buttons, card container and profile menu.
    pub fn discover(document: &Document, selectors: &PageSelectors) -> Result<Self> {
        let genres = discover_genres(document, selectors)?;
        if genres.is_none() {
            log::warn!("No {} buttons found; genre filter disabled", selectors.genre_button);
        }

        let cards = document
            .query_selector(&selectors.card_container)?
            .map(|host| CardContainer {
                prerendered: children(&host),
                host,
            });
        if cards.is_none() {
            log::warn!("No {} container found; book list disabled", selectors.card_container);
        }

        let profile = discover_profile(document, selectors)?;

        Ok(Self {
            genres,
            cards,
            profile,
        })
    }
}

fn discover_genres(document: &Document, selectors: &PageSelectors) -> Result<Option<GenreButtons>> {
    let nodes = document.query_selector_all(&selectors.genre_button)?;
    let elements: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    if elements.is_empty() {
        return Ok(None);
    }

    let labels = elements
        .iter()
        .map(|el| el.text_content().unwrap_or_default().trim().to_string())
        .collect();

    let active = document
        .query_selector(&selectors.active_genre_button)?
        .and_then(|default| elements.iter().position(|el| *el == default));

    Ok(Some(GenreButtons {
        elements,
        labels,
        active,
    }))
}

fn discover_profile(
    document: &Document,
    selectors: &PageSelectors,
) -> Result<Option<ProfileMenuParts>> {
    let Some(menu) = document.query_selector(&selectors.profile_menu)? else {
        log::warn!("No {} found; profile dropdown disabled", selectors.profile_menu);
        return Ok(None);
    };
    let Some(dropdown) = menu.query_selector(&selectors.dropdown)? else {
        log::warn!(
            "{} has no {}; profile dropdown disabled",
            selectors.profile_menu,
            selectors.dropdown
        );
        return Ok(None);
    };

    Ok(Some(ProfileMenuParts { menu, dropdown }))
}

fn children(host: &Element) -> Vec<Element> {
    let collection = host.children();
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

/// Current document.
pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)
}

/// Append an empty element to `<body>` to host the app.
pub fn create_app_root(document: &Document) -> Result<Element> {
    let body = document.body().ok_or(MountError::NoBody)?;
    let root = document.create_element("div")?;
    root.set_class_name("bookcase-root");
    body.append_child(&root)?;
    Ok(root)
}

/// Add or remove a class so that its presence equals `on`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("Failed to update class {}: {:?}", class, e);
    }
}

/// Whether an event's target lies within `container` (inclusive).
pub fn event_within(event: &Event, container: &Element) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}
