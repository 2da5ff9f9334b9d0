//! Readers over the server-rendered form the edit page enhances.
//!
//! The server renders a plain HTML form; the app reads its values and
//! options out of the DOM at mount and takes over rendering from there.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::components::contest::multi_select::SelectOption;

/// Value of a server-rendered `<input>`, if present.
pub fn input_value(document: &Document, id: &str) -> Option<String> {
    let input = document
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    Some(input.value())
}

/// Text content of an element, if present.
pub fn inner_text(document: &Document, id: &str) -> Option<String> {
    let element = document
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(element.inner_text())
}

/// Options of a server-rendered `<select multiple>` plus its current
/// selection. Missing element yields empty lists; the form then starts
/// from scratch.
pub fn select_options(document: &Document, id: &str) -> (Vec<SelectOption>, Vec<String>) {
    let mut options = Vec::new();
    let mut selected = Vec::new();

    let Some(select) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
    else {
        return (options, selected);
    };

    let list = select.options();
    for index in 0..list.length() {
        let Some(element) = list.item(index) else {
            continue;
        };
        let Ok(option) = element.dyn_into::<HtmlOptionElement>() else {
            continue;
        };
        let value = option.value();
        if option.selected() {
            selected.push(value.clone());
        }
        options.push(SelectOption {
            value,
            label: option.text(),
        });
    }
    (options, selected)
}
