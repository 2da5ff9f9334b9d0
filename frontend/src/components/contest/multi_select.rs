use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

/// One selectable entry. `value` is what gets posted; `label` is what the
/// search filter matches against.
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Case-insensitive substring filter over option labels. An empty query
/// keeps everything.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct MultiSelectProps {
    /// Container element id, matching the server-rendered select it replaces.
    pub id: AttrValue,
    pub label: AttrValue,
    pub options: Vec<SelectOption>,
    pub selected: Vec<String>,
    pub on_change: Callback<Vec<String>>,
}

/// Dual-pane searchable multi-select.
///
/// Left pane lists the options not yet selected, right pane the current
/// selection; each has its own search input. Clicking an entry moves it
/// to the other pane. Filters re-apply automatically on every selection
/// change because both views derive from state.
#[function_component(MultiSelect)]
pub fn multi_select(props: &MultiSelectProps) -> Html {
    let selectable_query = use_state(String::new);
    let selection_query = use_state(String::new);
    let selectable_list = use_node_ref();
    let selection_list = use_node_ref();

    let available: Vec<SelectOption> = props
        .options
        .iter()
        .filter(|option| !props.selected.contains(&option.value))
        .cloned()
        .collect();
    let chosen: Vec<SelectOption> = props
        .selected
        .iter()
        .filter_map(|value| props.options.iter().find(|o| &o.value == value).cloned())
        .collect();

    let available_view = filter_options(&available, &selectable_query);
    let chosen_view = filter_options(&chosen, &selection_query);

    let on_selectable_search = {
        let selectable_query = selectable_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            selectable_query.set(input.value());
        })
    };

    let on_selection_search = {
        let selection_query = selection_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            selection_query.set(input.value());
        })
    };

    // ArrowDown in a search input moves focus into its pane's list.
    let on_selectable_keydown = {
        let selectable_list = selectable_list.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "ArrowDown" {
                e.prevent_default();
                if let Some(list) = selectable_list.cast::<HtmlElement>() {
                    let _ = list.focus();
                }
            }
        })
    };

    let on_selection_keydown = {
        let selection_list = selection_list.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "ArrowDown" {
                e.prevent_default();
                if let Some(list) = selection_list.cast::<HtmlElement>() {
                    let _ = list.focus();
                }
            }
        })
    };

    let on_select = {
        let selected = props.selected.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |value: String| {
            if selected.contains(&value) {
                return;
            }
            let mut updated = selected.clone();
            updated.push(value);
            on_change.emit(updated);
        })
    };

    let on_deselect = {
        let selected = props.selected.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |value: String| {
            let mut updated = selected.clone();
            updated.retain(|v| v != &value);
            on_change.emit(updated);
        })
    };

    html! {
        <div id={props.id.clone()} class="multi-select space-y-2">
            <label class="block text-sm font-medium text-gray-700">{props.label.clone()}</label>
            <div class="grid grid-cols-2 gap-4">
                <div class="multi-select-pane border border-gray-300 rounded-md">
                    <input
                        type="text"
                        class="search-input form-control w-full px-3 py-2 border-b border-gray-200"
                        autocomplete="off"
                        placeholder="Search..."
                        value={(*selectable_query).clone()}
                        oninput={on_selectable_search}
                        onkeydown={on_selectable_keydown}
                    />
                    <ul ref={selectable_list} tabindex="-1" class="max-h-60 overflow-auto">
                        {available_view.iter().map(|option| {
                            let on_click = {
                                let on_select = on_select.clone();
                                let value = option.value.clone();
                                Callback::from(move |_| on_select.emit(value.clone()))
                            };
                            html! {
                                <li
                                    class="px-3 py-2 hover:bg-gray-50 cursor-pointer text-sm"
                                    onclick={on_click}
                                >
                                    {&option.label}
                                </li>
                            }
                        }).collect::<Html>()}
                    </ul>
                    <div class="custom-header px-3 py-1 text-xs text-gray-500 border-t border-gray-200">{"All"}</div>
                </div>
                <div class="multi-select-pane border border-gray-300 rounded-md">
                    <input
                        type="text"
                        class="search-input form-control w-full px-3 py-2 border-b border-gray-200"
                        autocomplete="off"
                        placeholder="Search selected..."
                        value={(*selection_query).clone()}
                        oninput={on_selection_search}
                        onkeydown={on_selection_keydown}
                    />
                    <ul ref={selection_list} tabindex="-1" class="max-h-60 overflow-auto">
                        {chosen_view.iter().map(|option| {
                            let on_click = {
                                let on_deselect = on_deselect.clone();
                                let value = option.value.clone();
                                Callback::from(move |_| on_deselect.emit(value.clone()))
                            };
                            html! {
                                <li
                                    class="px-3 py-2 hover:bg-red-50 cursor-pointer text-sm"
                                    onclick={on_click}
                                >
                                    {&option.label}
                                </li>
                            }
                        }).collect::<Html>()}
                    </ul>
                    <div class="custom-header px-3 py-1 text-xs text-gray-500 border-t border-gray-200">{"Selected"}</div>
                </div>
            </div>
        </div>
    }
}
