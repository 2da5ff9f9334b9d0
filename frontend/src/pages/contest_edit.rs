use log::debug;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::components::contest::multi_select::{MultiSelect, SelectOption};
use crate::form_dom;
use shared::ContestForm;

// Field ids of the server-rendered form this page enhances.
pub const NAME_FIELD_ID: &str = "id_cname";
pub const OWNER_FIELD_ID: &str = "id_owner";
pub const START_FIELD_ID: &str = "id_start_time";
pub const END_FIELD_ID: &str = "id_end_time";
pub const FREEZE_FIELD_ID: &str = "id_freeze_time";
pub const COOWNER_FIELD_ID: &str = "id_coowner";
pub const PROBLEM_FIELD_ID: &str = "id_problem";

#[derive(Properties, PartialEq)]
pub struct ContestEditProps {
    pub contest_id: String,
}

#[derive(Clone, Default, PartialEq)]
struct SeededForm {
    form: ContestForm,
    coowner_options: Vec<SelectOption>,
    problem_options: Vec<SelectOption>,
}

/// Pull the initial form state out of the server-rendered form, if the
/// page carries one. A bare page starts the form empty.
fn seed_form() -> SeededForm {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return SeededForm::default();
    };

    let (coowner_options, coowners) = form_dom::select_options(&document, COOWNER_FIELD_ID);
    let (problem_options, problems) = form_dom::select_options(&document, PROBLEM_FIELD_ID);

    SeededForm {
        form: ContestForm {
            name: form_dom::input_value(&document, NAME_FIELD_ID).unwrap_or_default(),
            owner: form_dom::input_value(&document, OWNER_FIELD_ID).unwrap_or_default(),
            start_time: form_dom::input_value(&document, START_FIELD_ID).unwrap_or_default(),
            end_time: form_dom::input_value(&document, END_FIELD_ID).unwrap_or_default(),
            freeze_time: form_dom::input_value(&document, FREEZE_FIELD_ID).unwrap_or_default(),
            coowners,
            problems,
        },
        coowner_options,
        problem_options,
    }
}

#[function_component(ContestEdit)]
pub fn contest_edit(props: &ContestEditProps) -> Html {
    let seeded = use_memo((), |_| seed_form());
    let form = use_state(|| seeded.form.clone());
    let validation_error = use_state(|| None::<String>);

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            updated.name = input.value();
            form.set(updated);
        })
    };

    let on_start_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            updated.start_time = input.value();
            form.set(updated);
        })
    };

    let on_end_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            updated.end_time = input.value();
            form.set(updated);
        })
    };

    let on_freeze_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            updated.freeze_time = input.value();
            form.set(updated);
        })
    };

    let on_coowners_change = {
        let form = form.clone();
        Callback::from(move |coowners: Vec<String>| {
            let mut updated = (*form).clone();
            updated.coowners = coowners;
            form.set(updated);
        })
    };

    let on_problems_change = {
        let form = form.clone();
        Callback::from(move |problems: Vec<String>| {
            let mut updated = (*form).clone();
            updated.problems = problems;
            form.set(updated);
        })
    };

    // Validate before the native POST goes out; block it on failure.
    let on_submit = {
        let form = form.clone();
        let validation_error = validation_error.clone();
        Callback::from(move |e: SubmitEvent| {
            match form.validate_fields() {
                Ok(()) => {
                    debug!(
                        "contest form valid, submitting: {}",
                        serde_json::to_string(&*form).unwrap_or_default()
                    );
                    validation_error.set(None);
                }
                Err(err) => {
                    e.prevent_default();
                    validation_error.set(Some(err.to_string()));
                }
            }
        })
    };

    html! {
        <div class="contest-edit-page max-w-4xl mx-auto px-4 py-6">
            <h1 class="text-xl font-semibold text-gray-900 mb-4">{"Edit Contest "}{&props.contest_id}</h1>

            if let Some(err) = (*validation_error).as_ref() {
                <div class="error-container p-3 mb-4 bg-red-50 border border-red-200 rounded-md">
                    <p class="error-text text-sm text-red-800">{err}</p>
                </div>
            }

            <form method="post" class="space-y-4" onsubmit={on_submit}>
                <div class="form-group">
                    <label class="block text-sm font-medium text-gray-700">{"Contest name"}</label>
                    <input
                        type="text"
                        name="cname"
                        class="form-control w-full px-3 py-2 border border-gray-300 rounded-md"
                        value={form.name.clone()}
                        oninput={on_name_input}
                    />
                </div>

                // The owner never changes through this form; it rides along
                // hidden, the way the server-rendered page hides it.
                <input type="hidden" name="owner" value={form.owner.clone()} />

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div class="form-group">
                        <label class="block text-sm font-medium text-gray-700">{"Start time"}</label>
                        <input
                            type="text"
                            name="start_time"
                            class="form-control w-full px-3 py-2 border border-gray-300 rounded-md"
                            placeholder="YYYY-MM-DD HH:MM:SS"
                            value={form.start_time.clone()}
                            oninput={on_start_input}
                        />
                    </div>
                    <div class="form-group">
                        <label class="block text-sm font-medium text-gray-700">{"End time"}</label>
                        <input
                            type="text"
                            name="end_time"
                            class="form-control w-full px-3 py-2 border border-gray-300 rounded-md"
                            placeholder="YYYY-MM-DD HH:MM:SS"
                            value={form.end_time.clone()}
                            oninput={on_end_input}
                        />
                    </div>
                    <div class="form-group">
                        <label class="block text-sm font-medium text-gray-700">{"Freeze time"}</label>
                        <input
                            type="text"
                            name="freeze_time"
                            class="form-control w-full px-3 py-2 border border-gray-300 rounded-md"
                            placeholder="optional"
                            value={form.freeze_time.clone()}
                            oninput={on_freeze_input}
                        />
                    </div>
                </div>

                <MultiSelect
                    id="coowner-select"
                    label="Co-owners"
                    options={seeded.coowner_options.clone()}
                    selected={form.coowners.clone()}
                    on_change={on_coowners_change}
                />

                <MultiSelect
                    id="problem-select"
                    label="Problems"
                    options={seeded.problem_options.clone()}
                    selected={form.problems.clone()}
                    on_change={on_problems_change}
                />

                // Selections ride along as hidden fields for the native POST.
                {form.coowners.iter().map(|value| html! {
                    <input type="hidden" name="coowner" value={value.clone()} />
                }).collect::<Html>()}
                {form.problems.iter().map(|value| html! {
                    <input type="hidden" name="problem" value={value.clone()} />
                }).collect::<Html>()}

                <button
                    type="submit"
                    class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                >
                    {"Save contest"}
                </button>
            </form>
        </div>
    }
}
