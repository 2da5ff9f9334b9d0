use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {}

#[function_component(NotFound)]
pub fn not_found(_props: &NotFoundProps) -> Html {
    html! {
        <div class="not-found-page max-w-4xl mx-auto px-4 py-6">
            <h1 class="text-xl font-semibold text-gray-900">{"404 - Page Not Found"}</h1>
            <p class="text-sm text-gray-600">{"This contest page doesn't exist."}</p>
        </div>
    }
}
