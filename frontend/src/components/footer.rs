use crate::version::Version;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-blue-600 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col sm:flex-row justify-between items-center space-y-4 sm:space-y-0">
                    <div class="text-center sm:text-left">
                        <span class="text-2xl font-bold tracking-tight mr-2">{"Arbiter"}</span>
                        <p class="text-blue-100 text-sm mt-2">
                            {"Contest hosting for programming competitions."}
                        </p>
                    </div>
                    <div class="text-center sm:text-right">
                        <p class="text-blue-100 text-sm">
                            {"© 2024 Arbiter. All rights reserved."}
                        </p>
                        <div class="mt-2 text-xs text-blue-200 font-mono">
                            {"Frontend: v"}{Version::current()}
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
