use yew::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <div class={classes!("flex", "items-center", "space-x-4", "sm:space-x-8")}>
                        <a href="/" class={classes!(
                            "flex", "items-baseline", "space-x-1", "hover:transform",
                            "hover:-translate-y-0.5", "transition-transform", "duration-200"
                        )}>
                            <span class={classes!("text-lg", "sm:text-xl", "font-medium", "bg-white", "text-blue-600", "px-2", "py-0.5", "rounded")}>{"Arbiter"}</span>
                        </a>
                        // Contest list and admin pages are server-rendered,
                        // so these are plain anchors rather than router links.
                        <a href="/contests" class={classes!("text-blue-100", "hover:text-white", "transition-colors", "duration-200", "text-sm", "sm:text-base")}>
                            {"Contests"}
                        </a>
                        <a href="/problems" class={classes!("text-blue-100", "hover:text-white", "transition-colors", "duration-200", "text-sm", "sm:text-base")}>
                            {"Problems"}
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
