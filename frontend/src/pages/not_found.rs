use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }
                "#}
            </style>
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="fancy-button fancy-button-primary">
                {"Back to the boutique"}
            </Link<Route>>
        </div>
    }
}
