use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::ThemeStore;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub theme: ThemeStore,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, theme } = props;
    let current = use_state(|| theme.current());

    {
        let current = current.setter();
        use_effect_with_deps(
            move |theme: &ThemeStore| {
                let subscription = theme.subscribe(move |t| current.set(*t));
                move || drop(subscription)
            },
            theme.clone(),
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            theme.toggle();
        })
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 1.5rem;
                        background: var(--brand-purple);
                        color: #fff;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: inherit;
                        text-decoration: none;
                        font-weight: 700;
                        letter-spacing: 0.04em;
                    }
                    .nav-logo img {
                        width: 40px;
                        height: 40px;
                        border-radius: 6px;
                    }
                    .theme-toggle {
                        padding: 0.5rem 0.7rem;
                        border: none;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.1);
                        color: inherit;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .theme-toggle:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }
                "#}
            </style>
            <Link<Route> to={Route::Home} classes="nav-logo">
                <img src="/logo.png" alt={format!("{} logo", brand)} />
                <span>{brand.clone()}</span>
            </Link<Route>>
            <button class="theme-toggle" aria-label="Toggle theme" onclick={toggle_theme}>
                {(*current).toggle_icon()}
            </button>
        </nav>
    }
}
