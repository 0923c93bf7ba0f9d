use std::rc::Rc;

use log::{info, Level};
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod catalogue;
mod config;
mod deeplink;
mod error;
mod motion;
mod observable;
mod parallax;
mod reveal;
mod theme;

mod components {
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod product_card;
    pub mod shop;
    pub mod testimonials;
}
mod pages {
    pub mod boutique;
    pub mod not_found;
}

use browser::LocalThemeStorage;
use components::{footer::Footer, nav::Nav};
use config::PageConfig;
use pages::{boutique::BoutiquePage, not_found::NotFound};
use theme::{Theme, ThemeStore, DARK_SCHEME_QUERY};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, config: Rc<PageConfig>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering boutique page");
            html! { <BoutiquePage config={config} /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Err(err) = browser::set_root_class("dark", theme.is_dark()) {
        log::warn!("Could not apply theme: {}", err);
    }
}

fn init_theme() -> ThemeStore {
    let system_prefers_dark = browser::media_matches(DARK_SCHEME_QUERY).unwrap_or_else(|err| {
        log::warn!("Could not read colour scheme preference: {}", err);
        false
    });
    ThemeStore::init(Rc::new(LocalThemeStorage), system_prefers_dark)
}

#[function_component]
fn App() -> Html {
    let config = use_state(|| Rc::new(config::load()));
    let theme = use_state(init_theme);

    {
        use_effect_with_deps(
            move |theme: &ThemeStore| {
                apply_theme(theme.current());
                let subscription = theme.subscribe(|t| apply_theme(*t));
                move || drop(subscription)
            },
            (*theme).clone(),
        );
    }

    let page_config = (*config).clone();
    let brand = page_config.brand_name.clone();

    html! {
        <BrowserRouter>
            <Global css={css!(r#"
                html {
                    --brand-purple: #2b0c7a;
                    --bg: #f8fafc;
                    --fg: #0f172a;
                    --muted: #334155;
                    --card: #ffffff;
                    --border: #e2e8f0;
                    --accent: #d97706;
                }
                html.dark {
                    --bg: #070707;
                    --fg: #f1f5f9;
                    --muted: #cbd5e1;
                    --card: #0f172a;
                    --border: #334155;
                    --accent: #fbbf24;
                }
                body {
                    margin: 0;
                    font-family: system-ui, sans-serif;
                    background: var(--bg);
                    color: var(--fg);
                    -webkit-font-smoothing: antialiased;
                    transition: background-color 0.5s, color 0.5s;
                }
                .fancy-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                    user-select: none;
                    transition: transform 0.2s;
                }
                .fancy-button:focus-visible {
                    outline: 2px solid #fbbf24;
                    outline-offset: 2px;
                }
                .fancy-button-primary {
                    background: var(--accent);
                    color: #000;
                }
                .fancy-button-outline {
                    border: 1px solid var(--border);
                    color: var(--fg);
                }
                .reveal {
                    opacity: 0;
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .reveal.revealed {
                    opacity: 1;
                }
                @media (prefers-reduced-motion: reduce) {
                    .reveal {
                        transition: none;
                    }
                }
            "#)} />
            <Nav brand={brand} theme={(*theme).clone()} />
            <Switch<Route> render={move |route| switch(route, page_config.clone())} />
            <Footer brand={config.brand_name.clone()} designer={config.designer_credit.clone()} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
