use chrono::Datelike;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: AttrValue,
    pub designer: AttrValue,
}

pub fn credit_line(year: i32, brand: &str, designer: &str) -> String {
    format!("© {} {} — Demo by {} (Frontend)", year, brand, designer)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        margin-top: 3rem;
                        padding: 1.5rem;
                        border-top: 1px solid var(--border);
                        text-align: center;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                "#}
            </style>
            {credit_line(year, &props.brand, &props.designer)}
        </footer>
    }
}
