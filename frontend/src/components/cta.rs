use std::rc::Rc;

use yew::prelude::*;

use crate::config::PageConfig;
use crate::motion::MotionPreference;
use crate::reveal::{reveal_class, use_reveal, SECTION_DELAY_MS};

pub const DEMO_REQUEST_MESSAGE: &str = "Hi I want a site";

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub config: Rc<PageConfig>,
    pub motion: MotionPreference,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), SECTION_DELAY_MS, props.motion);
    let demo_url = props.config.chat_link().with_text(DEMO_REQUEST_MESSAGE);
    let mailto = format!("mailto:{}", props.config.contact_email);

    html! {
        <section class="cta" ref={section_ref}>
            <style>
                {r#"
                    .cta {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }
                    .cta h4 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .cta h4.reveal { transform: scale(0.98); }
                    .cta h4.revealed { transform: none; }
                    .cta p {
                        color: var(--muted);
                        margin-bottom: 1.5rem;
                    }
                    .cta-actions {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }
                "#}
            </style>
            <h4 class={reveal_class(revealed)}>{"Want a custom shop like this?"}</h4>
            <p>
                {"I build catalogues that match your brand personality and convert through direct WhatsApp ordering."}
            </p>
            <div class="cta-actions">
                <a href={demo_url} target="_blank" rel="noopener noreferrer" class="fancy-button fancy-button-primary">
                    {"Start a Quick Demo"}
                </a>
                <a href={mailto} class="fancy-button fancy-button-outline">
                    {format!("Email {}", props.config.designer_credit)}
                </a>
            </div>
        </section>
    }
}
