use std::rc::Rc;

use yew::prelude::*;

use crate::catalogue::Product;
use crate::config::PageConfig;
use crate::motion::MotionPreference;
use crate::reveal::{reveal_class, use_reveal, HERO_DELAY_MS};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: Rc<PageConfig>,
    pub products: Rc<Vec<Product>>,
    pub motion: MotionPreference,
    /// Tilted on both axes by the parallax controller.
    pub copy_ref: NodeRef,
    /// Swings horizontally with the pointer.
    pub frame_ref: NodeRef,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), HERO_DELAY_MS, props.motion);
    let config = &props.config;
    let contact_url = config.chat_link().contact_url();
    let (brand_lead, brand_accent) = config.brand_parts();

    let frame_images = props.products.iter().take(2).map(|product| {
        html! {
            <div class="hero-frame-cell" key={product.id.clone()}>
                <img src={product.image_path.clone()} alt={product.title.clone()} />
            </div>
        }
    });

    html! {
        <section class="hero" ref={section_ref}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        align-items: center;
                    }
                    .hero-copy h1 {
                        font-family: Georgia, serif;
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 800;
                        line-height: 1.1;
                        margin: 0;
                    }
                    .hero-copy h1 span {
                        display: block;
                        color: var(--accent);
                    }
                    .hero-copy p {
                        margin-top: 1.5rem;
                        max-width: 36rem;
                        color: var(--muted);
                        font-size: 1.1rem;
                    }
                    .hero-actions {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .hero-frame {
                        position: relative;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.35);
                    }
                    .hero-frame-cell {
                        height: 20rem;
                        overflow: hidden;
                    }
                    .hero-frame-cell img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.4s ease-out;
                    }
                    .hero-frame:hover .hero-frame-cell img {
                        transform: scale(1.04) rotate(1deg);
                    }
                    .hero-badge {
                        position: absolute;
                        top: 1.5rem;
                        left: 1.5rem;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.9);
                        background: rgba(0, 0, 0, 0.4);
                        border-radius: 0.375rem;
                        backdrop-filter: blur(4px);
                    }
                    .hero-from-left.reveal { transform: translateX(-40px); }
                    .hero-from-right.reveal { transform: translateX(40px); }
                    .hero-from-left.revealed,
                    .hero-from-right.revealed { transform: none; }
                    @media (min-width: 768px) {
                        .hero { padding: 7rem 2.5rem; }
                        .hero-grid { grid-template-columns: 1fr 1fr; }
                        .hero-frame-cell { height: 24rem; }
                    }
                "#}
            </style>
            <div class="hero-grid">
                <div class={classes!("hero-from-left", reveal_class(revealed))}>
                    <div class="hero-copy" ref={props.copy_ref.clone()}>
                        <h1>
                            {brand_lead.to_string()}{" "}
                            <span>{brand_accent.to_string()}</span>
                        </h1>
                        <p>{config.tagline.clone()}</p>
                        <div class="hero-actions">
                            <a href="#shop" class="fancy-button fancy-button-primary">
                                {"View Catalogue"}
                            </a>
                            <a href={contact_url} target="_blank" rel="noopener noreferrer" class="fancy-button fancy-button-outline">
                                {"Message on WhatsApp"}
                            </a>
                        </div>
                    </div>
                </div>
                <div class={classes!("hero-from-right", reveal_class(revealed))}>
                    <div class="hero-frame" ref={props.frame_ref.clone()}>
                        { for frame_images }
                        <div class="hero-badge">{"NEW DROP"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
