use yew::prelude::*;

use crate::motion::MotionPreference;
use crate::reveal::{reveal_class, use_reveal, SECTION_DELAY_MS};

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "Beautiful fabrics, great fit. Shipping was fast.",
        author: "Aisha",
    },
    Testimonial {
        quote: "My tux at the wedding turned heads. Quality is top.",
        author: "Tunde",
    },
];

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub motion: MotionPreference,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), SECTION_DELAY_MS, props.motion);

    html! {
        <section class="testimonials" ref={section_ref}>
            <style>
                {r#"
                    .testimonials {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 3rem 1.5rem;
                    }
                    .testimonials h3 {
                        text-align: center;
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin-bottom: 1.5rem;
                    }
                    .testimonial-grid {
                        display: grid;
                        gap: 1.5rem;
                    }
                    .testimonial-grid blockquote {
                        margin: 0;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: var(--card);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
                    }
                    .testimonial-grid p {
                        font-style: italic;
                        color: var(--muted);
                    }
                    .testimonial-grid cite {
                        display: block;
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        font-style: normal;
                    }
                    @media (min-width: 640px) {
                        .testimonial-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <h3 class={reveal_class(revealed)}>{"What customers say"}</h3>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <blockquote class={reveal_class(revealed)} key={t.author}>
                        <p>{t.quote}</p>
                        <cite>{format!("— {}", t.author)}</cite>
                    </blockquote>
                }) }
            </div>
        </section>
    }
}
