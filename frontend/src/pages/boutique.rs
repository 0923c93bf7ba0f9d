use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::browser::{self, ElementSurface};
use crate::components::{
    cta::CallToAction, hero::Hero, shop::Shop, testimonials::Testimonials,
};
use crate::config::PageConfig;
use crate::motion::MotionPreference;
use crate::parallax::ParallaxController;

#[derive(Properties, PartialEq)]
pub struct BoutiqueProps {
    pub config: Rc<PageConfig>,
}

#[function_component(BoutiquePage)]
pub fn boutique_page(props: &BoutiqueProps) -> Html {
    let container_ref = use_node_ref();
    let copy_ref = use_node_ref();
    let frame_ref = use_node_ref();
    let blob_ref = use_node_ref();

    let motion = *use_state(MotionPreference::detect);
    let controller = use_state(ParallaxController::new);
    let products = use_memo(|config| config.products(), props.config.clone());
    let link = props.config.chat_link();

    use_mount(|| {
        if let Err(err) = browser::scroll_to_top() {
            log::warn!("Could not scroll to top: {}", err);
        }
    });

    // Pointer listener lives exactly as long as the page is mounted.
    {
        let controller = (*controller).clone();
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = match container_ref.cast::<Element>() {
                    Some(element) => controller
                        .attach(&ElementSurface::new(element), motion)
                        .unwrap_or_else(|err| {
                            log::error!("Parallax listener not attached: {}", err);
                            None
                        }),
                    None => None,
                };
                move || drop(listener)
            },
            (),
        );
    }

    {
        let controller = (*controller).clone();
        let copy_ref = copy_ref.clone();
        let frame_ref = frame_ref.clone();
        let blob_ref = blob_ref.clone();
        use_effect_with_deps(
            move |_| {
                let tilt = controller.tilt();
                let float_y = controller.float_y();
                let subscriptions = vec![
                    tilt.subscribe(move |t| browser::set_style(&copy_ref, &t.css())),
                    tilt.subscribe(move |t| browser::set_style(&frame_ref, &t.yaw_css())),
                    float_y.subscribe(move |y| {
                        browser::set_style(&blob_ref, &format!("transform: translateY({:.2}px);", y))
                    }),
                ];
                move || {
                    drop(subscriptions);
                    drop(tilt);
                    drop(float_y);
                }
            },
            (),
        );
    }

    html! {
        <main class="boutique-page" ref={container_ref}>
            <style>
                {r#"
                    .boutique-page {
                        position: relative;
                        min-height: 100vh;
                        overflow-x: hidden;
                    }
                    .backdrop {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        overflow: hidden;
                    }
                    .backdrop-blob {
                        position: absolute;
                        top: 8%;
                        left: -10%;
                        width: 520px;
                        height: 520px;
                        border-radius: 50%;
                        background: rgba(245, 158, 11, 0.7);
                        filter: blur(64px);
                        mix-blend-mode: soft-light;
                        opacity: 0.18;
                    }
                    .backdrop-shade {
                        position: absolute;
                        right: -15%;
                        bottom: -8%;
                        width: 640px;
                        height: 640px;
                        background: linear-gradient(to top right, #0b0b0b, transparent);
                        opacity: 0.05;
                        filter: blur(40px);
                    }
                "#}
            </style>
            <div class="backdrop">
                <div class="backdrop-blob" ref={blob_ref}></div>
                <div class="backdrop-shade"></div>
            </div>
            <Hero
                config={props.config.clone()}
                products={products.clone()}
                motion={motion}
                copy_ref={copy_ref}
                frame_ref={frame_ref}
            />
            <Shop products={products} link={link} motion={motion} />
            <Testimonials motion={motion} />
            <CallToAction config={props.config.clone()} motion={motion} />
        </main>
    }
}
