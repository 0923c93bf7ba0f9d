use yew::prelude::*;

use crate::browser;
use crate::catalogue::{badge_label, layout_offset_class, Product};
use crate::deeplink::ChatLink;
use crate::motion::MotionPreference;
use crate::reveal::{card_delay_ms, reveal_class, use_reveal};

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub index: usize,
    pub link: ChatLink,
    pub motion: MotionPreference,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let ProductCardProps { product, index, link, motion } = props;
    let card_ref = use_node_ref();
    let revealed = use_reveal(card_ref.clone(), card_delay_ms(*index), *motion);

    let on_order = {
        let url = link.order_url(product);
        let id = product.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            gloo_console::log!("Opening order chat for", id.clone());
            if let Err(err) = browser::open_in_new_context(&url) {
                log::error!("Could not open order link {}: {}", url, err);
            }
        })
    };

    html! {
        <article class={classes!("product-card", layout_offset_class(*index), reveal_class(revealed))} ref={card_ref}>
            <div class="product-image">
                <img src={product.image_path.clone()} alt={product.title.clone()} loading="lazy" />
                <div class="product-badge">{badge_label(*index)}</div>
            </div>
            <div class="product-body">
                <h3>{product.title.clone()}</h3>
                <div class="product-footer">
                    <span class="product-price">{product.price.clone()}</span>
                    <button class="order-button" onclick={on_order}>{"Order"}</button>
                </div>
            </div>
        </article>
    }
}
