use std::rc::Rc;

use yew::prelude::*;

use crate::catalogue::Product;
use crate::components::product_card::ProductCard;
use crate::deeplink::ChatLink;
use crate::motion::MotionPreference;
use crate::reveal::{reveal_class, use_reveal, SECTION_DELAY_MS};

#[derive(Properties, PartialEq)]
pub struct ShopProps {
    pub products: Rc<Vec<Product>>,
    pub link: ChatLink,
    pub motion: MotionPreference,
}

#[function_component(Shop)]
pub fn shop(props: &ShopProps) -> Html {
    let heading_ref = use_node_ref();
    let heading_revealed = use_reveal(heading_ref.clone(), SECTION_DELAY_MS, props.motion);

    html! {
        <section id="shop" class="shop">
            <style>
                {r#"
                    .shop {
                        position: relative;
                        z-index: 10;
                        padding: 3rem 0;
                    }
                    .shop-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .shop h2 {
                        font-family: Georgia, serif;
                        font-size: 2rem;
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .shop-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .product-card {
                        border-radius: 1rem;
                        overflow: hidden;
                        background: var(--card);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.15);
                    }
                    .product-card.revealed:hover {
                        transform: scale(1.02) translateY(-6px);
                    }
                    .card-raised { margin-top: -0.5rem; }
                    .card-lowered { margin-top: 0.25rem; }
                    .product-image {
                        position: relative;
                        height: 15rem;
                    }
                    .product-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .product-badge {
                        position: absolute;
                        top: 0.75rem;
                        left: 0.75rem;
                        padding: 0.25rem 0.75rem;
                        background: var(--accent);
                        color: #000;
                        font-size: 0.875rem;
                        font-weight: 500;
                        border-radius: 0.25rem;
                    }
                    .product-body {
                        padding: 1rem;
                    }
                    .product-body h3 {
                        margin: 0;
                        font-size: 1.125rem;
                    }
                    .product-footer {
                        margin-top: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .product-price {
                        font-weight: 700;
                        color: var(--accent);
                    }
                    .order-button {
                        padding: 0.25rem 0.75rem;
                        font-size: 0.875rem;
                        border: 1px solid var(--border);
                        border-radius: 999px;
                        background: transparent;
                        color: inherit;
                        cursor: pointer;
                    }
                    .order-button:active {
                        transform: scale(0.96);
                    }
                    @media (min-width: 640px) {
                        .shop-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 768px) {
                        .shop { padding: 5rem 0; }
                        .shop-inner { padding: 0 2.5rem; }
                        .card-raised { margin-top: -1rem; }
                        .card-lowered { margin-top: 1.5rem; }
                    }
                    @media (min-width: 1024px) {
                        .shop-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="shop-inner">
                <h2 class={reveal_class(heading_revealed)} ref={heading_ref}>{"Featured Pieces"}</h2>
                <div class="shop-grid">
                    {
                        props.products.iter().enumerate().map(|(index, product)| {
                            html! {
                                <ProductCard
                                    key={product.id.clone()}
                                    product={product.clone()}
                                    index={index}
                                    link={props.link.clone()}
                                    motion={props.motion}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
