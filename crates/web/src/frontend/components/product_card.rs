//! Catalog grid card.

use leptos::*;

use zagros_catalog::Product;

use crate::frontend::app::{use_locale, use_translator};
use crate::routes::href;

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();
    let route = product.route();

    view! {
        <article class="product-card" class:unavailable=!product.available>
            <div class="card-media">
                <img
                    src=product.image.clone()
                    alt=move || product.name.get(locale.get()).to_string()
                    loading="lazy"
                />
                <Show when=move || !product.available>
                    <span class="card-badge">{move || t("products.unavailable")}</span>
                </Show>
            </div>
            <div class="card-body">
                <h3 class="card-title">{move || product.name.get(locale.get()).to_string()}</h3>
                <p class="card-meta">
                    {move || {
                        format!(
                            "{} · {}",
                            t(product.category.label_key()),
                            product.origin.get(locale.get())
                        )
                    }}
                </p>
                <a class="card-link" href=move || href(locale.get(), &route)>
                    {move || t("products.view_details")}
                </a>
            </div>
        </article>
    }
}
