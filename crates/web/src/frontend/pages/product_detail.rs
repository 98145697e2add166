//! Product detail: gallery, specification table, inquiry CTA.

use leptos::*;
use leptos_router::use_params_map;

use zagros_catalog::{product_by_id, Product};
use zagros_core::ProductId;

use crate::frontend::app::{use_locale, use_translator};
use crate::routes::href;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();
    let params = use_params_map();

    let product = create_memo(move |_| {
        params
            .with(|p| p.get("id").cloned())
            .unwrap_or_default()
            .parse::<ProductId>()
            .ok()
            .and_then(product_by_id)
    });

    view! {
        <div class="page page-product-detail">
            {move || match product.get() {
                Some(product) => view! { <ProductDetail product/> }.into_view(),
                None => {
                    view! {
                        <div class="not-found">
                            <p>{t("product.not_found")}</p>
                            <a class="button secondary" href=href(locale.get(), "products")>
                                {t("product.back")}
                            </a>
                        </div>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ProductDetail(product: &'static Product) -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();

    let (active_image, set_active_image) = create_signal(0usize);
    let main_image = move || {
        product
            .gallery
            .get(active_image.get())
            .cloned()
            .unwrap_or_else(|| product.image.clone())
    };

    view! {
        <article class="detail-layout">
            <div class="gallery">
                <img
                    class="gallery-main"
                    src=main_image
                    alt=move || product.name.get(locale.get()).to_string()
                />
                <Show when=move || product.gallery.len() > 1>
                    <div class="gallery-thumbs">
                        {product
                            .gallery
                            .iter()
                            .enumerate()
                            .map(|(index, src)| {
                                let src = src.clone();
                                view! {
                                    <button
                                        class="gallery-thumb"
                                        class:active=move || active_image.get() == index
                                        on:click=move |_| set_active_image.set(index)
                                    >
                                        <img src=src.clone() alt="" loading="lazy"/>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>

            <div class="detail-info">
                <h1>{move || product.name.get(locale.get()).to_string()}</h1>
                <Show when=move || !product.available>
                    <span class="card-badge">{move || t("products.unavailable")}</span>
                </Show>
                <p class="detail-description">
                    {move || product.description.get(locale.get()).to_string()}
                </p>

                <dl class="spec-table">
                    <dt>{move || t("product.category")}</dt>
                    <dd>{move || t(product.category.label_key())}</dd>
                    <dt>{move || t("product.origin")}</dt>
                    <dd>{move || product.origin.get(locale.get()).to_string()}</dd>
                    <dt>{move || t("product.grade")}</dt>
                    <dd>{move || product.grade.get(locale.get()).to_string()}</dd>
                    <dt>{move || t("product.shelf_life")}</dt>
                    <dd>{move || product.shelf_life.get(locale.get()).to_string()}</dd>
                    <dt>{move || t("product.min_order")}</dt>
                    <dd>{move || product.min_order.get(locale.get()).to_string()}</dd>
                </dl>

                <section class="detail-packaging">
                    <h2>{move || t("product.packaging")}</h2>
                    <ul>
                        {product
                            .packaging
                            .iter()
                            .map(|option| {
                                view! { <li>{move || option.get(locale.get()).to_string()}</li> }
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="detail-certifications">
                    <h2>{move || t("product.certifications")}</h2>
                    <ul class="certification-list">
                        {product
                            .certifications
                            .iter()
                            .map(|cert| view! { <li class="certification-chip">{cert.label()}</li> })
                            .collect_view()}
                    </ul>
                </section>

                <div class="detail-actions">
                    <a class="button primary" href=move || href(locale.get(), "contact")>
                        {move || t("product.inquire")}
                    </a>
                    <a class="button secondary" href=move || href(locale.get(), "products")>
                        {move || t("product.back")}
                    </a>
                </div>
            </div>
        </article>
    }
}
