//! Catalog page: filter panel, sort and the product grid.

use leptos::*;

use zagros_catalog::{
    filter_products, origins, sort_products, Certification, ProductCategory, ProductFilter,
    SortKey,
};

use crate::frontend::app::{use_locale, use_translator};
use crate::frontend::components::ProductCard;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();

    let filter = create_rw_signal(ProductFilter::default());
    let sort = create_rw_signal(SortKey::default());

    // Filter first, then sort; Relevance leaves the filtered order alone.
    let visible = create_memo(move |_| {
        let mut items = filter_products(&filter.get());
        sort_products(&mut items, sort.get(), locale.get());
        items
    });

    let reset = move |_| {
        filter.set(ProductFilter::default());
        sort.set(SortKey::default());
    };

    view! {
        <div class="page page-products">
            <header class="page-header">
                <h1>{move || t("products.title")}</h1>
                <p>{move || t("products.subtitle")}</p>
            </header>

            <div class="catalog-layout">
                <aside class="filter-panel">
                    <h2>{move || t("products.filter_title")}</h2>

                    <label class="filter-block">
                        <span>{move || t("products.filter_category")}</span>
                        <select
                            prop:value=move || {
                                filter
                                    .with(|f| f.category.map(ProductCategory::as_str).unwrap_or("all"))
                                    .to_string()
                            }
                            on:change=move |ev| {
                                filter
                                    .update(|f| {
                                        f.category = ProductCategory::from_value(&event_target_value(&ev));
                                    })
                            }
                        >
                            <option value="all">{move || t("products.filter_all")}</option>
                            {ProductCategory::ALL
                                .iter()
                                .map(|category| {
                                    let category = *category;
                                    view! {
                                        <option value=category.as_str()>
                                            {move || t(category.label_key())}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>

                    <fieldset class="filter-block">
                        <legend>{move || t("products.filter_certifications")}</legend>
                        {Certification::ALL
                            .iter()
                            .map(|cert| {
                                let cert = *cert;
                                view! {
                                    <label class="checkbox-row">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                filter.with(|f| f.certifications.contains(&cert))
                                            }
                                            on:change=move |ev| {
                                                let selected = event_target_checked(&ev);
                                                filter
                                                    .update(|f| {
                                                        if selected {
                                                            if !f.certifications.contains(&cert) {
                                                                f.certifications.push(cert);
                                                            }
                                                        } else {
                                                            f.certifications.retain(|c| *c != cert);
                                                        }
                                                    });
                                            }
                                        />
                                        {cert.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>

                    <label class="filter-block">
                        <span>{move || t("products.filter_origin")}</span>
                        <select
                            prop:value=move || {
                                filter.with(|f| f.origin.clone()).unwrap_or_else(|| "all".to_string())
                            }
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filter
                                    .update(|f| {
                                        f.origin = if value == "all" { None } else { Some(value) };
                                    })
                            }
                        >
                            <option value="all">{move || t("products.filter_all")}</option>
                            {origins()
                                .iter()
                                .map(|origin| {
                                    let origin = *origin;
                                    view! {
                                        <option value=origin.en.clone()>
                                            {move || origin.get(locale.get()).to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="filter-block">
                        <span>{move || t("products.filter_sort")}</span>
                        <select
                            prop:value=move || sort.get().as_str().to_string()
                            on:change=move |ev| {
                                if let Some(key) = SortKey::from_value(&event_target_value(&ev)) {
                                    sort.set(key);
                                }
                            }
                        >
                            {SortKey::ALL
                                .iter()
                                .map(|key| {
                                    let key = *key;
                                    view! {
                                        <option value=key.as_str()>{move || t(key.label_key())}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>

                    <button class="reset-button" on:click=reset>
                        {move || t("products.filter_reset")}
                    </button>
                </aside>

                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=move || view! { <p class="catalog-empty">{move || t("products.empty")}</p> }
                >
                    <div class="product-grid">
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|product| view! { <ProductCard product/> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}
