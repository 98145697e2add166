//! Site footer.

use leptos::*;

use crate::frontend::app::{use_locale, use_translator};
use crate::routes::href;

const FOOTER_LINKS: [(&str, &str); 5] = [
    ("about", "nav.about"),
    ("products", "nav.products"),
    ("careers", "nav.careers"),
    ("faq", "nav.faq"),
    ("contact", "nav.contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="brand-name">{move || t("brand.name")}</span>
                    <p class="footer-blurb">{move || t("footer.blurb")}</p>
                </div>

                <nav class="footer-links">
                    <h3>{move || t("footer.quick_links")}</h3>
                    {FOOTER_LINKS
                        .iter()
                        .map(|(suffix, key)| {
                            let suffix = *suffix;
                            let key = *key;
                            view! {
                                <a href=move || href(locale.get(), suffix)>{move || t(key)}</a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="footer-contact">
                    <h3>{move || t("footer.contact_title")}</h3>
                    <p>{move || t("contact.address_value")}</p>
                    <p dir="ltr">"+98 21 6640 2210"</p>
                    <p dir="ltr">"export@zagrostrade.example"</p>
                </div>
            </div>

            <p class="footer-rights">
                {move || format!("© {} {} — {}", year, t("brand.name"), t("footer.rights"))}
            </p>
        </footer>
    }
}
