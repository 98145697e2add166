//! Landing page.

use leptos::*;

use zagros_catalog::{products, Certification};

use crate::frontend::app::{use_locale, use_translator};
use crate::frontend::components::{CountUp, ProductCard, Reveal};
use crate::reveal::RevealOptions;
use crate::routes::href;

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();

    let featured: Vec<_> = products().iter().filter(|p| p.available).take(4).collect();

    view! {
        <div class="page page-home">
            <Reveal>
                <section class="hero" data-reveal="">
                    <h1 class="hero-title">{move || t("home.hero_title")}</h1>
                    <p class="hero-subtitle">{move || t("home.hero_subtitle")}</p>
                    <div class="hero-actions">
                        <a class="button primary" href=move || href(locale.get(), "products")>
                            {move || t("home.hero_cta_products")}
                        </a>
                        <a class="button secondary" href=move || href(locale.get(), "contact")>
                            {move || t("home.hero_cta_contact")}
                        </a>
                    </div>
                </section>
            </Reveal>

            <Reveal options=RevealOptions::default().with_stagger(120)>
                <section class="stats-band">
                    <h2 class="section-title" data-reveal="">{move || t("home.stats_title")}</h2>
                    <div class="stats-grid">
                        <div class="stat" data-reveal="">
                            <span class="stat-value"><CountUp target=18.0 suffix="+"/></span>
                            <span class="stat-label">{move || t("home.stat_years")}</span>
                        </div>
                        <div class="stat" data-reveal="">
                            <span class="stat-value"><CountUp target=32.0 suffix="+"/></span>
                            <span class="stat-label">{move || t("home.stat_countries")}</span>
                        </div>
                        <div class="stat" data-reveal="">
                            <span class="stat-value"><CountUp target=2400.0 suffix="+"/></span>
                            <span class="stat-label">{move || t("home.stat_tons")}</span>
                        </div>
                        <div class="stat" data-reveal="">
                            <span class="stat-value"><CountUp target=140.0 suffix="+"/></span>
                            <span class="stat-label">{move || t("home.stat_farms")}</span>
                        </div>
                    </div>
                </section>
            </Reveal>

            <Reveal options=RevealOptions::default().with_stagger(80)>
                <section class="featured-band">
                    <header class="section-header" data-reveal="">
                        <h2>{move || t("home.featured_title")}</h2>
                        <p>{move || t("home.featured_subtitle")}</p>
                    </header>
                    <div class="product-grid">
                        {featured
                            .iter()
                            .map(|product| {
                                let product = *product;
                                view! {
                                    <div data-reveal="">
                                        <ProductCard product/>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <a class="band-link" href=move || href(locale.get(), "products")>
                        {move || t("home.view_all")}
                    </a>
                </section>
            </Reveal>

            <Reveal>
                <section class="certifications-band" data-reveal="">
                    <h2>{move || t("home.certifications_title")}</h2>
                    <p>{move || t("home.certifications_subtitle")}</p>
                    <ul class="certification-list">
                        {Certification::ALL
                            .iter()
                            .map(|cert| view! { <li class="certification-chip">{cert.label()}</li> })
                            .collect_view()}
                    </ul>
                </section>
            </Reveal>

            <Reveal>
                <section class="cta-band" data-reveal="">
                    <h2>{move || t("home.cta_title")}</h2>
                    <p>{move || t("home.cta_body")}</p>
                    <a class="button primary" href=move || href(locale.get(), "contact")>
                        {move || t("home.cta_button")}
                    </a>
                </section>
            </Reveal>
        </div>
    }
}
