//! Company story page.

use leptos::*;

use zagros_catalog::Certification;

use crate::frontend::app::use_translator;
use crate::frontend::components::{CountUp, Reveal};
use crate::reveal::RevealOptions;

#[component]
pub fn AboutPage() -> impl IntoView {
    let t = use_translator();

    view! {
        <div class="page page-about">
            <Reveal>
                <header class="page-header" data-reveal="">
                    <h1>{move || t("about.title")}</h1>
                    <p>{move || t("about.subtitle")}</p>
                </header>
            </Reveal>

            <Reveal>
                <section class="story" data-reveal="">
                    <h2>{move || t("about.story_title")}</h2>
                    <p>{move || t("about.story_body_1")}</p>
                    <p>{move || t("about.story_body_2")}</p>
                </section>
            </Reveal>

            <Reveal options=RevealOptions::default().with_stagger(140)>
                <section class="values">
                    <h2 class="section-title" data-reveal="">{move || t("about.values_title")}</h2>
                    <div class="value-grid">
                        <div class="value-card" data-reveal="">
                            <h3>{move || t("about.value_quality_title")}</h3>
                            <p>{move || t("about.value_quality_body")}</p>
                        </div>
                        <div class="value-card" data-reveal="">
                            <h3>{move || t("about.value_partnership_title")}</h3>
                            <p>{move || t("about.value_partnership_body")}</p>
                        </div>
                        <div class="value-card" data-reveal="">
                            <h3>{move || t("about.value_traceability_title")}</h3>
                            <p>{move || t("about.value_traceability_body")}</p>
                        </div>
                    </div>
                </section>
            </Reveal>

            <Reveal>
                <section class="about-certifications" data-reveal="">
                    <h2>{move || t("home.certifications_title")}</h2>
                    <ul class="certification-list">
                        {Certification::ALL
                            .iter()
                            .map(|cert| view! { <li class="certification-chip">{cert.label()}</li> })
                            .collect_view()}
                    </ul>
                </section>
            </Reveal>

            <Reveal options=RevealOptions::default().with_stagger(120)>
                <section class="stats-band">
                    <h2 class="section-title" data-reveal="">{move || t("about.stats_title")}</h2>
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
                            <span class="stat-value"><CountUp target=140.0 suffix="+"/></span>
                            <span class="stat-label">{move || t("home.stat_farms")}</span>
                        </div>
                    </div>
                </section>
            </Reveal>
        </div>
    }
}
