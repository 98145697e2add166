//! Careers page: current openings, newest first.

use leptos::*;

use zagros_catalog::{jobs, Job};

use crate::frontend::app::{use_locale, use_translator};
use crate::frontend::components::Reveal;
use crate::reveal::RevealOptions;
use crate::routes::href;

#[component]
pub fn CareersPage() -> impl IntoView {
    let t = use_translator();

    let mut openings: Vec<&'static Job> = jobs().iter().collect();
    openings.sort_by(|a, b| b.posted.cmp(&a.posted));

    view! {
        <div class="page page-careers">
            <Reveal>
                <header class="page-header" data-reveal="">
                    <h1>{move || t("careers.title")}</h1>
                    <p>{move || t("careers.subtitle")}</p>
                </header>
            </Reveal>

            <Reveal options=RevealOptions::default().with_stagger(100)>
                <div class="job-list">
                    {openings
                        .iter()
                        .map(|job| {
                            let job = *job;
                            view! {
                                <div data-reveal="">
                                    <JobCard job/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </div>
    }
}

#[component]
fn JobCard(job: &'static Job) -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();
    let route = job.route();

    view! {
        <article class="job-card">
            <div class="job-card-body">
                <h2 class="job-title">{move || job.title.get(locale.get()).to_string()}</h2>
                <p class="job-meta">
                    {move || {
                        format!(
                            "{} · {}",
                            job.department.get(locale.get()),
                            job.location.get(locale.get())
                        )
                    }}
                </p>
                <p class="job-summary">{move || job.description.get(locale.get()).to_string()}</p>
            </div>
            <div class="job-card-side">
                <span class="job-type">{move || t(job.job_type.label_key())}</span>
                <span class="job-posted">
                    {move || format!("{}: {}", t("careers.posted"), job.posted.format("%Y-%m-%d"))}
                </span>
                <a class="button secondary" href=move || href(locale.get(), &route)>
                    {move || t("careers.view_role")}
                </a>
            </div>
        </article>
    }
}
