//! Job opening detail.

use leptos::*;
use leptos_router::use_params_map;

use zagros_catalog::{job_by_id, Job};
use zagros_core::JobId;

use crate::frontend::app::{use_locale, use_translator};
use crate::routes::href;

#[component]
pub fn CareerDetailPage() -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();
    let params = use_params_map();

    let job = create_memo(move |_| {
        params
            .with(|p| p.get("id").cloned())
            .unwrap_or_default()
            .parse::<JobId>()
            .ok()
            .and_then(job_by_id)
    });

    view! {
        <div class="page page-career-detail">
            {move || match job.get() {
                Some(job) => view! { <JobDetail job/> }.into_view(),
                None => {
                    view! {
                        <div class="not-found">
                            <p>{t("careers.not_found")}</p>
                            <a class="button secondary" href=href(locale.get(), "careers")>
                                {t("careers.back")}
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
fn JobDetail(job: &'static Job) -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();
    let apply_route = format!("{}/apply", job.route());

    let bullet_list = move |items: &'static zagros_core::LocalizedList| {
        view! {
            <ul class="job-bullets">
                {move || {
                    items
                        .get(locale.get())
                        .iter()
                        .map(|item| view! { <li>{item.clone()}</li> })
                        .collect_view()
                }}
            </ul>
        }
    };

    view! {
        <article class="job-detail">
            <header class="job-detail-header">
                <h1>{move || job.title.get(locale.get()).to_string()}</h1>
                <p class="job-meta">
                    {move || {
                        format!(
                            "{} · {} · {}",
                            job.department.get(locale.get()),
                            job.location.get(locale.get()),
                            t(job.job_type.label_key())
                        )
                    }}
                </p>
                <p class="job-posted">
                    {move || format!("{}: {}", t("careers.posted"), job.posted.format("%Y-%m-%d"))}
                </p>
            </header>

            <p class="job-description">{move || job.description.get(locale.get()).to_string()}</p>

            <section class="job-section">
                <h2>{move || t("careers.responsibilities")}</h2>
                {bullet_list(&job.responsibilities)}
            </section>

            <section class="job-section">
                <h2>{move || t("careers.requirements")}</h2>
                {bullet_list(&job.requirements)}
            </section>

            <section class="job-section">
                <h2>{move || t("careers.benefits")}</h2>
                {bullet_list(&job.benefits)}
            </section>

            <div class="job-actions">
                <a class="button primary" href=move || href(locale.get(), &apply_route)>
                    {move || t("careers.apply")}
                </a>
                <a class="button secondary" href=move || href(locale.get(), "careers")>
                    {move || t("careers.back")}
                </a>
            </div>
        </article>
    }
}
