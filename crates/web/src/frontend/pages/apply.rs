//! Job application form.

use std::time::Duration;

use leptos::*;
use leptos_router::use_params_map;
use wasm_bindgen::JsCast;

use zagros_catalog::{job_by_id, Job};
use zagros_core::JobId;
use zagros_forms::{ApplicationField, ApplicationForm, CvFile, ExperienceLevel};

use crate::frontend::api;
use crate::frontend::app::{use_locale, use_translator};
use crate::frontend::pages::{SubmitState, RESET_DELAY_MS};
use crate::routes::href;

#[component]
pub fn ApplyPage() -> impl IntoView {
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
        <div class="page page-apply">
            {move || match job.get() {
                Some(job) => view! { <ApplicationFormView job/> }.into_view(),
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
fn ApplicationFormView(job: &'static Job) -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();

    let form = create_rw_signal(ApplicationForm::for_job(job.id));
    let (state, set_state) = create_signal(SubmitState::Idle);
    let (banner, set_banner) = create_signal(false);
    let reset_timer = store_value(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(Some(handle)) = reset_timer.try_get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.get() == SubmitState::Submitting {
            return;
        }

        let mut outcome = None;
        form.update(|f| outcome = Some(f.validate_all()));
        let Some(Ok(payload)) = outcome else {
            set_banner.set(true);
            return;
        };

        set_banner.set(false);
        set_state.set(SubmitState::Submitting);
        spawn_local(async move {
            match api::submit_application(payload).await {
                Ok(receipt) => {
                    tracing::debug!(reference = %receipt.reference, "application sent");
                    set_state.set(SubmitState::Sent);
                    if let Ok(handle) = set_timeout_with_handle(
                        move || {
                            form.update(ApplicationForm::reset);
                            set_state.set(SubmitState::Idle);
                        },
                        Duration::from_millis(RESET_DELAY_MS),
                    ) {
                        reset_timer.try_set_value(Some(handle));
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "application submission failed");
                    set_state.set(SubmitState::Idle);
                    set_banner.set(true);
                }
            }
        });
    };

    let on_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| CvFile {
                name: file.name(),
                mime: file.type_(),
                size: file.size() as u64,
            });
        form.update(|f| f.set_cv(file));
    };

    view! {
        <article class="apply-layout">
            <header class="page-header">
                <h1>
                    {move || format!("{}: {}", t("apply.title"), job.title.get(locale.get()))}
                </h1>
                <p>{move || t("apply.subtitle")}</p>
            </header>

            <Show when=move || state.get() == SubmitState::Sent>
                <div class="form-success">
                    <h2>{move || t("apply.success_title")}</h2>
                    <p>{move || t("apply.success_body")}</p>
                </div>
            </Show>

            <Show when=move || banner.get()>
                <div class="form-banner">{move || t("apply.banner_invalid")}</div>
            </Show>

            <form class="application-form" on:submit=on_submit>
                <div class="form-row">
                    <TextField form field=ApplicationField::FirstName label_key="apply.first_name"/>
                    <TextField form field=ApplicationField::LastName label_key="apply.last_name"/>
                </div>
                <div class="form-row">
                    <TextField
                        form
                        field=ApplicationField::Email
                        label_key="apply.email"
                        input_type="email"
                    />
                    <TextField
                        form
                        field=ApplicationField::Phone
                        label_key="apply.phone"
                        input_type="tel"
                    />
                </div>
                <TextField form field=ApplicationField::Location label_key="apply.location"/>

                <div
                    class="form-field"
                    class:invalid=move || form.with(|f| f.error(ApplicationField::Experience)).is_some()
                >
                    <label>{move || t("apply.experience")}</label>
                    <select
                        prop:value=move || {
                            form.with(|f| f.experience.map(ExperienceLevel::as_str).unwrap_or(""))
                                .to_string()
                        }
                        on:change=move |ev| {
                            form.update(|f| {
                                f.set_experience(ExperienceLevel::from_value(&event_target_value(&ev)))
                            })
                        }
                    >
                        <option value="">{move || t("apply.experience_placeholder")}</option>
                        {ExperienceLevel::ALL
                            .iter()
                            .map(|level| {
                                let level = *level;
                                view! {
                                    <option value=level.as_str()>{move || t(level.label_key())}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <FieldErrorText form field=ApplicationField::Experience/>
                </div>

                <div
                    class="form-field"
                    class:invalid=move || form.with(|f| f.error(ApplicationField::Cv)).is_some()
                >
                    <label>{move || t("apply.cv")}</label>
                    <input type="file" accept=".pdf,.doc,.docx" on:change=on_file_change/>
                    <p class="field-hint">{move || t("apply.cv_hint")}</p>
                    <FieldErrorText form field=ApplicationField::Cv/>
                </div>

                <button
                    class="button primary"
                    type="submit"
                    disabled=move || state.get() == SubmitState::Submitting
                >
                    {move || {
                        if state.get() == SubmitState::Submitting {
                            t("apply.submitting")
                        } else {
                            t("apply.submit")
                        }
                    }}
                </button>
            </form>
        </article>
    }
}

/// A labelled text input bound to one form field: value in, blur/change
/// validation out.
#[component]
fn TextField(
    form: RwSignal<ApplicationForm>,
    field: ApplicationField,
    label_key: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let t = use_translator();

    let value = move || {
        form.with(|f| match field {
            ApplicationField::FirstName => f.first_name.clone(),
            ApplicationField::LastName => f.last_name.clone(),
            ApplicationField::Email => f.email.clone(),
            ApplicationField::Phone => f.phone.clone(),
            ApplicationField::Location => f.location.clone(),
            ApplicationField::Experience | ApplicationField::Cv => String::new(),
        })
    };

    view! {
        <div class="form-field" class:invalid=move || form.with(|f| f.error(field)).is_some()>
            <label>{move || t(label_key)}</label>
            <input
                type=input_type
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_text(field, &event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.touch(field))
            />
            <FieldErrorText form field/>
        </div>
    }
}

/// Inline localized message for a rejected field; nothing while the field
/// is valid or untouched.
#[component]
fn FieldErrorText(form: RwSignal<ApplicationForm>, field: ApplicationField) -> impl IntoView {
    let t = use_translator();

    view! {
        {move || {
            form.with(|f| f.error(field))
                .map(|error| view! { <p class="field-error">{t(error.message_key())}</p> })
        }}
    }
}
