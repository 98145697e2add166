//! Contact page: office details and the inquiry form.

use std::time::Duration;

use leptos::*;

use zagros_forms::{InquiryField, InquiryForm};

use crate::frontend::api;
use crate::frontend::app::use_translator;
use crate::frontend::pages::{SubmitState, RESET_DELAY_MS};

#[component]
pub fn ContactPage() -> impl IntoView {
    let t = use_translator();

    let form = create_rw_signal(InquiryForm::new());
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
            match api::submit_inquiry(payload).await {
                Ok(receipt) => {
                    tracing::debug!(reference = %receipt.reference, "inquiry sent");
                    set_state.set(SubmitState::Sent);
                    if let Ok(handle) = set_timeout_with_handle(
                        move || {
                            form.update(InquiryForm::reset);
                            set_state.set(SubmitState::Idle);
                        },
                        Duration::from_millis(RESET_DELAY_MS),
                    ) {
                        reset_timer.try_set_value(Some(handle));
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "inquiry submission failed");
                    set_state.set(SubmitState::Idle);
                    set_banner.set(true);
                }
            }
        });
    };

    view! {
        <div class="page page-contact">
            <header class="page-header">
                <h1>{move || t("contact.title")}</h1>
                <p>{move || t("contact.subtitle")}</p>
            </header>

            <div class="contact-layout">
                <aside class="contact-info">
                    <h2>{move || t("contact.info_title")}</h2>
                    <dl>
                        <dt>{move || t("contact.address_label")}</dt>
                        <dd>{move || t("contact.address_value")}</dd>
                        <dt>{move || t("contact.phone_label")}</dt>
                        <dd dir="ltr">"+98 21 6640 2210"</dd>
                        <dt>{move || t("contact.email_label")}</dt>
                        <dd dir="ltr">"export@zagrostrade.example"</dd>
                        <dt>{move || t("contact.hours_label")}</dt>
                        <dd>{move || t("contact.hours_value")}</dd>
                    </dl>
                </aside>

                <section class="contact-form-block">
                    <h2>{move || t("contact.form_title")}</h2>

                    <Show when=move || state.get() == SubmitState::Sent>
                        <div class="form-success">
                            <p>{move || t("contact.success")}</p>
                        </div>
                    </Show>

                    <Show when=move || banner.get()>
                        <div class="form-banner">{move || t("contact.banner_invalid")}</div>
                    </Show>

                    <form class="inquiry-form" on:submit=on_submit>
                        <InquiryTextField form field=InquiryField::Name label_key="contact.name"/>
                        <InquiryTextField
                            form
                            field=InquiryField::Email
                            label_key="contact.email"
                            input_type="email"
                        />
                        <InquiryTextField
                            form
                            field=InquiryField::Company
                            label_key="contact.company"
                        />

                        <div
                            class="form-field"
                            class:invalid=move || form.with(|f| f.error(InquiryField::Message)).is_some()
                        >
                            <label>{move || t("contact.message")}</label>
                            <textarea
                                rows=6
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_text(InquiryField::Message, &event_target_value(&ev)))
                                }
                                on:blur=move |_| form.update(|f| f.touch(InquiryField::Message))
                            ></textarea>
                            {move || {
                                form.with(|f| f.error(InquiryField::Message))
                                    .map(|error| {
                                        view! { <p class="field-error">{t(error.message_key())}</p> }
                                    })
                            }}
                        </div>

                        <button
                            class="button primary"
                            type="submit"
                            disabled=move || state.get() == SubmitState::Submitting
                        >
                            {move || {
                                if state.get() == SubmitState::Submitting {
                                    t("contact.submitting")
                                } else {
                                    t("contact.submit")
                                }
                            }}
                        </button>
                    </form>
                </section>
            </div>
        </div>
    }
}

/// A labelled text input bound to one inquiry field.
#[component]
fn InquiryTextField(
    form: RwSignal<InquiryForm>,
    field: InquiryField,
    label_key: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let t = use_translator();

    let value = move || {
        form.with(|f| match field {
            InquiryField::Name => f.name.clone(),
            InquiryField::Email => f.email.clone(),
            InquiryField::Company => f.company.clone(),
            InquiryField::Message => f.message.clone(),
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
            {move || {
                form.with(|f| f.error(field))
                    .map(|error| view! { <p class="field-error">{t(error.message_key())}</p> })
            }}
        </div>
    }
}
