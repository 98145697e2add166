//! FAQ page: topic chips and the accordion.

use leptos::*;

use zagros_catalog::{faqs_in_category, FaqCategory};
use zagros_core::FaqId;

use crate::frontend::app::{use_locale, use_translator};

#[component]
pub fn FaqPage() -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();

    let active_category = create_rw_signal(None::<FaqCategory>);
    let open_item = create_rw_signal(None::<FaqId>);

    let visible = create_memo(move |_| faqs_in_category(active_category.get()));

    view! {
        <div class="page page-faq">
            <header class="page-header">
                <h1>{move || t("faq.title")}</h1>
                <p>{move || t("faq.subtitle")}</p>
            </header>

            <div class="faq-chips">
                <button
                    class="chip"
                    class:active=move || active_category.get().is_none()
                    on:click=move |_| {
                        active_category.set(None);
                        open_item.set(None);
                    }
                >
                    {move || t("faq.all")}
                </button>
                {FaqCategory::ALL
                    .iter()
                    .map(|category| {
                        let category = *category;
                        view! {
                            <button
                                class="chip"
                                class:active=move || active_category.get() == Some(category)
                                on:click=move |_| {
                                    active_category.set(Some(category));
                                    open_item.set(None);
                                }
                            >
                                {move || t(category.label_key())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=move || view! { <p class="faq-empty">{move || t("faq.empty")}</p> }
            >
                <div class="faq-list">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <div class="faq-item" class:open=move || open_item.get() == Some(id)>
                                        <button
                                            class="faq-question"
                                            on:click=move |_| {
                                                open_item
                                                    .update(|open| {
                                                        *open = if *open == Some(id) { None } else { Some(id) };
                                                    })
                                            }
                                        >
                                            {move || item.question.get(locale.get()).to_string()}
                                        </button>
                                        <Show when=move || open_item.get() == Some(id)>
                                            <p class="faq-answer">
                                                {move || item.answer.get(locale.get()).to_string()}
                                            </p>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
