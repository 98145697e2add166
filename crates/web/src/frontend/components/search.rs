//! Quick search: input, grouped results panel, keyboard navigation.

use leptos::*;
use leptos_router::use_navigate;

use zagros_catalog::quick_search;

use crate::frontend::app::{use_locale, use_translator};
use crate::frontend::effects::close_on_outside_click;
use crate::listnav::{cycle_down, cycle_up};
use crate::routes::href;

#[component]
pub fn SearchPanel() -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();
    let navigate = use_navigate();

    let (query, set_query) = create_signal(String::new());
    let (open, set_open) = create_signal(false);
    let (highlighted, set_highlighted) = create_signal(None::<usize>);

    // One scan per (query, locale) pair; keystrokes re-run the scan,
    // language switches re-render the labels.
    let results = create_memo(move |_| {
        let _ = locale.get();
        quick_search(&query.get())
    });
    let hits = create_memo(move |_| results.get().flatten());

    let container_ref = create_node_ref::<html::Div>();
    close_on_outside_click(container_ref, move || set_open.set(false));

    let close_and_clear = move || {
        set_open.set(false);
        set_query.set(String::new());
        set_highlighted.set(None);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "ArrowDown" => {
            ev.prevent_default();
            set_open.set(true);
            set_highlighted.set(cycle_down(hits.with(|h| h.len()), highlighted.get()));
        }
        "ArrowUp" => {
            ev.prevent_default();
            set_highlighted.set(cycle_up(hits.with(|h| h.len()), highlighted.get()));
        }
        "Enter" => {
            if let Some(index) = highlighted.get() {
                ev.prevent_default();
                if let Some(hit) = hits.with(|h| h.get(index).cloned()) {
                    navigate(&href(locale.get_untracked(), &hit.route), Default::default());
                    close_and_clear();
                }
            }
        }
        "Escape" => {
            set_open.set(false);
            set_highlighted.set(None);
        }
        _ => {}
    };

    let panel_visible = move || open.get() && !query.with(|q| q.trim().is_empty());

    view! {
        <div class="quick-search" node_ref=container_ref>
            <input
                class="search-input"
                type="search"
                prop:value=query
                placeholder=move || t("header.search_placeholder")
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_open.set(true);
                    set_highlighted.set(None);
                }
                on:focus=move |_| set_open.set(true)
                on:keydown=on_keydown
            />

            <Show when=panel_visible>
                <div class="search-results">
                    {move || {
                        let hits = hits.get();
                        if hits.is_empty() {
                            return view! { <p class="search-empty">{t("header.search_no_results")}</p> }
                                .into_view();
                        }

                        let active_locale = locale.get();
                        let highlight = highlighted.get();
                        let mut last_group = None;
                        let mut rows: Vec<View> = Vec::with_capacity(hits.len());
                        for (index, hit) in hits.iter().enumerate() {
                            if last_group != Some(hit.group) {
                                last_group = Some(hit.group);
                                rows.push(
                                    view! {
                                        <li class="search-group-heading">{t(hit.group.heading_key())}</li>
                                    }
                                    .into_view(),
                                );
                            }
                            let label = hit.title.get(active_locale).to_string();
                            let target = href(active_locale, &hit.route);
                            rows.push(
                                view! {
                                    <li class="search-hit" class:active={highlight == Some(index)}>
                                        <a href=target on:click=move |_| close_and_clear()>
                                            {label}
                                        </a>
                                    </li>
                                }
                                .into_view(),
                            );
                        }
                        view! { <ul class="search-hit-list">{rows}</ul> }.into_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
