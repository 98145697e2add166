//! Site header: navigation, products dropdown, mobile menu, language
//! switcher and the quick-search panel.

use leptos::*;
use leptos_router::use_location;

use zagros_catalog::products;

use crate::frontend::app::{use_locale, use_translator};
use crate::frontend::components::search::SearchPanel;
use crate::frontend::effects::close_on_outside_click;
use crate::routes::{href, switch_locale_path};

/// (route suffix, dictionary key) for the plain navigation links.
const NAV_ITEMS: [(&str, &str); 6] = [
    ("", "nav.home"),
    ("about", "nav.about"),
    ("products", "nav.products"),
    ("careers", "nav.careers"),
    ("faq", "nav.faq"),
    ("contact", "nav.contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let locale = use_locale();
    let t = use_translator();
    let location = use_location();

    let (menu_open, set_menu_open) = create_signal(false);
    let (dropdown_open, set_dropdown_open) = create_signal(false);

    let dropdown_ref = create_node_ref::<html::Div>();
    close_on_outside_click(dropdown_ref, move || set_dropdown_open.set(false));

    let switch_target = move || switch_locale_path(&location.pathname.get(), locale.get().other());

    view! {
        <header class="site-header">
            <div class="header-inner">
                <a class="brand" href=move || href(locale.get(), "")>
                    <span class="brand-name">{move || t("brand.name")}</span>
                    <span class="brand-tagline">{move || t("brand.tagline")}</span>
                </a>

                <nav class="desktop-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(suffix, key)| {
                            let suffix = *suffix;
                            let key = *key;
                            if suffix == "products" {
                                view! {
                                    <div class="nav-dropdown" node_ref=dropdown_ref>
                                        <button
                                            class="nav-link"
                                            class:open=move || dropdown_open.get()
                                            on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                                        >
                                            {move || t(key)}
                                        </button>
                                        <Show when=move || dropdown_open.get()>
                                            <div class="dropdown-panel">
                                                {products()
                                                    .iter()
                                                    .take(6)
                                                    .map(|product| {
                                                        let route = product.route();
                                                        view! {
                                                            <a
                                                                class="dropdown-item"
                                                                href=move || href(locale.get(), &route)
                                                                on:click=move |_| set_dropdown_open.set(false)
                                                            >
                                                                {move || product.name.get(locale.get()).to_string()}
                                                            </a>
                                                        }
                                                    })
                                                    .collect_view()}
                                                <a
                                                    class="dropdown-item dropdown-all"
                                                    href=move || href(locale.get(), "products")
                                                    on:click=move |_| set_dropdown_open.set(false)
                                                >
                                                    {move || t("home.view_all")}
                                                </a>
                                            </div>
                                        </Show>
                                    </div>
                                }
                                    .into_view()
                            } else {
                                view! {
                                    <a
                                        class="nav-link"
                                        class:active=move || {
                                            location.pathname.get() == href(locale.get(), suffix)
                                        }
                                        href=move || href(locale.get(), suffix)
                                    >
                                        {move || t(key)}
                                    </a>
                                }
                                    .into_view()
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="header-tools">
                    <SearchPanel/>
                    <a class="lang-switch" href=switch_target>
                        {move || t("header.language_switch")}
                    </a>
                    <button
                        class="menu-toggle"
                        class:open=move || menu_open.get()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || t("header.menu")}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(suffix, key)| {
                            let suffix = *suffix;
                            let key = *key;
                            view! {
                                <a
                                    class="mobile-nav-link"
                                    href=move || href(locale.get(), suffix)
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {move || t(key)}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
