//! Application shell: routing, locale context, chrome.

use leptos::*;
use leptos_router::*;

use zagros_core::Locale;
use zagros_i18n::Translator;

use crate::frontend::components::{Footer, Header};
use crate::frontend::pages::{
    AboutPage, ApplyPage, CareerDetailPage, CareersPage, ContactPage, FaqPage, HomePage,
    ProductDetailPage, ProductsPage,
};
use crate::routes::href;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=RootRedirect/>
                <Route path="/:lang" view=LocaleShell>
                    <Route path="" view=HomePage/>
                    <Route path="about" view=AboutPage/>
                    <Route path="products" view=ProductsPage/>
                    <Route path="products/:id" view=ProductDetailPage/>
                    <Route path="careers" view=CareersPage/>
                    <Route path="careers/:id" view=CareerDetailPage/>
                    <Route path="careers/:id/apply" view=ApplyPage/>
                    <Route path="faq" view=FaqPage/>
                    <Route path="contact" view=ContactPage/>
                </Route>
                <Route path="/*any" view=RootRedirect/>
            </Routes>
        </Router>
    }
}

/// The locale selected by the URL, provided by [`LocaleShell`].
pub(crate) fn use_locale() -> Memo<Locale> {
    expect_context::<Memo<Locale>>()
}

/// Reactive translation against the active locale.
pub(crate) fn use_translator() -> impl Fn(&str) -> String + Copy {
    let locale = use_locale();
    move |key: &str| Translator::new(locale.get()).t(key)
}

/// `/` carries no locale; pick one from the browser's language
/// preference list and redirect.
#[component]
fn RootRedirect() -> impl IntoView {
    let tags: Vec<String> = window()
        .navigator()
        .languages()
        .iter()
        .filter_map(|value| value.as_string())
        .collect();
    let locale = Locale::from_preferred_tags(tags.iter().map(String::as_str));
    tracing::debug!(%locale, "root redirect");

    view! { <Redirect path=href(locale, "")/> }
}

/// Everything under `/:lang`: validates the segment, installs the locale
/// context, keeps the document attributes in sync and renders the chrome
/// around the routed page.
#[component]
fn LocaleShell() -> impl IntoView {
    let params = use_params_map();
    let segment = create_memo(move |_| params.with(|p| p.get("lang").cloned()).unwrap_or_default());
    let locale = create_memo(move |_| Locale::from_segment(&segment.get()).unwrap_or_default());
    provide_context(locale);

    // <html lang dir> follow the locale so RTL styling applies site-wide.
    create_effect(move |_| {
        let locale = locale.get();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("lang", locale.as_str());
            let _ = root.set_attribute("dir", locale.text_direction().as_str());
        }
    });

    // Back to the top whenever the route changes.
    let location = use_location();
    create_effect(move |_| {
        let _ = location.pathname.get();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    view! {
        <Show
            when=move || Locale::from_segment(&segment.get()).is_some()
            fallback=|| view! { <Redirect path="/en"/> }
        >
            <div class="site">
                <Header/>
                <main class="site-main">
                    <Outlet/>
                </main>
                <Footer/>
            </div>
        </Show>
    }
}
