//! Reveal-on-scroll host.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::frontend::effects::{observe_once, prefers_reduced_motion, ObserverGuard};
use crate::reveal::RevealOptions;

const VISIBLE_CLASS: &str = "is-visible";

/// Wraps a block of markup and reveals descendant elements carrying the
/// marker attribute once they scroll into view. Fire-once per element:
/// after the class is added the element is unobserved.
///
/// Under `prefers-reduced-motion` every marked element is made visible
/// immediately. Without the observer API the effect silently never fires.
#[component]
pub fn Reveal(#[prop(optional)] options: RevealOptions, children: Children) -> impl IntoView {
    let host_ref = create_node_ref::<html::Div>();
    let guard = store_value(None::<ObserverGuard>);
    let wired = store_value(false);

    create_effect(move |_| {
        let Some(host) = host_ref.get() else {
            return;
        };
        if wired.get_value() {
            return;
        }
        wired.set_value(true);

        let Ok(nodes) = host.query_selector_all(&options.selector()) else {
            return;
        };
        let mut elements = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                elements.push(element);
            }
        }
        if elements.is_empty() {
            return;
        }

        if prefers_reduced_motion() {
            for element in &elements {
                let _ = element.class_list().add_1(VISIBLE_CLASS);
            }
            return;
        }

        if options.stagger_ms > 0 {
            for (index, element) in elements.iter().enumerate() {
                if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
                    let _ = html
                        .style()
                        .set_property("transition-delay", &format!("{}ms", options.delay_for(index)));
                }
            }
        }

        guard.set_value(observe_once(&elements, options.threshold, |element| {
            let _ = element.class_list().add_1(VISIBLE_CLASS);
        }));
    });

    on_cleanup(move || guard.set_value(None));

    view! {
        <div class="reveal-host" node_ref=host_ref>
            {children()}
        </div>
    }
}
