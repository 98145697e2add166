//! Animated stat number.

use std::time::Duration;

use leptos::*;

use crate::countup::CountUpTimeline;
use crate::frontend::effects::{observe_once, observer_supported, prefers_reduced_motion, ObserverGuard};

/// Counts from 0 to `target` over the timeline's fixed duration, starting
/// the first time the element intersects the viewport (threshold 0.3).
/// Never restarts. Under reduced motion it snaps straight to the target.
/// The interval is cleared both when the count completes and on unmount,
/// so no tick ever fires against a disposed component.
#[component]
pub fn CountUp(
    target: f64,
    #[prop(optional, into)] suffix: String,
    #[prop(default = 0)] decimals: u8,
) -> impl IntoView {
    let timeline = CountUpTimeline::new(target, decimals);
    let (display, set_display) = create_signal(timeline.format(0.0, &suffix));

    let host_ref = create_node_ref::<html::Span>();
    let guard = store_value(None::<ObserverGuard>);
    let interval = store_value(None::<IntervalHandle>);
    let step = store_value(0u32);
    let started = store_value(false);
    let wired = store_value(false);

    let start = {
        let suffix = suffix.clone();
        move || {
            if started.get_value() {
                return;
            }
            started.set_value(true);

            if prefers_reduced_motion() {
                set_display.set(timeline.format(timeline.target, &suffix));
                return;
            }

            let tick_suffix = suffix.clone();
            let result = set_interval_with_handle(
                move || {
                    let current = step.get_value() + 1;
                    step.set_value(current);
                    set_display.set(timeline.format(timeline.value_at(current), &tick_suffix));
                    if current >= timeline.steps {
                        if let Some(handle) = interval.get_value() {
                            handle.clear();
                            interval.set_value(None);
                        }
                    }
                },
                Duration::from_millis(u64::from(timeline.tick_interval_ms())),
            );
            match result {
                Ok(handle) => interval.set_value(Some(handle)),
                // No timer available; land on the final value directly.
                Err(_) => set_display.set(timeline.format(timeline.target, &suffix)),
            }
        }
    };

    create_effect(move |_| {
        let Some(host) = host_ref.get() else {
            return;
        };
        if wired.get_value() {
            return;
        }
        wired.set_value(true);

        if !observer_supported() {
            // Nothing to gate visibility on; run the count right away.
            start();
            return;
        }

        let element = web_sys::Element::from((*host).clone());
        let start = start.clone();
        guard.set_value(observe_once(&[element], 0.3, move |_| start()));
    });

    on_cleanup(move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
        guard.set_value(None);
    });

    view! {
        <span class="count-up" node_ref=host_ref>
            {display}
        </span>
    }
}
