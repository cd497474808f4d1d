//! One-shot count-up number.
//!
//! The animation arms the first time its host enters the viewport and
//! never re-arms. Intermediate values are written straight into the text
//! node every frame; the frame loop is dropped on teardown so an unmounted
//! counter stops without touching a detached element.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::motion::{use_reveal, RevealOptions};
use crate::raf::RafLoop;

const DURATION_MS: f64 = 2500.0;

/// Overshoot-then-settle easing (back-out). Exceeds 1.0 through the tail
/// and lands exactly on 1.0 at t = 1.
fn ease_out_back(t: f64) -> f64 {
    const C1: f64 = 1.70158;
    const C3: f64 = C1 + 1.0;
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}

/// Display progress: the eased curve clamped to the target so the shown
/// value never decreases and never exceeds the final number. The curve's
/// own settle brings it back to exactly 1.0 at the end.
pub fn display_progress(t: f64) -> f64 {
    ease_out_back(t.clamp(0.0, 1.0)).clamp(0.0, 1.0)
}

pub fn format_value(value: f64, decimals: usize, prefix: &str, suffix: &str) -> String {
    format!("{}{:.*}{}", prefix, decimals, value, suffix)
}

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub to: f64,
    #[prop_or(0)]
    pub decimals: usize,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(
        node.clone(),
        RevealOptions {
            once: true,
            amount: 0.0,
            margin: "-50px",
        },
    );
    let raf: Rc<RefCell<Option<RafLoop>>> = use_mut_ref(|| None);
    let started = use_mut_ref(|| false);

    {
        let node = node.clone();
        let raf = raf.clone();
        let to = props.to;
        let decimals = props.decimals;
        let prefix = props.prefix.clone();
        let suffix = props.suffix.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible && !*started.borrow() {
                    *started.borrow_mut() = true;
                    let mut start: Option<f64> = None;
                    raf.borrow_mut().replace(RafLoop::start(move |timestamp| {
                        let Some(element) = node.cast::<Element>() else {
                            // host detached mid-animation: stop silently
                            return false;
                        };
                        let begun = *start.get_or_insert(timestamp);
                        let t = ((timestamp - begun) / DURATION_MS).min(1.0);
                        let value = to * display_progress(t);
                        element.set_text_content(Some(&format_value(
                            value, decimals, &prefix, &suffix,
                        )));
                        t < 1.0
                    }));
                }
                || ()
            },
            visible,
        );
    }

    {
        let raf = raf.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    raf.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <span class="count-up" ref={node}>{ format_value(0.0, props.decimals, &props.prefix, &props.suffix) }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_monotone_and_bounded() {
        let mut previous = 0.0;
        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            let p = display_progress(t);
            assert!(p >= previous, "decreased at t={t}");
            assert!(p <= 1.0, "exceeded target at t={t}");
            previous = p;
        }
    }

    #[test]
    fn animation_lands_exactly_on_the_target() {
        assert_eq!(display_progress(1.0), 1.0);
        assert_eq!(format_value(206.0 * display_progress(1.0), 0, "", ""), "206");
        assert_eq!(
            format_value(9.18 * display_progress(1.0), 3, "", ""),
            "9.180"
        );
    }

    #[test]
    fn formatting_applies_precision_prefix_and_suffix() {
        assert_eq!(format_value(6.4, 1, "", " M"), "6.4 M");
        assert_eq!(format_value(0.6, 1, "$", " M"), "$0.6 M");
        assert_eq!(format_value(148.989, 3, "", ""), "148.989");
    }

    #[test]
    fn curve_actually_overshoots_before_the_clamp() {
        let raw = ease_out_back(0.8);
        assert!(raw > 1.0);
        assert_eq!(display_progress(0.8), 1.0);
    }
}
