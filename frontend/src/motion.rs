//! Entrance choreography as configuration data.
//!
//! Every section declares a `{hidden, visible}` style pair, a transition
//! profile and optionally a stagger for its children. Rendering is one
//! generic utility that turns the declaration plus a reveal signal into an
//! inline style, so no section carries imperative sequencing of its own.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

/// A single style state: what an element looks like before and after its
/// entrance, expressed as plain numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub scale: f64,
    pub rotate_x: f64,
}

impl Variant {
    pub const NEUTRAL: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        blur: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
    };

    pub const fn opacity(mut self, value: f64) -> Self {
        self.opacity = value;
        self
    }

    pub const fn x(mut self, value: f64) -> Self {
        self.x = value;
        self
    }

    pub const fn y(mut self, value: f64) -> Self {
        self.y = value;
        self
    }

    pub const fn blur(mut self, value: f64) -> Self {
        self.blur = value;
        self
    }

    pub const fn scale(mut self, value: f64) -> Self {
        self.scale = value;
        self
    }

    pub const fn rotate_x(mut self, value: f64) -> Self {
        self.rotate_x = value;
        self
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotateX({}deg); filter: blur({}px);",
            self.opacity, self.x, self.y, self.scale, self.rotate_x, self.blur
        )
    }
}

/// How an element travels between its two variants. Springs carry the
/// original tuning constants and are rendered as a CSS transition whose
/// duration comes from the spring's settle time; an underdamped pair gets
/// an overshooting curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionProfile {
    Spring { stiffness: f64, damping: f64 },
    Ease { duration_ms: u32, curve: &'static str },
}

impl TransitionProfile {
    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Self::Spring { stiffness, damping }
    }

    pub const fn ease(duration_ms: u32, curve: &'static str) -> Self {
        Self::Ease { duration_ms, curve }
    }

    /// Settle-time estimate for a unit-mass spring: ~8/damping seconds,
    /// bounded to keep degenerate tunings usable.
    pub fn duration_ms(&self) -> u32 {
        match self {
            Self::Spring { damping, .. } => {
                let seconds = 8.0 / damping.max(1.0);
                (seconds * 1000.0).clamp(300.0, 1400.0) as u32
            }
            Self::Ease { duration_ms, .. } => *duration_ms,
        }
    }

    pub fn damping_ratio(&self) -> f64 {
        match self {
            Self::Spring { stiffness, damping } => damping / (2.0 * stiffness.max(f64::MIN_POSITIVE).sqrt()),
            Self::Ease { .. } => 1.0,
        }
    }

    pub fn curve(&self) -> &'static str {
        match self {
            Self::Spring { .. } => {
                if self.damping_ratio() < 1.0 {
                    // underdamped: let the element swing past its rest pose
                    "cubic-bezier(0.34, 1.45, 0.64, 1)"
                } else {
                    "cubic-bezier(0.22, 1, 0.36, 1)"
                }
            }
            Self::Ease { curve, .. } => curve,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Variant,
    pub visible: Variant,
    pub transition: TransitionProfile,
}

/// Parent-declared child sequencing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_children_ms: u32,
}

impl Stagger {
    pub const fn delay_for(&self, index: usize) -> u32 {
        self.delay_children_ms + index as u32 * self.stagger_children_ms
    }
}

// ---------------------------------------------------------------------------
// Named presets. These are the original page's orchestration tables and are
// consumed as data by `entrance_style` / `staggered_style`.
// ---------------------------------------------------------------------------

pub static PAGE_STAGGER: Stagger = Stagger {
    delay_children_ms: 100,
    stagger_children_ms: 250,
};

pub static CONTENT_ITEM: Variants = Variants {
    hidden: Variant::NEUTRAL.y(40.0).opacity(0.0).blur(10.0).scale(0.95),
    visible: Variant::NEUTRAL,
    transition: TransitionProfile::spring(50.0, 15.0),
};

pub static STATS_STAGGER: Stagger = Stagger {
    delay_children_ms: 100,
    stagger_children_ms: 100,
};

pub static STATS_ITEM: Variants = Variants {
    hidden: Variant::NEUTRAL.y(20.0).opacity(0.0).scale(0.9),
    visible: Variant::NEUTRAL,
    transition: TransitionProfile::spring(100.0, 12.0),
};

pub static REVEAL_STAGGER: Stagger = Stagger {
    delay_children_ms: 200,
    stagger_children_ms: 150,
};

pub static REVEAL_ITEM: Variants = Variants {
    hidden: Variant::NEUTRAL
        .y(100.0)
        .rotate_x(40.0)
        .opacity(0.0)
        .blur(15.0),
    visible: Variant::NEUTRAL,
    transition: TransitionProfile::spring(70.0, 20.0),
};

pub static SIDE_PANEL: Variants = Variants {
    hidden: Variant::NEUTRAL.x(50.0).opacity(0.0),
    visible: Variant::NEUTRAL,
    transition: TransitionProfile::ease(800, "cubic-bezier(0.22, 1, 0.36, 1)"),
};

pub static SCALE_IN: Variants = Variants {
    hidden: Variant::NEUTRAL.scale(0.8).opacity(0.0),
    visible: Variant::NEUTRAL,
    transition: TransitionProfile::spring(100.0, 18.0),
};

pub static CARD_STAGGER: Stagger = Stagger {
    delay_children_ms: 0,
    stagger_children_ms: 100,
};

pub static CARD_ITEM: Variants = Variants {
    hidden: Variant::NEUTRAL.y(20.0).opacity(0.0),
    visible: Variant::NEUTRAL,
    transition: TransitionProfile::spring(50.0, 14.0),
};

pub static MENU_CONTENT: Variants = Variants {
    hidden: Variant::NEUTRAL.y(20.0).opacity(0.0),
    visible: Variant::NEUTRAL,
    transition: TransitionProfile::ease(400, "ease-out"),
};

/// Inline style for an element animating between its variants.
pub fn entrance_style(variants: &Variants, shown: bool, extra_delay_ms: u32) -> String {
    let state = if shown {
        &variants.visible
    } else {
        &variants.hidden
    };
    format!(
        "{} transition: all {}ms {} {}ms; will-change: transform, opacity, filter;",
        state.css(),
        variants.transition.duration_ms(),
        variants.transition.curve(),
        extra_delay_ms,
    )
}

/// Same, for the `index`-th child under a parent stagger.
pub fn staggered_style(
    variants: &Variants,
    shown: bool,
    stagger: &Stagger,
    index: usize,
) -> String {
    entrance_style(variants, shown, stagger.delay_for(index))
}

// ---------------------------------------------------------------------------
// Reveal signal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// `true` latches on first entry; `false` re-arms when the element
    /// leaves the viewport so the entrance replays on re-scroll.
    pub once: bool,
    /// Fraction of the element that must be visible to trigger.
    pub amount: f64,
    /// Virtual grow/shrink of the viewport test box, CSS margin syntax.
    pub margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            once: false,
            amount: 0.0,
            margin: "0px",
        }
    }
}

/// Derived visibility signal for `node`, flipping when its visible
/// fraction crosses `opts.amount`.
#[hook]
pub fn use_reveal(node: NodeRef, opts: RevealOptions) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer: Option<IntersectionObserver> = None;
                let mut callback: Option<
                    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
                > = None;

                if let Some(element) = node.cast::<Element>() {
                    let on_intersect = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, obs: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    revealed.set(true);
                                    if opts.once {
                                        obs.disconnect();
                                    }
                                } else if !opts.once {
                                    revealed.set(false);
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(opts.amount));
                    init.set_root_margin(opts.margin);

                    if let Ok(obs) = IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        obs.observe(&element);
                        observer = Some(obs);
                        callback = Some(on_intersect);
                    }
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    *revealed
}

/// Current vertical scroll offset, updated from a window scroll listener.
/// Feeds the hero parallax.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let listener_window = window.clone();
                let on_scroll = Closure::wrap(Box::new(move || {
                    scroll_y.set(listener_window.scroll_y().unwrap_or(0.0));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    )
                    .expect("failed to attach scroll listener");

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    *scroll_y
}

/// Hero parallax mapping: scroll 0..800 ⇒ translate 0..250, scroll 0..600
/// ⇒ opacity 1..0.
pub fn hero_parallax(scroll_y: f64) -> (f64, f64) {
    let y = (scroll_y * 250.0 / 800.0).clamp(0.0, 250.0);
    let opacity = (1.0 - scroll_y / 600.0).clamp(0.0, 1.0);
    (y, opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_spaces_children_in_declaration_order() {
        assert_eq!(PAGE_STAGGER.delay_for(0), 100);
        assert_eq!(PAGE_STAGGER.delay_for(1), 350);
        assert_eq!(PAGE_STAGGER.delay_for(2), 600);
        assert_eq!(REVEAL_STAGGER.delay_for(3), 200 + 3 * 150);
    }

    #[test]
    fn spring_duration_tracks_damping() {
        let loose = TransitionProfile::spring(100.0, 12.0);
        let tight = TransitionProfile::spring(300.0, 30.0);
        assert!(loose.duration_ms() > tight.duration_ms());
        assert!(loose.duration_ms() <= 1400);
        assert!(tight.duration_ms() >= 300);
    }

    #[test]
    fn underdamped_springs_get_an_overshoot_curve() {
        // 100/12 => damping ratio 0.6
        assert!(STATS_ITEM.transition.damping_ratio() < 1.0);
        assert!(STATS_ITEM.transition.curve().contains("1.45"));
        // 50/15 => damping ratio just above critical
        assert!(CONTENT_ITEM.transition.damping_ratio() > 1.0);
        assert!(!CONTENT_ITEM.transition.curve().contains("1.45"));
    }

    #[test]
    fn entrance_style_switches_between_variant_states() {
        let hidden = entrance_style(&CONTENT_ITEM, false, 0);
        let visible = entrance_style(&CONTENT_ITEM, true, 0);
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("blur(10px)"));
        assert!(visible.contains("opacity: 1"));
        assert!(visible.contains("blur(0px)"));
    }

    #[test]
    fn staggered_style_carries_the_child_delay() {
        let style = staggered_style(&STATS_ITEM, true, &STATS_STAGGER, 2);
        assert!(style.contains("300ms;"));
    }

    #[test]
    fn hero_parallax_clamps_at_both_ends() {
        assert_eq!(hero_parallax(0.0), (0.0, 1.0));
        let (y, opacity) = hero_parallax(400.0);
        assert!(y > 0.0 && y < 250.0);
        assert!(opacity > 0.0 && opacity < 1.0);
        assert_eq!(hero_parallax(5000.0), (250.0, 0.0));
    }
}
