//! Hero: floating product visual, translatable headline pair, stats row.
//!
//! The whole section plays the page-entrance stagger on mount and rides a
//! scroll parallax that pushes it down and fades it out as the visitor
//! scrolls toward the explainer.

use yew::prelude::*;

use crate::counter::CountUp;
use crate::motion::{
    entrance_style, hero_parallax, staggered_style, use_scroll_y, Stagger, TransitionProfile,
    Variant, Variants, CONTENT_ITEM, PAGE_STAGGER, STATS_ITEM, STATS_STAGGER,
};

/// Chip pop-in used by the floating visual.
static POP_IN: Variants = Variants {
    hidden: Variant::NEUTRAL.scale(0.5).opacity(0.0).y(20.0),
    visible: Variant::NEUTRAL,
    transition: TransitionProfile::spring(400.0, 22.0),
};

static CHIP_STAGGER: Stagger = Stagger {
    delay_children_ms: 500,
    stagger_children_ms: 150,
};

struct Stat {
    glyph: &'static str,
    glyph_class: &'static str,
    to: f64,
    decimals: usize,
    prefix: &'static str,
    suffix: &'static str,
    label: &'static str,
}

static STATS: [Stat; 4] = [
    Stat {
        glyph: "✦",
        glyph_class: "stat-glyph purple",
        to: 206.0,
        decimals: 0,
        prefix: "",
        suffix: "",
        label: "Projects Launched",
    },
    Stat {
        glyph: "👥",
        glyph_class: "stat-glyph green",
        to: 9.18,
        decimals: 3,
        prefix: "",
        suffix: "",
        label: "Supporters Empowered",
    },
    Stat {
        glyph: "⚡",
        glyph_class: "stat-glyph yellow",
        to: 6.4,
        decimals: 1,
        prefix: "",
        suffix: " M",
        label: "Total Market Cap",
    },
    Stat {
        glyph: "₿",
        glyph_class: "stat-glyph blue",
        to: 0.6,
        decimals: 1,
        prefix: "$",
        suffix: " M",
        label: "Earned by Creators",
    },
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub headline: AttrValue,
    pub subheadline: AttrValue,
    pub translating: bool,
    /// Owned by the root so the bottom bar can watch hero visibility.
    pub section_ref: NodeRef,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }
    let shown = *mounted;

    let scroll_y = use_scroll_y();
    let (parallax_y, parallax_opacity) = hero_parallax(scroll_y);
    let section_style = format!(
        "transform: translateY({parallax_y:.1}px); opacity: {parallax_opacity:.3};"
    );

    html! {
        <section id="home" ref={props.section_ref.clone()} class="hero" style={section_style}>
            <div class="hero-inner">
                <div style={staggered_style(&CONTENT_ITEM, shown, &PAGE_STAGGER, 0)}>
                    <FloatingVisual {shown} />
                </div>

                <div class="hero-copy">
                    <h1
                        key={props.headline.to_string()}
                        class="hero-headline"
                        style={staggered_style(&CONTENT_ITEM, shown, &PAGE_STAGGER, 1)}
                    >
                        {
                            if props.translating {
                                html! { <span class="translating-pulse">{ "Translating..." }</span> }
                            } else {
                                html! { <>{ props.headline.to_string() }</> }
                            }
                        }
                    </h1>

                    <p
                        key={props.subheadline.to_string()}
                        class="hero-subheadline"
                        style={staggered_style(&CONTENT_ITEM, shown, &PAGE_STAGGER, 2)}
                    >
                        { if props.translating { "...".to_string() } else { props.subheadline.to_string() } }
                    </p>

                    <div
                        class="stats-grid"
                        style={staggered_style(&CONTENT_ITEM, shown, &PAGE_STAGGER, 3)}
                    >
                        {
                            for STATS.iter().enumerate().map(|(index, stat)| html! {
                                <div
                                    class="stat"
                                    style={staggered_style(&STATS_ITEM, shown, &STATS_STAGGER, index)}
                                >
                                    <div class="stat-value">
                                        <span class={stat.glyph_class}>{ stat.glyph }</span>
                                        <CountUp
                                            to={stat.to}
                                            decimals={stat.decimals}
                                            prefix={stat.prefix}
                                            suffix={stat.suffix}
                                        />
                                    </div>
                                    <div class="stat-label">{ stat.label }</div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FloatingVisualProps {
    shown: bool,
}

/// The hero's product-UI collage: a dark glass screen with earnings and
/// chat chips popping in around it, then idling on float loops.
#[function_component(FloatingVisual)]
fn floating_visual(props: &FloatingVisualProps) -> Html {
    let shown = props.shown;

    html! {
        <div class="floating-ui">
            <div class="floating-screen" style={entrance_style(&CONTENT_ITEM, shown, 200)}>
                <div class="floating-grid-overlay"></div>

                <div class="earn-pill" style={staggered_style(&POP_IN, shown, &CHIP_STAGGER, 0)}>
                    <div class="earn-avatar">
                        <img src="https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop" alt="James" />
                        <span class="earn-badge">{ "♪" }</span>
                    </div>
                    <div class="earn-text">
                        <div class="earn-caption">{ "James earned" }</div>
                        <div class="earn-amount"><span class="accent-yellow">{ "$21K" }</span>{ " on music." }</div>
                    </div>
                </div>

                <div class="chip chip-cameron float-slow" style={staggered_style(&POP_IN, shown, &CHIP_STAGGER, 1)}>
                    { "Cameron" }
                </div>
                <div class="chip chip-esther float-slower" style={staggered_style(&POP_IN, shown, &CHIP_STAGGER, 2)}>
                    { "Esther" }
                </div>
                <div class="chip chip-john float-slowest" style={staggered_style(&POP_IN, shown, &CHIP_STAGGER, 3)}>
                    { "John" }
                </div>

                <div class="logo-stack">
                    <div class="logo-tile tile-navy float-slow" style={staggered_style(&POP_IN, shown, &CHIP_STAGGER, 4)}>
                        { "CRYPTO" }<br />{ ".COM" }
                    </div>
                    <div class="logo-tile tile-black float-slower" style={staggered_style(&POP_IN, shown, &CHIP_STAGGER, 5)}>
                        { "DWF" }<br />{ "LABS" }
                    </div>
                    <div class="logo-tile tile-gold float-slowest" style={staggered_style(&POP_IN, shown, &CHIP_STAGGER, 6)}>
                        { "BINANCE" }<br />{ "LABS" }
                    </div>
                </div>

                <div class="hero-portrait portrait-star" style={staggered_style(&POP_IN, shown, &CHIP_STAGGER, 7)}>
                    <img src="https://images.unsplash.com/photo-1517841905240-472988babdf9?w=200&h=200&fit=crop" alt="Creator" />
                </div>
                <div class="hero-portrait portrait-round" style={staggered_style(&POP_IN, shown, &CHIP_STAGGER, 8)}>
                    <img src="https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&h=200&fit=crop" alt="Supporter" />
                </div>
            </div>
        </div>
    }
}
