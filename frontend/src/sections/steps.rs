//! "How it works" explainer and the three step sections.
//!
//! Each step pairs a 3D visual on the left with a typography column on the
//! right. Visuals scale in, columns slide in from the right, and all of it
//! re-arms on exit so the choreography replays when the visitor scrolls
//! back.

use yew::prelude::*;

use crate::counter::CountUp;
use crate::motion::{
    entrance_style, staggered_style, use_reveal, RevealOptions, REVEAL_ITEM, REVEAL_STAGGER,
    SCALE_IN, SIDE_PANEL,
};
use crate::tilt::{pointer_fraction, use_tilt, TiltConfig};
use web_sys::{Element, MouseEvent};

const VISUAL_REVEAL: RevealOptions = RevealOptions {
    once: false,
    amount: 0.4,
    margin: "0px",
};

const COLUMN_REVEAL: RevealOptions = RevealOptions {
    once: false,
    amount: 0.3,
    margin: "0px",
};

/// Story-card tilt: the strongest of the three.
const STORY_TILT: TiltConfig = TiltConfig {
    max_rotate_x: 20.0,
    max_rotate_y: 25.0,
    stiffness: 300.0,
    damping: 30.0,
};

/// Social-graph tilt: wide visual, gentler angles and a softer spring.
const GRAPH_TILT: TiltConfig = TiltConfig {
    max_rotate_x: 12.0,
    max_rotate_y: 12.0,
    stiffness: 200.0,
    damping: 25.0,
};

// ---------------------------------------------------------------------------
// "3 Steps to LAUNCH (FREE)"
// ---------------------------------------------------------------------------

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(
        section_ref.clone(),
        RevealOptions {
            once: false,
            amount: 0.3,
            margin: "0px",
        },
    );

    html! {
        <section id="how-it-works" class="how-it-works">
            <div class="spotlight-backdrop"></div>
            <div ref={section_ref} class="how-it-works-inner">
                <h2
                    class="mega-line"
                    style={staggered_style(&REVEAL_ITEM, revealed, &REVEAL_STAGGER, 0)}
                >
                    { "3 Steps to" }
                </h2>
                <h2
                    class="mega-line"
                    style={staggered_style(&REVEAL_ITEM, revealed, &REVEAL_STAGGER, 1)}
                >
                    { "LAUNCH" }
                </h2>
                <div style={staggered_style(&REVEAL_ITEM, revealed, &REVEAL_STAGGER, 2)}>
                    <h2 class="mega-line free-wobble">{ "( FREE )" }</h2>
                </div>
            </div>
        </section>
    }
}

// ---------------------------------------------------------------------------
// Shared bits
// ---------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
struct BulletProps {
    pub children: Children,
    #[prop_or(AttrValue::Static("dot-white"))]
    pub dot: AttrValue,
}

#[function_component(Bullet)]
fn bullet(props: &BulletProps) -> Html {
    html! {
        <div class="bullet">
            <span class={classes!("bullet-dot", props.dot.to_string())}></span>
            <p>{ props.children.clone() }</p>
        </div>
    }
}

struct Tag {
    glyph: &'static str,
    label: &'static str,
    class: &'static str,
}

static STORY_TAGS: [Tag; 11] = [
    Tag { glyph: "⌨", label: "Software & Dev", class: "tag-gray" },
    Tag { glyph: "🧠", label: "AI Agents", class: "tag-amber" },
    Tag { glyph: "🎮", label: "Gaming", class: "tag-purple" },
    Tag { glyph: "⚡", label: "Crazy Stuff", class: "tag-green" },
    Tag { glyph: "🎨", label: "Digital Arts", class: "tag-blue" },
    Tag { glyph: "♪", label: "Music", class: "tag-emerald" },
    Tag { glyph: "🏆", label: "Sport", class: "tag-gray" },
    Tag { glyph: "🌱", label: "DeSci", class: "tag-amber-dim" },
    Tag { glyph: "👥", label: "Dao", class: "tag-indigo" },
    Tag { glyph: "♥", label: "Charity", class: "tag-pink" },
    Tag { glyph: "🎓", label: "Education", class: "tag-violet" },
];

// ---------------------------------------------------------------------------
// Step 1 — Tell your story
// ---------------------------------------------------------------------------

#[function_component(StepOne)]
pub fn step_one() -> Html {
    let visual_ref = use_node_ref();
    let visual_shown = use_reveal(visual_ref.clone(), VISUAL_REVEAL);
    let column_ref = use_node_ref();
    let column_shown = use_reveal(column_ref.clone(), COLUMN_REVEAL);

    html! {
        <section class="step-section">
            <div class="step-grid">
                <div
                    ref={visual_ref}
                    class="perspective-frame"
                    style={entrance_style(&SCALE_IN, visual_shown, 0)}
                >
                    <StoryCard />
                </div>

                <div
                    ref={column_ref}
                    class="step-column"
                    style={entrance_style(&SIDE_PANEL, column_shown, 0)}
                >
                    <span class="step-kicker">{ "— Step 1 —" }</span>
                    <h2 class="step-title">
                        { "Tell your " }
                        <span class="underline-smear">{ "story" }</span>
                    </h2>

                    <div class="bullet-list">
                        <Bullet dot="dot-yellow">{ "Share your vision, roadmap & impact" }</Bullet>
                        <Bullet dot="dot-yellow">{ "Define token supply & allocation" }</Bullet>
                    </div>

                    <div class="tag-grid">
                        {
                            for STORY_TAGS.iter().map(|tag| html! {
                                <span class={classes!("tag", tag.class)}>
                                    <span class="tag-glyph">{ tag.glyph }</span>
                                    { tag.label }
                                </span>
                            })
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Spring-tilted video card with three floating layers at distinct
/// simulated depths, so the card parallaxes within itself as it tilts.
#[function_component(StoryCard)]
fn story_card() -> Html {
    let card_ref = use_node_ref();
    let tilt = use_tilt(card_ref.clone(), STORY_TILT);

    html! {
        <div
            ref={card_ref}
            class="tilt-frame"
            onmousemove={tilt.onmousemove}
            onmouseleave={tilt.onmouseleave}
        >
            <div class="tilt-body" style={tilt.style}>
                <div class="story-screen depth-0">
                    <video autoplay=true muted=true loop=true playsinline=true src="/videos/step1-video.mp4"></video>
                    <div class="story-shade"></div>
                </div>

                <div class="story-layer story-code depth-60 float-slow">
                    <div class="mini-tile">{ "⌨" }</div>
                    <span class="ping-dot"></span>
                </div>

                <div class="story-layer story-rail depth-40 float-slower">
                    <div class="rail-icon blue">{ "♪" }</div>
                    <div class="rail-icon pink">{ "🎨" }</div>
                    <div class="rail-icon yellow">{ "✦" }</div>
                </div>

                <div class="story-layer story-note depth-80 float-slowest">
                    <p>{ "Start your project and go live in just a few clicks." }</p>
                    <span class="note-arrow">{ "→" }</span>
                </div>
            </div>
        </div>
    }
}

// ---------------------------------------------------------------------------
// Step 2 — Community fair buy-in raffle
// ---------------------------------------------------------------------------

#[function_component(StepTwo)]
pub fn step_two() -> Html {
    let visual_ref = use_node_ref();
    let visual_shown = use_reveal(visual_ref.clone(), VISUAL_REVEAL);
    let column_ref = use_node_ref();
    let column_shown = use_reveal(column_ref.clone(), COLUMN_REVEAL);

    html! {
        <section class="step-section">
            <div class="step-grid">
                <div
                    ref={visual_ref}
                    class="perspective-frame"
                    style={entrance_style(&SCALE_IN, visual_shown, 0)}
                >
                    <TicketCard />
                </div>

                <div
                    ref={column_ref}
                    class="step-column"
                    style={entrance_style(&SIDE_PANEL, column_shown, 0)}
                >
                    <span class="step-kicker">{ "— Step 2 —" }</span>
                    <h2 class="step-title">
                        { "Community fair" }<br />
                        { "buy - " }<span class="accent-indigo">{ "in raffle" }</span>
                    </h2>

                    <div class="bullet-list">
                        <Bullet>{ "60-minute ticket draw for early access" }</Bullet>
                        <Bullet>{ "Tickets cheaper the earlier you join" }</Bullet>
                        <Bullet>{ "Winners picked via VRF Oracle" }</Bullet>
                        <Bullet>{ "Full refunds if you're not drawn" }</Bullet>
                    </div>

                    <div class="badge-row">
                        <span class="badge">{ "▦ No Code" }</span>
                        <span class="badge">{ "💴 No VC" }</span>
                        <span class="badge badge-green">{ "✓ No BS" }</span>
                    </div>

                    <div class="insight">{ "Insight: No gas wars. No whale snipes. Fair for everyone." }</div>

                    <button class="cta-pill">{ "⚡ Create My Project Now" }</button>
                </div>
            </div>
        </section>
    }
}

/// The golden-ticket card uses the original's second tilt flavour: raw
/// state mapped straight to a transform, smoothed by a CSS transition
/// instead of a spring, and gentler angles than the story card.
#[function_component(TicketCard)]
fn ticket_card() -> Html {
    let card_ref = use_node_ref();
    let rotation = use_state(|| (0.0f64, 0.0f64));

    let onmousemove = {
        let card_ref = card_ref.clone();
        let rotation = rotation.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = card_ref.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let (x_pct, y_pct) = pointer_fraction(
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
                event.client_x() as f64,
                event.client_y() as f64,
            );
            // fractions doubled to [-1, 1], then ±10° / ±15°
            rotation.set((-y_pct * 2.0 * 10.0, x_pct * 2.0 * 15.0));
        })
    };

    let onmouseleave = {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| rotation.set((0.0, 0.0)))
    };

    let (rotate_x, rotate_y) = *rotation;
    let body_style = format!(
        "transform: rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg); transform-style: preserve-3d; transition: transform 300ms ease-out;"
    );

    html! {
        <div class="tilt-frame" ref={card_ref} {onmousemove} {onmouseleave}>
            <div class="ticket-body" style={body_style}>
                <div class="ticket-face depth-0">
                    <div class="ticket-sheen"></div>
                    <div class="ticket-notch notch-left"></div>
                    <div class="ticket-notch notch-right"></div>

                    <div class="ticket-content">
                        <div class="ticket-head">
                            <span>{ "🎫" }</span>
                            <span class="ticket-head-label">{ "Golden Ticket" }</span>
                            <span class="ticket-mirrored">{ "🎫" }</span>
                        </div>

                        <h3 class="ticket-title">{ "EARLY TOKEN" }<br />{ "ALLOCATION DRAW" }</h3>

                        <div class="ticket-meta">
                            <div class="ticket-meta-cell">
                                <span class="ticket-meta-label">{ "Token" }</span>
                                <span class="ticket-meta-value">{ "TTDYH" }</span>
                            </div>
                            <div class="ticket-meta-cell">
                                <span class="ticket-meta-label">{ "Ticket" }</span>
                                <span class="ticket-meta-value">{ "345 P" }</span>
                            </div>
                            <div class="ticket-meta-cell">
                                <span class="ticket-meta-label">{ "Draw" }</span>
                                <span class="ticket-meta-value">{ "18:00" }</span>
                            </div>
                        </div>

                        <div class="ticket-dice">{ "🎲" }</div>

                        <div class="ticket-foot">
                            <div class="ticket-brand">{ "SPARKFUND" }</div>
                            <div class="ticket-tagline">{ "Your Creative Work, Trading on a Tokenized Market" }</div>
                        </div>
                    </div>
                </div>

                <div class="ticket-pill pill-buyin depth-50 float-slow">
                    <div class="pill-avatar">
                        <img src="https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100&h=100&fit=crop" alt="Winner" />
                        <span class="presence-dot green"></span>
                    </div>
                    <div class="pill-text">
                        <span class="pill-caption">{ "Buy-in" }</span>
                        <span class="pill-label">{ "Winners" }</span>
                    </div>
                </div>

                <div class="ticket-pill pill-winners depth-70 float-slower">
                    <div class="pill-trophy">{ "🏆" }</div>
                    <div class="pill-text">
                        <span class="pill-caption">{ "WINNERS" }</span>
                        <span class="pill-label">{ "James and" }<br />{ "299 others" }</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

// ---------------------------------------------------------------------------
// Step 3 — Earn as your project progresses
// ---------------------------------------------------------------------------

#[function_component(StepThree)]
pub fn step_three() -> Html {
    let visual_ref = use_node_ref();
    let visual_shown = use_reveal(visual_ref.clone(), VISUAL_REVEAL);
    let column_ref = use_node_ref();
    let column_shown = use_reveal(column_ref.clone(), COLUMN_REVEAL);

    html! {
        <section class="step-section">
            <div class="step-grid">
                <div ref={visual_ref} style={entrance_style(&SCALE_IN, visual_shown, 0)}>
                    <SocialGraph />
                </div>

                <div
                    ref={column_ref}
                    class="step-column"
                    style={entrance_style(&SIDE_PANEL, column_shown, 0)}
                >
                    <span class="step-kicker">{ "— Step 3 —" }</span>
                    <h2 class="step-title step-title-heavy">
                        { "Earn as Your" }<br />
                        { "Project " }<span class="accent-green">{ "Progress" }</span>
                    </h2>

                    <div class="bullet-list">
                        <Bullet>{ "Bonding-curve launch → PancakeSwap LP" }</Bullet>
                        <Bullet>{ "Creators vest 2% of sale over 30 days" }</Bullet>
                        <Bullet>{ "Creators share 50% of all trading & DEX fees" }</Bullet>
                    </div>

                    <div class="badge-row">
                        <span class="badge">{ "▦ No Code" }</span>
                        <span class="badge badge-amber">{ "💴 No VC" }</span>
                        <span class="badge badge-green">{ "✓ No BS" }</span>
                    </div>

                    <div class="insight">{ "Insight: No gas wars. No whale snipes. Fair for everyone." }</div>

                    <button class="cta-pill cta-pill-large">{ "⚡ Create My Project Now" }</button>
                </div>
            </div>
        </section>
    }
}

/// Rotating constellation of community events orbiting the creator card.
/// The orbit turns once a minute; every satellite counter-rotates at the
/// same rate so it keeps its upright orientation, and the whole visual
/// tilts on a soft spring.
#[function_component(SocialGraph)]
fn social_graph() -> Html {
    let container_ref = use_node_ref();
    let tilt = use_tilt(container_ref.clone(), GRAPH_TILT);

    html! {
        <div
            ref={container_ref}
            class="tilt-frame graph-frame"
            onmousemove={tilt.onmousemove}
            onmouseleave={tilt.onmouseleave}
        >
            <div class="graph-body" style={tilt.style}>
                <div class="graph-rings depth-back">
                    <div class="graph-ring ring-inner"></div>
                    <div class="graph-ring ring-mid"></div>
                    <div class="graph-ring ring-outer"></div>
                    <div class="graph-spoke rotate-45"></div>
                    <div class="graph-spoke rotate-minus-45"></div>
                    <div class="graph-spoke vertical"></div>
                    <div class="graph-spoke"></div>
                </div>

                <div class="orbit spin-orbit">
                    <div class="satellite sat-chat depth-30">
                        <div class="counter-spin">
                            <div class="chat-bubble">
                                <img src="https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=50&h=50&fit=crop" alt="Backer" />
                                <span>{ "I'm very bullish on this project 🚀" }</span>
                            </div>
                            <div class="chat-bubble chat-bubble-faded">
                                <span>{ "Let's do it! let's keep pushing these ICOs forward ⚡" }</span>
                            </div>
                        </div>
                    </div>

                    <div class="satellite sat-joined depth-40">
                        <div class="counter-spin joined-pill">
                            <span class="joined-avatar">{ "👥" }</span>
                            <span class="joined-text">
                                <b>{ "Just participated" }</b>
                                { "in Buy-in" }
                            </span>
                        </div>
                    </div>

                    <div class="satellite sat-winners depth-30">
                        <div class="counter-spin winners-cluster">
                            <div class="avatar-stack">
                                <img src="https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=50&h=50&fit=crop" alt="Winner" />
                                <img src="https://images.unsplash.com/photo-1527980965255-d3b416303d12?w=50&h=50&fit=crop" alt="Winner" />
                                <img src="https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=50&h=50&fit=crop" alt="Winner" />
                                <span class="avatar-more">{ "+300" }</span>
                            </div>
                            <span class="winners-caption">{ "+300 winners" }<br /><i>{ "for allocation draw" }</i></span>
                        </div>
                    </div>

                    <div class="satellite sat-purchase depth-50">
                        <div class="counter-spin purchase-card">
                            <img src="https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=50&h=50&fit=crop" alt="Buyer" />
                            <span class="purchase-text">
                                <b>{ "Just bought $10k" }</b>
                                { "Project Token" }
                            </span>
                        </div>
                    </div>

                    <div class="satellite sat-reward depth-40">
                        <div class="counter-spin reward-card">
                            <span class="reward-avatar">{ "F" }</span>
                            <span class="reward-text">
                                <b>{ "Fessi" }<em class="reward-amount">{ "+250 SPARK" }</em></b>
                                { "From Chris • 1m" }
                            </span>
                        </div>
                    </div>

                    <div class="satellite sat-avatar depth-20">
                        <img class="counter-spin lone-avatar" src="https://images.unsplash.com/photo-1527980965255-d3b416303d12?w=50&h=50&fit=crop" alt="Community member" />
                    </div>
                </div>

                <div class="creator-card depth-20">
                    <div class="creator-portrait">
                        <img src="https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop" alt="Robert Fox" />
                        <span class="verified-dot">{ "✓" }</span>
                    </div>
                    <h3 class="creator-name">{ "ROBERT FOX" }</h3>
                    <div class="creator-role">{ "Project Creator" }</div>
                    <div class="creator-revenue">
                        { "$" }<CountUp to={148.989} decimals={3} />
                    </div>
                    <div class="creator-revenue-label">{ "Total Revenues" }</div>
                </div>
            </div>
        </div>
    }
}
