//! "Built for creators, loved by communities" — the two social-proof
//! cards. Both reveal once with a child stagger; the communities card adds
//! a draw-on-reveal doodle and a spinning coin.

use yew::prelude::*;

use crate::motion::{staggered_style, use_reveal, RevealOptions, CARD_ITEM, CARD_STAGGER};

const CARD_REVEAL: RevealOptions = RevealOptions {
    once: true,
    amount: 0.2,
    margin: "0px",
};

#[function_component(CreatorsCommunities)]
pub fn creators_communities() -> Html {
    let creators_ref = use_node_ref();
    let creators_shown = use_reveal(creators_ref.clone(), CARD_REVEAL);
    let communities_ref = use_node_ref();
    let communities_shown = use_reveal(communities_ref.clone(), CARD_REVEAL);

    html! {
        <section class="community-section">
            <div class="community-header">
                <div class="community-strip">
                    <span>{ "ideas" }</span>
                    <span class="strip-chip chip-amber">{ "→ don't grow" }</span>
                    <span>{ "in" }</span>
                    <span class="strip-chip chip-green">{ "→ silence" }</span>
                </div>
                <h2 class="community-title">
                    { "Built for creators," }<br />
                    { "Loved by communities" }
                </h2>
            </div>

            <div class="community-grid">
                <div ref={creators_ref} class="community-card card-creators">
                    <div
                        class="card-tag tag-dark"
                        style={staggered_style(&CARD_ITEM, creators_shown, &CARD_STAGGER, 0)}
                    >
                        { "Creators" }
                    </div>

                    <div class="card-points">
                        <div
                            class="card-point"
                            style={staggered_style(&CARD_ITEM, creators_shown, &CARD_STAGGER, 1)}
                        >
                            <span class="point-icon">{ "🎯" }</span>
                            <span class="point-text">{ "Raise funds tied to long-term success" }</span>
                        </div>
                        <div
                            class="card-point"
                            style={staggered_style(&CARD_ITEM, creators_shown, &CARD_STAGGER, 2)}
                        >
                            <span class="point-icon">{ "🚀" }</span>
                            <span class="point-text">{ "Gain visibility & genuine traction" }</span>
                        </div>
                        <div
                            class="card-point"
                            style={staggered_style(&CARD_ITEM, creators_shown, &CARD_STAGGER, 3)}
                        >
                            <span class="point-icon">{ "✦" }</span>
                            <span class="point-text">{ "Zero upfront cost, zero insider allocations" }</span>
                        </div>
                    </div>

                    <div class="sticker-collage">
                        <div class="sticker sticker-wallet float-slow">
                            <div class="sticker-core core-orange">{ "👛" }</div>
                        </div>
                        <div class="sticker sticker-photo-1 float-slower">
                            <img src="https://images.unsplash.com/photo-1517841905240-472988babdf9?w=300&h=300&fit=crop" alt="Creator" />
                        </div>
                        <div class="sticker sticker-chat float-slowest">
                            <div class="sticker-core core-purple">{ "💬" }</div>
                        </div>
                        <div class="sticker sticker-photo-2 float-slow">
                            <img src="https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=300&h=300&fit=crop" alt="Creator" />
                        </div>
                        <div class="sticker sticker-dollar float-slower">
                            <div class="sticker-core core-black">{ "$" }</div>
                        </div>
                    </div>
                </div>

                <div ref={communities_ref} class="community-card card-communities">
                    <div class="doodle-zone">
                        <svg
                            width="300"
                            height="200"
                            viewBox="0 0 300 200"
                            class={classes!("doodle", communities_shown.then_some("drawn"))}
                        >
                            <path
                                class="doodle-loop"
                                d="M 50 150 C 50 50, 150 50, 150 100 C 150 150, 50 150, 50 50"
                            />
                            <path class="doodle-line" d="M 150 50 L 250 150" />
                            <path class="doodle-head" d="M 240 150 L 250 150 L 250 140" />
                            <path class="doodle-star" d="M 270 40 L 280 60 L 260 60 Z" />
                        </svg>

                        <div class="coin spin-coin">
                            <span>{ "$" }</span>
                            <div class="coin-halo"></div>
                        </div>
                        <div class="sparkle pulse-sparkle">{ "✦" }</div>
                    </div>

                    <div
                        class="card-tag tag-slate"
                        style={staggered_style(&CARD_ITEM, communities_shown, &CARD_STAGGER, 0)}
                    >
                        { "Communities" }
                    </div>

                    <div class="card-points">
                        <div
                            class="card-point point-boxed"
                            style={staggered_style(&CARD_ITEM, communities_shown, &CARD_STAGGER, 1)}
                        >
                            <span class="point-icon icon-amber">{ "✦" }</span>
                            <span class="point-text">{ "Back early, reap unlimited upside" }</span>
                        </div>
                        <div
                            class="card-point point-boxed"
                            style={staggered_style(&CARD_ITEM, communities_shown, &CARD_STAGGER, 2)}
                        >
                            <span class="point-icon icon-green">{ "⚡" }</span>
                            <span class="point-text">{ "Easily discover projects doing real good" }</span>
                        </div>
                        <div
                            class="card-point point-boxed"
                            style={staggered_style(&CARD_ITEM, communities_shown, &CARD_STAGGER, 3)}
                        >
                            <span class="point-icon icon-pink">{ "💬" }</span>
                            <span class="point-text">{ "Co-create and engage directly" }</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
