//! Footer: brand row, "Get started" CTA card, nav grid, giant wordmark and
//! the back-to-top control.

use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let on_back_to_top = Callback::from(|_| scroll_to_top());

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-top">
                    <div class="footer-brand-column">
                        <div class="footer-wordmark-small">{ "SPARKFUND" }</div>
                        <div class="partner-row">
                            <div class="partner-chip">
                                <span class="partner-mark mark-gold"></span>
                                <span class="partner-name">{ "YZILabs" }</span>
                            </div>
                            <div class="partner-chip">
                                <span class="partner-mark mark-navy"></span>
                                <span class="partner-name">{ "crypto.com" }</span>
                                <span class="partner-suffix">{ "CAPITAL" }</span>
                            </div>
                        </div>
                    </div>

                    <div class="footer-cta">
                        <h3>{ "Get started" }</h3>
                        <button class="footer-cta-row">
                            <span>{ "Start My Launch" }</span>
                            <span class="footer-cta-arrow">{ "→" }</span>
                        </button>
                    </div>
                </div>

                <div class="footer-nav-grid">
                    <div class="footer-nav-column">
                        <span class="nav-head">{ "Home" }</span>
                        <span class="nav-item">{ "About us" }</span>
                        <span class="nav-item">{ "Prices" }</span>
                    </div>
                    <div class="footer-nav-column">
                        <span class="nav-head">{ "Programs" }</span>
                        <span class="nav-item">{ "FAQ" }</span>
                        <span class="nav-item">{ "Support" }</span>
                    </div>
                    <div class="footer-social-column">
                        <div class="social-row">
                            <span class="social-circle">{ "✕" }</span>
                            <span class="social-circle">{ "🎮" }</span>
                        </div>
                        <div class="footer-copyright">
                            { "© 2025 SPARKFUND —" }<br />{ "ALL RIGHTS RESERVED" }
                        </div>
                    </div>
                </div>

                <div class="footer-wordmark-giant">
                    <h1>{ "SparkFund" }</h1>
                </div>

                <div class="footer-bottom">
                    <div class="footer-legal">
                        <span>{ "Terms & Conditions" }</span>
                        <span>{ "Information Security Policy" }</span>
                    </div>
                    <button class="back-to-top" onclick={on_back_to_top}>
                        { "Back to the top ↑" }
                    </button>
                </div>
            </div>
        </footer>
    }
}
