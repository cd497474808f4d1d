//! Scoped page scroll lock for the mobile menu overlay.
//!
//! Locking records the body's current overflow value and restores it when
//! the lock flag drops *or* when the owning component unmounts, so every
//! exit path ends with the pre-lock state.

use yew::prelude::*;

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            let previous = if *locked {
                body().map(|body| {
                    let style = body.style();
                    let previous = style.get_property_value("overflow").unwrap_or_default();
                    let _ = style.set_property("overflow", "hidden");
                    previous
                })
            } else {
                None
            };

            move || {
                if let (Some(previous), Some(body)) = (previous, body()) {
                    let style = body.style();
                    if previous.is_empty() {
                        let _ = style.remove_property("overflow");
                    } else {
                        let _ = style.set_property("overflow", &previous);
                    }
                }
            }
        },
        locked,
    );
}
