//! Button with a pointer-tracking highlight.
//!
//! A radial gradient follows the pointer inside the button bounds and
//! fades out when the pointer leaves.

use web_sys::{Element, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpotlightButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("rgba(255, 255, 255, 0.25)"))]
    pub spotlight_color: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpotlightButton)]
pub fn spotlight_button(props: &SpotlightButtonProps) -> Html {
    let node = use_node_ref();
    let position = use_state(|| (0.0f64, 0.0f64));
    let hovered = use_state(|| false);

    let onmousemove = {
        let node = node.clone();
        let position = position.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            position.set((
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
            ));
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let (x, y) = *position;
    let glow_style = format!(
        "opacity: {}; background: radial-gradient(100px circle at {x:.0}px {y:.0}px, {}, transparent 80%);",
        if *hovered { 1.0 } else { 0.0 },
        props.spotlight_color,
    );

    html! {
        <button
            ref={node}
            class={classes!("spotlight-button", props.class.clone())}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
            onclick={props.onclick.clone()}
        >
            <span class="spotlight-glow" style={glow_style}></span>
            <span class="spotlight-content">{ props.children.clone() }</span>
        </button>
    }
}
