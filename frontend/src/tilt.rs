//! Pointer-driven 3D tilt.
//!
//! Pointer position inside the card maps to a rotation pair through a
//! fixed linear scale, then each axis is smoothed by a spring before it is
//! applied as a transform. Pointer leave retargets both springs to zero so
//! the card always swings back to rest through the same physics.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::raf::RafLoop;
use crate::spring::Spring;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Peak rotation around the horizontal axis, reached at the top/bottom
    /// edge of the card.
    pub max_rotate_x: f64,
    /// Peak rotation around the vertical axis, reached at the left/right
    /// edge.
    pub max_rotate_y: f64,
    pub stiffness: f64,
    pub damping: f64,
}

/// Normalized pointer offsets relative to the box center, each in
/// `[-0.5, 0.5]`.
pub fn pointer_fraction(
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    client_x: f64,
    client_y: f64,
) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = ((client_x - left) / width - 0.5).clamp(-0.5, 0.5);
    let y = ((client_y - top) / height - 0.5).clamp(-0.5, 0.5);
    (x, y)
}

/// Linear map from pointer fractions to target angles. Moving the pointer
/// up tips the card toward the viewer, so the X rotation runs against the
/// vertical fraction.
pub fn rotation_for(config: &TiltConfig, x_pct: f64, y_pct: f64) -> (f64, f64) {
    let rotate_x = -y_pct * 2.0 * config.max_rotate_x;
    let rotate_y = x_pct * 2.0 * config.max_rotate_y;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "transform: rotateX({rotate_x:.3}deg) rotateY({rotate_y:.3}deg); transform-style: preserve-3d;"
    )
}

struct TiltState {
    spring_x: Spring,
    spring_y: Spring,
    last_timestamp: Option<f64>,
}

pub struct Tilt {
    /// Inline style for the tilting element.
    pub style: String,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

/// Spring-smoothed tilt for the element behind `node`. The springs are
/// advanced by an animation-frame loop that only runs while either axis is
/// away from its target; teardown of the host drops the loop.
#[hook]
pub fn use_tilt(node: NodeRef, config: TiltConfig) -> Tilt {
    let style = use_state(|| tilt_transform(0.0, 0.0));
    let state = use_mut_ref(|| TiltState {
        spring_x: Spring::new(config.stiffness, config.damping),
        spring_y: Spring::new(config.stiffness, config.damping),
        last_timestamp: None,
    });
    let raf: Rc<RefCell<Option<RafLoop>>> = use_mut_ref(|| None);

    let ensure_running = {
        let style = style.clone();
        let state = state.clone();
        let raf = raf.clone();
        move || {
            let running = raf.borrow().as_ref().map(RafLoop::is_active).unwrap_or(false);
            if running {
                return;
            }
            state.borrow_mut().last_timestamp = None;
            let style = style.clone();
            let state = state.clone();
            let next = RafLoop::start(move |timestamp| {
                let mut state = state.borrow_mut();
                let dt = match state.last_timestamp.replace(timestamp) {
                    Some(last) => ((timestamp - last) / 1000.0).max(0.0),
                    None => 0.0,
                };
                let rotate_x = state.spring_x.step(dt);
                let rotate_y = state.spring_y.step(dt);
                style.set(tilt_transform(rotate_x, rotate_y));
                !(state.spring_x.settled() && state.spring_y.settled())
            });
            raf.borrow_mut().replace(next);
        }
    };

    let onmousemove = {
        let node = node.clone();
        let state = state.clone();
        let ensure_running = ensure_running.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
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
            let (rotate_x, rotate_y) = rotation_for(&config, x_pct, y_pct);
            {
                let mut state = state.borrow_mut();
                state.spring_x.set_target(rotate_x);
                state.spring_y.set_target(rotate_y);
            }
            ensure_running();
        })
    };

    let onmouseleave = {
        let state = state.clone();
        let ensure_running = ensure_running.clone();
        Callback::from(move |_: MouseEvent| {
            {
                let mut state = state.borrow_mut();
                state.spring_x.set_target(0.0);
                state.spring_y.set_target(0.0);
            }
            ensure_running();
        })
    };

    Tilt {
        style: (*style).clone(),
        onmousemove,
        onmouseleave,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORY_CARD: TiltConfig = TiltConfig {
        max_rotate_x: 20.0,
        max_rotate_y: 25.0,
        stiffness: 300.0,
        damping: 30.0,
    };

    #[test]
    fn center_of_the_box_is_neutral() {
        let (x, y) = pointer_fraction(100.0, 50.0, 200.0, 100.0, 200.0, 100.0);
        assert_eq!((x, y), (0.0, 0.0));
        assert_eq!(rotation_for(&STORY_CARD, x, y), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_the_configured_peaks() {
        // bottom-right corner
        let (x, y) = pointer_fraction(0.0, 0.0, 200.0, 100.0, 200.0, 100.0);
        assert_eq!((x, y), (0.5, 0.5));
        let (rotate_x, rotate_y) = rotation_for(&STORY_CARD, x, y);
        assert_eq!(rotate_x, -20.0);
        assert_eq!(rotate_y, 25.0);
    }

    #[test]
    fn pointer_outside_the_box_is_clamped() {
        let (x, y) = pointer_fraction(0.0, 0.0, 200.0, 100.0, 900.0, -50.0);
        assert_eq!((x, y), (0.5, -0.5));
    }

    #[test]
    fn degenerate_box_stays_neutral() {
        assert_eq!(pointer_fraction(0.0, 0.0, 0.0, 0.0, 10.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn transform_carries_both_axes() {
        let style = tilt_transform(12.5, -7.25);
        assert!(style.contains("rotateX(12.500deg)"));
        assert!(style.contains("rotateY(-7.250deg)"));
    }
}
