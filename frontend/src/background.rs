//! Fixed full-viewport canvas rendering the ambient scene.
//!
//! Fully decoupled from application state: the only input is the pointer
//! position, nothing is emitted. The render loop runs until the component
//! is torn down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::raf::RafLoop;
use crate::scene::{project, Scene};

// The canvas fillStyle/strokeStyle setters moved between web-sys releases;
// going through Reflect keeps this independent of that churn.
fn set_fill_style(ctx: &CanvasRenderingContext2d, value: &JsValue) {
    let _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("fillStyle"), value);
}

fn set_stroke_style(ctx: &CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(value),
    );
}

fn rgba(color: (u8, u8, u8), alpha: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.0,
        color.1,
        color.2,
        alpha.clamp(0.0, 1.0)
    )
}

fn fit_canvas(canvas: &HtmlCanvasElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn draw_stars(ctx: &CanvasRenderingContext2d, scene: &Scene, half_w: f64, half_h: f64) {
    set_fill_style(ctx, &JsValue::from_str("rgba(255, 255, 255, 0.55)"));
    for star in &scene.stars {
        if let Some(p) = project(*star, &scene.camera, half_w, half_h) {
            let size = (p.scale * 0.004).clamp(0.4, 1.8);
            ctx.fill_rect(p.x, p.y, size, size);
        }
    }
}

fn draw_blobs(ctx: &CanvasRenderingContext2d, scene: &Scene, half_w: f64, half_h: f64) {
    for blob in &scene.blobs {
        let Some(center) = project(blob.world_position(scene.t), &scene.camera, half_w, half_h)
        else {
            continue;
        };
        let radius = blob.scale * center.scale;
        if radius <= 1.0 {
            continue;
        }

        ctx.begin_path();
        let segments = 48;
        for i in 0..=segments {
            let theta = std::f64::consts::TAU * i as f64 / segments as f64;
            let r = radius * blob.wobble(theta, scene.t);
            let x = center.x + theta.cos() * r;
            let y = center.y + theta.sin() * r;
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.close_path();

        if let Ok(gradient) = ctx.create_radial_gradient(
            center.x - radius * 0.35,
            center.y - radius * 0.35,
            radius * 0.1,
            center.x,
            center.y,
            radius * 1.15,
        ) {
            let _ = gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.10)");
            let _ = gradient.add_color_stop(0.4, &rgba(blob.color, 0.9));
            let _ = gradient.add_color_stop(1.0, &rgba(blob.color, 0.4));
            set_fill_style(ctx, gradient.as_ref());
        } else {
            set_fill_style(ctx, &JsValue::from_str(&rgba(blob.color, 0.8)));
        }
        ctx.fill();
    }
}

fn draw_rings(ctx: &CanvasRenderingContext2d, scene: &Scene, half_w: f64, half_h: f64) {
    for ring in &scene.rings {
        let segments = 72;
        let mut points: Vec<Option<(f64, f64)>> = Vec::with_capacity(segments + 1);
        let mut center_scale: f64 = 0.0;
        for i in 0..=segments {
            let theta = std::f64::consts::TAU * i as f64 / segments as f64;
            let world = ring.point(theta, scene.t);
            match project(world, &scene.camera, half_w, half_h) {
                Some(p) => {
                    center_scale = center_scale.max(p.scale);
                    points.push(Some((p.x, p.y)));
                }
                None => points.push(None),
            }
        }
        if center_scale <= 0.0 {
            continue;
        }

        let alpha = (0.25 + ring.emissive * 0.28).min(1.0);
        let width = (ring.tube * ring.scale * center_scale).max(1.0);

        // bright rings get a soft halo behind the wire
        if ring.emissive > 0.6 {
            stroke_ring(ctx, &points, &rgba(ring.color, alpha * 0.25), width * 3.0);
        }
        stroke_ring(ctx, &points, &rgba(ring.color, alpha), width);
    }
}

fn stroke_ring(
    ctx: &CanvasRenderingContext2d,
    points: &[Option<(f64, f64)>],
    style: &str,
    width: f64,
) {
    set_stroke_style(ctx, style);
    ctx.set_line_width(width);
    ctx.begin_path();
    let mut pen_down = false;
    for point in points {
        match point {
            Some((x, y)) => {
                if pen_down {
                    ctx.line_to(*x, *y);
                } else {
                    ctx.move_to(*x, *y);
                    pen_down = true;
                }
            }
            None => pen_down = false,
        }
    }
    ctx.stroke();
}

fn set_page_cursor(pointer: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let style = body.style();
        if pointer {
            let _ = style.set_property("cursor", "pointer");
        } else {
            let _ = style.remove_property("cursor");
        }
    }
}

#[function_component(Background)]
pub fn background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut raf: Option<RafLoop> = None;
                let mut listeners: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)> =
                    Vec::new();
                let mut resize: Option<Closure<dyn FnMut()>> = None;
                let window = web_sys::window();

                if let (Some(canvas), Some(window)) =
                    (canvas_ref.cast::<HtmlCanvasElement>(), window.clone())
                {
                    fit_canvas(&canvas);

                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

                    if let Some(ctx) = context {
                        // normalized device pointer plus the raw pixel
                        // position for ring hit-testing
                        let pointer = Rc::new(Cell::new((0.0f64, 0.0f64)));
                        let pointer_px = Rc::new(Cell::new((-1.0f64, -1.0f64)));

                        {
                            let pointer = pointer.clone();
                            let pointer_px = pointer_px.clone();
                            let move_window = window.clone();
                            let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
                                let width = move_window
                                    .inner_width()
                                    .ok()
                                    .and_then(|v| v.as_f64())
                                    .unwrap_or(1.0)
                                    .max(1.0);
                                let height = move_window
                                    .inner_height()
                                    .ok()
                                    .and_then(|v| v.as_f64())
                                    .unwrap_or(1.0)
                                    .max(1.0);
                                let x = event.client_x() as f64;
                                let y = event.client_y() as f64;
                                pointer.set((x / width * 2.0 - 1.0, -(y / height * 2.0 - 1.0)));
                                pointer_px.set((x, y));
                            })
                                as Box<dyn FnMut(MouseEvent)>);
                            let _ = window.add_event_listener_with_callback(
                                "mousemove",
                                on_move.as_ref().unchecked_ref(),
                            );
                            listeners.push(("mousemove", on_move));
                        }

                        {
                            let canvas = canvas.clone();
                            let on_resize = Closure::wrap(Box::new(move || {
                                fit_canvas(&canvas);
                            })
                                as Box<dyn FnMut()>);
                            let _ = window.add_event_listener_with_callback(
                                "resize",
                                on_resize.as_ref().unchecked_ref(),
                            );
                            resize = Some(on_resize);
                        }

                        let scene = Rc::new(RefCell::new(Scene::new()));
                        let mut last_timestamp: Option<f64> = None;
                        let mut cursor_active = false;

                        raf = Some(RafLoop::start(move |timestamp| {
                            let dt = match last_timestamp.replace(timestamp) {
                                Some(last) => ((timestamp - last) / 1000.0).max(0.0),
                                None => 0.0,
                            };

                            let mut scene = scene.borrow_mut();
                            scene.step(dt, pointer.get());

                            let width = canvas.width() as f64;
                            let height = canvas.height() as f64;
                            let (half_w, half_h) = (width / 2.0, height / 2.0);

                            let px = pointer_px.get();
                            let mut any_hovered = false;
                            for i in 0..scene.rings.len() {
                                let hit = scene.ring_hit(&scene.rings[i], px, half_w, half_h);
                                scene.rings[i].hovered = hit;
                                any_hovered |= hit;
                            }
                            if any_hovered != cursor_active {
                                cursor_active = any_hovered;
                                set_page_cursor(cursor_active);
                            }

                            ctx.clear_rect(0.0, 0.0, width, height);
                            draw_stars(&ctx, &scene, half_w, half_h);
                            draw_blobs(&ctx, &scene, half_w, half_h);
                            draw_rings(&ctx, &scene, half_w, half_h);
                            true
                        }));
                    }
                }

                move || {
                    drop(raf);
                    if let Some(window) = web_sys::window() {
                        for (name, listener) in &listeners {
                            let _ = window.remove_event_listener_with_callback(
                                name,
                                listener.as_ref().unchecked_ref(),
                            );
                        }
                        if let Some(resize) = &resize {
                            let _ = window.remove_event_listener_with_callback(
                                "resize",
                                resize.as_ref().unchecked_ref(),
                            );
                        }
                    }
                    set_page_cursor(false);
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="scene-canvas" aria-hidden="true"></canvas>
    }
}
