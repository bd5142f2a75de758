use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::utils::parallax_offset;

fn scroll_offset(window: &Window) -> f64 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    parallax_offset(scroll_y, scroll_height, viewport_height)
}

/// Fixed page background that drifts down slowly as the page scrolls.
#[function_component(Backdrop)]
pub fn backdrop() -> Html {
    let offset = use_state_eq(|| 0.0_f64);

    {
        let offset = offset.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    offset.set(scroll_offset(&window_clone));
                }) as Box<dyn FnMut()>);
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                ) {
                    log::warn!("Could not attach scroll listener: {:?}", e);
                }
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    html! {
        <div class="backdrop" style={format!("transform: translateY({:.2}%);", *offset)}>
            <div class="glow glow-top"></div>
            <div class="glow glow-bottom"></div>
            <style>
                {r#"
                .backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    background: #0a0505;
                    pointer-events: none;
                }

                .glow {
                    position: absolute;
                    width: 100%;
                    height: 100%;
                }

                .glow-top {
                    top: 0;
                    left: 0;
                    opacity: 0.2;
                    background: radial-gradient(circle at 20% 20%, #800000 0%, transparent 50%);
                }

                .glow-bottom {
                    bottom: 0;
                    right: 0;
                    opacity: 0.1;
                    background: radial-gradient(circle at 80% 80%, #c00000 0%, transparent 50%);
                }
                "#}
            </style>
        </div>
    }
}
