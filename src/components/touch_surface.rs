use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, PointerEvent};
use yew::prelude::*;

use super::touch_marker::TouchMarker;
use crate::model::{Point, TouchKind, TouchSample, TouchTracker, TrackerAction};
use crate::snapshot::{LocalSpace, build_display_list};
use crate::state::{ForceCapability, ViewSettings};
use crate::util::{tilt_to_altitude, tilt_to_azimuth};

#[derive(Properties, PartialEq, Clone)]
pub struct TouchSurfaceProps {
    pub tracker: UseReducerHandle<TouchTracker>,
    pub capability: ForceCapability,
    pub settings: ViewSettings,
}

fn touch_kind(e: &PointerEvent) -> TouchKind {
    match e.pointer_type().as_str() {
        "touch" => TouchKind::Finger,
        "pen" => TouchKind::Stylus,
        _ => TouchKind::Other,
    }
}

fn client_point(e: &PointerEvent) -> Point {
    Point {
        x: e.client_x() as f64,
        y: e.client_y() as f64,
    }
}

/// Forward-estimated samples the host supplies for this touch; empty when the
/// platform offers none.
fn predicted_points(e: &PointerEvent) -> Vec<Point> {
    e.get_predicted_events()
        .iter()
        .filter_map(|v| v.dyn_into::<PointerEvent>().ok())
        .map(|p| client_point(&p))
        .collect()
}

fn sample_from_event(e: &PointerEvent) -> TouchSample {
    TouchSample {
        id: e.pointer_id(),
        kind: touch_kind(e),
        position: client_point(e),
        previous_position: None, // maintained by the tracker
        predicted: predicted_points(e),
        major_radius: (e.width().max(e.height()) as f64) * 0.5,
        force: e.pressure() as f64,
        altitude_angle: tilt_to_altitude(e.tilt_x(), e.tilt_y()),
        azimuth_angle: tilt_to_azimuth(e.tilt_x(), e.tilt_y()),
        roll_angle: (e.twist() as f64).to_radians(),
    }
}

#[function_component(TouchSurface)]
pub fn touch_surface(props: &TouchSurfaceProps) -> Html {
    let surface_ref = use_node_ref();

    {
        let surface_ref = surface_ref.clone();
        let tracker = props.tracker.clone();
        use_effect_with((), move |_| {
            let surface: HtmlElement = surface_ref
                .cast::<HtmlElement>()
                .expect("surface_ref not attached to an element");

            let down_cb = {
                let tracker = tracker.clone();
                let surface = surface.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    e.prevent_default();
                    // Keep receiving this pointer even when it leaves the surface
                    let _ = surface.set_pointer_capture(e.pointer_id());
                    tracker.dispatch(TrackerAction::Began(vec![sample_from_event(&e)]));
                }) as Box<dyn FnMut(_)>)
            };
            surface
                .add_event_listener_with_callback("pointerdown", down_cb.as_ref().unchecked_ref())
                .unwrap();

            let move_cb = {
                let tracker = tracker.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    if e.buttons() == 0 {
                        return; // hover, not a contact
                    }
                    e.prevent_default();
                    tracker.dispatch(TrackerAction::Moved(vec![sample_from_event(&e)]));
                }) as Box<dyn FnMut(_)>)
            };
            surface
                .add_event_listener_with_callback("pointermove", move_cb.as_ref().unchecked_ref())
                .unwrap();

            // Unscheduled high-frequency refinements (pressure, tilt) land
            // here; they refresh samples without driving the session phase.
            let raw_update_cb = {
                let tracker = tracker.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    if e.buttons() == 0 {
                        return;
                    }
                    tracker.dispatch(TrackerAction::EstimatedUpdate(vec![sample_from_event(&e)]));
                }) as Box<dyn FnMut(_)>)
            };
            surface
                .add_event_listener_with_callback(
                    "pointerrawupdate",
                    raw_update_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let up_cb = {
                let tracker = tracker.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    e.prevent_default();
                    tracker.dispatch(TrackerAction::Ended(vec![sample_from_event(&e)]));
                }) as Box<dyn FnMut(_)>)
            };
            surface
                .add_event_listener_with_callback("pointerup", up_cb.as_ref().unchecked_ref())
                .unwrap();

            let cancel_cb = {
                let tracker = tracker.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    tracker.dispatch(TrackerAction::Cancelled(vec![sample_from_event(&e)]));
                }) as Box<dyn FnMut(_)>)
            };
            surface
                .add_event_listener_with_callback(
                    "pointercancel",
                    cancel_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Long-press would otherwise open the context menu mid-gesture
            let contextmenu_cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
                e.prevent_default();
            }) as Box<dyn FnMut(_)>);
            surface
                .add_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            move || {
                let _ = surface.remove_event_listener_with_callback(
                    "pointerdown",
                    down_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "pointermove",
                    move_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "pointerrawupdate",
                    raw_update_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "pointerup",
                    up_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "pointercancel",
                    cancel_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (
                    &down_cb,
                    &move_cb,
                    &raw_update_cb,
                    &up_cb,
                    &cancel_cb,
                    &contextmenu_cb,
                );
            }
        });
    }

    // Local space follows the surface's client rect; before the first mount
    // there is nothing tracked, so identity is fine.
    let space = surface_ref
        .cast::<HtmlElement>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            LocalSpace::at(rect.left(), rect.top())
        })
        .unwrap_or_else(LocalSpace::identity);
    let touches = build_display_list(&props.tracker, &space);

    html! {
        <div
            ref={surface_ref}
            style="position:absolute; inset:0; background:#0e1116; touch-action:none; user-select:none; overflow:hidden; cursor:crosshair;"
        >
            { for touches.into_iter().map(|t| {
                let key = t.id;
                html! { <TouchMarker key={key} touch={t} force_available={props.capability.available} settings={props.settings.clone()} /> }
            })}
        </div>
    }
}
