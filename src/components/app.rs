use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    legend_panel::LegendPanel, settings_modal::SettingsModal, status_panel::StatusPanel,
    touch_surface::TouchSurface,
};
use crate::model::{GesturePhase, TouchTracker, TrackerAction};
use crate::state::{ForceCapability, ViewSettings};
use crate::util::clog;

#[function_component(App)]
pub fn app() -> Html {
    let tracker = use_reducer(TouchTracker::default);
    // Capability is probed once at construction and injected downward
    let capability = use_state(ForceCapability::detect);
    let settings = use_state(ViewSettings::load);
    let open_settings = use_state(|| false);
    let last_outcome = use_state(|| None::<GesturePhase>);
    let last_phase = use_mut_ref(|| GesturePhase::Idle);

    // Log phase transitions
    {
        let last_phase = last_phase.clone();
        use_effect_with(tracker.phase, move |phase| {
            let mut prev = last_phase.borrow_mut();
            if *prev != *phase {
                clog(&format!("phase: {} -> {}", prev.label(), phase.label()));
                *prev = *phase;
            }
            || ()
        });
    }

    // The host side of the session lifecycle: once a terminal phase is
    // observed, record the outcome and reset the tracker for the next gesture.
    {
        let tracker = tracker.clone();
        let last_outcome = last_outcome.clone();
        use_effect_with(tracker.phase, move |phase| {
            if phase.is_terminal() {
                last_outcome.set(Some(*phase));
                tracker.dispatch(TrackerAction::Reset);
            }
            || ()
        });
    }

    // Persist settings changes
    {
        let settings_snapshot = (*settings).clone();
        use_effect_with(settings_snapshot, move |s| {
            s.save();
            || ()
        });
    }

    // Escape closes the settings modal
    {
        let open_settings = open_settings.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.code() == "Escape" {
                    open_settings.set(false);
                }
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                let _ = window
                    .remove_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
                drop(key_cb);
            }
        });
    }

    let open_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_: MouseEvent| open_settings.set(true))
    };
    let close_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };
    let toggle_predictions = {
        let settings = settings.clone();
        Callback::from(move |_| {
            let mut s = (*settings).clone();
            s.show_predictions = !s.show_predictions;
            settings.set(s);
        })
    };
    let toggle_ghost = {
        let settings = settings.clone();
        Callback::from(move |_| {
            let mut s = (*settings).clone();
            s.show_ghost = !s.show_ghost;
            settings.set(s);
        })
    };
    let toggle_info = {
        let settings = settings.clone();
        Callback::from(move |_| {
            let mut s = (*settings).clone();
            s.show_info = !s.show_info;
            settings.set(s);
        })
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#c9d1d9; font-family:-apple-system, 'Segoe UI', sans-serif; overflow:hidden;">
            <TouchSurface
                tracker={tracker.clone()}
                capability={*capability}
                settings={(*settings).clone()}
            />
            <div id="top-bar" style="position:absolute; top:12px; left:50%; transform:translateX(-50%); text-align:center; pointer-events:none; z-index:10;">
                <div style="font-size:20px; font-weight:600;">{"Touch Inputs"}</div>
                <div style="font-size:12px; color:#8b949e;">{"Type, Force, Angle, Predictions and more!"}</div>
            </div>
            <StatusPanel
                phase={tracker.phase}
                active_touches={tracker.touches.len()}
                force_available={capability.available}
                last_outcome={*last_outcome}
            />
            <LegendPanel />
            <div style="position:absolute; top:12px; right:12px; z-index:10;">
                <button onclick={open_settings_cb}>{"Settings"}</button>
            </div>
            <SettingsModal
                show={*open_settings}
                on_close={close_settings}
                show_predictions={settings.show_predictions}
                on_toggle_predictions={toggle_predictions}
                show_ghost={settings.show_ghost}
                on_toggle_ghost={toggle_ghost}
                show_info={settings.show_info}
                on_toggle_info={toggle_info}
            />
        </div>
    }
}
