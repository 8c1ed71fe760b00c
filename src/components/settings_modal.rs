use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub show_predictions: bool,
    pub on_toggle_predictions: Callback<()>,
    pub show_ghost: bool,
    pub on_toggle_ghost: Callback<()>,
    pub show_info: bool,
    pub on_toggle_info: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_predictions_cb = {
        let cb = props.on_toggle_predictions.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_ghost_cb = {
        let cb = props.on_toggle_ghost.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_info_cb = {
        let cb = props.on_toggle_info.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.show_predictions} onclick={toggle_predictions_cb} />
                    <span>{"Show Predicted Locations"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.show_ghost} onclick={toggle_ghost_cb} />
                    <span>{"Show Previous Locations"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.show_info} onclick={toggle_info_cb} />
                    <span>{"Show Touch Details"}</span>
                </label>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Settings persist across sessions."}</div>
        </div>
    </div>}
}
