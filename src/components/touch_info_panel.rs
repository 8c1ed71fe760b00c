use yew::prelude::*;

use crate::snapshot::DisplayTouch;

#[derive(Properties, PartialEq, Clone)]
pub struct TouchInfoPanelProps {
    pub touch: DisplayTouch,
    pub force_available: bool,
}

fn row(label: &'static str, value: String) -> Html {
    html! {
        <div style="display:flex; justify-content:space-between; gap:14px; margin:2px 0;">
            <span style="color:#8b949e; font-weight:600;">{label}</span>
            <span style="font-variant-numeric:tabular-nums; white-space:nowrap;">{value}</span>
        </div>
    }
}

/// Diagnostic readout rendered below a touch marker.
#[function_component]
pub fn TouchInfoPanel(props: &TouchInfoPanelProps) -> Html {
    let t = &props.touch;

    let panel_style = "background:rgba(22,27,34,0.92); border:1px solid #30363d; \
        border-radius:8px; padding:8px 10px; min-width:210px; font-size:11px; \
        color:#c9d1d9; white-space:nowrap;";

    html! {
        <div style={panel_style}>
            { row("Touch Type", t.kind.label().to_string()) }
            { row("Location", t.location_text()) }
            { row("Force", t.force_text(props.force_available)) }
            { row("Altitude Angle", t.altitude_text()) }
            { row("Azimuth Angle", t.azimuth_text()) }
            { row("Roll Angle", t.roll_text()) }
        </div>
    }
}
