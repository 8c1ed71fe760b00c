use yew::prelude::*;

use crate::model::GesturePhase;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub phase: GesturePhase,
    pub active_touches: usize,
    pub force_available: bool,
    pub last_outcome: Option<GesturePhase>,
}

fn phase_color(phase: GesturePhase) -> &'static str {
    match phase {
        GesturePhase::Idle => "#8b949e",
        GesturePhase::Began => "#2ea043",
        GesturePhase::Changed => "#58a6ff",
        GesturePhase::Ended => "#f0883e",
        GesturePhase::Cancelled => "#f85149",
    }
}

#[function_component]
pub fn StatusPanel(props: &StatusPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500; color:#8b949e;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";

    let force_text = if props.force_available {
        "available"
    } else {
        "not available"
    };
    let outcome_text = props
        .last_outcome
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| "—".to_string());

    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:210px; display:flex; flex-direction:column; gap:8px; font-size:13px; z-index:10;">
            <div style={row_style}>
                <span style={label_style}>{"Phase"}</span>
                <span style={format!("{} color:{};", value_style, phase_color(props.phase))}>
                    { props.phase.label() }
                </span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Active Touches"}</span>
                <span style={value_style}>{ props.active_touches }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Pressure Sensing"}</span>
                <span style={value_style}>{ force_text }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Last Gesture"}</span>
                <span style={format!(
                    "{} color:{};",
                    value_style,
                    props.last_outcome.map(phase_color).unwrap_or("#8b949e")
                )}>{ outcome_text }</span>
            </div>
        </div>
    }
}
