use yew::prelude::*;

use super::touch_info_panel::TouchInfoPanel;
use crate::model::TouchKind;
use crate::snapshot::DisplayTouch;
use crate::state::ViewSettings;

#[derive(Properties, PartialEq, Clone)]
pub struct TouchMarkerProps {
    pub touch: DisplayTouch,
    pub force_available: bool,
    pub settings: ViewSettings,
}

fn kind_colors(kind: TouchKind) -> (&'static str, &'static str) {
    match kind {
        TouchKind::Finger => ("rgba(88,166,255,0.8)", "#1f6feb"),
        TouchKind::Stylus => ("rgba(168,85,247,0.8)", "#7e22ce"),
        TouchKind::Other => ("rgba(139,148,158,0.8)", "#6e7681"),
    }
}

/// One touch rendered back to front: prediction markers, previous-location
/// ghost, then the live marker with its diagnostic overlay.
#[function_component]
pub fn TouchMarker(props: &TouchMarkerProps) -> Html {
    let t = &props.touch;
    let size = (t.major_radius * 2.0).max(16.0);
    let (fill, border) = kind_colors(t.kind);

    let predictions = if props.settings.show_predictions {
        html! {
            <>
            { for t.predicted_locations.iter().map(|p| html! {
                <span style={format!(
                    "position:absolute; left:{}px; top:{}px; transform:translate(-50%,-50%); \
                     color:rgba(88,166,255,0.35); font-size:15px; pointer-events:none;",
                    p.x, p.y
                )}>{"▲"}</span>
            })}
            </>
        }
    } else {
        html! {}
    };

    let ghost = match (props.settings.show_ghost, &t.previous_location) {
        (true, Some(p)) => html! {
            <div style={format!(
                "position:absolute; left:{}px; top:{}px; transform:translate(-50%,-50%); \
                 width:16px; height:16px; border-radius:50%; background:rgba(248,81,73,0.3); \
                 pointer-events:none;",
                p.x, p.y
            )}></div>
        },
        _ => html! {},
    };

    let info = if props.settings.show_info {
        html! {
            <div style={format!(
                "position:absolute; left:{}px; top:{}px; transform:translateX(-50%); pointer-events:none;",
                t.location.x,
                t.location.y + size * 0.5 + 10.0
            )}>
                <TouchInfoPanel touch={t.clone()} force_available={props.force_available} />
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <>
            { predictions }
            { ghost }
            <div style={format!(
                "position:absolute; left:{}px; top:{}px; transform:translate(-50%,-50%); \
                 width:{}px; height:{}px; border-radius:50%; background:{}; \
                 border:1px solid {}; pointer-events:none;",
                t.location.x, t.location.y, size, size, fill, border
            )}></div>
            { info }
        </>
    }
}
