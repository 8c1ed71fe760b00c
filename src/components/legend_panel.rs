use super::legend::LegendRow;
use yew::prelude::*;

#[function_component]
pub fn LegendPanel() -> Html {
    html! {
        <div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:170px; font-size:13px; z-index:10;">
            <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
            <LegendRow color="rgba(88,166,255,0.8)" label="Finger" round={true} />
            <LegendRow color="rgba(168,85,247,0.8)" label="Stylus" round={true} />
            <LegendRow color="rgba(139,148,158,0.8)" label="Other pointer" round={true} />
            <LegendRow color="rgba(248,81,73,0.3)" label="Previous location" round={true} />
            <LegendRow color="rgba(88,166,255,0.35)" label="Predicted location" />
        </div>
    }
}
