// ============================================================================
// TRACKER CARD - Cabecera del pedido + pipeline o aviso de incidencia
// ============================================================================

use yew::prelude::*;

use super::{DetailPanel, ProgressTimeline};
use crate::config::CONFIG;
use crate::state::{TimelinePhase, TimelineState};
use crate::utils::{display_offset, format_date, t};

#[derive(Properties, PartialEq, Clone)]
pub struct TrackerCardProps {
    pub state: TimelineState,
    pub lang: AttrValue,
    pub on_step_click: Callback<usize>,
}

#[function_component(TrackerCard)]
pub fn tracker_card(props: &TrackerCardProps) -> Html {
    let state = &props.state;
    let lang = &props.lang;
    let Some(result) = &state.result else {
        return html! {};
    };

    let offset = display_offset(CONFIG.display_utc_offset_minutes);
    let last_update = result
        .last_update(offset)
        .map(|ts| format_date(&ts, offset))
        .unwrap_or_else(|| t("sin_fecha", lang));

    let body = if state.phase == TimelinePhase::ResolvedIncident {
        html! {
            <div class="error-state-message">
                <div class="icon">{"⚠️"}</div>
                <h3>{t("incidencia_titulo", lang)}</h3>
                <p>{t("incidencia_texto", lang)}</p>
            </div>
        }
    } else {
        html! {
            <>
                <ProgressTimeline
                    view={state.view.clone()}
                    selected_step={state.selection.selected_step}
                    reveal={state.reveal}
                    fill_duration_ms={CONFIG.timeline.fill_duration_ms}
                    lang={lang.clone()}
                    on_step_click={props.on_step_click.clone()}
                />
                <DetailPanel
                    detail={state.selected_detail().cloned()}
                    lang={lang.clone()}
                    utc_offset_minutes={CONFIG.display_utc_offset_minutes}
                />
            </>
        }
    };

    html! {
        <div class="tracker-card">
            <div class="tracker-header">
                <div>
                    <span class="header-label">{t("pedido", lang)}</span>
                    <span class="header-value">{format!("#{}", result.code)}</span>
                </div>
                <div>
                    <span class="header-label">{t("ultima_actualizacion", lang)}</span>
                    <span class="header-value">{last_update}</span>
                </div>
            </div>
            {body}
        </div>
    }
}
