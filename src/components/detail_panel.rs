use yew::prelude::*;

use crate::models::HistoryEntry;
use crate::utils::{display_offset, format_date_time, t};

#[derive(Properties, PartialEq, Clone)]
pub struct DetailPanelProps {
    pub detail: Option<HistoryEntry>,
    pub lang: AttrValue,
    pub utc_offset_minutes: i32,
}

/// Panel con el evento del paso seleccionado
#[function_component(DetailPanel)]
pub fn detail_panel(props: &DetailPanelProps) -> Html {
    let lang = &props.lang;
    let Some(entry) = &props.detail else {
        return html! { <div class="detail-panel"></div> };
    };

    let offset = display_offset(props.utc_offset_minutes);
    let label = match entry.raw_status.step() {
        Some(status) => t(status.label_key(), lang),
        None => entry.raw_status.as_wire().to_string(),
    };
    let when = entry
        .parsed_timestamp(offset)
        .map(|ts| format_date_time(&ts, offset))
        .unwrap_or_else(|| entry.timestamp.clone());

    html! {
        <div class="detail-panel visible">
            <h3>{format!("{}: {}", t("detalles_de", lang), label)}</h3>
            <p><strong>{format!("{}:", t("fecha_hora", lang))}</strong>{" "}{when}</p>
            <p><strong>{format!("{}:", t("ubicacion", lang))}</strong>{" "}{&entry.location}</p>
            <p>
                <strong>{format!("{}:", t("descripcion", lang))}</strong>
                {" "}
                {entry.description_or_default()}
            </p>
        </div>
    }
}
