// ============================================================================
// PROGRESS TIMELINE - Nodos, líneas, barra de llenado y etiquetas
// ============================================================================

use yew::prelude::*;

use crate::models::{STATUS_ORDER, STEP_COUNT};
use crate::state::RevealState;
use crate::utils::t;
use crate::viewmodels::PipelineView;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressTimelineProps {
    pub view: PipelineView,
    pub selected_step: Option<usize>,
    pub reveal: RevealState,
    pub fill_duration_ms: u32,
    pub lang: AttrValue,
    pub on_step_click: Callback<usize>,
}

#[function_component(ProgressTimeline)]
pub fn progress_timeline(props: &ProgressTimelineProps) -> Html {
    let step_classes = |base: &'static str, index: usize| {
        let completed = props.view.is_step_reached(index);
        classes!(
            base,
            completed.then_some("completed"),
            completed.then_some("clickable"),
            (props.selected_step == Some(index)).then_some("selected"),
            props.reveal.is_revealed(index).then_some("revealed"),
        )
    };

    let click = |index: usize| {
        let cb = props.on_step_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(index))
    };

    let fill_style = format!(
        "width: {:.2}%; transition: width {}ms ease-in-out;",
        props.reveal.fill_fraction.clamp(0.0, 1.0) * 100.0,
        props.fill_duration_ms
    );

    html! {
        <>
            <div class="progress-bar-container">
                <div class="progress-track">
                    <div class="progress-fill" style={fill_style}></div>
                </div>
                { for STATUS_ORDER.iter().enumerate().map(|(index, status)| html! {
                    <div
                        key={status.as_wire()}
                        class={step_classes("step", index)}
                        onclick={click(index)}
                    >
                        <div class="node"></div>
                        if index < STEP_COUNT - 1 {
                            <div class="line"></div>
                        }
                    </div>
                }) }
            </div>

            <div class="status-labels">
                { for STATUS_ORDER.iter().enumerate().map(|(index, status)| html! {
                    <div
                        key={status.as_wire()}
                        class={step_classes("label-step", index)}
                        onclick={click(index)}
                    >
                        <div class="icon">{status.icon()}</div>
                        <span>{t(status.label_key(), &props.lang)}</span>
                    </div>
                }) }
            </div>
        </>
    }
}
