use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::utils::t;

#[derive(Properties, PartialEq, Clone)]
pub struct TrackingFormProps {
    pub loading: bool,
    pub lang: AttrValue,
    pub on_submit: Callback<String>,
}

#[function_component(TrackingForm)]
pub fn tracking_form(props: &TrackingFormProps) -> Html {
    let input_ref = use_node_ref();

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                on_submit.emit(input.value());
            }
        })
    };

    let button_text = if props.loading {
        t("buscando", &props.lang)
    } else {
        t("rastrear", &props.lang)
    };

    html! {
        <form class="tracking-form" {onsubmit}>
            <div class="input-group">
                <input
                    ref={input_ref}
                    type="text"
                    name="codigo"
                    placeholder={t("placeholder_codigo", &props.lang)}
                    required={true}
                />
                <button type="submit" disabled={props.loading}>
                    {button_text}
                </button>
            </div>
        </form>
    }
}
