use yew::prelude::*;

use super::{TrackerCard, TrackingForm};
use crate::config::CONFIG;
use crate::hooks::use_tracking;
use crate::utils::t;

#[function_component(App)]
pub fn app() -> Html {
    let tracking = use_tracking();
    let state = &tracking.state;
    let lang = AttrValue::from(CONFIG.default_language.clone());

    let show_card = !state.loading && state.error.is_none() && state.result.is_some();

    html! {
        <div class="tracking-wrapper">
            <TrackingForm
                loading={state.loading}
                lang={lang.clone()}
                on_submit={tracking.on_submit.clone()}
            />

            if state.loading {
                <p class="status-loading">{t("buscando", &lang)}</p>
            }

            if show_card {
                <TrackerCard
                    state={state.clone()}
                    lang={lang.clone()}
                    on_step_click={tracking.on_step_click.clone()}
                />
            }

            if let Some(error) = &state.error {
                <p class="status-error">{format!("{}: {}", t("error", &lang), error)}</p>
            }
        </div>
    }
}
