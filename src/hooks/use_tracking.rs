// ============================================================================
// USE TRACKING HOOK - Conecta TimelineViewModel con Yew
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::TrackingService;
use crate::state::TimelineState;
use crate::viewmodels::{TimeoutScheduler, TimelineViewModel};

#[derive(Clone)]
pub struct UseTrackingHandle {
    /// Copia del estado para este render
    pub state: TimelineState,
    pub on_submit: Callback<String>,
    pub on_step_click: Callback<usize>,
}

#[hook]
pub fn use_tracking() -> UseTrackingHandle {
    let force_update = use_force_update();
    let viewmodel = use_memo((), |_| {
        TimelineViewModel::new(Rc::new(TimeoutScheduler), CONFIG.timeline)
    });

    // Re-render con cada cambio del estado (incluidos los timers)
    {
        let viewmodel = viewmodel.clone();
        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));
            {
                let mounted = mounted.clone();
                viewmodel.subscribe(move || {
                    if mounted.get() {
                        force_update.force_update();
                    }
                });
            }
            move || mounted.set(false)
        });
    }

    let on_submit = {
        let viewmodel = viewmodel.clone();
        Callback::from(move |code: String| {
            // Los errores de validación ya quedan en el estado del viewmodel
            let Ok(ticket) = viewmodel.submit(&code) else {
                return;
            };

            let viewmodel = viewmodel.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = TrackingService::new().fetch_tracking(&ticket.code).await;
                viewmodel.complete(&ticket, outcome);
            });
        })
    };

    let on_step_click = {
        let viewmodel = viewmodel.clone();
        Callback::from(move |index: usize| {
            viewmodel.click_step(index);
        })
    };

    UseTrackingHandle {
        state: viewmodel.snapshot(),
        on_submit,
        on_step_click,
    }
}
