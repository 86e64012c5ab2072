// ============================================================================
// TIMELINE VIEWMODEL - Selección de pasos + secuencia de revelado
// ============================================================================
// Máquina de estados EMPTY -> RESOLVED_INCIDENT | RESOLVED_OK, dirigida solo
// por la llegada de resultados. Cada búsqueda avanza el token de generación;
// respuestas y timers de una generación anterior se ignoran.
// ============================================================================

use std::rc::Rc;

use super::pipeline::resolve;
use super::scheduler::Scheduler;
use crate::config::TimelineConfig;
use crate::models::{HistoryEntry, TrackingResult};
use crate::services::TrackingError;
use crate::state::{
    ReactiveState, RevealState, SelectionState, TimelinePhase, TimelineState,
};

/// Identifica una búsqueda en vuelo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub code: String,
    pub generation: u64,
}

pub struct TimelineViewModel {
    state: ReactiveState<TimelineState>,
    scheduler: Rc<dyn Scheduler>,
    timing: TimelineConfig,
}

impl TimelineViewModel {
    pub fn new(scheduler: Rc<dyn Scheduler>, timing: TimelineConfig) -> Self {
        Self {
            state: ReactiveState::new(TimelineState::default()),
            scheduler,
            timing,
        }
    }

    pub fn snapshot(&self) -> TimelineState {
        self.state.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }

    /// Nueva búsqueda: vuelve a EMPTY en estado de carga y abre una generación.
    /// Un código vacío solo deja el mensaje de error visible.
    pub fn submit(&self, code: &str) -> Result<SearchTicket, TrackingError> {
        let code = code.trim();
        if code.is_empty() {
            log::warn!("⚠️ Búsqueda ignorada: código vacío");
            let err = TrackingError::EmptyCode;
            let message = err.user_message();
            self.state.update(|state| state.error = Some(message));
            return Err(err);
        }

        let generation = self.state.update(|state| {
            let generation = state.generation + 1;
            state.clear();
            state.generation = generation;
            state.loading = true;
            generation
        });

        log::info!("🔍 Búsqueda #{} iniciada: {}", generation, code);
        Ok(SearchTicket {
            code: code.to_string(),
            generation,
        })
    }

    /// Aplica la respuesta de una búsqueda. Devuelve `false` si era obsoleta.
    pub fn complete(
        &self,
        ticket: &SearchTicket,
        outcome: Result<TrackingResult, TrackingError>,
    ) -> bool {
        let current = self.state.with(|state| state.generation);
        if ticket.generation != current {
            log::warn!(
                "⏭️ Respuesta obsoleta descartada: {} (búsqueda #{}, actual #{})",
                ticket.code,
                ticket.generation,
                current
            );
            return false;
        }

        match outcome {
            Ok(result) => self.on_result_arrived(result),
            Err(err) => {
                log::error!("❌ Error consultando {}: {}", ticket.code, err);
                let message = err.user_message();
                self.state.update(|state| {
                    state.clear();
                    state.error = Some(message);
                });
            }
        }
        true
    }

    /// Clic en un paso: solo pasos alcanzados, con efecto toggle
    pub fn click_step(&self, index: usize) -> bool {
        let next = self.state.with(|state| next_selection(state, index));
        match next {
            Some(selected_step) => {
                self.state.update(|state| {
                    state.selection = SelectionState { selected_step };
                });
                true
            }
            None => {
                log::debug!("🚫 Clic ignorado en paso {}", index);
                false
            }
        }
    }

    pub fn selected_detail(&self) -> Option<HistoryEntry> {
        self.state.with(|state| state.selected_detail().cloned())
    }

    fn on_result_arrived(&self, result: TrackingResult) {
        let view = resolve(Some(&result));
        let phase = if view.has_incident() {
            TimelinePhase::ResolvedIncident
        } else {
            TimelinePhase::ResolvedOk
        };
        let current = view.current_step();
        let fill_target = view.fill_target();

        log::info!(
            "📦 Resultado {}: fase {:?}, paso actual {:?}",
            result.code,
            phase,
            current
        );

        let generation = self.state.update(|state| {
            state.loading = false;
            state.error = None;
            state.phase = phase;
            state.selection = SelectionState {
                selected_step: current,
            };
            state.reveal = RevealState::default();
            state.view = view;
            state.result = Some(result);
            state.generation
        });

        // Los timers se programan fuera del borrow del estado
        if phase == TimelinePhase::ResolvedOk {
            if let Some(current) = current {
                self.schedule_reveal(generation, current, fill_target);
            }
        }
    }

    fn schedule_reveal(&self, generation: u64, current: usize, fill_target: f64) {
        {
            let state = self.state.clone();
            self.scheduler.schedule(
                self.timing.commit_delay_ms,
                Box::new(move || {
                    apply_if_current(&state, generation, |state| {
                        state.reveal.fill_fraction = fill_target;
                    });
                }),
            );
        }

        for step in 0..=current {
            let state = self.state.clone();
            let delay = reveal_delay_ms(step, current, self.timing.fill_duration_ms);
            self.scheduler.schedule(
                delay,
                Box::new(move || {
                    apply_if_current(&state, generation, |state| {
                        state.reveal.revealed_steps[step] = true;
                    });
                }),
            );
        }
    }
}

/// Retraso del paso `step`: repartido por igual sobre la distancia recorrida,
/// el paso actual termina justo al final de `duration_ms`.
pub fn reveal_delay_ms(step: usize, current: usize, duration_ms: u32) -> u32 {
    if current == 0 {
        return 0;
    }
    let delay = u64::from(duration_ms) * step.min(current) as u64 / current as u64;
    delay as u32
}

/// Nueva selección tras un clic, o `None` si el clic se rechaza
fn next_selection(state: &TimelineState, index: usize) -> Option<Option<usize>> {
    if !state.is_interactive() {
        return None;
    }
    let current = state.view.current_step()?;
    if index > current {
        return None;
    }
    if state.selection.selected_step == Some(index) {
        Some(None)
    } else {
        Some(Some(index))
    }
}

fn apply_if_current(
    state: &ReactiveState<TimelineState>,
    generation: u64,
    mutate: impl FnOnce(&mut TimelineState),
) {
    let is_current = state.with(|current| {
        current.generation == generation && current.phase == TimelinePhase::ResolvedOk
    });
    if !is_current {
        log::debug!("⏭️ Timer de la búsqueda #{} ignorado", generation);
        return;
    }
    state.update(mutate);
}
