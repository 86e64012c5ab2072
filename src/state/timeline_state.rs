// ============================================================================
// TIMELINE STATE - Estado de UI de la búsqueda y de la línea de tiempo
// ============================================================================

use crate::models::{HistoryEntry, TrackingResult, STEP_COUNT};
use crate::viewmodels::pipeline::PipelineView;

/// Fases de la máquina de estados del controlador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelinePhase {
    #[default]
    Empty,
    ResolvedIncident,
    ResolvedOk,
}

/// Paso seleccionado para el panel de detalle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected_step: Option<usize>,
}

/// Progreso visual del llenado y de los nodos revelados
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealState {
    /// Objetivo de llenado en [0, 1]; la transición CSS lo anima
    pub fill_fraction: f64,
    pub revealed_steps: [bool; STEP_COUNT],
}

impl RevealState {
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed_steps.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_steps.iter().filter(|revealed| **revealed).count()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineState {
    pub phase: TimelinePhase,
    pub loading: bool,
    /// Mensaje visible del último error
    pub error: Option<String>,
    pub result: Option<TrackingResult>,
    pub view: PipelineView,
    pub selection: SelectionState,
    pub reveal: RevealState,
    /// Token de generación: avanza con cada búsqueda nueva
    pub generation: u64,
}

impl TimelineState {
    /// Vuelve a EMPTY conservando el contador de generación
    pub fn clear(&mut self) {
        *self = TimelineState {
            generation: self.generation,
            ..TimelineState::default()
        };
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == TimelinePhase::ResolvedOk && !self.loading
    }

    /// Evento mostrado en el panel de detalle, si hay selección y existe
    pub fn selected_detail(&self) -> Option<&HistoryEntry> {
        self.selection
            .selected_step
            .and_then(|index| self.view.detail_at(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_generation_and_drops_everything_else() {
        let mut state = TimelineState {
            phase: TimelinePhase::ResolvedOk,
            loading: true,
            error: Some("x".to_string()),
            selection: SelectionState { selected_step: Some(2) },
            reveal: RevealState {
                fill_fraction: 0.5,
                revealed_steps: [true, true, false, false],
            },
            generation: 7,
            ..TimelineState::default()
        };

        state.clear();

        assert_eq!(state.generation, 7);
        assert_eq!(state.phase, TimelinePhase::Empty);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.selection.selected_step, None);
        assert_eq!(state.reveal, RevealState::default());
    }

    #[test]
    fn reveal_state_queries() {
        let reveal = RevealState {
            fill_fraction: 0.0,
            revealed_steps: [true, false, true, false],
        };
        assert!(reveal.is_revealed(0));
        assert!(!reveal.is_revealed(1));
        assert!(!reveal.is_revealed(STEP_COUNT));
        assert_eq!(reveal.revealed_count(), 2);
    }
}
