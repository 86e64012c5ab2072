// ============================================================================
// PIPELINE RESOLVER - Historial crudo -> posición en el pipeline + detalles
// ============================================================================
// Función pura: sin estado, sin efectos, sin errores. Entradas ausentes o
// desconocidas degradan a "no iniciado".
// ============================================================================

use crate::models::{HistoryEntry, RawStatus, StatusCode, TrackingResult, STEP_COUNT};

/// Dónde está el envío dentro del pipeline ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelinePosition {
    /// Sin resultado, historial vacío o estado desconocido
    #[default]
    NotStarted,
    AtStep(usize),
    /// Incidencia: el pipeline ordinal no aplica
    Incident,
}

/// Un detalle por estado, indexado por posición en `STATUS_ORDER`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepDetails([Option<HistoryEntry>; STEP_COUNT]);

impl StepDetails {
    /// Un recorrido en orden del historial; cada escritura pisa la anterior
    /// del mismo estado, así que queda la última entrada en orden del array.
    pub fn from_history(history: &[HistoryEntry]) -> Self {
        let mut details = StepDetails::default();
        for entry in history {
            if let RawStatus::Step(code) = entry.raw_status {
                details.0[code.position()] = Some(entry.clone());
            }
        }
        details
    }

    pub fn get(&self, code: StatusCode) -> Option<&HistoryEntry> {
        self.0[code.position()].as_ref()
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Modelo derivado, recalculado con cada `TrackingResult`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineView {
    position: PipelinePosition,
    details: StepDetails,
}

impl PipelineView {
    pub fn position(&self) -> PipelinePosition {
        self.position
    }

    /// Índice del paso actual; `None` equivale a -1
    pub fn current_step(&self) -> Option<usize> {
        match self.position {
            PipelinePosition::AtStep(index) => Some(index),
            _ => None,
        }
    }

    pub fn has_incident(&self) -> bool {
        self.position == PipelinePosition::Incident
    }

    pub fn details(&self) -> &StepDetails {
        &self.details
    }

    pub fn detail_for(&self, code: StatusCode) -> Option<&HistoryEntry> {
        self.details.get(code)
    }

    /// Detalle del paso `index` del pipeline
    pub fn detail_at(&self, index: usize) -> Option<&HistoryEntry> {
        StatusCode::at(index).and_then(|code| self.detail_for(code))
    }

    pub fn is_step_reached(&self, index: usize) -> bool {
        self.current_step().is_some_and(|current| index <= current)
    }

    /// Fracción de llenado objetivo: current / (N - 1), 0 si current <= 0
    pub fn fill_target(&self) -> f64 {
        match self.current_step() {
            Some(current) if current > 0 => current as f64 / (STEP_COUNT - 1) as f64,
            _ => 0.0,
        }
    }
}

/// Resolver el pipeline a partir del resultado (o de su ausencia)
pub fn resolve(result: Option<&TrackingResult>) -> PipelineView {
    let Some(result) = result else {
        return PipelineView::default();
    };
    let Some(latest) = result.latest() else {
        return PipelineView::default();
    };

    match &latest.raw_status {
        RawStatus::Incident => PipelineView {
            position: PipelinePosition::Incident,
            details: StepDetails::default(),
        },
        raw => {
            let position = match raw.step() {
                Some(code) => PipelinePosition::AtStep(code.position()),
                None => PipelinePosition::NotStarted,
            };
            PipelineView {
                position,
                details: StepDetails::from_history(&result.history),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(raw: &str, location: &str) -> HistoryEntry {
        HistoryEntry {
            raw_status: RawStatus::parse(raw),
            timestamp: "2024-05-01T08:00:00-05:00".to_string(),
            location: location.to_string(),
            description: None,
        }
    }

    fn result(history: Vec<HistoryEntry>) -> TrackingResult {
        TrackingResult {
            code: "ABC123".to_string(),
            history,
        }
    }

    #[test]
    fn absent_result_is_not_started() {
        let view = resolve(None);
        assert_eq!(view.position(), PipelinePosition::NotStarted);
        assert_eq!(view.current_step(), None);
        assert!(!view.has_incident());
        assert!(view.details().is_empty());
    }

    #[test]
    fn empty_history_is_not_started() {
        let view = resolve(Some(&result(vec![])));
        assert_eq!(view.current_step(), None);
        assert!(!view.has_incident());
        assert!(view.details().is_empty());
        assert_eq!(view.fill_target(), 0.0);
    }

    #[test]
    fn delivered_shipment_is_at_last_step() {
        let data = result(vec![
            entry("ENTREGADO", "Cali"),
            entry("EN_ENTREGA", "Cali"),
            entry("CREADO", "Bogotá"),
        ]);
        let view = resolve(Some(&data));

        assert_eq!(view.current_step(), Some(3));
        assert_eq!(view.fill_target(), 1.0);
        assert_eq!(view.details().len(), 3);
        assert!(view.detail_for(StatusCode::EnTransito).is_none());
        assert_eq!(view.detail_at(0).unwrap().location, "Bogotá");
        assert!(view.is_step_reached(3));
    }

    #[test]
    fn current_step_depends_only_on_latest_entry() {
        let older_variants = [
            vec![],
            vec![entry("ENTREGADO", "x")],
            vec![entry("INCIDENCIA", "x"), entry("???", "y")],
            vec![entry("CREADO", "x"), entry("CREADO", "y")],
        ];
        for older in older_variants {
            let mut history = vec![entry("EN_TRANSITO", "Medellín")];
            history.extend(older);
            let view = resolve(Some(&result(history)));
            assert_eq!(view.current_step(), Some(1));
        }
    }

    #[test]
    fn incident_skips_ordinal_computation_and_details() {
        let data = result(vec![entry("INCIDENCIA", "Cali"), entry("EN_TRANSITO", "Medellín")]);
        let view = resolve(Some(&data));

        assert!(view.has_incident());
        assert_eq!(view.current_step(), None);
        assert!(view.details().is_empty());
        assert_eq!(view.fill_target(), 0.0);
        assert!(!view.is_step_reached(0));
    }

    #[test]
    fn unknown_latest_status_degrades_to_not_started() {
        let data = result(vec![entry("DEVUELTO", "Cali"), entry("CREADO", "Bogotá")]);
        let view = resolve(Some(&data));

        assert_eq!(view.position(), PipelinePosition::NotStarted);
        assert!(!view.has_incident());
        // La tabla de detalles se construye igual
        assert!(view.detail_for(StatusCode::Creado).is_some());
    }

    #[test]
    fn duplicate_status_keeps_last_entry_in_array_order() {
        let data = result(vec![
            entry("EN_TRANSITO", "Pereira"),
            entry("EN_TRANSITO", "Medellín"),
            entry("CREADO", "Bogotá"),
        ]);
        let view = resolve(Some(&data));

        assert_eq!(view.detail_for(StatusCode::EnTransito).unwrap().location, "Medellín");
    }

    #[test]
    fn fill_target_for_first_and_middle_steps() {
        let first = resolve(Some(&result(vec![entry("CREADO", "Bogotá")])));
        assert_eq!(first.current_step(), Some(0));
        assert_eq!(first.fill_target(), 0.0);

        let middle = resolve(Some(&result(vec![entry("EN_ENTREGA", "Cali")])));
        assert!((middle.fill_target() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn resolving_twice_is_identical() {
        let data = result(vec![entry("EN_ENTREGA", "Cali"), entry("CREADO", "Bogotá")]);
        assert_eq!(resolve(Some(&data)), resolve(Some(&data)));
    }
}
