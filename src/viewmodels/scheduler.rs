// ============================================================================
// SCHEDULER - Ejecución diferida de tareas (timers del navegador)
// ============================================================================

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Programa tareas de un solo disparo
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Timers del navegador vía `gloo_timers`. Los timeouts se olvidan: la
/// tarea comprueba por sí misma si sigue vigente.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }
}

#[cfg(test)]
pub mod testing {
    use super::{Scheduler, Task};
    use std::cell::RefCell;

    /// Scheduler manual: acumula tareas y las dispara cuando el test lo pide
    #[derive(Default)]
    pub struct ManualScheduler {
        pending: RefCell<Vec<(u32, Task)>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.pending.borrow().len()
        }

        pub fn delays(&self) -> Vec<u32> {
            self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
        }

        /// Dispara las tareas con retraso <= `until_ms`, en orden de retraso
        pub fn run_until(&self, until_ms: u32) -> usize {
            let mut due: Vec<(u32, Task)> = {
                let mut pending = self.pending.borrow_mut();
                let (due, rest): (Vec<(u32, Task)>, Vec<(u32, Task)>) = pending
                    .drain(..)
                    .partition(|(delay, _)| *delay <= until_ms);
                *pending = rest;
                due
            };
            due.sort_by_key(|(delay, _)| *delay);
            let fired = due.len();
            for (_, task) in due {
                task();
            }
            fired
        }

        pub fn run_all(&self) -> usize {
            self.run_until(u32::MAX)
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Task) {
            self.pending.borrow_mut().push((delay_ms, task));
        }
    }
}
