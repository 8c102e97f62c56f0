// rows.rs - Row-concurrent generation update on a tokio runtime
//
// Each row of the next generation is computed by its own task. All tasks read
// the same immutable snapshot, so the result is identical to `Engine::tick`.

use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::trace;

use crate::engine::{Engine, step_row};
use crate::error::EngineError;
use crate::grid::Grid;
use crate::rule::Rule;

/// Row task: computes one row of the next generation.
async fn process_row(row_index: usize, snapshot: Arc<Grid>, rule: Rule) -> (usize, Vec<u8>) {
    let mut row = vec![0; snapshot.width()];
    step_row(&snapshot, &rule, row_index, &mut row);
    tokio::task::yield_now().await;
    (row_index, row)
}

impl Engine {
    /// Advances one generation with one task per row on `runtime`.
    ///
    /// On error the engine is left at its previous generation.
    pub fn tick_concurrent(&mut self, runtime: &Runtime) -> Result<(), EngineError> {
        let (current, next, rule) = self.snapshot_parts();
        let snapshot = Arc::new(current.clone());

        runtime.block_on(async {
            let handles: Vec<_> = (0..snapshot.height())
                .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot), rule)))
                .collect();

            for handle in handles {
                let (row_index, completed) = handle.await?;
                next.row_mut(row_index).copy_from_slice(&completed);
            }
            trace!(rows = snapshot.height(), "row tasks joined");
            Ok::<_, EngineError>(())
        })?;

        self.commit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime() -> Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .build()
            .unwrap()
    }

    #[test]
    fn concurrent_tick_matches_serial_tick() {
        let rt = runtime();
        let mut serial = Engine::new(17, 11).unwrap();
        // Deterministic scatter of live cells.
        for i in 0..60usize {
            serial.toggle_cell((i * 7) % 17, (i * 5 + i / 3) % 11);
        }
        let mut concurrent = serial.clone();

        for _ in 0..12 {
            serial.tick();
            concurrent.tick_concurrent(&rt).unwrap();
            assert_eq!(serial.grid(), concurrent.grid());
        }
        assert_eq!(concurrent.generation(), 12);
    }

    #[test]
    fn concurrent_tick_honours_rule() {
        let rt = runtime();
        let mut engine = Engine::new(6, 6).unwrap();
        engine.set_rules("/2".parse().unwrap());
        engine.toggle_cell(2, 2);
        engine.toggle_cell(3, 2);
        engine.tick_concurrent(&rt).unwrap();

        // Seeds: live cells die, cells with exactly two neighbors are born.
        let live: Vec<_> = engine.grid().live_cells().collect();
        assert_eq!(live, vec![(2, 1), (3, 1), (2, 3), (3, 3)]);
    }
}
