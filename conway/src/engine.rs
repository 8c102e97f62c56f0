// engine.rs - The simulation engine: grid state, rule and generation counter

use tracing::{debug, trace};

use crate::error::EngineError;
use crate::grid::Grid;
use crate::rule::Rule;

/// Owns a toroidal grid and advances it one synchronous generation at a time.
///
/// The engine has no notion of time or rendering; a host drives it by calling
/// [`Engine::tick`] and forwards user input through the mutation methods.
#[derive(Debug, Clone)]
pub struct Engine {
    current: Grid,
    next: Grid,
    rule: Rule,
    generation: u64,
}

impl Engine {
    /// Creates an all-dead `width` x `height` engine running Conway's rule.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
            rule: Rule::conway(),
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.current.get(x, y)
    }

    pub fn live_count(&self) -> usize {
        self.current.live_count()
    }

    /// Advances exactly one generation.
    ///
    /// Every neighbor count is read from the current grid while the new
    /// states go into the second buffer, so no cell sees a neighbor that was
    /// already updated this tick. The buffers are swapped at the end.
    pub fn tick(&mut self) {
        for y in 0..self.current.height() {
            step_row(&self.current, &self.rule, y, self.next.row_mut(y));
        }
        self.commit();
    }

    /// Swaps the freshly computed buffer in and counts the generation.
    pub(crate) fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    pub(crate) fn snapshot_parts(&mut self) -> (&Grid, &mut Grid, Rule) {
        (&self.current, &mut self.next, self.rule)
    }

    /// Flips the cell at column `x`, row `y`. Off-grid coordinates are ignored.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if !self.current.toggle(x, y) {
            trace!(x, y, "ignoring toggle outside the grid");
        }
    }

    /// Kills every cell and zeroes the generation counter; the rule is kept.
    pub fn reset(&mut self) {
        self.current.clear();
        self.generation = 0;
        debug!("grid reset");
    }

    /// Installs a new rule. The grid is reset so no state built under the old
    /// rule carries over.
    pub fn set_rules(&mut self, rule: Rule) {
        debug!(%rule, "rule changed");
        self.rule = rule;
        self.reset();
    }

    /// Clears the grid, then stamps `coords` (offsets inside a
    /// `width` x `height` box) centered on the grid.
    ///
    /// The box origin is `((W - width) div 2, (H - height) div 2)` with floor
    /// division, so a pattern larger than the grid hangs off both sides
    /// evenly. Offsets that land outside the grid are skipped.
    pub fn mutate_region(&mut self, coords: &[(usize, usize)], width: usize, height: usize) {
        self.reset();
        let origin_x = (self.width() as i64 - width as i64).div_euclid(2);
        let origin_y = (self.height() as i64 - height as i64).div_euclid(2);

        let mut skipped = 0usize;
        for &(dx, dy) in coords {
            let x = origin_x + dx as i64;
            let y = origin_y + dy as i64;
            let placed = x >= 0 && y >= 0 && self.current.set(x as usize, y as usize, true);
            if !placed {
                skipped += 1;
            }
        }
        if skipped > 0 {
            trace!(skipped, "pattern cells fell outside the grid");
        }
    }
}

/// Computes row `y` of the next generation from `snapshot` into `out`.
pub(crate) fn step_row(snapshot: &Grid, rule: &Rule, y: usize, out: &mut [u8]) {
    let row = snapshot.row(y);
    for (x, cell) in out.iter_mut().enumerate() {
        let alive = row[x] == 1;
        *cell = rule.next_state(alive, snapshot.neighbors(x, y)) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(engine: &Engine) -> Vec<(usize, usize)> {
        engine.grid().live_cells().collect()
    }

    #[test]
    fn new_engine_defaults() {
        let engine = Engine::new(6, 4).unwrap();
        assert_eq!(engine.width(), 6);
        assert_eq!(engine.height(), 4);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.rule(), Rule::conway());
        assert_eq!(engine.live_count(), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Engine::new(0, 5),
            Err(EngineError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(Engine::new(5, 0).is_err());
    }

    #[test]
    fn tick_counts_generations() {
        let mut engine = Engine::new(5, 5).unwrap();
        engine.tick();
        engine.tick();
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn blinker_oscillates() {
        let mut engine = Engine::new(5, 5).unwrap();
        for x in 1..4 {
            engine.toggle_cell(x, 2);
        }
        engine.tick();
        assert_eq!(live(&engine), vec![(2, 1), (2, 2), (2, 3)]);
        engine.tick();
        assert_eq!(live(&engine), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn toggle_outside_grid_is_ignored() {
        let mut engine = Engine::new(3, 3).unwrap();
        engine.toggle_cell(1, 1);
        let before = engine.grid().clone();
        engine.toggle_cell(3, 0);
        engine.toggle_cell(0, 3);
        engine.toggle_cell(usize::MAX, usize::MAX);
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn set_rules_keeps_new_rule_and_clears() {
        let mut engine = Engine::new(4, 4).unwrap();
        engine.toggle_cell(0, 0);
        engine.tick();
        let highlife: Rule = "23/36".parse().unwrap();
        engine.set_rules(highlife);
        assert_eq!(engine.rule(), highlife);
        assert_eq!(engine.live_count(), 0);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn reset_keeps_rule() {
        let mut engine = Engine::new(4, 4).unwrap();
        let rule: Rule = "1357/1357".parse().unwrap();
        engine.set_rules(rule);
        engine.toggle_cell(2, 2);
        engine.reset();
        assert_eq!(engine.rule(), rule);
    }

    #[test]
    fn mutate_region_centers_pattern() {
        let mut engine = Engine::new(10, 8).unwrap();
        engine.toggle_cell(0, 0);
        engine.tick();
        engine.mutate_region(&[(0, 0), (1, 1)], 2, 2);
        assert_eq!(engine.generation(), 0);
        assert_eq!(live(&engine), vec![(4, 3), (5, 4)]);
    }

    #[test]
    fn mutate_region_skips_cells_off_grid() {
        // 5-wide box on a 3-wide grid: origin x is floor(-2 / 2) = -1.
        let mut engine = Engine::new(3, 3).unwrap();
        engine.mutate_region(&[(0, 0), (1, 0), (4, 0), (3, 0)], 5, 1);
        assert_eq!(live(&engine), vec![(0, 1), (2, 1)]);
    }
}
