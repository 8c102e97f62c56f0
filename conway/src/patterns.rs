// patterns.rs - Named seed patterns, stamped centered onto an engine

use tracing::debug;

use crate::engine::Engine;

/// Live-cell offsets `(x, y)` inside a `width` x `height` bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
    pub width: usize,
    pub height: usize,
}

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    width: 4,
    height: 4,
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    width: 3,
    height: 3,
};

pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        // Top half
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (0, 2), (5, 2), (7, 2), (12, 2),
        (0, 3), (5, 3), (7, 3), (12, 3),
        (0, 4), (5, 4), (7, 4), (12, 4),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        // Bottom half (mirrored)
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (0, 8), (5, 8), (7, 8), (12, 8),
        (0, 9), (5, 9), (7, 9), (12, 9),
        (0, 10), (5, 10), (7, 10), (12, 10),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
    width: 13,
    height: 13,
};

/// Seed row of ten cells; evolves into the period-15 pentadecathlon.
pub const PENTADECATHLON: Pattern = Pattern {
    name: "Pentadecathlon",
    cells: &[
        (0, 0), (1, 0), (2, 0), (3, 0), (4, 0),
        (5, 0), (6, 0), (7, 0), (8, 0), (9, 0),
    ],
    width: 10,
    height: 1,
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Gun",
    cells: &[
        (1, 5), (1, 6), (2, 5), (2, 6),
        (11, 5), (11, 6), (11, 7), (12, 4), (12, 8), (13, 3), (13, 9),
        (14, 3), (14, 9), (15, 6), (16, 4), (16, 8), (17, 5), (17, 6),
        (17, 7), (18, 6),
        (21, 3), (21, 4), (21, 5), (22, 3), (22, 4), (22, 5), (23, 2),
        (23, 6), (25, 1), (25, 2), (25, 6), (25, 7),
        (35, 3), (35, 4), (36, 3), (36, 4),
    ],
    width: 37,
    height: 10,
};

/// Patterns in the order the preset screen lists them.
pub const PATTERNS: &[Pattern] = &[BEACON, GLIDER, PULSAR, PENTADECATHLON, GOSPER_GLIDER_GUN];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Engine {
    /// Clears the grid and stamps `pattern` at its center.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        debug!(pattern = pattern.name, "applying pattern");
        self.mutate_region(pattern.cells, pattern.width, pattern.height);
    }
}
