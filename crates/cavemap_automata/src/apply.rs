//! The smoothing engine: runs a [`RuleSet`] over a [`TileGrid`].
//!
//! The entry point is [`generate_cave`]. [`smooth`] and [`apply_rule_set`] are
//! exposed for callers that bring their own starting grid. The double buffer
//! stays inside [`apply_rule_set`].

use cavemap_core::{Tile, TileGrid};
use rand::Rng;
use tracing::{debug, info};

use crate::{seed_grid, CaveConfig, GenerationRule, RuleSet, R2_NEIGHBORHOOD_SIZE};

// ─── Public entry points ──────────────────────────────────────────────────────

/// Seed a grid from `config` and run all of its rules over it, in order.
///
/// `rng` is only used for the initial fill; the smoothing passes are
/// deterministic.
pub fn generate_cave(config: &CaveConfig, rng: &mut impl Rng) -> TileGrid {
    info!(
        width = config.width,
        height = config.height,
        fill = config.fill.percent(),
        rules = config.rules.len(),
        passes = config.rules.total_passes(),
        "generating cave"
    );

    let grid = seed_grid(config.width, config.height, config.fill, rng);
    apply_rule_set(grid, &config.rules)
}

/// Run every rule in `rules` over `grid`, each `repeat_count` times.
///
/// Two buffers are kept alive for the whole run. Each pass reads the current
/// buffer and writes the other, then the two are swapped.
pub fn apply_rule_set(grid: TileGrid, rules: &RuleSet) -> TileGrid {
    let mut current = grid;
    let mut scratch = current.clone();

    for (rule_idx, rule) in rules.into_iter().enumerate() {
        for pass in 0..rule.repeat_count {
            smooth_into(&current, &mut scratch, rule);
            std::mem::swap(&mut current, &mut scratch);
            debug!(
                rule = rule_idx,
                pass,
                floor = current.count(Tile::Floor),
                "smoothing pass complete"
            );
        }
    }

    current
}

/// Apply one pass of `rule` to `grid`, returning the new grid.
pub fn smooth(grid: &TileGrid, rule: &GenerationRule) -> TileGrid {
    let mut next = grid.clone();
    smooth_into(grid, &mut next, rule);
    next
}

/// Apply one pass of `rule`, reading only from `src` and writing into `dst`.
///
/// Border cells are copied unchanged. If `dst` has different dimensions it is
/// replaced with a grid matching `src`.
fn smooth_into(src: &TileGrid, dst: &mut TileGrid, rule: &GenerationRule) {
    if dst.width() != src.width() || dst.height() != src.height() {
        *dst = src.clone();
    }

    for y in 0..src.height() {
        for x in 0..src.width() {
            let tile = if src.is_border(x, y) {
                src.get(x, y).unwrap_or_default()
            } else {
                rule.next_tile(count_r1(src, x, y), count_r2(src, x, y))
            };
            dst.set(x, y, tile);
        }
    }
}

// ─── Neighborhood counts ──────────────────────────────────────────────────────

/// Solid cells in the 3×3 block centered on `(x, y)`, the center included.
pub fn count_r1(grid: &TileGrid, x: u32, y: u32) -> usize {
    count_solid(grid, x, y, 1, |_, _| true)
}

/// Solid cells in the 5×5 block centered on `(x, y)` minus its four corners,
/// at most [`R2_NEIGHBORHOOD_SIZE`].
///
/// Out-of-bounds positions are skipped, they do not count as walls.
pub fn count_r2(grid: &TileGrid, x: u32, y: u32) -> usize {
    let count = count_solid(grid, x, y, 2, |dx, dy| !(dx.abs() == 2 && dy.abs() == 2));
    debug_assert!(count <= R2_NEIGHBORHOOD_SIZE);
    count
}

fn count_solid(
    grid: &TileGrid,
    x: u32,
    y: u32,
    radius: i64,
    include: impl Fn(i64, i64) -> bool,
) -> usize {
    let (cx, cy) = (x as i64, y as i64);
    let mut count = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if !include(dx, dy) {
                continue;
            }
            if grid
                .get_signed(cx + dx, cy + dy)
                .is_some_and(Tile::is_solid)
            {
                count += 1;
            }
        }
    }
    count
}

// ─── Tests ───────────────────────────────────────────────────────────────────
