//! GeometryCore: the point set, the solved flag, and the last result.
//!
//! Lifecycle
//! - `add_point`/`extend`/`clear` mutate the set and discard the result.
//! - `solve` runs the exhaustive search, stores a fresh `SolveResult`, and
//!   sets the solved flag.
//! - `cancel` clears the flag only; the stored result is kept but stale.
//!
//! Classification tags live in a side table on `SolveResult`, keyed by
//! `PointId`; points themselves carry only identity and position.
//!
//! References
//! - Code cross-refs: `quad::{best_quad_with_stats, Candidate}`

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::geom2::{check_finite, PointError};
use crate::quad::{best_quad_with_stats, Candidate, SearchStats};

/// Identity of a point. Assigned monotonically, never reused by one core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub pos: Vector2<f64>,
}

/// Presentation class of a point relative to the last solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tag {
    #[default]
    Unclassified,
    Vertex,
    Enclosed,
    Outside,
}

/// Outcome of `GeometryCore::solve`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolveResult {
    /// Winning vertices in counter-clockwise order.
    pub vertices: Option<[PointId; 4]>,
    pub enclosed: Vec<PointId>,
    pub outside: Vec<PointId>,
    pub stats: SearchStats,
    tags: HashMap<PointId, Tag>,
}

impl SolveResult {
    /// Build a result for `points` from a search over their positions
    /// (same order as `points`).
    pub fn from_search(points: &[Point], best: Option<&Candidate>, stats: SearchStats) -> Self {
        let mut tags: HashMap<PointId, Tag> = points.iter().map(|p| (p.id, Tag::Outside)).collect();
        let mut vertices = None;
        let mut enclosed = Vec::new();
        if let Some(c) = best {
            let ids = c.quad.order.map(|i| points[i].id);
            for id in ids {
                tags.insert(id, Tag::Vertex);
            }
            for &h in &c.enclosed {
                tags.insert(points[h].id, Tag::Enclosed);
                enclosed.push(points[h].id);
            }
            vertices = Some(ids);
        }
        let outside = points
            .iter()
            .map(|p| p.id)
            .filter(|id| tags.get(id) == Some(&Tag::Outside))
            .collect();
        Self {
            vertices,
            enclosed,
            outside,
            stats,
            tags,
        }
    }

    #[inline]
    pub fn has_winner(&self) -> bool {
        self.vertices.is_some()
    }

    #[inline]
    pub fn enclosed_count(&self) -> usize {
        self.enclosed.len()
    }

    /// Tag of `id` in this result; unknown ids are `Unclassified`.
    #[inline]
    pub fn tag(&self, id: PointId) -> Tag {
        self.tags.get(&id).copied().unwrap_or_default()
    }
}

/// Owner of the point set and the search state.
#[derive(Clone, Debug, Default)]
pub struct GeometryCore {
    points: Vec<Point>,
    next_id: u64,
    solved: bool,
    result: Option<SolveResult>,
}

impl GeometryCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point. Invalidates any previous solve.
    ///
    /// Coordinates are taken as given; use `try_add_point` for unvalidated input.
    pub fn add_point(&mut self, pos: Vector2<f64>) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.push(Point { id, pos });
        self.invalidate();
        tracing::debug!(id = id.0, x = pos.x, y = pos.y, "point added");
        id
    }

    /// Validating variant of `add_point`: rejects NaN and infinite coordinates.
    pub fn try_add_point(&mut self, pos: Vector2<f64>) -> Result<PointId, PointError> {
        let pos = check_finite(pos)?;
        Ok(self.add_point(pos))
    }

    pub fn extend<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        for pos in positions {
            self.add_point(pos);
        }
    }

    pub fn clear(&mut self) {
        let removed = self.points.len();
        self.points.clear();
        self.invalidate();
        tracing::debug!(removed, "points cleared");
    }

    /// Run the exhaustive search and store the result.
    pub fn solve(&mut self) -> &SolveResult {
        let positions = self.positions();
        let (best, stats) = best_quad_with_stats(&positions);
        let result = SolveResult::from_search(&self.points, best.as_ref(), stats);
        tracing::info!(
            points = self.points.len(),
            combinations = stats.combinations,
            accepted = stats.accepted,
            enclosed = result.enclosed_count(),
            winner = result.has_winner(),
            "solved"
        );
        self.solved = true;
        self.result.insert(result)
    }

    /// Mark the last result stale without touching points or the result.
    pub fn cancel(&mut self) {
        self.solved = false;
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Copy of the positions in insertion order, e.g. to search off-thread.
    pub fn positions(&self) -> Vec<Vector2<f64>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Last computed result. May be stale after `cancel`; check `is_solved`.
    #[inline]
    pub fn result(&self) -> Option<&SolveResult> {
        self.result.as_ref()
    }

    /// Current tag of a point; `Unclassified` unless solved.
    pub fn tag(&self, id: PointId) -> Tag {
        match (&self.result, self.solved) {
            (Some(r), true) => r.tag(id),
            _ => Tag::Unclassified,
        }
    }

    fn invalidate(&mut self) {
        self.solved = false;
        self.result = None;
    }
}
