//! JSON documents read and written by the CLI.
//!
//! - `TaskDoc`: world bounds plus the ordered point list.
//! - `ResultDoc`: the last solve, with points referenced by their index in
//!   the input document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quadmax::prelude::{Bounds2, GeometryCore, PointId, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsDoc {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl From<Bounds2> for BoundsDoc {
    fn from(b: Bounds2) -> Self {
        Self {
            min: [b.min.x, b.min.y],
            max: [b.max.x, b.max.y],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDoc {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDoc {
    pub bounds: BoundsDoc,
    #[serde(default)]
    pub points: Vec<PointDoc>,
}

impl TaskDoc {
    pub fn new(bounds: Bounds2, points: &[Vec2<f64>]) -> Self {
        Self {
            bounds: bounds.into(),
            points: points.iter().map(|p| PointDoc { x: p.x, y: p.y }).collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    pub fn bounds(&self) -> Result<Bounds2> {
        let [x0, y0] = self.bounds.min;
        let [x1, y1] = self.bounds.max;
        Bounds2::new(Vec2::new(x0, y0), Vec2::new(x1, y1)).context("document bounds")
    }

    /// Validate every point and load them, in document order, into a fresh core.
    pub fn to_core(&self) -> Result<GeometryCore> {
        let bounds = self.bounds()?;
        let mut core = GeometryCore::new();
        for (i, p) in self.points.iter().enumerate() {
            let pos = Vec2::new(p.x, p.y);
            core.try_add_point(pos)
                .with_context(|| format!("point #{i}"))?;
            if !bounds.contains(pos) {
                tracing::warn!(index = i, x = p.x, y = p.y, "point outside document bounds");
            }
        }
        Ok(core)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDoc {
    pub solved: bool,
    pub enclosed_count: usize,
    /// Winning vertices in counter-clockwise order; empty if there is no winner.
    pub vertices: Vec<usize>,
    pub enclosed: Vec<usize>,
    pub outside: Vec<usize>,
    pub vertex_positions: Vec<[f64; 2]>,
}

impl ResultDoc {
    /// Snapshot of the core's live result; `None` if unsolved.
    pub fn from_core(core: &GeometryCore) -> Option<Self> {
        if !core.is_solved() {
            return None;
        }
        let res = core.result()?;
        let points = core.points();
        // ids are assigned in insertion order, so a binary search finds the index
        let index_of = |id: &PointId| points.binary_search_by_key(id, |p| p.id).ok();
        let indices = |ids: &[PointId]| ids.iter().filter_map(index_of).collect::<Vec<_>>();
        let vertices = res.vertices.map(|v| indices(v.as_slice())).unwrap_or_default();
        let vertex_positions = vertices
            .iter()
            .map(|&i| [points[i].pos.x, points[i].pos.y])
            .collect();
        Some(Self {
            solved: true,
            enclosed_count: res.enclosed_count(),
            enclosed: indices(res.enclosed.as_slice()),
            outside: indices(res.outside.as_slice()),
            vertices,
            vertex_positions,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn square_doc() -> TaskDoc {
        let pts = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0), (8.0, 2.0)]
            .map(|(x, y)| Vec2::new(x, y));
        TaskDoc::new(Bounds2::default(), &pts)
    }

    #[test]
    fn load_accepts_missing_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, r#"{"bounds": {"min": [0, 0], "max": [1, 1]}}"#).unwrap();
        let doc = TaskDoc::load(&path).unwrap();
        assert!(doc.points.is_empty());
        assert!(doc.to_core().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("task.json");
        let doc = square_doc();
        doc.save(&path).unwrap();
        assert_eq!(TaskDoc::load(&path).unwrap(), doc);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut doc = square_doc();
        doc.bounds = BoundsDoc {
            min: [1.0, 1.0],
            max: [0.0, 2.0],
        };
        let err = doc.to_core().unwrap_err();
        assert!(format!("{err:#}").contains("invalid bounds"));
    }

    #[test]
    fn malformed_json_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = TaskDoc::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn result_doc_uses_document_indices() {
        let mut core = square_doc().to_core().unwrap();
        assert!(ResultDoc::from_core(&core).is_none());
        core.solve();
        let res = ResultDoc::from_core(&core).unwrap();
        assert_eq!(res.vertices, vec![0, 1, 2, 3]);
        assert_eq!(res.enclosed, vec![4]);
        assert_eq!(res.outside, vec![5]);
        assert_eq!(res.enclosed_count, 1);
        assert_eq!(res.vertex_positions[2], [4.0, 4.0]);

        core.cancel();
        assert!(ResultDoc::from_core(&core).is_none());
    }
}
