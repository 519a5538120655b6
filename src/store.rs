//! WorldlineStore - the collection of paths.
//!
//! Insertion-ordered; a path's identity is its creation index, which also
//! picks its palette color and gives newer paths precedence in coordinate
//! lookups (reverse-order scans, first match wins). The store is the sole
//! shared mutable resource of the engine: only the interaction state machine
//! changes its topology, everything else reads.
//!
//! # API
//!
//! - `create_path` - append a new worldline
//! - `find_event_at` - coordinate lookup, newest path wins ties
//! - `find_path_by_event` - resume-drawing lookup under a policy
//! - `undo_last` - remove the newest event of the newest path
//! - `clear` - reset

use crate::path::Path;
use crate::types::LatticePoint;

/// Which events of a path a click may resume drawing on.
///
/// The source behavior varied across revisions; this makes the choice an
/// explicit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumePolicy {
    /// Only a path's newest event resumes drawing on it.
    #[default]
    LastEventOnly,
    /// Any event of a path resumes drawing on it.
    AnyEvent,
}

/// What [`WorldlineStore::undo_last`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// Removed the newest event of this path; the path survives.
    Removed { path: usize },
    /// Removing the last remaining event deleted this path.
    PathDeleted { path: usize },
    /// The store was empty; nothing changed.
    Empty,
}

/// Insertion-ordered collection of worldlines.
#[derive(Debug, Clone, Default)]
pub struct WorldlineStore {
    paths: Vec<Path>,
}

impl WorldlineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the store holds no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All paths in creation order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Path by creation index.
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    /// Mutable path by creation index.
    pub fn path_mut(&mut self, index: usize) -> Option<&mut Path> {
        self.paths.get_mut(index)
    }

    /// Color index the next created path would receive (hover preview).
    pub fn next_color_index(&self) -> usize {
        self.paths.len()
    }

    /// Append a new path with a single origin event and return its index.
    pub fn create_path(&mut self, origin: LatticePoint) -> usize {
        let index = self.paths.len();
        self.paths.push(Path::new(origin, index));
        tracing::debug!(path = index, ?origin, "worldline created");
        index
    }

    /// Find the event at exactly these coordinates, scanning paths in
    /// reverse creation order so the newest path wins ties.
    pub fn find_event_at(&self, point: LatticePoint) -> Option<(usize, usize)> {
        for (path_index, path) in self.paths.iter().enumerate().rev() {
            if let Some(event_index) = path.index_of(point) {
                return Some((path_index, event_index));
            }
        }
        None
    }

    /// Find a path that a click on `point` may resume drawing on, under the
    /// given policy. Same reverse-order precedence as [`Self::find_event_at`].
    ///
    /// Callers must not use this while a path is actively being drawn; the
    /// interaction machine only consults it outside the Drawing state.
    pub fn find_path_by_event(&self, point: LatticePoint, policy: ResumePolicy) -> Option<usize> {
        for (path_index, path) in self.paths.iter().enumerate().rev() {
            let matched = match policy {
                ResumePolicy::LastEventOnly => path.last_event() == Some(point),
                ResumePolicy::AnyEvent => path.index_of(point).is_some(),
            };
            if matched {
                return Some(path_index);
            }
        }
        None
    }

    /// Remove the newest event of the newest path, deleting the path if it
    /// becomes empty. No-op on an empty store.
    pub fn undo_last(&mut self) -> UndoOutcome {
        if self.paths.is_empty() {
            return UndoOutcome::Empty;
        }
        let index = self.paths.len() - 1;
        let path = &mut self.paths[index];

        path.pop_event();
        if path.is_empty() {
            self.paths.pop();
            tracing::debug!(path = index, "worldline deleted by undo");
            return UndoOutcome::PathDeleted { path: index };
        }

        tracing::debug!(path = index, "event removed by undo");
        UndoOutcome::Removed { path: index }
    }

    /// Remove every path.
    pub fn clear(&mut self) {
        tracing::debug!(paths = self.paths.len(), "store cleared");
        self.paths.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
