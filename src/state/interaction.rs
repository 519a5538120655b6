//! Interaction Module - the pointer/keyboard-driven editing state machine.
//!
//! Exactly one of three states at any moment: `Idle`, `Drawing` a path, or
//! `Dragging` one event of one path. A transient `has_moved` flag
//! distinguishes a click from a drag. The machine is the only component
//! allowed to change the store's topology; it owns no drawing - hover
//! behavior is reported as a [`HoverPreview`] value for the renderer.
//!
//! # API
//!
//! - `pointer_event(event, store, grid)` - dispatch down/move/up
//! - `key_event(key, store)` - dispatch escape/undo/clear
//! - `hover(pixel, store, grid)` - preview for the current pointer position
//!
//! All invalid user actions are absorbed as no-ops; nothing here returns an
//! error or panics.

use crate::grid::GridSpec;
use crate::path::AppendOutcome;
use crate::state::keyboard::EditorKey;
use crate::state::pointer::{PointerAction, PointerEvent};
use crate::store::{ResumePolicy, UndoOutcome, WorldlineStore};
use crate::types::{LatticePoint, PixelPoint, Rgba, palette_color};

// =============================================================================
// TYPES
// =============================================================================

/// The editing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No interaction in progress.
    #[default]
    Idle,
    /// Appending events to the path at this index.
    Drawing { path: usize },
    /// Moving one event of one path.
    Dragging { path: usize, event: usize },
}

/// What the renderer should preview for the hovered pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverPreview {
    /// Pointer outside the grid: clear any highlight.
    None,
    /// Idle over an empty lattice point: the next event's would-be color.
    NextEvent { point: LatticePoint, color: Rgba },
    /// Idle over an existing event: that event's light cone.
    LightCone { point: LatticePoint, color: Rgba },
    /// Drawing: rubber-band segments from the time-adjacent neighbor(s) to
    /// the snapped pointer position, spliced at its position in time order.
    RubberBand {
        point: LatticePoint,
        color: Rgba,
        prev: Option<LatticePoint>,
        next: Option<LatticePoint>,
    },
}

// =============================================================================
// EDITOR
// =============================================================================

/// The interactive editing state machine.
///
/// Owned and passed by the host loop; holds no reference to the store, so a
/// remount resets cleanly by dropping both.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    state: InteractionState,
    has_moved: bool,
    resume_policy: ResumePolicy,
}

impl Editor {
    /// Create an idle editor with the default resume policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor with an explicit resume-drawing policy.
    pub fn with_resume_policy(resume_policy: ResumePolicy) -> Self {
        Self {
            resume_policy,
            ..Self::default()
        }
    }

    /// Current state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The configured resume-drawing policy.
    pub fn resume_policy(&self) -> ResumePolicy {
        self.resume_policy
    }

    /// Dispatch a pointer event against the store.
    pub fn pointer_event(
        &mut self,
        event: PointerEvent,
        store: &mut WorldlineStore,
        grid: &GridSpec,
    ) {
        match event.action {
            PointerAction::Down => self.pointer_down(event.position, store, grid),
            PointerAction::Move => self.pointer_move(event.position, store, grid),
            PointerAction::Up => self.pointer_up(event.position, store, grid),
        }
    }

    fn pointer_down(&mut self, pixel: PixelPoint, store: &mut WorldlineStore, grid: &GridSpec) {
        let Some(point) = grid.pixel_to_lattice(pixel) else {
            return;
        };

        match self.state {
            InteractionState::Drawing { path } => {
                let Some(target) = store.path_mut(path) else {
                    self.state = InteractionState::Idle;
                    return;
                };
                match target.append_event(point) {
                    AppendOutcome::Appended(_) => {}
                    AppendOutcome::Coincident(event) => {
                        // Clicking an existing event of the drawn path ends
                        // drawing and grabs that event instead.
                        self.transition(InteractionState::Dragging { path, event });
                    }
                }
            }
            InteractionState::Idle => {
                if let Some((path, event)) = store.find_event_at(point) {
                    self.transition(InteractionState::Dragging { path, event });
                } else {
                    let path = store.create_path(point);
                    self.transition(InteractionState::Drawing { path });
                }
            }
            InteractionState::Dragging { .. } => {}
        }
    }

    fn pointer_move(&mut self, pixel: PixelPoint, store: &mut WorldlineStore, grid: &GridSpec) {
        let InteractionState::Dragging { path, event } = self.state else {
            return;
        };
        let Some(point) = grid.pixel_to_lattice(pixel) else {
            return;
        };
        let Some(target) = store.path_mut(path) else {
            return;
        };

        if target.event(event) == Some(point) {
            return;
        }

        // The drag flag is set even when the move is rejected by a
        // collision, so releasing there still counts as a drag, not a click.
        let event = target.move_event(event, point);
        self.has_moved = true;
        self.state = InteractionState::Dragging { path, event };
    }

    fn pointer_up(&mut self, pixel: PixelPoint, store: &mut WorldlineStore, grid: &GridSpec) {
        let moved = self.has_moved;
        self.has_moved = false;

        match self.state {
            InteractionState::Dragging { .. } => {
                self.transition(InteractionState::Idle);
                if !moved {
                    self.try_resume(pixel, store, grid);
                }
            }
            InteractionState::Idle => self.try_resume(pixel, store, grid),
            InteractionState::Drawing { .. } => {}
        }
    }

    // A click (no movement) on an event that satisfies the resume policy
    // re-enters Drawing on that path.
    fn try_resume(&mut self, pixel: PixelPoint, store: &WorldlineStore, grid: &GridSpec) {
        let Some(point) = grid.pixel_to_lattice(pixel) else {
            return;
        };
        if let Some(path) = store.find_path_by_event(point, self.resume_policy) {
            self.transition(InteractionState::Drawing { path });
        }
    }

    /// Dispatch an editing command.
    pub fn key_event(&mut self, key: EditorKey, store: &mut WorldlineStore) {
        match key {
            EditorKey::Escape => {
                if matches!(self.state, InteractionState::Drawing { .. }) {
                    self.transition(InteractionState::Idle);
                }
            }
            EditorKey::Undo => match store.undo_last() {
                UndoOutcome::PathDeleted { path } => {
                    if self.targets_path(path) {
                        self.transition(InteractionState::Idle);
                    }
                }
                UndoOutcome::Removed { path } => {
                    // A drag selection can be invalidated by the removal.
                    if let InteractionState::Dragging { path: p, event } = self.state {
                        let live = store.path(p).map(|t| t.len()).unwrap_or(0);
                        if p == path && event >= live {
                            self.transition(InteractionState::Idle);
                        }
                    }
                }
                UndoOutcome::Empty => {}
            },
            EditorKey::Clear => {
                store.clear();
                self.transition(InteractionState::Idle);
            }
        }
    }

    fn targets_path(&self, path: usize) -> bool {
        match self.state {
            InteractionState::Drawing { path: p } | InteractionState::Dragging { path: p, .. } => {
                p == path
            }
            InteractionState::Idle => false,
        }
    }

    fn transition(&mut self, next: InteractionState) {
        if next != self.state {
            tracing::trace!(from = ?self.state, to = ?next, "interaction transition");
            self.state = next;
        }
    }

    // -------------------------------------------------------------------------
    // HOVER
    // -------------------------------------------------------------------------

    /// Preview for the current pointer position. Never transitions state.
    pub fn hover(&self, pixel: PixelPoint, store: &WorldlineStore, grid: &GridSpec) -> HoverPreview {
        let Some(point) = grid.pixel_to_lattice(pixel) else {
            return HoverPreview::None;
        };

        if let InteractionState::Drawing { path } = self.state {
            let Some(target) = store.path(path) else {
                return HoverPreview::None;
            };
            // Splice the rubber band at the candidate's position in time
            // order rather than always banding from the newest event.
            let position = target
                .events()
                .partition_point(|e| e.time <= point.time);
            let prev = position
                .checked_sub(1)
                .and_then(|i| target.event(i))
                .filter(|p| *p != point);
            let next = target.event(position).filter(|p| *p != point);
            return HoverPreview::RubberBand {
                point,
                color: target.color(),
                prev,
                next,
            };
        }

        match store.find_event_at(point) {
            Some((path, _)) => HoverPreview::LightCone {
                point,
                color: store
                    .path(path)
                    .map(|p| p.color_translucent())
                    .unwrap_or(Rgba::GRAY),
            },
            None => HoverPreview::NextEvent {
                point,
                color: palette_color(store.next_color_index()),
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
