//! End-to-end editing sessions through the public API: pointer and key
//! events drive the editor, and every step is checked against the composed
//! frame the way a host loop would render it.

use worldline_tui::{
    CollectAdapter, Editor, EditorKey, GridSpec, InteractionState, LatticePoint, OverlayFlags,
    PointerEvent, Primitive, SweepState, WorldlineStore, compose_frame, render_frame,
};

fn grid() -> GridSpec {
    GridSpec::standard()
}

fn click(editor: &mut Editor, store: &mut WorldlineStore, space: i32, time: i32) {
    let pixel = grid().lattice_to_pixel(LatticePoint::new(space, time));
    editor.pointer_event(PointerEvent::down(pixel.x, pixel.y), store, &grid());
    editor.pointer_event(PointerEvent::up(pixel.x, pixel.y), store, &grid());
}

fn frame(store: &WorldlineStore, editor: &Editor, overlays: OverlayFlags) -> Vec<Primitive> {
    compose_frame(
        store,
        editor,
        None,
        overlays,
        &SweepState::new(grid().extent()),
        &grid(),
    )
}

fn circles(frame: &[Primitive]) -> usize {
    frame
        .iter()
        .filter(|p| matches!(p, Primitive::Circle { .. }))
        .count()
}

#[test]
fn draw_session_appears_in_frame() {
    let mut editor = Editor::new();
    let mut store = WorldlineStore::new();

    click(&mut editor, &mut store, 5, 2);
    click(&mut editor, &mut store, 6, 6);
    click(&mut editor, &mut store, 6, 10);
    editor.key_event(EditorKey::Escape, &mut store);

    assert_eq!(editor.state(), InteractionState::Idle);
    let out = frame(&store, &editor, OverlayFlags::empty());
    assert_eq!(circles(&out), 3);

    // Two segments on top of the 50 grid lines.
    let worldline_segments = out
        .iter()
        .filter(
            |p| matches!(p, Primitive::Line { width, dash: None, .. } if *width > 1.0),
        )
        .count();
    assert_eq!(worldline_segments, 2);
}

#[test]
fn drag_session_reorders_events() {
    let mut editor = Editor::new();
    let mut store = WorldlineStore::new();

    click(&mut editor, &mut store, 5, 2);
    click(&mut editor, &mut store, 5, 6);
    editor.key_event(EditorKey::Escape, &mut store);

    // Drag the earlier event above the later one.
    let from = grid().lattice_to_pixel(LatticePoint::new(5, 2));
    let to = grid().lattice_to_pixel(LatticePoint::new(7, 9));
    editor.pointer_event(PointerEvent::down(from.x, from.y), &mut store, &grid());
    editor.pointer_event(PointerEvent::move_to(to.x, to.y), &mut store, &grid());
    editor.pointer_event(PointerEvent::up(to.x, to.y), &mut store, &grid());

    assert_eq!(editor.state(), InteractionState::Idle);
    let events = store.path(0).map(|p| p.events().to_vec()).unwrap();
    assert_eq!(
        events,
        vec![LatticePoint::new(5, 6), LatticePoint::new(7, 9)]
    );
}

#[test]
fn undo_walks_back_and_clear_empties() {
    let mut editor = Editor::new();
    let mut store = WorldlineStore::new();

    click(&mut editor, &mut store, 2, 2);
    click(&mut editor, &mut store, 2, 6);
    editor.key_event(EditorKey::Escape, &mut store);
    click(&mut editor, &mut store, 10, 3);
    editor.key_event(EditorKey::Escape, &mut store);
    assert_eq!(store.len(), 2);

    // Undo removes the second path's only event, deleting the path.
    editor.key_event(EditorKey::Undo, &mut store);
    assert_eq!(store.len(), 1);
    assert_eq!(circles(&frame(&store, &editor, OverlayFlags::empty())), 2);

    editor.key_event(EditorKey::Clear, &mut store);
    assert!(store.is_empty());
    assert_eq!(circles(&frame(&store, &editor, OverlayFlags::empty())), 0);
}

#[test]
fn second_worldline_gets_next_palette_color() {
    let mut editor = Editor::new();
    let mut store = WorldlineStore::new();

    click(&mut editor, &mut store, 2, 2);
    editor.key_event(EditorKey::Escape, &mut store);
    click(&mut editor, &mut store, 10, 3);
    editor.key_event(EditorKey::Escape, &mut store);

    let first = store.path(0).map(|p| p.color()).unwrap();
    let second = store.path(1).map(|p| p.color()).unwrap();
    assert_ne!(first, second);
}

#[test]
fn hyperplane_overlay_renders_dashed_lines() {
    let mut editor = Editor::new();
    let mut store = WorldlineStore::new();

    click(&mut editor, &mut store, 8, 4);
    click(&mut editor, &mut store, 10, 12);
    editor.key_event(EditorKey::Escape, &mut store);

    let out = frame(&store, &editor, OverlayFlags::HYPERPLANES);
    let dashed = out
        .iter()
        .filter(|p| matches!(p, Primitive::Line { dash: Some(_), .. }))
        .count();
    assert_eq!(dashed, 2);
}

#[test]
fn composed_frame_replays_onto_adapter() {
    let mut editor = Editor::new();
    let mut store = WorldlineStore::new();
    click(&mut editor, &mut store, 12, 12);
    editor.key_event(EditorKey::Escape, &mut store);

    let out = frame(&store, &editor, OverlayFlags::empty());
    let mut collector = CollectAdapter::new();
    render_frame(&mut collector, &out).unwrap();
    assert_eq!(collector.primitives, out);
}
