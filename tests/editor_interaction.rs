use egui::{Color32, Pos2};
use paint_brush::{Editor, EditorState, Layer, RasterSurface, Shape, Tool};

const RED: Color32 = Color32::from_rgb(200, 50, 50);
const BLUE: Color32 = Color32::from_rgb(50, 100, 200);

fn shapes(editor: &Editor) -> Vec<Shape> {
    editor.document().shapes().copied().collect()
}

#[test]
fn test_pencil_commits_one_segment_per_drag_step() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Pencil);

    editor.on_pointer_down(Pos2::new(0.0, 0.0));
    editor.on_pointer_drag(Pos2::new(0.0, 1.0));
    editor.on_pointer_drag(Pos2::new(0.0, 2.0));
    editor.on_pointer_drag(Pos2::new(0.0, 3.0));
    editor.on_pointer_up(Pos2::new(0.0, 3.0));

    let committed = shapes(&editor);
    assert_eq!(committed.len(), 3);
    for (i, segment) in committed.iter().enumerate() {
        assert!(matches!(segment, Shape::Line(_)));
        assert!(!segment.is_eraser());
        assert_eq!(segment.p1(), Pos2::new(0.0, i as f32));
        assert_eq!(segment.p2(), Pos2::new(0.0, i as f32 + 1.0));
    }
    assert_eq!(*editor.state(), EditorState::Idle);
}

#[test]
fn test_pencil_is_solid_even_when_dotted() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Pencil);
    editor.set_dotted(true);

    editor.on_pointer_down(Pos2::new(0.0, 0.0));
    editor.on_pointer_drag(Pos2::new(5.0, 5.0));

    assert!(!shapes(&editor)[0].stroke().is_dashed());
}

#[test]
fn test_eraser_uses_background_even_when_color_changes_mid_drag() {
    let mut editor = Editor::default();
    editor.set_color(RED);
    editor.set_tool(Tool::Eraser);

    editor.on_pointer_down(Pos2::new(10.0, 10.0));
    editor.on_pointer_drag(Pos2::new(11.0, 10.0));
    editor.set_color(BLUE);
    editor.on_pointer_drag(Pos2::new(12.0, 10.0));
    editor.on_pointer_up(Pos2::new(12.0, 10.0));

    let committed = shapes(&editor);
    assert_eq!(committed.len(), 2);
    for segment in committed {
        assert!(segment.is_eraser());
        assert_eq!(segment.color(), editor.background());
    }
}

#[test]
fn test_eraser_paints_over_existing_strokes() {
    let mut editor = Editor::default();
    editor.set_canvas_size(egui::vec2(40.0, 40.0));

    editor.set_tool(Tool::Rectangle);
    editor.set_filled(true);
    editor.on_pointer_down(Pos2::new(0.0, 0.0));
    editor.on_pointer_up(Pos2::new(40.0, 40.0));

    editor.set_tool(Tool::Eraser);
    editor.on_pointer_down(Pos2::new(0.0, 20.0));
    editor.on_pointer_drag(Pos2::new(39.0, 20.0));
    editor.on_pointer_up(Pos2::new(39.0, 20.0));

    let image = editor.flatten();
    let background = editor.background();
    assert_eq!(image.pixels().get_pixel(20, 20).0, [background.r(), background.g(), background.b()]);
    assert_eq!(image.pixels().get_pixel(20, 5).0, [0, 0, 0]);
}

#[test]
fn test_bounded_tool_commits_once_on_release() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Oval);
    editor.set_color(RED);
    editor.set_filled(true);

    editor.on_pointer_down(Pos2::new(30.0, 30.0));
    for step in 1..10 {
        editor.on_pointer_drag(Pos2::new(30.0 - step as f32, 30.0 + step as f32));
        assert!(editor.document().is_empty());
        assert!(editor.preview().is_some());
    }
    editor.on_pointer_up(Pos2::new(10.0, 50.0));

    let committed = shapes(&editor);
    assert_eq!(committed.len(), 1);
    let oval = committed[0];
    assert!(matches!(oval, Shape::Oval(_)));
    assert_eq!(oval.p1(), Pos2::new(30.0, 30.0));
    assert_eq!(oval.p2(), Pos2::new(10.0, 50.0));
    assert_eq!(oval.color(), RED);
    assert!(oval.is_filled());
    assert!(editor.preview().is_none());
}

#[test]
fn test_line_ignores_filled_flag() {
    let mut editor = Editor::default();
    editor.set_filled(true);
    editor.on_pointer_down(Pos2::new(0.0, 0.0));
    editor.on_pointer_up(Pos2::new(10.0, 10.0));

    let committed = shapes(&editor);
    assert!(matches!(committed[0], Shape::Line(_)));
    assert!(!committed[0].is_filled());
}

#[test]
fn test_click_without_drag_commits_zero_size_shape() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Rectangle);
    editor.on_pointer_down(Pos2::new(7.0, 7.0));
    editor.on_pointer_up(Pos2::new(7.0, 7.0));

    let committed = shapes(&editor);
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].p1(), committed[0].p2());
}

#[test]
fn test_dotted_applies_to_bounded_tools() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Rectangle);
    editor.set_dotted(true);
    editor.on_pointer_down(Pos2::new(0.0, 0.0));
    editor.on_pointer_up(Pos2::new(20.0, 20.0));

    let committed = shapes(&editor);
    assert_eq!(committed[0].stroke().dash_pattern(), Some((10.0, 5.0)));
}

#[test]
fn test_preview_is_rendered_but_never_committed() {
    let mut editor = Editor::default();
    editor.set_canvas_size(egui::vec2(30.0, 30.0));
    editor.set_tool(Tool::Rectangle);
    editor.set_filled(true);
    editor.set_color(RED);

    editor.on_pointer_down(Pos2::new(0.0, 0.0));
    editor.on_pointer_drag(Pos2::new(20.0, 20.0));

    let mut screen = RasterSurface::new(30, 30, Color32::BLACK);
    editor.render(&mut screen);
    assert_eq!(screen.pixel(10, 10), Some(RED));

    // Saving flattens only committed layers
    let flat = editor.flatten();
    assert_eq!(flat.pixels().get_pixel(10, 10).0, [255, 255, 255]);
    assert!(editor.document().is_empty());
}

#[test]
fn test_undo_and_clear_through_editor() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Pencil);
    editor.on_pointer_down(Pos2::new(0.0, 0.0));
    editor.on_pointer_drag(Pos2::new(1.0, 0.0));
    editor.on_pointer_drag(Pos2::new(2.0, 0.0));
    editor.on_pointer_up(Pos2::new(2.0, 0.0));

    editor.undo();
    assert_eq!(editor.document().committed().len(), 1);
    assert_eq!(editor.document().undone().len(), 1);

    editor.clear_all();
    assert!(editor.document().committed().is_empty());
    assert!(editor.document().undone().is_empty());

    // Undo on an empty canvas is harmless
    editor.undo();
    assert!(editor.document().committed().is_empty());
}

#[test]
fn test_shapes_at_reports_topmost_first() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Rectangle);
    editor.on_pointer_down(Pos2::new(0.0, 0.0));
    editor.on_pointer_up(Pos2::new(20.0, 20.0));
    editor.set_tool(Tool::Oval);
    editor.on_pointer_down(Pos2::new(5.0, 5.0));
    editor.on_pointer_up(Pos2::new(15.0, 15.0));

    let hits = editor.shapes_at(Pos2::new(10.0, 10.0));
    assert_eq!(hits.len(), 2);
    assert!(matches!(hits[0], Shape::Oval(_)));
    assert!(matches!(hits[1], Shape::Rectangle(_)));

    assert_eq!(editor.shapes_at(Pos2::new(1.0, 1.0)).len(), 1);
    assert!(editor.shapes_at(Pos2::new(50.0, 50.0)).is_empty());
    assert!(matches!(editor.document().committed()[0], Layer::Shape(_)));
}
