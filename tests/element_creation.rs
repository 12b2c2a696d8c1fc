use egui::{Color32, Pos2, Rect};
use paint_brush::element::{Element, Shape, ShapeStyle, factory};
use paint_brush::StrokeStyle;

fn style() -> ShapeStyle {
    ShapeStyle::new(Color32::BLACK, StrokeStyle::solid(2.0))
}

#[test]
fn test_line_factory() {
    let line = factory::create_line(Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0), style().filled(true));

    assert!(matches!(line, Shape::Line(_)));
    assert_eq!(line.element_type(), "line");
    assert_eq!(line.p1(), Pos2::new(0.0, 0.0));
    assert_eq!(line.p2(), Pos2::new(10.0, 10.0));
    // Lines are never filled
    assert!(!line.is_filled());
    assert!(!line.is_eraser());
}

#[test]
fn test_rectangle_factory() {
    let red = Color32::from_rgb(200, 50, 50);
    let rect = factory::create_rectangle(
        Pos2::new(0.0, 0.0),
        Pos2::new(5.0, 5.0),
        ShapeStyle::new(red, StrokeStyle::solid(2.0)).filled(true),
    );

    assert_eq!(rect.element_type(), "rectangle");
    assert_eq!(rect.color(), red);
    assert!(rect.is_filled());
    assert_eq!(rect.rect(), Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0)));
}

#[test]
fn test_oval_factory_keeps_corners_as_given() {
    let oval = factory::create_oval(Pos2::new(20.0, 4.0), Pos2::new(2.0, 10.0), style());

    assert_eq!(oval.element_type(), "oval");
    assert_eq!(oval.p1(), Pos2::new(20.0, 4.0));
    assert_eq!(oval.p2(), Pos2::new(2.0, 10.0));

    // The bounding box is normalized
    let rect = oval.rect();
    assert_eq!(rect.min, Pos2::new(2.0, 4.0));
    assert_eq!(rect.max, Pos2::new(20.0, 10.0));
}

#[test]
fn test_dashed_style_is_kept() {
    let style = ShapeStyle::new(Color32::BLACK, StrokeStyle::dashed(2.0)).eraser(true);
    let line = factory::create_line(Pos2::new(0.0, 0.0), Pos2::new(1.0, 0.0), style);

    assert!(line.stroke().is_dashed());
    assert_eq!(line.stroke().width(), 2.0);
    assert!(line.is_eraser());
}
