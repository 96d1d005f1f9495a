use egui::{Color32, Stroke, pos2};
use parking_lot::Mutex;
use sketchpad::command::{PREVIEW_RING_WIDTH, STICKER_COLOR};
use sketchpad::surface::DrawOp;
use sketchpad::{DisplayList, InputController, InputEvent, Renderer, ToolSnapshot};
use std::sync::Arc;

fn marker(width: f32, color: Color32) -> ToolSnapshot {
    ToolSnapshot::Stroke { width, color }
}

fn balloon() -> ToolSnapshot {
    ToolSnapshot::Sticker {
        glyph: "🎈".to_owned(),
        size: 32.0,
    }
}

fn attached() -> (InputController, Arc<Mutex<DisplayList>>) {
    let canvas = Arc::new(Mutex::new(DisplayList::new()));
    let controller = InputController::new();
    controller.subscribe(Box::new(Renderer::new(canvas.clone())));
    (controller, canvas)
}

fn draw_stroke(controller: &mut InputController, tool: &ToolSnapshot, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().unwrap();
    controller.handle_input(InputEvent::PointerDown { pos: pos2(first.0, first.1) }, tool);
    for (x, y) in rest {
        controller.handle_input(InputEvent::PointerMove { pos: pos2(*x, *y) }, tool);
    }
    let last = points.last().unwrap();
    controller.handle_input(InputEvent::PointerUp { pos: pos2(last.0, last.1) }, tool);
}

#[test]
fn test_stroke_path_visits_points_in_order() {
    let (mut controller, canvas) = attached();
    let tool = marker(3.0, Color32::RED);
    draw_stroke(&mut controller, &tool, &[(10.0, 10.0), (20.0, 20.0), (30.0, 10.0)]);
    controller.handle_input(InputEvent::PointerLeave, &tool);

    let canvas = canvas.lock();
    assert_eq!(
        canvas.ops(),
        &[DrawOp::Path {
            points: vec![pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 10.0)],
            stroke: Stroke::new(3.0, Color32::RED),
        }]
    );
}

#[test]
fn test_single_point_stroke_is_a_dot() {
    let (mut controller, canvas) = attached();
    let tool = marker(5.0, Color32::BLUE);
    controller.handle_input(InputEvent::PointerDown { pos: pos2(4.0, 4.0) }, &tool);

    let canvas = canvas.lock();
    assert_eq!(
        canvas.ops(),
        &[DrawOp::Path {
            points: vec![pos2(4.0, 4.0), pos2(4.0, 4.0)],
            stroke: Stroke::new(5.0, Color32::BLUE),
        }]
    );
}

#[test]
fn test_later_commands_draw_on_top() {
    let (mut controller, canvas) = attached();
    draw_stroke(&mut controller, &marker(2.0, Color32::RED), &[(0.0, 0.0), (1.0, 1.0)]);
    draw_stroke(&mut controller, &balloon(), &[(5.0, 5.0)]);
    controller.handle_input(InputEvent::PointerLeave, &balloon());

    let canvas = canvas.lock();
    assert_eq!(canvas.ops().len(), 2);
    assert!(matches!(canvas.ops()[0], DrawOp::Path { .. }));
    assert_eq!(
        canvas.ops()[1],
        DrawOp::Text {
            text: "🎈".to_owned(),
            center: pos2(5.0, 5.0),
            size: 32.0,
            color: STICKER_COLOR,
        }
    );
}

#[test]
fn test_preview_drawn_last_on_pointer_move() {
    let (mut controller, canvas) = attached();
    let tool = marker(8.0, Color32::GREEN);
    draw_stroke(&mut controller, &balloon(), &[(5.0, 5.0)]);
    controller.handle_input(InputEvent::PointerMove { pos: pos2(50.0, 60.0) }, &tool);

    let canvas = canvas.lock();
    assert_eq!(canvas.ops().len(), 2);
    assert!(matches!(canvas.ops()[0], DrawOp::Text { .. }));
    assert_eq!(
        canvas.ops()[1],
        DrawOp::Circle {
            center: pos2(50.0, 60.0),
            radius: 4.0,
            stroke: Stroke::new(PREVIEW_RING_WIDTH, Color32::GREEN),
        }
    );
}

#[test]
fn test_undo_and_redo_redraw() {
    let (mut controller, canvas) = attached();
    let tool = marker(2.0, Color32::BLACK);
    draw_stroke(&mut controller, &tool, &[(0.0, 0.0), (1.0, 1.0)]);
    draw_stroke(&mut controller, &tool, &[(2.0, 2.0), (3.0, 3.0)]);

    controller.undo();
    assert_eq!(canvas.lock().ops().len(), 1);
    controller.redo();
    assert_eq!(canvas.lock().ops().len(), 2);
    controller.clear();
    assert!(canvas.lock().is_empty());
}

#[test]
fn test_detached_renderer_skips_drawing() {
    let controller_canvas = Arc::new(Mutex::new(DisplayList::new()));
    let mut controller = InputController::new();
    controller.subscribe(Box::new(Renderer::detached()));
    controller.subscribe(Box::new(Renderer::new(controller_canvas.clone())));

    let tool = marker(2.0, Color32::BLACK);
    draw_stroke(&mut controller, &tool, &[(0.0, 0.0), (1.0, 1.0)]);

    assert!(!Renderer::detached().has_surface());
    // the attached renderer still got every event
    assert_eq!(controller_canvas.lock().ops().len(), 2);
}
