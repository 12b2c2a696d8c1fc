use egui::{Context, Key, Modifiers, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the canvas' top-left corner
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Input events relevant to the canvas, with primary-button pointer semantics
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { location: InputLocation },
    /// Primary button released, wherever the pointer is
    PointerUp { location: InputLocation },
    /// Pointer moved
    PointerMove {
        location: InputLocation,
        /// Whether the primary button is held
        dragging: bool,
    },
    /// Pointer left the window
    PointerLeave,
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos - self.canvas_rect.min.to_vec2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover_pos = input.pointer.hover_pos();

            match hover_pos {
                Some(pos) if Some(pos) != self.last_pointer_pos => {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                        dragging: input.pointer.primary_down(),
                    });
                }
                None if self.last_pointer_pos.is_some() => {
                    events.push(InputEvent::PointerLeave);
                }
                _ => {}
            }

            if input.pointer.primary_pressed() {
                if let Some(pos) = hover_pos {
                    let location = self.make_location(pos);
                    if location.is_in_canvas {
                        events.push(InputEvent::PointerDown { location });
                    }
                }
            }
            if input.pointer.primary_released() {
                if let Some(pos) = hover_pos.or(input.pointer.latest_pos()).or(self.last_pointer_pos) {
                    events.push(InputEvent::PointerUp {
                        location: self.make_location(pos),
                    });
                }
            }

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }

            self.last_pointer_pos = hover_pos;
        });

        events
    }
}
