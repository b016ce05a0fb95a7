use raylib::prelude::*;

use crate::config::DisplayGeometry;
use crate::constants::*;
use crate::state::PresentationState;
use crate::texture_loader::{photo_origin, Photo};

pub const CRIMSON: Color = Color::new(220, 20, 60, 255);      // Gift background
pub const FOREST_GREEN: Color = Color::new(34, 139, 34, 255);  // Box and photo background
pub const GOLD: Color = Color::new(255, 215, 0, 255);          // Ribbon, border, captions
pub const BOW_PINK: Color = Color::new(255, 100, 100, 255);

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    RectOutline { x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color },
    Line { from: (f32, f32), to: (f32, f32), thickness: f32, color: Color },
    Circle { center: (f32, f32), radius: f32, color: Color },
    Text { text: String, center: (f32, f32), size: f32, color: Color }, // Centered on `center`
    Photo { x: i32, y: i32 }, // Top-left anchored
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub ops: Vec<DrawOp>,
}

impl Scene {
    /// Lays out the full frame for `state`. `photo_size` is `None` when the
    /// photo could not be loaded.
    pub fn compose(
        state: PresentationState,
        photo_count: usize,
        geometry: &DisplayGeometry,
        photo_size: Option<(i32, i32)>,
    ) -> Self {
        let mut scene = Scene::default();
        match state {
            PresentationState::Closed => scene.gift(photo_count, geometry),
            PresentationState::ViewingPhoto(index) => {
                scene.photo(index, photo_count, geometry, photo_size)
            }
        }
        scene
    }

    fn gift(&mut self, photo_count: usize, geometry: &DisplayGeometry) {
        let w = geometry.width as f32;
        let h = geometry.height as f32;
        let s = geometry.scale();

        self.ops.push(DrawOp::Clear(CRIMSON));

        // Box
        let (x1, y1) = (w * 2.0 / 9.0, h * 7.0 / 24.0);
        let (x2, y2) = (w * 7.0 / 9.0, h * 17.0 / 24.0);
        let border = BOX_BORDER * s;
        self.ops.push(DrawOp::Rect { x: x1, y: y1, w: x2 - x1, h: y2 - y1, color: FOREST_GREEN });
        self.ops.push(DrawOp::RectOutline {
            x: x1 - border / 2.0,
            y: y1 - border / 2.0,
            w: x2 - x1 + border,
            h: y2 - y1 + border,
            thickness: border,
            color: GOLD,
        });

        // Ribbons cross at the box center
        let (cx, cy) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
        let ribbon = RIBBON_WIDTH * s;
        self.ops.push(DrawOp::Line { from: (x1, cy), to: (x2, cy), thickness: ribbon, color: GOLD });
        self.ops.push(DrawOp::Line { from: (cx, y1), to: (cx, y2), thickness: ribbon, color: GOLD });

        // Bow sits on the top edge
        let radius = BOW_RADIUS * s;
        let outline = BOW_OUTLINE * s;
        self.ops.push(DrawOp::Circle { center: (cx, y1), radius: radius + outline / 2.0, color: GOLD });
        self.ops.push(DrawOp::Circle { center: (cx, y1), radius: radius - outline / 2.0, color: BOW_PINK });

        self.text("CLICK TO OPEN PRESENT", (w / 2.0, h * 5.0 / 24.0), TITLE_FONT * s, GOLD);
        self.text("Click anywhere on the gift!", (w / 2.0, h / 4.0), SUBTITLE_FONT * s, Color::WHITE);

        if photo_count == 0 {
            self.text("No photos available", (w / 2.0, h * 15.0 / 16.0), COUNTER_FONT * s, Color::WHITE);
        }
    }

    fn photo(
        &mut self,
        index: usize,
        photo_count: usize,
        geometry: &DisplayGeometry,
        photo_size: Option<(i32, i32)>,
    ) {
        let w = geometry.width as f32;
        let h = geometry.height as f32;
        let s = geometry.scale();

        self.ops.push(DrawOp::Clear(FOREST_GREEN));

        if let Some(size) = photo_size {
            let (x, y) = photo_origin(geometry, size);
            self.ops.push(DrawOp::Photo { x, y });
        }

        self.text(
            &format!("Photo {} of {}", index + 1, photo_count),
            (w / 2.0, h * 15.0 / 16.0),
            COUNTER_FONT * s,
            GOLD,
        );

        let prompt_center = (w / 2.0, h * 95.0 / 96.0);
        if index + 1 < photo_count {
            self.text("CLICK for next photo", prompt_center, PROMPT_FONT * s, Color::WHITE);
        } else {
            self.text("Happy Holidays!", prompt_center, FAREWELL_FONT * s, GOLD);
        }
    }

    fn text(&mut self, text: &str, center: (f32, f32), size: f32, color: Color) {
        self.ops.push(DrawOp::Text { text: text.to_string(), center, size, color });
    }
}

// --- Clear and repaint the whole surface ---
pub fn paint(d: &mut RaylibDrawHandle, scene: &Scene, photo: Option<&Photo>) {
    let font = d.get_font_default();

    for op in &scene.ops {
        match op {
            DrawOp::Clear(color) => d.clear_background(*color),
            DrawOp::Rect { x, y, w, h, color } => {
                d.draw_rectangle_rec(Rectangle::new(*x, *y, *w, *h), *color);
            }
            DrawOp::RectOutline { x, y, w, h, thickness, color } => {
                d.draw_rectangle_lines_ex(Rectangle::new(*x, *y, *w, *h), *thickness, *color);
            }
            DrawOp::Line { from, to, thickness, color } => {
                d.draw_line_ex(
                    Vector2::new(from.0, from.1),
                    Vector2::new(to.0, to.1),
                    *thickness,
                    *color,
                );
            }
            DrawOp::Circle { center, radius, color } => {
                d.draw_circle_v(Vector2::new(center.0, center.1), *radius, *color);
            }
            DrawOp::Text { text, center, size, color } => {
                // Default font spacing is one tenth of the size
                let spacing = size / 10.0;
                let extent = font.measure_text(text, *size, spacing);
                let position = Vector2::new(center.0 - extent.x / 2.0, center.1 - extent.y / 2.0);
                d.draw_text_ex(&font, text, position, *size, spacing, *color);
            }
            DrawOp::Photo { x, y } => {
                if let Some(photo) = photo {
                    d.draw_texture(&photo.texture, *x, *y, Color::WHITE);
                }
            }
        }
    }
}
