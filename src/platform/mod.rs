//! Platform abstraction layer
//!
//! Browser glue for the simulation:
//! - `CanvasSurface`: 2-D canvas context as a drawing surface
//! - Mouse event coordinates relative to the canvas
//!
//! Everything here is wasm32-only; the native build runs headless.

#[cfg(target_arch = "wasm32")]
mod web {
    use glam::Vec2;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use crate::renderer::{Bounds, Surface};

    /// A canvas and its 2-D context
    pub struct CanvasSurface {
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        /// Wrap a canvas; `None` if the browser won't hand out a 2-D context
        pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
            let context = canvas
                .get_context("2d")
                .ok()
                .flatten()?
                .dyn_into::<CanvasRenderingContext2d>()
                .ok()?;
            Some(Self { canvas, context })
        }

        pub fn canvas(&self) -> &HtmlCanvasElement {
            &self.canvas
        }
    }

    impl Surface for CanvasSurface {
        fn bounds(&self) -> Bounds {
            Bounds::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }

        fn clear(&mut self, bounds: Bounds) {
            self.context
                .clear_rect(0.0, 0.0, bounds.width as f64, bounds.height as f64);
        }

        fn begin_path(&mut self) {
            self.context.begin_path();
        }

        fn circle(&mut self, center: Vec2, radius: f32) {
            let _ = self.context.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
        }

        fn set_fill_color(&mut self, color: &str) {
            #[allow(deprecated)]
            self.context.set_fill_style(&JsValue::from_str(color));
        }

        fn fill(&mut self) {
            self.context.fill();
        }
    }

    /// Mouse position in canvas-local coordinates
    pub fn canvas_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            event.client_x() as f32 - rect.left() as f32,
            event.client_y() as f32 - rect.top() as f32,
        )
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{CanvasSurface, canvas_position};
