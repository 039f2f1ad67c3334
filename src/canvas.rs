use crate::dom;
use field_core::{FieldConfig, GridPoint, Surface, SurfaceError, SurfaceMetrics, SurfaceStatus};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas that fills its parent and draws the dot grid.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    css_size: Vec2,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas,
            ctx,
            dpr: 1.0,
            css_size: Vec2::ZERO,
        })
    }
}

impl Surface<GridPoint> for CanvasSurface {
    fn probe(&mut self) -> SurfaceStatus {
        if !self.canvas.is_connected() {
            return SurfaceStatus::Detached;
        }
        let Some(parent) = self.canvas.parent_element() else {
            return SurfaceStatus::Detached;
        };
        let (w, h) = (parent.client_width(), parent.client_height());
        if w <= 0 || h <= 0 {
            return SurfaceStatus::Unavailable;
        }
        self.dpr = dom::device_pixel_ratio();
        if dom::sync_canvas_backing_size(&self.canvas, w as f64, h as f64, self.dpr) {
            log::debug!("[canvas] backing store {}x{} @{}x", w, h, self.dpr);
        }
        self.css_size = Vec2::new(w as f32, h as f32);
        let rect = self.canvas.get_bounding_client_rect();
        SurfaceStatus::Ready(SurfaceMetrics::new(
            Vec2::new(rect.left() as f32, rect.top() as f32),
            self.css_size,
        ))
    }

    fn commit(&mut self, points: &[GridPoint], config: &FieldConfig) -> Result<(), SurfaceError> {
        let ctx = &self.ctx;
        ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)
            .map_err(|e| SurfaceError::Commit(format!("{:?}", e)))?;
        ctx.clear_rect(0.0, 0.0, self.css_size.x as f64, self.css_size.y as f64);
        if points.is_empty() || config.element_size <= 0.0 {
            return Ok(());
        }
        ctx.set_fill_style_str(&config.color);
        // one path for all dots, filled once
        ctx.begin_path();
        let r = (config.element_size / 2.0) as f64;
        for p in points {
            let (x, y) = (p.current.x as f64, p.current.y as f64);
            ctx.move_to(x + r, y);
            ctx.arc(x, y, r, 0.0, TAU)
                .map_err(|e| SurfaceError::Commit(format!("{:?}", e)))?;
        }
        ctx.fill();
        Ok(())
    }
}
