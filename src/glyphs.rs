use field_core::{
    FieldConfig, Glyph, GlyphLayout, GlyphStyle, Rect, Surface, SurfaceError, SurfaceMetrics,
    SurfaceStatus,
};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

const LINE_CLASS: &str = "field-text-line";
const GLYPH_CLASS: &str = "field-glyph";

/// One `<span>` per character inside a flex line; styles are written per span.
pub struct GlyphSurface {
    document: web::Document,
    container: web::HtmlElement,
    line: web::HtmlElement,
    spans: Vec<web::HtmlElement>,
    committed: Vec<Option<GlyphStyle>>,
    text: String,
    origin: Vec2,
}

impl GlyphSurface {
    pub fn new(container: web::HtmlElement, text: &str) -> anyhow::Result<Self> {
        let document = container
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("container has no document"))?;
        let line = create_html(&document, "div")?;
        line.set_class_name(LINE_CLASS);
        set_style(&line, "display", "flex")?;
        set_style(&line, "justify-content", "space-between")?;
        set_style(&line, "width", "100%")?;
        container
            .append_child(&line)
            .map_err(|e| anyhow::anyhow!("append line: {:?}", e))?;
        let mut surface = Self {
            document,
            container,
            line,
            spans: Vec::new(),
            committed: Vec::new(),
            text: String::new(),
            origin: Vec2::ZERO,
        };
        surface.set_text(text)?;
        Ok(surface)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the glyph spans. Returns false when the text is unchanged.
    pub fn set_text(&mut self, text: &str) -> anyhow::Result<bool> {
        if text == self.text && !self.spans.is_empty() {
            return Ok(false);
        }
        for span in self.spans.drain(..) {
            span.remove();
        }
        for ch in text.chars() {
            let span = create_html(&self.document, "span")?;
            span.set_class_name(GLYPH_CLASS);
            set_style(&span, "display", "inline-block")?;
            set_style(&span, "transform-origin", "center center")?;
            set_style(&span, "will-change", "transform")?;
            // collapsed whitespace would give the glyph no box
            let shown = if ch.is_whitespace() { '\u{a0}' } else { ch };
            span.set_text_content(Some(&shown.to_string()));
            self.line
                .append_child(&span)
                .map_err(|e| anyhow::anyhow!("append glyph: {:?}", e))?;
            self.spans.push(span);
        }
        self.committed = vec![None; self.spans.len()];
        self.text = text.to_string();
        log::debug!("[glyphs] {} spans for {:?}", self.spans.len(), self.text);
        Ok(true)
    }
}

impl GlyphLayout for GlyphSurface {
    fn glyph_count(&self) -> usize {
        self.spans.len()
    }

    fn glyph_bounds(&self, index: usize) -> Option<Rect> {
        let rect = self.spans.get(index)?.get_bounding_client_rect();
        Some(Rect::new(
            rect.left() as f32 - self.origin.x,
            rect.top() as f32 - self.origin.y,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }
}

impl Surface<Glyph> for GlyphSurface {
    fn probe(&mut self) -> SurfaceStatus {
        if !self.container.is_connected() {
            return SurfaceStatus::Detached;
        }
        let rect = self.container.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return SurfaceStatus::Unavailable;
        }
        self.origin = Vec2::new(rect.left() as f32, rect.top() as f32);
        SurfaceStatus::Ready(SurfaceMetrics::new(
            self.origin,
            Vec2::new(rect.width() as f32, rect.height() as f32),
        ))
    }

    fn commit(&mut self, glyphs: &[Glyph], _config: &FieldConfig) -> Result<(), SurfaceError> {
        for g in glyphs {
            let (Some(span), Some(last)) = (self.spans.get(g.index), self.committed.get_mut(g.index))
            else {
                continue;
            };
            if *last == Some(g.style) {
                continue;
            }
            let style = span.style();
            style
                .set_property(
                    "transform",
                    &format!("scale({:.4}, {:.4})", g.style.scale_x, g.style.scale_y),
                )
                .map_err(|e| SurfaceError::Commit(format!("{:?}", e)))?;
            style
                .set_property("font-weight", &g.style.weight.to_string())
                .map_err(|e| SurfaceError::Commit(format!("{:?}", e)))?;
            *last = Some(g.style);
        }
        Ok(())
    }
}

impl Drop for GlyphSurface {
    fn drop(&mut self) {
        self.line.remove();
    }
}

fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn set_style(el: &web::HtmlElement, name: &str, value: &str) -> anyhow::Result<()> {
    el.style()
        .set_property(name, value)
        .map_err(|e| anyhow::anyhow!("style {name}: {:?}", e))
}
