use scratchwin_core::{
    CellCount, Coord2, Coverage, CoverageBuffer, DrawingSurface, PointerSample,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const COVER_COLOR: &str = "#C0C0C0";
const CAPTION_COLOR: &str = "#545454";
const CAPTION_FONT: &str = "bold 16px sans-serif";
const CAPTION: &str = "Scratch here!";

/// Canvas-backed cover. The coverage buffer decides what counts as erased; the canvas only
/// mirrors it for display, and a surface without a 2D context just skips drawing.
#[derive(Debug)]
pub(crate) struct CanvasSurface {
    buffer: CoverageBuffer,
    context: Option<CanvasRenderingContext2d>,
}

impl CanvasSurface {
    pub(crate) fn new(size: Coord2) -> Self {
        Self {
            buffer: CoverageBuffer::new(size),
            context: None,
        }
    }

    /// Binds to `canvas`, resizing it to the surface and painting the current state.
    pub(crate) fn attach(&mut self, canvas: &HtmlCanvasElement) {
        let (width, height) = self.buffer.size();
        canvas.set_width(width.into());
        canvas.set_height(height.into());

        self.context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok());
        if self.context.is_none() {
            log::warn!("canvas has no 2d context, scratching will not be drawn");
        }

        if self.buffer.sample_coverage().is_complete() {
            self.draw(|context, (width, height)| {
                context.clear_rect(0.0, 0.0, width, height);
                Ok(())
            });
        } else {
            self.draw(paint_cover);
        }
    }

    fn draw(
        &self,
        paint: impl FnOnce(&CanvasRenderingContext2d, (f64, f64)) -> Result<(), JsValue>,
    ) {
        let Some(context) = &self.context else {
            return;
        };
        let (width, height) = self.buffer.size();
        if let Err(err) = paint(context, (width.into(), height.into())) {
            log::error!("canvas drawing failed: {:?}", err);
        }
    }
}

fn paint_cover(
    context: &CanvasRenderingContext2d,
    (width, height): (f64, f64),
) -> Result<(), JsValue> {
    context.set_global_composite_operation("source-over")?;
    context.set_fill_style_str(COVER_COLOR);
    context.fill_rect(0.0, 0.0, width, height);

    context.set_fill_style_str(CAPTION_COLOR);
    context.set_font(CAPTION_FONT);
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text(CAPTION, width / 2.0, height / 2.0)?;

    // Every later fill punches through the cover.
    context.set_global_composite_operation("destination-out")
}

impl DrawingSurface for CanvasSurface {
    fn size(&self) -> Coord2 {
        self.buffer.size()
    }

    fn fill(&mut self) {
        self.buffer.fill();
        self.draw(paint_cover);
    }

    fn stamp_erase(&mut self, point: PointerSample, radius: f64) -> CellCount {
        let erased = self.buffer.stamp_erase(point, radius);
        if erased > 0 {
            self.draw(|context, _| {
                context.begin_path();
                context.arc(point.x, point.y, radius, 0.0, std::f64::consts::TAU)?;
                context.fill();
                Ok(())
            });
        }
        erased
    }

    fn sample_coverage(&self) -> Coverage {
        self.buffer.sample_coverage()
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.draw(|context, (width, height)| {
            context.clear_rect(0.0, 0.0, width, height);
            Ok(())
        });
    }
}
