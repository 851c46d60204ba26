//! Canvas 2D backend

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::commands::DrawCommand;

/// 2D context of a canvas element
pub fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())
}

/// Replay commands onto the context
pub fn replay(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) {
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for command in commands {
        match command {
            DrawCommand::Clear { size } => {
                ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
            }
            DrawCommand::BeginPath => ctx.begin_path(),
            DrawCommand::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
            DrawCommand::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            DrawCommand::Stroke(pen) => {
                ctx.set_stroke_style_str(&pen.color);
                ctx.set_line_width(pen.width as f64);
                ctx.stroke();
            }
        }
    }
}
