//! Draw command generation for the tracing pad
//!
//! Turns pad state into a flat list of 2D path commands. The browser backend
//! replays them on a canvas; tests inspect them directly.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{GuidePath, Stroke, TracingPad};

/// Pen style for one `Stroke` command
#[derive(Debug, Clone, PartialEq)]
pub struct PenStyle {
    pub color: String,
    pub width: f32,
}

/// A single 2D path instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear { size: Vec2 },
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Ink the current path
    Stroke(PenStyle),
}

/// Guide glyph: one path, pen lifted between subpaths
pub fn guide_commands(guide: &GuidePath, pen: PenStyle) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::BeginPath];
    for subpath in guide.subpaths() {
        push_polyline(&mut commands, subpath);
    }
    commands.push(DrawCommand::Stroke(pen));
    commands
}

/// A child's stroke. Single points produce nothing.
pub fn stroke_commands(stroke: &Stroke, pen: PenStyle) -> Vec<DrawCommand> {
    if stroke.points.len() < 2 {
        return Vec::new();
    }
    let mut commands = vec![DrawCommand::BeginPath];
    push_polyline(&mut commands, &stroke.points);
    commands.push(DrawCommand::Stroke(pen));
    commands
}

/// Full redraw of the pad: clear, guide, then strokes on top
pub fn frame(pad: &TracingPad, settings: &Settings) -> Vec<DrawCommand> {
    let guide_pen = PenStyle {
        color: settings.guide_color.clone(),
        width: settings.guide_width,
    };
    let stroke_pen = PenStyle {
        color: settings.stroke_color.clone(),
        width: settings.stroke_width,
    };

    let mut commands = vec![DrawCommand::Clear { size: pad.size() }];
    commands.extend(guide_commands(pad.guide(), guide_pen));
    for stroke in pad.strokes() {
        commands.extend(stroke_commands(stroke, stroke_pen.clone()));
    }
    commands
}

fn push_polyline(commands: &mut Vec<DrawCommand>, points: &[Vec2]) {
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        commands.push(DrawCommand::MoveTo(*first));
        commands.extend(iter.map(|p| DrawCommand::LineTo(*p)));
    }
}
