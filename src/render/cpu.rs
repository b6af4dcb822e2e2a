use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape as _;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Affine, BezPath, Point, Vec2};
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::foundation::math::lerp;
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::display_list::{DisplayList, DrawOp, DrawSurface as _, GradientStop};

/// Flattening tolerance for circles, arcs and stroke outlines, in px.
const TOLERANCE: f64 = 0.1;

/// Largest radial gradient radius in px; the rasterised image side (`2 * r`) must fit a u16
/// pixmap.
pub const MAX_GRADIENT_RADIUS: f64 = 2048.0;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    radius_px: u32,
    stops: Vec<(u32, [u8; 4])>,
}

impl GradientKey {
    fn new(radius_px: u32, stops: &[GradientStop]) -> Self {
        Self {
            radius_px,
            stops: stops
                .iter()
                .map(|s| ((s.offset.clamp(0.0, 1.0) * 10_000.0).round() as u32, s.color.to_array()))
                .collect(),
        }
    }
}

/// CPU raster backend powered by `vello_cpu`.
///
/// Radial gradients are rasterised once per (radius, stops) into an image paint and cached;
/// the planet and orb layers reuse the same handful of gradients every frame.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
            gradient_cache: HashMap::new(),
        }
    }

    /// Number of distinct gradient images built so far.
    pub fn cached_gradients(&self) -> usize {
        self.gradient_cache.len()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> BackdropResult<R>,
    ) -> BackdropResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_op(&mut self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) -> BackdropResult<()> {
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillCircle {
                center,
                radius,
                color,
            } => {
                if *radius <= 0.0 || color.a == 0 {
                    return Ok(());
                }
                let path = kurbo::Circle::new(*center, *radius).to_path(TOLERANCE);
                fill(ctx, &path, *color);
                Ok(())
            }
            DrawOp::StrokeLine {
                from,
                to,
                width,
                color,
            } => {
                if *width <= 0.0 || color.a == 0 {
                    return Ok(());
                }
                let line = kurbo::Line::new(*from, *to);
                fill(ctx, &stroke_outline(line.path_elements(TOLERANCE), *width), *color);
                Ok(())
            }
            DrawOp::StrokeArc {
                center,
                radii,
                start_angle,
                sweep_angle,
                x_rotation,
                width,
                color,
            } => {
                if *width <= 0.0 || color.a == 0 {
                    return Ok(());
                }
                let arc = kurbo::Arc::new(*center, *radii, *start_angle, *sweep_angle, *x_rotation);
                fill(ctx, &stroke_outline(arc.path_elements(TOLERANCE), *width), *color);
                Ok(())
            }
            DrawOp::RadialGradient {
                center,
                radius,
                stops,
                opacity,
            } => {
                if *radius <= 0.0 || stops.is_empty() || *opacity <= 0.0 {
                    return Ok(());
                }
                if !radius.is_finite() || *radius > MAX_GRADIENT_RADIUS {
                    return Err(BackdropError::render(format!(
                        "radial gradient radius {radius} exceeds {MAX_GRADIENT_RADIUS}"
                    )));
                }
                let radius_px = radius.ceil().max(1.0) as u32;
                let img = self.gradient_paint(radius_px, stops)?;
                let side = f64::from(radius_px * 2);
                let origin = *center - Vec2::new(f64::from(radius_px), f64::from(radius_px));

                ctx.set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));
                ctx.set_paint(img);
                if *opacity < 1.0 {
                    ctx.push_opacity_layer(*opacity);
                }
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, side, side));
                if *opacity < 1.0 {
                    ctx.pop_layer();
                }
                Ok(())
            }
        }
    }

    fn gradient_paint(
        &mut self,
        radius_px: u32,
        stops: &[GradientStop],
    ) -> BackdropResult<vello_cpu::Image> {
        let key = GradientKey::new(radius_px, stops);
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }

        if f64::from(radius_px) > MAX_GRADIENT_RADIUS {
            return Err(BackdropError::render(format!(
                "gradient image side {} exceeds the pixmap limit",
                u64::from(radius_px) * 2
            )));
        }
        let side = radius_px * 2;
        let r = f64::from(radius_px);
        let mut bytes = vec![0u8; (side as usize) * (side as usize) * 4];
        for y in 0..side {
            for x in 0..side {
                let dx = f64::from(x) + 0.5 - r;
                let dy = f64::from(y) + 0.5 - r;
                let t = (dx * dx + dy * dy).sqrt() / r;
                let c = sample_stops(stops, t).to_premul_array();
                let idx = ((y as usize) * (side as usize) + (x as usize)) * 4;
                bytes[idx..idx + 4].copy_from_slice(&c);
            }
        }

        let img = rgba_premul_to_image(&bytes, side, side)?;
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, list), fields(ops = list.len()))]
    fn render_list(&mut self, list: &DisplayList) -> BackdropResult<FrameRGBA> {
        let viewport = list.viewport();
        let width: u16 = viewport
            .width
            .try_into()
            .map_err(|_| BackdropError::render("surface width exceeds u16"))?;
        let height: u16 = viewport
            .height
            .try_into()
            .map_err(|_| BackdropError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(BackdropError::render("surface must be non-empty"));
        }

        let clear = self.settings.clear_rgba;
        self.with_ctx_mut(width, height, |this, ctx| {
            if let Some([r, g, b, a]) = clear {
                ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(width),
                    f64::from(height),
                ));
            }
            for op in list.ops() {
                this.draw_op(ctx, op)?;
            }
            ctx.flush();

            let mut pixmap = vello_cpu::Pixmap::new(width, height);
            ctx.render_to_pixmap(&mut pixmap);
            Ok(FrameRGBA {
                width: u32::from(width),
                height: u32::from(height),
                data: pixmap.data_as_u8_slice().to_vec(),
                premultiplied: true,
            })
        })
    }
}

/// Piecewise-linear lookup; `t` outside the stop range takes the nearest end stop.
pub(crate) fn sample_stops(stops: &[GradientStop], t: f64) -> Rgba8 {
    let Some(first) = stops.first() else {
        return Rgba8::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let u = if span <= 0.0 { 1.0 } else { (t - a.offset) / span };
            return lerp_premul(a.color, b.color, u);
        }
    }
    stops[stops.len() - 1].color
}

/// Interpolate with alpha-weighted color so fading to transparent black keeps the hue.
fn lerp_premul(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    let t = t.clamp(0.0, 1.0);
    let aa = f64::from(a.a) / 255.0;
    let ba = f64::from(b.a) / 255.0;
    let alpha = lerp(aa, ba, t);
    if alpha <= 0.0 {
        return Rgba8::TRANSPARENT;
    }
    let ch = |ca: u8, cb: u8| {
        let v = lerp(f64::from(ca) * aa, f64::from(cb) * ba, t) / alpha;
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgba8::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), (alpha * 255.0).round() as u8)
}

fn stroke_outline(path: impl IntoIterator<Item = kurbo::PathEl>, width: f64) -> BezPath {
    kurbo::stroke(
        path,
        &kurbo::Stroke::new(width),
        &kurbo::StrokeOpts::default(),
        TOLERANCE,
    )
}

fn fill(ctx: &mut vello_cpu::RenderContext, path: &BezPath, color: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    ctx.fill_path(&bezpath_to_cpu(path));
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> BackdropResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| BackdropError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| BackdropError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(BackdropError::render("pixmap byte len mismatch"));
    }
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> BackdropResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
