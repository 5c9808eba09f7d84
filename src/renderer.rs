use std::time::Instant;

use image::Rgba;
use rayon::prelude::*;

use crate::{
    config::{ConfigError, RenderConfig},
    math::Vector3,
    ray::Ray,
    scene::Scene,
    sink::FramebufferSink,
    tracer::{trace_ray, TraceLimits},
};

/// Distance along a primary ray before a hit counts; keeps geometry between
/// the eye and the projection plane out of the frame.
pub const PRIMARY_T_MIN: f64 = 1.0;

/// Frame driver: casts one ray per screen pixel and hands the colors to a sink.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    fn limits(&self) -> TraceLimits {
        TraceLimits {
            max_distance: self.config.max_trace_distance,
            max_depth: self.config.max_reflection_depth,
        }
    }

    /// Screen coordinates run over `[-W/2, W/2)` by `[-H/2, H/2)`, y up.
    fn x_range(&self) -> std::ops::Range<i64> {
        let width = self.config.screen_width as i64;
        -(width / 2)..width - width / 2
    }

    fn y_range(&self) -> std::ops::Range<i64> {
        let height = self.config.screen_height as i64;
        -(height / 2)..height - height / 2
    }

    /// Point on the projection plane that screen coordinate `(x, y)` maps to.
    pub fn canvas_to_viewport(&self, x: i64, y: i64) -> Vector3 {
        let c = &self.config;
        Vector3::new(
            x as f64 * c.viewport_width / c.screen_width as f64,
            y as f64 * c.viewport_height / c.screen_height as f64,
            c.projection_plane_distance,
        )
    }

    /// Sink position of screen coordinate `(x, y)`. Rows are flipped since
    /// the sink's row index grows downward.
    pub fn to_sink(&self, x: i64, y: i64) -> (u32, u32) {
        let width = self.config.screen_width as i64;
        let height = self.config.screen_height as i64;
        let sink_x = x + width / 2;
        let sink_y = height - 1 - (y + height / 2);
        (sink_x as u32, sink_y as u32)
    }

    /// Color of the pixel at screen coordinate `(x, y)`.
    pub fn trace_pixel(&self, scene: &Scene, x: i64, y: i64) -> Rgba<u8> {
        let direction = scene.camera.orient(self.canvas_to_viewport(x, y));
        let ray = Ray::new(scene.camera.position, direction);
        let color = trace_ray(
            &ray,
            PRIMARY_T_MIN,
            self.config.max_trace_distance,
            scene,
            self.limits(),
            0,
        );
        to_rgba(color)
    }

    /// Renders one frame of `scene` into `sink` and presents it.
    ///
    /// Rows are traced in parallel; pixels reach the sink in row-major
    /// order regardless, top sink row first.
    pub fn render<S: FramebufferSink>(&self, scene: &Scene, sink: &mut S) -> Result<(), S::Error> {
        let width = self.config.screen_width;
        let height = self.config.screen_height;
        let _span = tracing::info_span!("render", width, height).entered();
        tracing::info!(
            spheres = scene.spheres.len(),
            lights = scene.lights.len(),
            "rendering frame"
        );
        if sink.width() != width || sink.height() != height {
            tracing::warn!(
                sink_width = sink.width(),
                sink_height = sink.height(),
                "sink size differs from screen size, pixels outside the sink are dropped"
            );
        }

        let start = Instant::now();
        let rows: Vec<(i64, Vec<Rgba<u8>>)> = self
            .y_range()
            .into_par_iter()
            .map(|y| {
                let row = self.x_range().map(|x| self.trace_pixel(scene, x, y)).collect();
                (y, row)
            })
            .collect();
        tracing::debug!(rows = rows.len(), elapsed = ?start.elapsed(), "rows traced");

        // Screen y grows upward, so the last traced row is sink row 0.
        for (y, row) in rows.into_iter().rev() {
            for (x, color) in self.x_range().zip(row) {
                let (sink_x, sink_y) = self.to_sink(x, y);
                sink.put_pixel(sink_x, sink_y, color);
            }
        }

        sink.present()?;
        tracing::info!(elapsed = ?start.elapsed(), "frame presented");
        Ok(())
    }
}

/// Clamps each channel into `0..=255` and truncates; alpha is opaque.
pub fn to_rgba(color: Vector3) -> Rgba<u8> {
    let channel = |c: f64| c.clamp(0.0, 255.0) as u8;
    Rgba([channel(color.x), channel(color.y), channel(color.z), 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(width: u32, height: u32) -> Renderer {
        Renderer::new(RenderConfig::default().with_screen(width, height)).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let result = Renderer::new(RenderConfig::default().with_screen(0, 0));
        assert!(result.is_err());
    }

    #[test]
    fn viewport_mapping() {
        let r = renderer(800, 600);
        assert_eq!(r.canvas_to_viewport(0, 0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(r.canvas_to_viewport(400, -300), Vector3::new(0.5, -0.5, 1.0));
    }

    #[test]
    fn rows_are_flipped_into_sink_bounds() {
        let r = renderer(800, 600);
        assert_eq!(r.to_sink(-400, 299), (0, 0));
        assert_eq!(r.to_sink(399, -300), (799, 599));
        assert_eq!(r.to_sink(0, 0), (400, 299));
    }

    #[test]
    fn odd_sizes_cover_every_pixel() {
        let r = renderer(5, 3);
        assert_eq!(r.x_range().count(), 5);
        assert_eq!(r.y_range().count(), 3);
        assert_eq!(r.to_sink(r.x_range().start, r.y_range().end - 1), (0, 0));
        assert_eq!(r.to_sink(r.x_range().end - 1, r.y_range().start), (4, 2));
    }

    #[test]
    fn color_conversion_clamps() {
        assert_eq!(
            to_rgba(Vector3::new(-3.0, 127.9, 300.0)),
            Rgba([0, 127, 255, 255])
        );
    }
}
