use thiserror::Error;

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;
pub const VIEWPORT_WIDTH: f64 = 1.0;
pub const VIEWPORT_HEIGHT: f64 = 1.0;
pub const PROJECTION_PLANE_DISTANCE: f64 = 1.0;
pub const MAX_TRACE_DISTANCE: f64 = 1000.0;
pub const MAX_REFLECTION_DEPTH: u32 = 3;
/// Largest reflection depth `validate` accepts. Each level is one stack
/// frame of `trace_ray`.
pub const REFLECTION_DEPTH_LIMIT: u32 = 16;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("screen size must be non-zero, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },

    #[error("viewport size must be positive, got {width}x{height}")]
    EmptyViewport { width: f64, height: f64 },

    #[error("projection plane distance must be positive, got {0}")]
    ProjectionPlane(f64),

    #[error("max trace distance must be positive, got {0}")]
    TraceDistance(f64),

    #[error("max reflection depth must be at most {limit}, got {0}", limit = REFLECTION_DEPTH_LIMIT)]
    ReflectionDepth(u32),
}

/// Everything the frame driver needs besides the scene itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub projection_plane_distance: f64,
    pub max_trace_distance: f64,
    pub max_reflection_depth: u32,
}

impl RenderConfig {
    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        // Negated comparisons so NaN is rejected too.
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(ConfigError::EmptyViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if !(self.projection_plane_distance > 0.0) {
            return Err(ConfigError::ProjectionPlane(self.projection_plane_distance));
        }
        if !(self.max_trace_distance > 0.0) {
            return Err(ConfigError::TraceDistance(self.max_trace_distance));
        }
        if self.max_reflection_depth > REFLECTION_DEPTH_LIMIT {
            return Err(ConfigError::ReflectionDepth(self.max_reflection_depth));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            projection_plane_distance: PROJECTION_PLANE_DISTANCE,
            max_trace_distance: MAX_TRACE_DISTANCE,
            max_reflection_depth: MAX_REFLECTION_DEPTH,
        }
    }
}
