//! Carousel configuration values.

use std::rc::Rc;

use carousel_animation::{EasedAnimation, Easing, TweenSpec};
use carousel_core::Clock;
use carousel_foundation::{Axis, DragConfig};
use carousel_ui_graphics::Size;

/// Width every panel is given; height follows the image aspect ratio.
pub const PANEL_WIDTH: f32 = 5.0;

/// Source image size assumed when none is known.
pub const DEFAULT_IMAGE_SIZE: Size = Size::new(800.0, 800.0);

/// Distance from each panel to its ring's rotation axis.
pub const DEFAULT_DEPTH_OFFSET: f32 = 39.0;

/// Hover feedback: scale up on enter, back down on exit.
#[derive(Clone, Copy, Debug)]
pub struct HoverSpec {
    pub rest_scale: f32,
    pub hover_scale: f32,
    pub tween: TweenSpec,
}

impl HoverSpec {
    /// Slower, larger hover with an ease-out curve.
    pub fn emphasized() -> Self {
        Self {
            rest_scale: 1.0,
            hover_scale: 1.5,
            tween: TweenSpec::new(2_000.0, Easing::EaseOutExpo),
        }
    }

    pub fn with_hover_scale(mut self, hover_scale: f32) -> Self {
        self.hover_scale = hover_scale;
        self
    }

    pub fn with_tween(mut self, tween: TweenSpec) -> Self {
        self.tween = tween;
        self
    }

    pub fn animation(&self, clock: Rc<dyn Clock>) -> EasedAnimation {
        EasedAnimation::with_clock(self.rest_scale, self.hover_scale, self.tween, clock)
    }
}

impl Default for HoverSpec {
    fn default() -> Self {
        Self {
            rest_scale: 1.0,
            hover_scale: 1.2,
            tween: TweenSpec::default(),
        }
    }
}

/// What clicking a panel does.
#[derive(Clone, Copy, Debug, Default)]
pub enum ClickBehavior {
    #[default]
    Ignore,
    /// One full turn about the panel's own Z axis.
    Spin(TweenSpec),
}

/// Everything needed to build one panel.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    pub image_path: String,
    pub base_angle: f32,
    pub depth_offset: f32,
    pub size: Size,
    pub hover: HoverSpec,
    pub click: ClickBehavior,
}

impl PanelConfig {
    pub fn new(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            base_angle: 0.0,
            depth_offset: DEFAULT_DEPTH_OFFSET,
            size: Size::fit_width(PANEL_WIDTH, DEFAULT_IMAGE_SIZE),
            hover: HoverSpec::default(),
            click: ClickBehavior::default(),
        }
    }

    pub fn with_base_angle(mut self, degrees: f32) -> Self {
        self.base_angle = degrees;
        self
    }

    pub fn with_depth_offset(mut self, depth_offset: f32) -> Self {
        self.depth_offset = depth_offset;
        self
    }
}

#[derive(Clone, Debug)]
pub struct RingConfig {
    /// Initial ring rotation about Y, in degrees.
    pub angle_offset: f32,
    pub image_paths: Vec<String>,
    pub y_position: f32,
    pub depth_offset: f32,
    /// Turn against the drag instead of with it.
    pub counter_rotate: bool,
    pub panel_size: Size,
    pub hover: HoverSpec,
    pub click: ClickBehavior,
}

impl RingConfig {
    pub fn new<S: Into<String>>(image_paths: impl IntoIterator<Item = S>) -> Self {
        Self {
            image_paths: image_paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_angle_offset(mut self, degrees: f32) -> Self {
        self.angle_offset = degrees;
        self
    }

    pub fn with_y_position(mut self, y_position: f32) -> Self {
        self.y_position = y_position;
        self
    }

    pub fn with_depth_offset(mut self, depth_offset: f32) -> Self {
        self.depth_offset = depth_offset;
        self
    }

    pub fn with_counter_rotate(mut self, counter_rotate: bool) -> Self {
        self.counter_rotate = counter_rotate;
        self
    }

    pub fn with_hover(mut self, hover: HoverSpec) -> Self {
        self.hover = hover;
        self
    }

    pub fn with_click(mut self, click: ClickBehavior) -> Self {
        self.click = click;
        self
    }

    /// Angle of the panel at `index`, in degrees.
    pub fn panel_angle(&self, index: usize) -> f32 {
        if self.image_paths.is_empty() {
            return 0.0;
        }
        index as f32 * 360.0 / self.image_paths.len() as f32
    }

    pub fn panel_configs(&self) -> impl Iterator<Item = PanelConfig> + '_ {
        self.image_paths
            .iter()
            .enumerate()
            .map(move |(index, path)| PanelConfig {
                image_path: path.clone(),
                base_angle: self.panel_angle(index),
                depth_offset: self.depth_offset,
                size: self.panel_size,
                hover: self.hover,
                click: self.click,
            })
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            angle_offset: 0.0,
            image_paths: Vec::new(),
            y_position: 0.0,
            depth_offset: DEFAULT_DEPTH_OFFSET,
            counter_rotate: false,
            panel_size: Size::fit_width(PANEL_WIDTH, DEFAULT_IMAGE_SIZE),
            hover: HoverSpec::default(),
            click: ClickBehavior::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CarouselConfig {
    pub rings: Vec<RingConfig>,
    pub drag: DragConfig,
    /// Drag axis whose offset turns the rings.
    pub drive_axis: Axis,
}

impl CarouselConfig {
    pub fn new(rings: Vec<RingConfig>) -> Self {
        Self {
            rings,
            ..Self::default()
        }
    }

    /// Stacked rings of `per_ring` panels, `spacing` apart vertically.
    ///
    /// Images are dealt out in order and reused when there are fewer than
    /// `ring_count * per_ring`. Each ring is staggered by half a panel from
    /// the one below and every other ring counter-rotates.
    pub fn helix<S: AsRef<str>>(
        image_paths: &[S],
        ring_count: usize,
        per_ring: usize,
        spacing: f32,
    ) -> Self {
        if image_paths.is_empty() || per_ring == 0 {
            return Self::new(Vec::new());
        }
        let stagger = 180.0 / per_ring as f32;
        let center = (ring_count.saturating_sub(1)) as f32 / 2.0;
        let rings = (0..ring_count)
            .map(|ring| {
                let paths = (0..per_ring).map(|slot| {
                    image_paths[(ring * per_ring + slot) % image_paths.len()]
                        .as_ref()
                        .to_owned()
                });
                RingConfig::new(paths)
                    .with_angle_offset(ring as f32 * stagger)
                    .with_y_position((center - ring as f32) * spacing)
                    .with_counter_rotate(ring % 2 == 1)
            })
            .collect();
        Self::new(rings)
    }

    pub fn with_drag(mut self, drag: DragConfig) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_drive_axis(mut self, axis: Axis) -> Self {
        self.drive_axis = axis;
        self
    }

    pub fn map_rings(mut self, f: impl FnMut(RingConfig) -> RingConfig) -> Self {
        self.rings = self.rings.into_iter().map(f).collect();
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            rings: Vec::new(),
            drag: DragConfig::default(),
            drive_axis: Axis::Y,
        }
    }
}
