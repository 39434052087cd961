//! Image panels, rings and the carousel scene
//!
//! Everything that touches scene objects goes through the [`RenderBackend`]
//! and [`HitTest`] seams in [`scene`]. [`HeadlessScene`] implements both in
//! memory for tests and the headless demo.

pub mod carousel;
pub mod config;
pub mod headless;
pub mod image_element;
pub mod image_ring;
pub mod scene;

pub use carousel::CarouselScene;
pub use config::{
    CarouselConfig, ClickBehavior, HoverSpec, PanelConfig, RingConfig, DEFAULT_DEPTH_OFFSET,
    DEFAULT_IMAGE_SIZE, PANEL_WIDTH,
};
pub use headless::HeadlessScene;
pub use image_element::ImageElement;
pub use image_ring::{ImageRing, OFFSET_DIVISOR};
pub use scene::{
    HitTest, Material, MeshId, MeshRef, Object3D, ObjectKind, RenderBackend, Texture,
    TextureCallback, TextureError,
};

pub use carousel_core::Freezable;
pub use carousel_foundation::{Axis, DragConfig, PointerEvent, PointerEventKind, WheelEvent};
pub use carousel_ui_graphics::{Point, Size, Vec3};

pub mod prelude {
    pub use crate::carousel::CarouselScene;
    pub use crate::config::{CarouselConfig, ClickBehavior, HoverSpec, RingConfig};
    pub use crate::headless::HeadlessScene;
    pub use crate::image_element::ImageElement;
    pub use crate::image_ring::ImageRing;
    pub use crate::scene::{HitTest, Material, MeshRef, RenderBackend};
    pub use carousel_core::Freezable;
}
