//! A single image panel.
//!
//! The panel scales up while hovered and, if configured, spins once when
//! clicked. Its mesh belongs to the render backend; the element only keeps a
//! [`MeshRef`] and writes scale and rotation through it.

use std::f32::consts::TAU;
use std::rc::Rc;

use carousel_animation::EasedAnimation;
use carousel_core::{Clock, FreezeFlag, Freezable};
use carousel_ui_graphics::{rotate_around_anchor, AnchorSpace, Axis3, Vec3};

use crate::config::{ClickBehavior, PanelConfig};
use crate::scene::{Material, MeshRef, RenderBackend};

struct Spin {
    animation: EasedAnimation,
    rest_angle: f32,
}

pub struct ImageElement {
    mesh: MeshRef,
    image_path: String,
    scale_animation: EasedAnimation,
    spin: Option<Spin>,
    click: ClickBehavior,
    hovered: bool,
    frozen: FreezeFlag,
    base_angle: f32,
    anchor: Vec3,
    clock: Rc<dyn Clock>,
}

impl ImageElement {
    /// Creates the panel mesh, starts its texture load and places it on the
    /// ring at `config.base_angle` degrees.
    pub fn new(backend: &dyn RenderBackend, config: &PanelConfig, clock: Rc<dyn Clock>) -> Self {
        let mesh = backend.create_panel(config.size, Material::PLACEHOLDER);

        let target = mesh.clone();
        backend.load_texture(
            &config.image_path,
            Box::new(move |outcome| match outcome {
                Ok(texture) => {
                    log::debug!("texture {} loaded", texture.path);
                    target.set_material(Material::Textured(texture));
                }
                Err(error) => log::warn!("{error}; keeping placeholder"),
            }),
        );

        let anchor = Vec3::new(0.0, 0.0, config.depth_offset);
        mesh.update_transform(|transform| {
            rotate_around_anchor(
                transform,
                Axis3::Y,
                config.base_angle,
                anchor,
                AnchorSpace::Local,
            )
        });

        Self {
            mesh,
            image_path: config.image_path.clone(),
            scale_animation: config.hover.animation(Rc::clone(&clock)),
            spin: None,
            click: config.click,
            hovered: false,
            frozen: FreezeFlag::new(),
            base_angle: config.base_angle,
            anchor,
            clock,
        }
    }

    /// Tracks hover from the object currently under the pointer.
    ///
    /// Entering needs a hit on this panel. Leaving needs a hit on some other
    /// object; a miss leaves the hover state alone.
    pub fn on_pointer_move(&mut self, hit: Option<&MeshRef>) {
        if self.frozen.get() {
            return;
        }
        let Some(hit) = hit else {
            return;
        };
        let over_self = self.owns(hit);
        if over_self && !self.hovered {
            self.hovered = true;
            self.scale_animation.forwards().start();
            log::debug!("hover enter {}", self.image_path);
        } else if !over_self && self.hovered {
            self.hovered = false;
            self.scale_animation.backwards().start();
            log::debug!("hover exit {}", self.image_path);
        }
    }

    pub fn on_click(&mut self) {
        if self.frozen.get() {
            return;
        }
        let ClickBehavior::Spin(tween) = self.click else {
            return;
        };
        if self.spin.is_some() {
            return;
        }
        let mut animation = EasedAnimation::with_clock(0.0, TAU, tween, Rc::clone(&self.clock));
        animation.start();
        self.spin = Some(Spin {
            animation,
            rest_angle: self.mesh.rotation().z,
        });
        log::debug!("spin {}", self.image_path);
    }

    /// Advances hover and spin animations and writes them to the mesh.
    pub fn update(&mut self) {
        if self.frozen.get() {
            return;
        }
        let mesh = &self.mesh;
        self.scale_animation.update(|scale| {
            mesh.update_transform(|transform| {
                transform.scale.x = scale;
                transform.scale.y = scale;
            });
        });

        if let Some(spin) = self.spin.as_mut() {
            let rest_angle = spin.rest_angle;
            spin.animation.update(|angle| {
                mesh.update_transform(|transform| transform.rotation.z = rest_angle + angle);
            });
            if !spin.animation.is_running() {
                mesh.update_transform(|transform| transform.rotation.z = rest_angle);
                self.spin = None;
            }
        }
    }

    pub fn mesh(&self) -> &MeshRef {
        &self.mesh
    }

    pub fn owns(&self, hit: &MeshRef) -> bool {
        self.mesh.ptr_eq(hit)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    /// Placement angle on the ring, in degrees.
    pub fn base_angle(&self) -> f32 {
        self.base_angle
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn scale_animation(&self) -> &EasedAnimation {
        &self.scale_animation
    }
}

impl Freezable for ImageElement {
    fn freeze(&mut self) {
        if self.frozen.freeze() {
            log::debug!("froze {}", self.image_path);
        }
    }

    fn unfreeze(&mut self) {
        if self.frozen.unfreeze() {
            log::debug!("unfroze {}", self.image_path);
        }
    }

    fn is_frozen(&self) -> bool {
        self.frozen.get()
    }
}

impl std::fmt::Debug for ImageElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageElement")
            .field("mesh", &self.mesh)
            .field("image_path", &self.image_path)
            .field("hovered", &self.hovered)
            .field("frozen", &self.frozen.get())
            .field("base_angle", &self.base_angle)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/image_element_tests.rs"]
mod tests;
