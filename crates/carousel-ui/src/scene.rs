//! Render collaborator seam.
//!
//! The carousel never builds geometry, decodes images or raycasts itself. A
//! [`RenderBackend`] creates scene objects and loads textures on its behalf
//! and hands back [`MeshRef`]s: non-owning handles the carousel mutates.
//! When the backend drops an object, mutations through its handles are
//! skipped and reads fall back to defaults.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use carousel_ui_graphics::{Color, Euler, Point, Size, Transform3D, Vec3};

pub type MeshId = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub path: String,
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Flat color, used as the placeholder until a texture arrives.
    Color(Color),
    Textured(Texture),
}

impl Material {
    pub const PLACEHOLDER: Material = Material::Color(Color::PLACEHOLDER);

    pub fn is_textured(&self) -> bool {
        matches!(self, Material::Textured(_))
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Panel,
    Group,
}

/// Scene object owned by the render backend.
#[derive(Debug)]
pub struct Object3D {
    pub kind: ObjectKind,
    pub transform: Transform3D,
    pub size: Size,
    pub material: Material,
    children: Vec<MeshRef>,
}

impl Object3D {
    pub fn panel(size: Size, material: Material) -> Self {
        Self {
            kind: ObjectKind::Panel,
            transform: Transform3D::IDENTITY,
            size,
            material,
            children: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self {
            kind: ObjectKind::Group,
            transform: Transform3D::IDENTITY,
            size: Size::ZERO,
            material: Material::default(),
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[MeshRef] {
        &self.children
    }
}

/// Non-owning handle to an [`Object3D`].
#[derive(Clone)]
pub struct MeshRef {
    id: MeshId,
    object: Weak<RefCell<Object3D>>,
}

impl MeshRef {
    /// Creates a handle to an object the caller keeps alive.
    pub fn new(id: MeshId, object: &Rc<RefCell<Object3D>>) -> Self {
        Self {
            id,
            object: Rc::downgrade(object),
        }
    }

    pub fn id(&self) -> MeshId {
        self.id
    }

    pub fn is_alive(&self) -> bool {
        self.object.strong_count() > 0
    }

    /// Whether both handles point at the same object.
    pub fn ptr_eq(&self, other: &MeshRef) -> bool {
        self.id == other.id && Weak::ptr_eq(&self.object, &other.object)
    }

    /// Reads from the object, or returns `None` if it is gone.
    pub fn with<R>(&self, f: impl FnOnce(&Object3D) -> R) -> Option<R> {
        let object = self.object.upgrade()?;
        let object = object.borrow();
        Some(f(&object))
    }

    /// Mutates the object. Returns `false` if it is gone.
    pub fn update(&self, f: impl FnOnce(&mut Object3D)) -> bool {
        match self.object.upgrade() {
            Some(object) => {
                f(&mut object.borrow_mut());
                true
            }
            None => false,
        }
    }

    pub fn update_transform(&self, f: impl FnOnce(&mut Transform3D)) -> bool {
        self.update(|object| f(&mut object.transform))
    }

    pub fn transform(&self) -> Transform3D {
        self.with(|object| object.transform).unwrap_or_default()
    }

    pub fn position(&self) -> Vec3 {
        self.transform().position
    }

    pub fn rotation(&self) -> Euler {
        self.transform().rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.transform().scale
    }

    pub fn set_position(&self, position: Vec3) {
        self.update_transform(|transform| transform.position = position);
    }

    pub fn set_scale(&self, scale: Vec3) {
        self.update_transform(|transform| transform.scale = scale);
    }

    pub fn material(&self) -> Option<Material> {
        self.with(|object| object.material.clone())
    }

    pub fn set_material(&self, material: Material) {
        self.update(|object| object.material = material);
    }

    /// Nests `child` under this object.
    pub fn add_child(&self, child: &MeshRef) {
        self.update(|object| {
            if !object.children.iter().any(|existing| existing.ptr_eq(child)) {
                object.children.push(child.clone());
            }
        });
    }

    pub fn children(&self) -> Vec<MeshRef> {
        self.with(|object| object.children.clone())
            .unwrap_or_default()
    }
}

impl PartialEq for MeshRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for MeshRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeshRef")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextureError {
    NotFound { path: String },
    Decode { path: String, reason: String },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::NotFound { path } => write!(f, "texture {path} not found"),
            TextureError::Decode { path, reason } => {
                write!(f, "texture {path} could not be decoded: {reason}")
            }
        }
    }
}

impl std::error::Error for TextureError {}

pub type TextureCallback = Box<dyn FnOnce(Result<Texture, TextureError>) + 'static>;

/// Creates scene objects and loads textures for the carousel.
pub trait RenderBackend {
    /// Creates a flat rectangular panel.
    fn create_panel(&self, size: Size, material: Material) -> MeshRef;

    /// Creates an empty container object.
    fn create_group(&self) -> MeshRef;

    /// Starts loading `path`. `on_loaded` runs later, once, with the outcome.
    fn load_texture(&self, path: &str, on_loaded: TextureCallback);
}

/// Finds the object under a surface point.
pub trait HitTest {
    fn hit_test(&self, point: Point) -> Option<MeshRef>;
}
