//! In-memory render backend.
//!
//! [`HeadlessScene`] owns every object it creates and resolves texture loads
//! only when asked to, which makes the asynchronous load path observable in
//! tests and in the headless demo. Hit testing returns whatever target was
//! last set, standing in for a real raycaster.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use carousel_ui_graphics::{Point, Size};

use crate::scene::{
    HitTest, Material, MeshId, MeshRef, Object3D, RenderBackend, Texture, TextureCallback,
    TextureError,
};

struct PendingLoad {
    path: String,
    on_loaded: TextureCallback,
}

#[derive(Default)]
pub struct HeadlessScene {
    objects: RefCell<Vec<(MeshId, Rc<RefCell<Object3D>>)>>,
    next_id: Cell<MeshId>,
    textures: RefCell<HashMap<String, Result<Size, TextureError>>>,
    pending_loads: RefCell<VecDeque<PendingLoad>>,
    hit_target: RefCell<Option<MeshRef>>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `path` resolve to a texture of the given size.
    pub fn register_texture(&self, path: impl Into<String>, size: Size) {
        self.textures.borrow_mut().insert(path.into(), Ok(size));
    }

    /// Makes `path` fail to load with `error`.
    pub fn register_failure(&self, path: impl Into<String>, error: TextureError) {
        self.textures.borrow_mut().insert(path.into(), Err(error));
    }

    pub fn pending_texture_loads(&self) -> usize {
        self.pending_loads.borrow().len()
    }

    /// Delivers every queued texture load. Unregistered paths fail with
    /// [`TextureError::NotFound`]. Returns the number of loads delivered.
    pub fn complete_texture_loads(&self) -> usize {
        let pending: Vec<PendingLoad> = self.pending_loads.borrow_mut().drain(..).collect();
        let delivered = pending.len();
        for load in pending {
            let outcome = match self.textures.borrow().get(&load.path) {
                Some(Ok(size)) => Ok(Texture {
                    path: load.path.clone(),
                    size: *size,
                }),
                Some(Err(error)) => Err(error.clone()),
                None => Err(TextureError::NotFound {
                    path: load.path.clone(),
                }),
            };
            (load.on_loaded)(outcome);
        }
        delivered
    }

    pub fn set_hit_target(&self, target: Option<MeshRef>) {
        *self.hit_target.borrow_mut() = target;
    }

    pub fn object_count(&self) -> usize {
        self.objects.borrow().len()
    }

    /// Drops the scene's object, leaving every handle to it dead.
    pub fn remove(&self, mesh: &MeshRef) -> bool {
        let mut objects = self.objects.borrow_mut();
        let before = objects.len();
        objects.retain(|(id, _)| *id != mesh.id());
        objects.len() != before
    }

    fn insert(&self, object: Object3D) -> MeshRef {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let object = Rc::new(RefCell::new(object));
        let mesh = MeshRef::new(id, &object);
        self.objects.borrow_mut().push((id, object));
        mesh
    }
}

impl RenderBackend for HeadlessScene {
    fn create_panel(&self, size: Size, material: Material) -> MeshRef {
        self.insert(Object3D::panel(size, material))
    }

    fn create_group(&self) -> MeshRef {
        self.insert(Object3D::group())
    }

    fn load_texture(&self, path: &str, on_loaded: TextureCallback) {
        self.pending_loads.borrow_mut().push_back(PendingLoad {
            path: path.to_owned(),
            on_loaded,
        });
    }
}

impl HitTest for HeadlessScene {
    fn hit_test(&self, _point: Point) -> Option<MeshRef> {
        self.hit_target.borrow().clone()
    }
}

impl std::fmt::Debug for HeadlessScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessScene")
            .field("objects", &self.object_count())
            .field("pending_texture_loads", &self.pending_texture_loads())
            .finish()
    }
}
