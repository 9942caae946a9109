//! # Render Backend Seam
//!
//! The processor never touches GPU resources directly. A [`RenderBackend`]
//! turns an [`AbstractMesh`] into whatever buffer handle the renderer uses,
//! and attaches or detaches a zone's [`RenderProxy`] from the scene.
//!
//! ## Lifecycle
//!
//! ```text
//! rebuild:  detach(zone) → release(old) → upload(new)
//!           → assign_material(zone, 0, material)? → attach(zone, proxy)
//! remove:   detach(zone) → release(old)
//! ```

use crate::processor::ZoneId;
use std::collections::BTreeMap;
use thiserror::Error;
use zone_geometry::{AbstractMesh, MaterialHandle};

/// Failure reported by a backend while uploading a mesh.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Mesh upload failed: {message}")]
pub struct UploadError {
    message: String,
}

impl UploadError {
    /// Creates an upload error with a description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Render-side shadow of a zone: installed mesh, material slots and scene
/// attachment state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderProxy<M> {
    pub(crate) mesh: Option<M>,
    pub(crate) materials: BTreeMap<u32, MaterialHandle>,
    pub(crate) cast_shadows: bool,
    pub(crate) attached: bool,
}

impl<M> RenderProxy<M> {
    pub(crate) fn new(cast_shadows: bool) -> Self {
        Self {
            mesh: None,
            materials: BTreeMap::new(),
            cast_shadows,
            attached: false,
        }
    }

    /// Installed mesh handle, if any.
    #[inline]
    pub fn mesh(&self) -> Option<&M> {
        self.mesh.as_ref()
    }

    /// Material assigned to `slot`.
    #[inline]
    pub fn material(&self, slot: u32) -> Option<MaterialHandle> {
        self.materials.get(&slot).copied()
    }

    /// All material slot assignments.
    #[inline]
    pub fn materials(&self) -> &BTreeMap<u32, MaterialHandle> {
        &self.materials
    }

    /// Whether the proxy casts shadows.
    #[inline]
    pub fn cast_shadows(&self) -> bool {
        self.cast_shadows
    }

    /// Whether the proxy is currently attached to its zone.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// GPU-facing collaborator that owns mesh buffers and scene attachment.
pub trait RenderBackend {
    /// Handle to uploaded vertex and index buffers.
    type Mesh;

    /// Uploads a freshly synthesized mesh.
    fn upload(&mut self, zone: ZoneId, mesh: &AbstractMesh) -> Result<Self::Mesh, UploadError>;

    /// Releases buffers of a mesh that is no longer installed.
    ///
    /// Each handle is passed here at most once.
    fn release(&mut self, mesh: Self::Mesh);

    /// Binds `material` to a material slot of the zone's proxy.
    fn assign_material(&mut self, zone: ZoneId, slot: u32, material: MaterialHandle);

    /// Attaches the zone's proxy to the scene.
    fn attach(&mut self, zone: ZoneId, proxy: &RenderProxy<Self::Mesh>);

    /// Detaches the zone's proxy from the scene.
    fn detach(&mut self, zone: ZoneId);
}

/// Headless backend: meshes are discarded, attachment is a no-op.
impl RenderBackend for () {
    type Mesh = ();

    fn upload(&mut self, _zone: ZoneId, _mesh: &AbstractMesh) -> Result<(), UploadError> {
        Ok(())
    }

    fn release(&mut self, _mesh: ()) {}

    fn assign_material(&mut self, _zone: ZoneId, _slot: u32, _material: MaterialHandle) {}

    fn attach(&mut self, _zone: ZoneId, _proxy: &RenderProxy<()>) {}

    fn detach(&mut self, _zone: ZoneId) {}
}
