//! # Zone Processor
//!
//! Registry of authored zones and their render-side state.
//!
//! [`ZoneProcessor::draw`] is the per-frame pass. For each zone it resolves
//! the boundary nodes, asks the zone's [`DirtyState`] whether anything
//! changed, and if so tears the old mesh down before installing a new one:
//!
//! ```text
//! detach → release old mesh → build → upload → material slot 0 → attach
//! ```
//!
//! A zone that cannot be resolved (too few nodes, dangling handle) is
//! skipped for the frame and keeps whatever mesh it had. Nothing in the pass
//! aborts the frame; failures are logged and counted in [`DrawReport`].

use crate::arena::{NodeArena, NodeKey};
use crate::backend::{RenderBackend, RenderProxy};
use crate::error::{ZoneError, ZoneResult};
use crate::tracker::DirtyState;
use crate::zone::Zone;
use config::constants::{ZoneConfig, ZONE_MATERIAL_SLOT};
use glam::Vec3;
use slotmap::SlotMap;
use zone_geometry::{build_with_limit, ZoneSpec, ZoneVolume};


slotmap::new_key_type! {
    /// Stable handle to a registered zone.
    pub struct ZoneId;
}

// =============================================================================
// RENDER DATA
// =============================================================================

/// Render-side shadow of a zone: proxy plus change tracker.
#[derive(Debug, Clone)]
pub struct ZoneRenderData<M> {
    proxy: RenderProxy<M>,
    tracker: DirtyState,
}

impl<M> ZoneRenderData<M> {
    fn new(config: &ZoneConfig) -> Self {
        Self {
            proxy: RenderProxy::new(config.cast_shadows),
            tracker: DirtyState::new(),
        }
    }

    /// Installed mesh, material slots and attachment state.
    #[inline]
    pub fn proxy(&self) -> &RenderProxy<M> {
        &self.proxy
    }

    /// Change tracker cache.
    #[inline]
    pub fn tracker(&self) -> &DirtyState {
        &self.tracker
    }

    fn teardown<B: RenderBackend<Mesh = M>>(&mut self, id: ZoneId, backend: &mut B) {
        if self.proxy.attached {
            backend.detach(id);
            self.proxy.attached = false;
        }
        if let Some(mesh) = self.proxy.mesh.take() {
            backend.release(mesh);
        }
    }
}

/// Per-frame outcome counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawReport {
    /// Zones that received a new mesh.
    pub rebuilt: usize,
    /// Zones whose mesh was torn down because the debug mesh is hidden.
    pub hidden: usize,
    /// Zones with nothing to do.
    pub unchanged: usize,
    /// Zones that could not be resolved this frame.
    pub skipped: usize,
    /// Zones whose build or upload failed.
    pub failed: usize,
}

impl DrawReport {
    /// Total zones visited.
    pub fn total(&self) -> usize {
        self.rebuilt + self.hidden + self.unchanged + self.skipped + self.failed
    }
}

enum Refresh {
    Rebuilt,
    Hidden,
    Unchanged,
}

struct ZoneEntry<M> {
    zone: Zone,
    render: ZoneRenderData<M>,
}

// =============================================================================
// PROCESSOR
// =============================================================================

/// Owns every zone and keeps its mesh current.
///
/// `M` is the backend's mesh handle type.
pub struct ZoneProcessor<M> {
    config: ZoneConfig,
    zones: SlotMap<ZoneId, ZoneEntry<M>>,
}

impl<M> Default for ZoneProcessor<M> {
    fn default() -> Self {
        Self::new(ZoneConfig::default())
    }
}

impl<M> ZoneProcessor<M> {
    /// Creates an empty processor.
    pub fn new(config: ZoneConfig) -> Self {
        Self {
            config,
            zones: SlotMap::with_key(),
        }
    }

    /// Settings applied to new zones and mesh builds.
    #[inline]
    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    /// Registers an empty zone with configured defaults.
    pub fn create_zone(&mut self) -> ZoneId {
        let zone = Zone::with_config(&self.config);
        self.add_zone(zone)
    }

    /// Registers an authored zone. Its mesh is built on the next draw.
    pub fn add_zone(&mut self, zone: Zone) -> ZoneId {
        let render = ZoneRenderData::new(&self.config);
        let id = self.zones.insert(ZoneEntry { zone, render });
        log::debug!("zone {id:?} registered");
        id
    }

    /// The authoring record of a zone.
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id).map(|entry| &entry.zone)
    }

    /// Mutable authoring record of a zone.
    pub fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(id).map(|entry| &mut entry.zone)
    }

    /// Render-side state of a zone.
    pub fn render_data(&self, id: ZoneId) -> Option<&ZoneRenderData<M>> {
        self.zones.get(id).map(|entry| &entry.render)
    }

    /// Geometry snapshot of a zone against the current node positions.
    pub fn zone_snapshot(&self, id: ZoneId, nodes: &NodeArena) -> ZoneResult<ZoneSpec> {
        self.zones
            .get(id)
            .ok_or(ZoneError::UnknownZone(id))?
            .zone
            .snapshot(nodes)
    }

    /// Unregisters a zone, detaching and releasing its mesh.
    pub fn remove_zone<B>(&mut self, id: ZoneId, backend: &mut B) -> Option<Zone>
    where
        B: RenderBackend<Mesh = M>,
    {
        let mut entry = self.zones.remove(id)?;
        entry.render.teardown(id, backend);
        log::debug!("zone {id:?} removed");
        Some(entry.zone)
    }

    /// Registered zones, in iteration order.
    pub fn zones(&self) -> impl Iterator<Item = (ZoneId, &Zone)> + '_ {
        self.zones.iter().map(|(id, entry)| (id, &entry.zone))
    }

    /// Registered zone ids, in iteration order.
    pub fn ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zones.keys()
    }

    /// Number of registered zones.
    #[inline]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if no zones are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    // =========================================================================
    // PER-FRAME PASS
    // =========================================================================

    /// Rebuilds every zone whose authoring data or boundary positions
    /// changed since its last build.
    pub fn draw<B>(&mut self, nodes: &NodeArena, backend: &mut B) -> DrawReport
    where
        B: RenderBackend<Mesh = M>,
    {
        let mut report = DrawReport::default();
        for (id, entry) in self.zones.iter_mut() {
            let resolved = match entry.zone.resolve(nodes) {
                Ok(resolved) => resolved,
                Err(err) => {
                    log::debug!("zone {id:?} skipped: {err}");
                    report.skipped += 1;
                    continue;
                }
            };
            match refresh(id, entry, &resolved, &self.config, backend) {
                Ok(Refresh::Rebuilt) => report.rebuilt += 1,
                Ok(Refresh::Hidden) => report.hidden += 1,
                Ok(Refresh::Unchanged) => report.unchanged += 1,
                Err(err) => {
                    log::warn!("zone {id:?} rebuild failed: {err}");
                    report.failed += 1;
                }
            }
        }
        report
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// First zone containing `position`.
    ///
    /// Uses the authoring ring and height, never the installed mesh, so the
    /// answer is current even between draws. Zones that cannot be resolved
    /// are ignored. Overlaps resolve in iteration order, which is stable
    /// for a given sequence of insertions and removals but otherwise
    /// arbitrary.
    pub fn locate(&self, nodes: &NodeArena, position: Vec3) -> Option<ZoneId> {
        self.zones.iter().find_map(|(id, entry)| {
            let spec = entry.zone.snapshot(nodes).ok()?;
            spec.contains(position).then_some(id)
        })
    }
}

fn refresh<M, B>(
    id: ZoneId,
    entry: &mut ZoneEntry<M>,
    resolved: &[(NodeKey, Vec3)],
    config: &ZoneConfig,
    backend: &mut B,
) -> ZoneResult<Refresh>
where
    B: RenderBackend<Mesh = M>,
{
    let zone = &entry.zone;
    let render = &mut entry.render;
    let revision = zone.revision();

    if !render.tracker.needs_rebuild(revision, resolved) {
        return Ok(Refresh::Unchanged);
    }

    render.teardown(id, backend);

    if !zone.show_debug_mesh() {
        render.tracker.mark_clean(revision, resolved);
        log::debug!("zone {id:?} debug mesh hidden");
        return Ok(Refresh::Hidden);
    }

    let ring = zone.spec_from(resolved).ring.normalized();
    let mesh = match build_with_limit(ring.points(), zone.height(), config.max_mesh_vertices) {
        Ok(mesh) => mesh,
        Err(err) => {
            // Same input fails the same way; wait for an edit.
            render.tracker.mark_clean(revision, resolved);
            return Err(err.into());
        }
    };

    let handle = match backend.upload(id, &mesh) {
        Ok(handle) => handle,
        Err(err) => {
            render.tracker.invalidate();
            return Err(err.into());
        }
    };
    render.proxy.mesh = Some(handle);

    if let Some(material) = zone.material() {
        render.proxy.materials.insert(ZONE_MATERIAL_SLOT, material);
        backend.assign_material(id, ZONE_MATERIAL_SLOT, material);
    }

    backend.attach(id, &render.proxy);
    render.proxy.attached = true;
    render.tracker.mark_clean(revision, resolved);

    log::debug!(
        "zone {id:?} rebuilt: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(Refresh::Rebuilt)
}
