//! Detail and registration overlay for a set of units.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::domain::{
    geometry::{UnitGeometry, UnitId},
    tenants::{TenantsService, TenantsServiceError},
    units::{Unit, UnitsService, UnitsServiceError, records::UnitDetailsRecord},
};

/// Which overlay lookup failed.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The `unit_details` read failed.
    #[error("failed to load unit details")]
    Details(#[source] UnitsServiceError),

    /// The `tenants` read failed.
    #[error("failed to load registrations")]
    Registrations(#[source] TenantsServiceError),
}

/// Stored details and registration flags, keyed by unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitOverlay {
    details: FxHashMap<UnitId, UnitDetailsRecord>,
    registered: FxHashSet<UnitId>,
}

impl UnitOverlay {
    /// Overlay from fetched rows and the set of registered units.
    pub fn new(details: Vec<UnitDetailsRecord>, registered: FxHashSet<UnitId>) -> Self {
        Self {
            details: details
                .into_iter()
                .map(|record| (record.unit_id, record))
                .collect(),
            registered,
        }
    }

    /// Fetch details and registrations for `units` concurrently.
    ///
    /// # Errors
    ///
    /// Returns whichever of the two lookups failed first.
    pub async fn load(
        units: &dyn UnitsService,
        tenants: &dyn TenantsService,
        ids: &[UnitId],
    ) -> Result<Self, OverlayError> {
        let (details, registered) =
            tokio::join!(units.details_for(ids), tenants.registered_units(ids));

        Ok(Self::new(
            details.map_err(OverlayError::Details)?,
            registered.map_err(OverlayError::Registrations)?,
        ))
    }

    /// The unit with its stored details merged in.
    pub fn unit(&self, geometry: &UnitGeometry) -> Unit {
        let mut unit = Unit::from_geometry(geometry);

        if let Some(details) = self.details.get(&geometry.id) {
            unit.merge_details(details);
        }

        unit.has_tenant = self.registered.contains(&geometry.id);

        unit
    }
}
