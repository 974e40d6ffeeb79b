//! State

use std::sync::Arc;

use bayport_app::{
    auth::AdminGate,
    context::AppContext,
    domain::{
        geometry::{GeometryDocument, UnitIndex},
        modal::UnitModal,
        roster::Roster,
        units::UnitsService,
    },
};

/// Services available when a backend is configured.
#[derive(Clone)]
pub(crate) struct Backend {
    pub(crate) app: AppContext,
    pub(crate) modal: UnitModal,
    pub(crate) roster: Roster,
}

impl Backend {
    fn new(app: AppContext, index: &Arc<UnitIndex>) -> Self {
        Self {
            modal: app.modal(Arc::clone(index)),
            roster: app.roster(Arc::clone(index)),
            app,
        }
    }
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) site_name: String,
    pub(crate) geometry: Arc<GeometryDocument>,
    pub(crate) index: Arc<UnitIndex>,
    pub(crate) admin: AdminGate,

    /// `None` in geometry-only mode.
    pub(crate) backend: Option<Backend>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        site_name: impl Into<String>,
        geometry: GeometryDocument,
        admin: AdminGate,
        app: Option<AppContext>,
    ) -> Self {
        let index = Arc::new(UnitIndex::build(&geometry));

        Self {
            site_name: site_name.into(),
            backend: app.map(|app| Backend::new(app, &index)),
            geometry: Arc::new(geometry),
            index,
            admin,
        }
    }

    #[must_use]
    pub(crate) fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub(crate) fn units(&self) -> Option<&dyn UnitsService> {
        self.backend
            .as_ref()
            .map(|backend| backend.app.units.as_ref())
    }
}
