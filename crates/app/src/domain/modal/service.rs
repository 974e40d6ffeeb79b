//! Unit modal transitions.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    auth::{AuthService, AuthServiceError, Session, SignUpMetadata},
    backend::AccessToken,
    domain::{
        geometry::{UnitId, UnitIndex},
        media::{MediaFile, MediaService},
        mobile::Mobile,
        modal::{
            DIFFERENT_UNIT, INCORRECT_PASSWORD, MIN_PASSWORD_LEN, MOBILE_NOT_REGISTERED,
            MOBILE_REQUIRED, ModalError, ModalState, PASSWORD_TOO_SHORT, PASSWORDS_DIFFER,
            UnitDraft,
        },
        profiles::ProfilesService,
        tenants::TenantsService,
        units::{Unit, UnitOverlay, UnitsService},
    },
};

/// What a step did to the caller's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionChange {
    /// Keep whatever session the caller has.
    Unchanged,

    /// Store this new session.
    Started(Session),

    /// Forget the caller's session.
    Ended,
}

/// The outcome of one modal request: the unit as it now stands, the state to
/// render, and any session change to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The unit with its overlay.
    pub unit: Unit,

    /// State to render.
    pub state: ModalState,

    /// Session change to persist.
    pub session: SessionChange,
}

impl Step {
    fn new(unit: Unit, state: ModalState) -> Self {
        Self {
            unit,
            state,
            session: SessionChange::Unchanged,
        }
    }

    fn with_session(mut self, session: SessionChange) -> Self {
        self.session = session;
        self
    }
}

/// Drives the unit modal against the backend services.
#[derive(Clone)]
pub struct UnitModal {
    index: Arc<UnitIndex>,
    auth: Arc<dyn AuthService>,
    tenants: Arc<dyn TenantsService>,
    profiles: Arc<dyn ProfilesService>,
    units: Arc<dyn UnitsService>,
    media: Arc<dyn MediaService>,
}

impl UnitModal {
    /// Modal flow over the given services.
    pub fn new(
        index: Arc<UnitIndex>,
        auth: Arc<dyn AuthService>,
        tenants: Arc<dyn TenantsService>,
        profiles: Arc<dyn ProfilesService>,
        units: Arc<dyn UnitsService>,
        media: Arc<dyn MediaService>,
    ) -> Self {
        Self {
            index,
            auth,
            tenants,
            profiles,
            units,
            media,
        }
    }

    /// Open the modal: `edit` when `token` belongs to this unit's account,
    /// `view` otherwise. The session is looked up exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is not in the geometry document.
    #[tracing::instrument(name = "modal.open", skip(self, token), fields(unit = %unit_id), err)]
    pub async fn open(
        &self,
        unit_id: UnitId,
        token: Option<&AccessToken>,
    ) -> Result<Step, ModalError> {
        let unit = self.load_unit(unit_id).await?;

        let Some(token) = token else {
            return Ok(Step::new(unit, ModalState::View));
        };

        match self.auth.current_user(token).await {
            Ok(user) if user.unit_id == Some(unit_id) => {
                let draft = UnitDraft::from_unit(&unit);

                Ok(Step::new(unit, ModalState::edit(draft)))
            }
            Ok(_) => Ok(Step::new(unit, ModalState::View)),
            Err(AuthServiceError::Unauthorized) => {
                debug!("stale session cookie");

                Ok(Step::new(unit, ModalState::View).with_session(SessionChange::Ended))
            }
            Err(error) => {
                warn!("failed to resolve session: {error}");

                Ok(Step::new(unit, ModalState::View))
            }
        }
    }

    /// The read-only view; also where cancel leads.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is not in the geometry document.
    pub async fn view(&self, unit_id: UnitId) -> Result<Step, ModalError> {
        let unit = self.load_unit(unit_id).await?;

        Ok(Step::new(unit, ModalState::View))
    }

    /// `view → login`, refused (staying in `view`) for units nobody is
    /// registered to.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is not in the geometry document.
    pub async fn request_login(&self, unit_id: UnitId) -> Result<Step, ModalError> {
        let unit = self.load_unit(unit_id).await?;

        let state = if unit.has_tenant {
            ModalState::Login { error: None }
        } else {
            ModalState::View
        };

        Ok(Step::new(unit, state))
    }

    /// Check a mobile against this unit's registrations, then continue to
    /// `set-password` for new accounts or `password` for existing ones.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is not in the geometry document.
    #[tracing::instrument(name = "modal.submit_mobile", skip(self, raw), fields(unit = %unit_id), err)]
    pub async fn submit_mobile(&self, unit_id: UnitId, raw: &str) -> Result<Step, ModalError> {
        let unit = self.load_unit(unit_id).await?;

        let mobile = Mobile::normalize(raw);

        if mobile.is_empty() {
            return Ok(Step::new(unit, ModalState::login_error(MOBILE_REQUIRED)));
        }

        match self.tenants.find_registration(&mobile, unit_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(Step::new(unit, ModalState::login_error(MOBILE_NOT_REGISTERED)));
            }
            Err(error) => {
                return Ok(Step::new(unit, ModalState::login_error(error.user_message())));
            }
        }

        let state = match self.profiles.has_account(&mobile).await {
            Ok(true) => ModalState::Password {
                mobile,
                error: None,
            },
            Ok(false) => ModalState::SetPassword {
                mobile,
                error: None,
            },
            Err(error) => ModalState::login_error(error.user_message()),
        };

        Ok(Step::new(unit, state))
    }

    /// Create the account for a registered mobile and start editing.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is not in the geometry document.
    #[tracing::instrument(
        name = "modal.submit_new_password",
        skip(self, password, confirmation),
        fields(unit = %unit_id, mobile = %mobile),
        err
    )]
    pub async fn submit_new_password(
        &self,
        unit_id: UnitId,
        mobile: Mobile,
        password: &str,
        confirmation: &str,
    ) -> Result<Step, ModalError> {
        let unit = self.load_unit(unit_id).await?;

        let retry = |mobile: Mobile, error: &str| ModalState::SetPassword {
            mobile,
            error: Some(error.to_string()),
        };

        if mobile.is_empty() {
            return Ok(Step::new(unit, ModalState::login_error(MOBILE_REQUIRED)));
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Ok(Step::new(unit, retry(mobile, PASSWORD_TOO_SHORT)));
        }

        if password != confirmation {
            return Ok(Step::new(unit, retry(mobile, PASSWORDS_DIFFER)));
        }

        // The pending mobile came back from the client.
        match self.tenants.find_registration(&mobile, unit_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(Step::new(unit, ModalState::login_error(MOBILE_NOT_REGISTERED)));
            }
            Err(error) => {
                return Ok(Step::new(unit, retry(mobile, &error.user_message())));
            }
        }

        let metadata = SignUpMetadata {
            unit_id,
            mobile: mobile.clone(),
        };

        match self
            .auth
            .sign_up(&mobile.login_email(), password, metadata)
            .await
        {
            Ok(session) => {
                info!("created tenant account");

                let draft = UnitDraft::from_unit(&unit);

                Ok(Step::new(unit, ModalState::edit(draft))
                    .with_session(SessionChange::Started(session)))
            }
            Err(error) => Ok(Step::new(unit, retry(mobile, &error.user_message()))),
        }
    }

    /// Sign in a returning tenant and start editing.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is not in the geometry document.
    #[tracing::instrument(
        name = "modal.submit_password",
        skip(self, password),
        fields(unit = %unit_id, mobile = %mobile),
        err
    )]
    pub async fn submit_password(
        &self,
        unit_id: UnitId,
        mobile: Mobile,
        password: &str,
    ) -> Result<Step, ModalError> {
        let unit = self.load_unit(unit_id).await?;

        let retry = |mobile: Mobile, error: &str| ModalState::Password {
            mobile,
            error: Some(error.to_string()),
        };

        if mobile.is_empty() {
            return Ok(Step::new(unit, ModalState::login_error(MOBILE_REQUIRED)));
        }

        let session = match self.auth.sign_in(&mobile.login_email(), password).await {
            Ok(session) => session,
            Err(AuthServiceError::Backend(error)) => {
                return Ok(Step::new(unit, retry(mobile, &error.user_message())));
            }
            Err(_rejected) => {
                return Ok(Step::new(unit, retry(mobile, INCORRECT_PASSWORD)));
            }
        };

        if !session.can_edit(unit_id) {
            if let Err(error) = self.auth.sign_out(&session.access_token).await {
                warn!("failed to sign out foreign-unit session: {error}");
            }

            return Ok(Step::new(unit, retry(mobile, DIFFERENT_UNIT)));
        }

        let draft = UnitDraft::from_unit(&unit);

        Ok(Step::new(unit, ModalState::edit(draft)).with_session(SessionChange::Started(session)))
    }

    /// Validate and persist the edit form, returning to `view` on success.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is unknown or the session may not edit
    /// it.
    #[tracing::instrument(name = "modal.save", skip(self, token, draft), fields(unit = %unit_id), err)]
    pub async fn save(
        &self,
        unit_id: UnitId,
        token: Option<&AccessToken>,
        draft: UnitDraft,
    ) -> Result<Step, ModalError> {
        let session = self.authorize(unit_id, token).await?;
        let mut unit = self.load_unit(unit_id).await?;

        let retry = |draft: UnitDraft, error: String| ModalState::Edit {
            draft,
            error: Some(error),
            notice: None,
        };

        let update = match draft.validate(unit_id) {
            Ok(update) => update,
            Err(message) => return Ok(Step::new(unit, retry(draft, message.to_string()))),
        };

        if let Err(error) = self
            .units
            .save_details(&session.access_token, update.clone())
            .await
        {
            return Ok(Step::new(unit, retry(draft, error.user_message())));
        }

        info!("saved unit details");

        unit.apply_update(&update);

        Ok(Step::new(unit, ModalState::View))
    }

    /// Upload photos and append their URLs to the draft.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is unknown or the session may not edit
    /// it.
    #[tracing::instrument(
        name = "modal.upload_photos",
        skip(self, token, draft, files),
        fields(unit = %unit_id, files = files.len()),
        err
    )]
    pub async fn upload_photos(
        &self,
        unit_id: UnitId,
        token: Option<&AccessToken>,
        mut draft: UnitDraft,
        files: Vec<MediaFile>,
    ) -> Result<Step, ModalError> {
        let session = self.authorize(unit_id, token).await?;
        let unit = self.load_unit(unit_id).await?;

        if files.is_empty() {
            return Ok(Step::new(unit, ModalState::edit(draft)));
        }

        let state = match self
            .media
            .upload_photos(&session.access_token, unit_id, files)
            .await
        {
            Ok(urls) => {
                let notice = format!("{} photo(s) uploaded successfully.", urls.len());

                draft.photos.extend(urls);

                ModalState::Edit {
                    draft,
                    error: None,
                    notice: Some(notice),
                }
            }
            Err(error) => ModalState::Edit {
                draft,
                error: Some(error.to_string()),
                notice: None,
            },
        };

        Ok(Step::new(unit, state))
    }

    /// Upload a video and make it the draft's video.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is unknown or the session may not edit
    /// it.
    #[tracing::instrument(
        name = "modal.upload_video",
        skip(self, token, draft, file),
        fields(unit = %unit_id, bytes = file.size()),
        err
    )]
    pub async fn upload_video(
        &self,
        unit_id: UnitId,
        token: Option<&AccessToken>,
        mut draft: UnitDraft,
        file: MediaFile,
    ) -> Result<Step, ModalError> {
        let session = self.authorize(unit_id, token).await?;
        let unit = self.load_unit(unit_id).await?;

        let state = match self
            .media
            .upload_video(&session.access_token, unit_id, file)
            .await
        {
            Ok(url) => {
                draft.video = Some(url);

                ModalState::Edit {
                    draft,
                    error: None,
                    notice: Some("Video uploaded successfully!".to_string()),
                }
            }
            Err(error) => ModalState::Edit {
                draft,
                error: Some(error.to_string()),
                notice: None,
            },
        };

        Ok(Step::new(unit, state))
    }

    /// End the session and return to `view`.
    ///
    /// # Errors
    ///
    /// Returns an error when the unit is not in the geometry document.
    pub async fn logout(
        &self,
        unit_id: UnitId,
        token: Option<&AccessToken>,
    ) -> Result<Step, ModalError> {
        if let Some(token) = token {
            if let Err(error) = self.auth.sign_out(token).await {
                warn!("failed to sign out: {error}");
            }
        }

        let unit = self.load_unit(unit_id).await?;

        Ok(Step::new(unit, ModalState::View).with_session(SessionChange::Ended))
    }

    async fn authorize(
        &self,
        unit_id: UnitId,
        token: Option<&AccessToken>,
    ) -> Result<Session, ModalError> {
        let token = token.ok_or(ModalError::Forbidden(unit_id))?;

        let user = self
            .auth
            .current_user(token)
            .await
            .map_err(|error| match error {
                AuthServiceError::Unauthorized => ModalError::Forbidden(unit_id),
                other => ModalError::Session(other),
            })?;

        let session = Session {
            access_token: token.clone(),
            user,
        };

        if !session.can_edit(unit_id) {
            return Err(ModalError::Forbidden(unit_id));
        }

        Ok(session)
    }

    /// Geometry plus overlay for one unit; geometry only if the overlay
    /// cannot be fetched.
    async fn load_unit(&self, unit_id: UnitId) -> Result<Unit, ModalError> {
        let indexed = self
            .index
            .get(unit_id)
            .ok_or(ModalError::UnknownUnit(unit_id))?;

        let overlay =
            match UnitOverlay::load(self.units.as_ref(), self.tenants.as_ref(), &[unit_id]).await
            {
                Ok(overlay) => overlay,
                Err(error) => {
                    warn!("unit overlay unavailable, showing geometry only: {error}");

                    UnitOverlay::default()
                }
            };

        Ok(overlay.unit(&indexed.unit))
    }
}
