//! Tenant Roster
//!
//! Administrator view over registrations: who may claim which unit, and
//! whether they have created their account yet.

use std::sync::Arc;

use jiff::tz::TimeZone;
use rustc_hash::FxHashSet;
use tracing::{info, warn};

use crate::{
    backend::AccessToken,
    domain::{
        geometry::{UnitId, UnitIndex},
        mobile::{MIN_MOBILE_LEN, Mobile},
        profiles::ProfilesService,
        tenants::{
            TenantsService,
            data::NewTenant,
            records::{TenantId, TenantRecord},
        },
    },
};

pub mod errors;

pub use errors::RosterError;

/// Shown in place of the table when nobody is registered.
pub const EMPTY_ROSTER: &str = "No tenants registered yet.";

/// Whether a registration's mobile has created its account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    /// The tenant has set a password.
    Active,

    /// No account yet.
    Pending,
}

impl AccountStatus {
    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
        }
    }

    /// Lowercase identifier, also used as the CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

/// One roster table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// Registration id.
    pub id: TenantId,

    /// Normalized mobile number.
    pub mobile: String,

    /// Unit location, or `Unit ID <id>` for units missing from the geometry.
    pub unit_label: String,

    /// Registration date, `YYYY-MM-DD` in UTC.
    pub registered_on: String,

    /// Account badge.
    pub account: AccountStatus,
}

impl RosterRow {
    /// Confirmation shown before removing the row.
    pub fn removal_prompt(&self) -> String {
        format!(
            "Remove tenant {}? This will not delete their login account, only their unit registration.",
            self.mobile
        )
    }
}

/// Admin registration manager.
#[derive(Clone)]
pub struct Roster {
    index: Arc<UnitIndex>,
    tenants: Arc<dyn TenantsService>,
    profiles: Arc<dyn ProfilesService>,
}

impl Roster {
    /// Roster labelling units from `index`.
    pub fn new(
        index: Arc<UnitIndex>,
        tenants: Arc<dyn TenantsService>,
        profiles: Arc<dyn ProfilesService>,
    ) -> Self {
        Self {
            index,
            tenants,
            profiles,
        }
    }

    /// Unit picker options in document order.
    pub fn unit_options(&self) -> Vec<(UnitId, String)> {
        self.index
            .iter()
            .map(|indexed| (indexed.unit.id, indexed.option_label()))
            .collect()
    }

    /// Every registration, oldest first, with its unit label and account
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Load`] when registrations cannot be fetched.
    #[tracing::instrument(name = "roster.list", skip(self, token), err)]
    pub async fn list(&self, token: &AccessToken) -> Result<Vec<RosterRow>, RosterError> {
        let records = self
            .tenants
            .list_tenants(token)
            .await
            .map_err(RosterError::Load)?;

        let accounts = match self.profiles.account_mobiles(token).await {
            Ok(accounts) => accounts,
            Err(error) => {
                warn!("failed to load profiles, showing every account as pending: {error}");

                FxHashSet::default()
            }
        };

        Ok(records
            .into_iter()
            .map(|record| self.row(record, &accounts))
            .collect())
    }

    /// Register `raw_mobile` for `unit`, returning the success message.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any backend call, or the backend's
    /// failure with duplicates reported as already registered.
    #[tracing::instrument(name = "roster.add", skip(self, token, raw_mobile), err)]
    pub async fn add(
        &self,
        token: &AccessToken,
        raw_mobile: &str,
        unit: Option<UnitId>,
    ) -> Result<String, RosterError> {
        let raw_mobile = raw_mobile.trim();

        if raw_mobile.is_empty() {
            return Err(RosterError::MobileRequired);
        }

        let unit_id = unit
            .filter(|id| self.index.get(*id).is_some())
            .ok_or(RosterError::UnitRequired)?;

        let mobile = Mobile::normalize(raw_mobile);

        if mobile.len() < MIN_MOBILE_LEN {
            return Err(RosterError::MobileTooShort);
        }

        let record = self
            .tenants
            .create_tenant(token, NewTenant { mobile, unit_id })
            .await?;

        info!(tenant = %record.id, "registered tenant");

        Ok(format!("Tenant {raw_mobile} registered successfully."))
    }

    /// Remove a registration. The login account, if any, is kept.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotConfirmed`] without `confirmed`, or the
    /// backend's failure.
    #[tracing::instrument(name = "roster.remove", skip(self, token), fields(tenant = %id), err)]
    pub async fn remove(
        &self,
        token: &AccessToken,
        id: TenantId,
        confirmed: bool,
    ) -> Result<(), RosterError> {
        if !confirmed {
            return Err(RosterError::NotConfirmed);
        }

        self.tenants.delete_tenant(token, id).await?;

        info!("removed tenant registration");

        Ok(())
    }

    fn row(&self, record: TenantRecord, accounts: &FxHashSet<Mobile>) -> RosterRow {
        let unit_label = self.index.get(record.unit_id).map_or_else(
            || format!("Unit ID {}", record.unit_id),
            |indexed| indexed.label(),
        );

        let account = if accounts.contains(&Mobile::normalize(&record.mobile)) {
            AccountStatus::Active
        } else {
            AccountStatus::Pending
        };

        RosterRow {
            id: record.id,
            registered_on: record.created_at.to_zoned(TimeZone::UTC).date().to_string(),
            mobile: record.mobile,
            unit_label,
            account,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        backend::BackendError,
        domain::{
            profiles::{MockProfilesService, ProfilesServiceError},
            tenants::{MockTenantsService, TenantsServiceError},
        },
        test::{TestContext, helpers::tenant_record},
    };

    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("admin-jwt")
    }

    #[tokio::test]
    async fn list_labels_units_and_accounts() -> TestResult {
        let mut ctx = TestContext::new();

        ctx.tenants.expect_list_tenants().once().return_once(|_| {
            Ok(vec![
                tenant_record(1, "5015551001", 7),
                tenant_record(2, "501-555-1002", 99),
            ])
        });
        ctx.profiles
            .expect_account_mobiles()
            .once()
            .return_once(|_| Ok([Mobile::normalize("5015551002")].into_iter().collect()));

        let rows = ctx.roster().list(&token()).await?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].unit_label, "Tower A F2 — Unit 201");
        assert_eq!(rows[0].account, AccountStatus::Pending);
        assert_eq!(rows[0].registered_on, "2024-05-01");
        assert_eq!(rows[1].unit_label, "Unit ID 99");
        assert_eq!(rows[1].account, AccountStatus::Active);

        Ok(())
    }

    #[tokio::test]
    async fn list_reports_load_failures() {
        let mut ctx = TestContext::new();

        ctx.tenants.expect_list_tenants().once().return_once(|_| {
            Err(TenantsServiceError::Backend(BackendError::from_response(
                403,
                r#"{"message":"permission denied for table tenants"}"#,
            )))
        });
        ctx.profiles.expect_account_mobiles().never();

        let error = ctx.roster().list(&token()).await.err();

        assert_eq!(
            error.map(|error| error.to_string()),
            Some("Error loading tenants: permission denied for table tenants".to_string())
        );
    }

    #[tokio::test]
    async fn list_survives_profile_failures() -> TestResult {
        let mut ctx = TestContext::new();

        ctx.tenants
            .expect_list_tenants()
            .once()
            .return_once(|_| Ok(vec![tenant_record(1, "5015551001", 7)]));
        ctx.profiles.expect_account_mobiles().once().return_once(|_| {
            Err(ProfilesServiceError::Backend(BackendError::from_response(
                500, "",
            )))
        });

        let rows = ctx.roster().list(&token()).await?;

        assert_eq!(rows[0].account, AccountStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn add_validates_before_calling_the_backend() {
        let mut tenants = MockTenantsService::new();

        tenants.expect_create_tenant().never();

        let roster = Roster::new(
            Arc::new(UnitIndex::build(&crate::domain::geometry::tests::sample_document())),
            Arc::new(tenants),
            Arc::new(MockProfilesService::new()),
        );

        let cases = [
            ("  ", Some(UnitId(7)), "Please enter a mobile number."),
            ("5015551001", None, "Please select a unit."),
            ("5015551001", Some(UnitId(999)), "Please select a unit."),
            ("(501) 55", Some(UnitId(7)), "Mobile number seems too short."),
        ];

        for (mobile, unit, expected) in cases {
            let error = roster.add(&token(), mobile, unit).await.err();

            assert_eq!(
                error.map(|error| error.to_string()),
                Some(expected.to_string()),
                "{mobile:?} {unit:?}"
            );
        }
    }

    #[tokio::test]
    async fn add_stores_normalized_mobile() -> TestResult {
        let mut ctx = TestContext::new();

        ctx.tenants
            .expect_create_tenant()
            .once()
            .withf(|token, tenant| {
                token.expose() == "admin-jwt"
                    && *tenant
                        == NewTenant {
                            mobile: Mobile::normalize("5015551001"),
                            unit_id: UnitId(7),
                        }
            })
            .return_once(|_, _| Ok(tenant_record(1, "5015551001", 7)));

        let message = ctx
            .roster()
            .add(&token(), " 501-555-1001 ", Some(UnitId(7)))
            .await?;

        assert_eq!(message, "Tenant 501-555-1001 registered successfully.");

        Ok(())
    }

    #[tokio::test]
    async fn add_reports_duplicates() {
        let mut ctx = TestContext::new();

        ctx.tenants
            .expect_create_tenant()
            .once()
            .return_once(|_, _| Err(TenantsServiceError::AlreadyExists));

        let error = ctx
            .roster()
            .add(&token(), "5015551001", Some(UnitId(7)))
            .await
            .err();

        assert_eq!(
            error.map(|error| error.to_string()),
            Some("This mobile number is already registered.".to_string())
        );
    }

    #[tokio::test]
    async fn remove_requires_confirmation() -> TestResult {
        let mut ctx = TestContext::new();
        let id = tenant_record(3, "5015551001", 7).id;

        ctx.tenants
            .expect_delete_tenant()
            .once()
            .withf(move |_, tenant| *tenant == id)
            .return_once(|_, _| Ok(()));

        let roster = ctx.roster();

        assert!(matches!(
            roster.remove(&token(), id, false).await,
            Err(RosterError::NotConfirmed)
        ));

        roster.remove(&token(), id, true).await?;

        Ok(())
    }

    #[test]
    fn removal_prompt_mentions_the_login_account() {
        let row = RosterRow {
            id: tenant_record(1, "5015551001", 7).id,
            mobile: "5015551001".to_string(),
            unit_label: "Unit ID 7".to_string(),
            registered_on: "2024-05-01".to_string(),
            account: AccountStatus::Pending,
        };

        assert!(row.removal_prompt().contains("will not delete their login account"));
    }

    #[test]
    fn unit_options_follow_document_order() {
        let options = TestContext::new().roster().unit_options();

        assert_eq!(options.first().map(|(id, _)| *id), Some(UnitId(1)));
        assert_eq!(
            options.get(2).map(|(_, label)| label.as_str()),
            Some("Tower A — F2 — Unit 201")
        );
    }
}
