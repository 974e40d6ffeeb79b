//! Admin roster page.

use leptos::prelude::*;

use bayport_app::domain::{
    geometry::UnitId,
    modal::SERVICE_UNAVAILABLE,
    roster::{EMPTY_ROSTER, RosterRow},
};

use crate::views::document;

/// Inline outcome of the last roster action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Flash {
    Success(String),
    Error(String),
}

/// Everything the signed-in roster page shows.
#[derive(Debug, Clone)]
pub(crate) struct RosterPage {
    pub(crate) admin_email: String,
    pub(crate) units: Vec<(UnitId, String)>,

    /// Rows, or the load failure message.
    pub(crate) rows: Result<Vec<RosterRow>, String>,

    pub(crate) flash: Option<Flash>,

    /// Row awaiting removal confirmation.
    pub(crate) confirm: Option<RosterRow>,

    /// Add form input to keep after a failed add.
    pub(crate) mobile: String,
    pub(crate) selected: Option<UnitId>,
}

impl Default for RosterPage {
    fn default() -> Self {
        Self {
            admin_email: String::new(),
            units: Vec::new(),
            rows: Ok(Vec::new()),
            flash: None,
            confirm: None,
            mobile: String::new(),
            selected: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum AdminView {
    Unavailable,
    Login { error: Option<String> },
    Roster(RosterPage),
}

pub(crate) fn admin_page(site_name: &str, admin: AdminView) -> String {
    let body = match admin {
        AdminView::Unavailable => view! {
            <section class="admin">
                <h1>"Tenant Registrations"</h1>
                <p class="admin-error">{SERVICE_UNAVAILABLE}</p>
            </section>
        }
        .into_any(),
        AdminView::Login { error } => login_panel(error).into_any(),
        AdminView::Roster(page) => roster_panel(page).into_any(),
    };

    document(site_name, Some("Admin"), body)
}

fn login_panel(error: Option<String>) -> impl IntoView {
    view! {
        <section class="admin admin-login">
            <h1>"Admin Login"</h1>
            <form method="post" action="/admin/login" class="admin-form">
                <label class="admin-label" for="admin-email">"Email"</label>
                <input
                    type="email"
                    id="admin-email"
                    name="email"
                    class="admin-input"
                    autocomplete="username"
                />
                <label class="admin-label" for="admin-password">"Password"</label>
                <input
                    type="password"
                    id="admin-password"
                    name="password"
                    class="admin-input"
                    autocomplete="current-password"
                />
                <div class="admin-error" role="alert">{error}</div>
                <button type="submit" class="admin-btn">"Login"</button>
            </form>
        </section>
    }
}

fn roster_panel(page: RosterPage) -> impl IntoView {
    let RosterPage {
        admin_email,
        units,
        rows,
        flash,
        confirm,
        mobile,
        selected,
    } = page;

    let flash = flash.map(|flash| match flash {
        Flash::Success(message) => {
            view! { <div class="admin-success" role="status">{message}</div> }.into_any()
        }
        Flash::Error(message) => {
            view! { <div class="admin-error" role="alert">{message}</div> }.into_any()
        }
    });

    let options = units
        .into_iter()
        .map(|(id, label)| {
            view! {
                <option value={id.to_string()} selected={selected == Some(id)}>
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <section class="admin">
            <div class="admin-header">
                <h1>"Tenant Registrations"</h1>
                <span class="admin-email">{admin_email}</span>
                <form method="post" action="/admin/logout">
                    <button type="submit" class="admin-btn admin-btn-secondary">"Logout"</button>
                </form>
            </div>
            {confirm.map(confirm_panel)}
            <form method="post" action="/admin/tenants" class="admin-add">
                <input
                    type="tel"
                    name="mobile"
                    class="admin-input"
                    placeholder="Mobile number"
                    value=mobile
                />
                <select name="unit" class="admin-input">
                    <option value="">"Select a unit…"</option>
                    {options}
                </select>
                <button type="submit" class="admin-btn">"Add Tenant"</button>
            </form>
            {flash}
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Mobile"</th>
                        <th>"Unit"</th>
                        <th>"Registered"</th>
                        <th>"Account"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{roster_rows(rows)}</tbody>
            </table>
        </section>
    }
}

fn roster_rows(rows: Result<Vec<RosterRow>, String>) -> AnyView {
    let message = match rows {
        Ok(rows) if !rows.is_empty() => {
            return rows.into_iter().map(roster_row).collect_view().into_any();
        }
        Ok(_) => EMPTY_ROSTER.to_string(),
        Err(message) => message,
    };

    view! {
        <tr>
            <td colspan="5" class="admin-empty">{message}</td>
        </tr>
    }
    .into_any()
}

fn roster_row(row: RosterRow) -> impl IntoView {
    let action = format!("/admin/tenants/{}/delete", row.id);
    let badge_class = format!("admin-badge {}", row.account.as_str());

    view! {
        <tr>
            <td>{row.mobile}</td>
            <td>{row.unit_label}</td>
            <td>{row.registered_on}</td>
            <td>
                <span class=badge_class>{row.account.label()}</span>
            </td>
            <td>
                <form method="post" action=action>
                    <button type="submit" class="admin-delete-btn">"Remove"</button>
                </form>
            </td>
        </tr>
    }
}

fn confirm_panel(row: RosterRow) -> impl IntoView {
    let prompt = row.removal_prompt();
    let action = format!("/admin/tenants/{}/delete", row.id);

    view! {
        <div class="admin-confirm" role="alertdialog">
            <p>{prompt}</p>
            <form method="post" action=action>
                <input type="hidden" name="confirmed" value="true" />
                <button type="submit" class="admin-delete-btn">"Remove"</button>
                <a href="/admin" class="admin-btn admin-btn-secondary">"Cancel"</a>
            </form>
        </div>
    }
}
