//! Building page.

use leptos::prelude::*;

use bayport_app::domain::{
    building::{BUILDING_NOT_FOUND, BuildingDiagram, FloorRow, unit_tooltip},
    units::{BackendStatus, Unit},
};

use crate::views::{Legend, StatusIndicator, document};

pub(crate) fn building_page(
    site_name: &str,
    diagram: BuildingDiagram,
    status: BackendStatus,
) -> String {
    let title = diagram.name.clone();
    let counts = diagram.counts;

    let body = view! {
        <section class="building">
            <nav class="building-nav">
                <a href="/" class="back-link">"← All buildings"</a>
                <StatusIndicator status=status />
            </nav>
            <h1 class="building-name">{diagram.name.clone()}</h1>
            <div class="bldg-diagram">
                <div class="bldg-rooftop">{diagram.name}</div>
                {diagram.floors.into_iter().map(floor_row).collect_view()}
                <div class="bldg-ground">"GROUND"</div>
            </div>
            <div id="building-legend">
                <Legend counts=counts />
            </div>
        </section>
        <ModalShell />
        <Lightbox />
    };

    document(site_name, Some(&title), body)
}

pub(crate) fn building_not_found(site_name: &str) -> String {
    let body = view! {
        <section class="building">
            <a href="/" class="back-link">"← All buildings"</a>
            <p class="building-missing">{BUILDING_NOT_FOUND}</p>
        </section>
    };

    document(site_name, None, body)
}

fn floor_row(floor: FloorRow) -> impl IntoView {
    let label = floor.label();
    let counts = floor.counts;

    view! {
        <div class="bldg-floor">
            <div class="bldg-floor-avail">
                <div class="fav available">"● "{counts.available}</div>
                <div class="fav taken">"● "{counts.taken}</div>
                <div class="fav reserved">"● "{counts.reserved}</div>
            </div>
            <div class="bldg-floor-label">{label}</div>
            <div class="bldg-floor-units">
                {floor.units.into_iter().map(unit_cell).collect_view()}
            </div>
        </div>
    }
}

fn unit_cell(unit: Unit) -> impl IntoView {
    let class = format!("bldg-unit {}", unit.status.as_str());
    let tooltip = unit_tooltip(&unit);
    let modal_url = format!("/units/{}/modal", unit.id);

    view! {
        <button type="button" class=class title=tooltip data-modal-get=modal_url>
            {unit.unit_number}
        </button>
    }
}

/// Empty modal container that unit fragments are swapped into.
#[component]
fn ModalShell() -> impl IntoView {
    view! {
        <div id="unit-modal" class="umd-overlay" hidden=true>
            <div class="umd-dialog" role="dialog" aria-modal="true">
                <button type="button" class="umd-close" data-modal-close="" aria-label="Close">
                    "✕"
                </button>
                <div id="unit-modal-content"></div>
            </div>
        </div>
    }
}

#[component]
fn Lightbox() -> impl IntoView {
    view! {
        <div id="lightbox" class="lightbox">
            <button type="button" class="lightbox-close" data-lightbox-close="" aria-label="Close">
                "✕"
            </button>
            <div id="lightbox-body"></div>
        </div>
    }
}
