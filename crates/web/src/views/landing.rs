//! Landing page.

use leptos::prelude::*;

use bayport_app::domain::building::BuildingCard;

use crate::views::{Legend, document};

pub(crate) fn landing_page(site_name: &str, cards: Vec<BuildingCard>) -> String {
    let body = view! {
        <section class="landing">
            <h1 class="landing-title">"Buildings"</h1>
            <div class="building-grid">
                {cards
                    .into_iter()
                    .map(|card| {
                        let href = format!("/buildings/{}", card.index);
                        let subtitle = card.subtitle();

                        view! {
                            <a href=href class="building-card">
                                <h3>{card.name}</h3>
                                <p class="building-subtitle">{subtitle}</p>
                                <Legend counts=card.counts />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    };

    document(site_name, None, body)
}

#[cfg(test)]
mod tests {
    use bayport_app::domain::geometry::StatusCounts;

    use super::*;

    #[test]
    fn cards_link_to_their_building() {
        let html = landing_page(
            "Bayport West",
            vec![BuildingCard {
                index: 1,
                name: "Tower B".to_string(),
                floors: 12,
                units: 96,
                counts: StatusCounts {
                    available: 90,
                    taken: 5,
                    reserved: 1,
                },
            }],
        );

        assert!(html.contains("href=\"/buildings/1\""));
        assert!(html.contains("Tower B"));
        assert!(html.contains("12 Floors · 96 Units"));
    }
}
