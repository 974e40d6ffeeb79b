//! App Router

use salvo::Router;

use crate::{admin, assets, healthcheck, pages, status, units};

pub fn app_router() -> Router {
    Router::new()
        .get(pages::landing)
        .push(Router::with_path("buildings/{index}").get(pages::building))
        .push(
            Router::with_path("units/{unit}")
                .push(
                    Router::with_path("modal")
                        .get(units::open::handler)
                        .push(Router::with_path("view").get(units::view::handler))
                        .push(Router::with_path("login").get(units::login::handler))
                        .push(Router::with_path("mobile").post(units::mobile::handler))
                        .push(Router::with_path("set-password").post(units::set_password::handler))
                        .push(Router::with_path("password").post(units::password::handler))
                        .push(Router::with_path("save").post(units::save::handler))
                        .push(Router::with_path("logout").post(units::logout::handler)),
                )
                .push(Router::with_path("photos").post(units::photos::handler))
                .push(Router::with_path("video").post(units::video::handler)),
        )
        .push(
            Router::with_path("admin")
                .get(admin::page::handler)
                .push(Router::with_path("login").post(admin::login::handler))
                .push(Router::with_path("logout").post(admin::logout::handler))
                .push(
                    Router::with_path("tenants")
                        .post(admin::create::handler)
                        .push(Router::with_path("{id}/delete").post(admin::delete::handler)),
                ),
        )
        .push(
            Router::with_path("assets")
                .push(Router::with_path("app.css").get(assets::stylesheet))
                .push(Router::with_path("app.js").get(assets::script)),
        )
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("status").get(status::handler))
}
