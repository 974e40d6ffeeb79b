//! Static assets, compiled into the binary.

use salvo::prelude::*;

const APP_CSS: &str = include_str!("../assets/app.css");
const APP_JS: &str = include_str!("../assets/app.js");

#[handler]
pub(crate) async fn stylesheet() -> Text<&'static str> {
    Text::Css(APP_CSS)
}

#[handler]
pub(crate) async fn script() -> Text<&'static str> {
    Text::Js(APP_JS)
}
