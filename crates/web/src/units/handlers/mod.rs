//! Unit Modal Handlers

pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod mobile;
pub(crate) mod open;
pub(crate) mod password;
pub(crate) mod photos;
pub(crate) mod save;
pub(crate) mod set_password;
pub(crate) mod video;
pub(crate) mod view;
