//! Admin Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod page;
