//! Bayport West directory: geometry, backend client, services and the unit
//! modal flow shared by the web server and the operator CLI.

pub mod auth;
pub mod backend;
pub mod context;
pub mod domain;

#[cfg(test)]
mod test;
