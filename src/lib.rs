// Library root
// -----------
// This crate exposes the library surface for the `intra` CLI. The binary
// (`main.rs`) wires these modules together.
//
// Module responsibilities:
// - `api`: the 42 intranet API client. Takes an authenticated transport and
//   exposes typed resource operations, rate-limit detection and pagination.
// - `config`: environment-driven settings and the authenticated transport.
// - `ui`: the interactive menu that drives `api` operations.
pub mod api;
pub mod config;
pub mod ui;
