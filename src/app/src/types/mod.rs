//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - ota: Over-the-air update settings and their form record
//! - access_point: Access point settings and provisioning mode
//! - form: Form state shared by both settings groups
//! - device: Wire types of the device REST API

pub mod access_point;
pub mod device;
pub mod form;
pub mod ota;

pub use access_point::*;
pub use device::*;
pub use form::*;
pub use ota::*;
