//! Formatting and normalization helpers for POI display.
//!
//! Everything here is pure and infallible: inputs that cannot be
//! interpreted are returned unchanged.

pub mod address;
pub mod countries;
pub mod details;
pub mod hours;
pub mod phone;
pub mod region;

pub use address::{compose_address, format_address, normalize_street, normalize_street_in_address};
pub use details::PoiDetails;
pub use hours::{format_hour, format_hours};
pub use phone::{format_phone, format_phone_for_dial, format_phone_for_display, PhoneFormat};
pub use region::{infer_region_code, infer_region_code_or, system_region};
