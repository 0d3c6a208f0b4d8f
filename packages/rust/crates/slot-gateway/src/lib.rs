//! slot-gateway: boundary around the prize registry.
//!
//! - HTTP gateway: read / replace the prize set, draw, odds, health.
//! - Runtime settings: YAML files (system + user), initial prize set, draw seed.

#![allow(missing_docs)]

mod config;
mod gateway;

pub use config::{
    DrawSettings, GatewaySettings, SlotSettings, build_registry, load_slot_settings,
    load_slot_settings_from_paths, random_source, set_config_home_override, slot_settings_paths,
};
pub use gateway::{
    DEFAULT_BIND, DrawResponse, ErrorResponse, GatewayHealthResponse, GatewayState, OddsResponse,
    PrizesResponse, ReplaceResponse, extract_candidate, router, run_http,
};
