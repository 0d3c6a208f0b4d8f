//! Config namespace: YAML runtime settings and registry/randomness wiring.

mod runtime;
mod settings;

pub use runtime::{build_registry, random_source};
pub use settings::{
    DrawSettings, GatewaySettings, SlotSettings, load_slot_settings,
    load_slot_settings_from_paths, set_config_home_override, slot_settings_paths,
};
