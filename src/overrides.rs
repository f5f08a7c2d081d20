// Mount options read from the canvas element's data attributes.
// Kept free of web-sys so host tests can include it.
use crate::constants::{DATA_SEED, DATA_STAR_COLOR, DATA_STAR_SIZE, DATA_WARP_SPEED};
use starfield_core::StarfieldConfig;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MountOptions {
    pub config: StarfieldConfig,
    pub seed: Option<u64>,
}

fn parse_attr<T: std::str::FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[mount] ignoring data attribute {}={:?}", key, raw);
            None
        }
    }
}

/// Build mount options from a dataset lookup. Unparseable values are ignored;
/// a configuration that fails validation falls back to the defaults.
pub fn options_from_attributes(lookup: impl Fn(&str) -> Option<String>) -> MountOptions {
    let mut config = StarfieldConfig::default();
    if let Some(color) = lookup(DATA_STAR_COLOR) {
        config.star_color = color.trim().to_string();
    }
    if let Some(size) = parse_attr::<f32>(DATA_STAR_SIZE, lookup(DATA_STAR_SIZE)) {
        config.star_size = size;
    }
    if let Some(warp) = parse_attr::<f32>(DATA_WARP_SPEED, lookup(DATA_WARP_SPEED)) {
        config.warp_speed = warp;
    }
    let seed = parse_attr::<u64>(DATA_SEED, lookup(DATA_SEED));

    if let Err(e) = config.validate() {
        log::warn!("[mount] invalid starfield overrides ({}), using defaults", e);
        config = StarfieldConfig::default();
    }
    MountOptions { config, seed }
}
