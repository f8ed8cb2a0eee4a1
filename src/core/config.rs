use super::profile::Tier;

/// Which of the three behaviours the page runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    /// Fixed baseline profile, one scene at a time.
    Classic,
    /// Device-profiled, one scene at a time; a missing canvas is a hard error.
    #[default]
    Adaptive,
    /// Device-profiled, layered scenes with auto-cycle and idle revert.
    Aggressive,
}

impl Variant {
    pub fn parse(s: &str) -> Option<Variant> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "adaptive" => Some(Variant::Adaptive),
            "aggressive" => Some(Variant::Aggressive),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Adaptive => "adaptive",
            Variant::Aggressive => "aggressive",
        }
    }

    #[inline]
    pub fn probes_device(self) -> bool {
        !matches!(self, Variant::Classic)
    }

    #[inline]
    pub fn layered(self) -> bool {
        matches!(self, Variant::Aggressive)
    }

    /// Strict variants fail `start` when the canvas is missing.
    #[inline]
    pub fn strict_startup(self) -> bool {
        matches!(self, Variant::Adaptive)
    }
}

/// Runtime settings taken from the page query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionConfig {
    pub variant: Variant,
    pub tier_override: Option<Tier>,
    pub initial_scene: usize,
    pub show_hud: bool,
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Parse `?key=value&...`. Unknown keys and bad values are logged and ignored.
    pub fn from_query(search: &str) -> Self {
        let mut cfg = SessionConfig::default();
        let query = search.strip_prefix('?').unwrap_or(search);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "variant" => match Variant::parse(value) {
                    Some(v) => cfg.variant = v,
                    None => log::warn!("[config] unknown variant '{}'", value),
                },
                "tier" => match Tier::from_short_name(value) {
                    Some(t) => cfg.tier_override = Some(t),
                    None => log::warn!("[config] unknown tier '{}'", value),
                },
                "scene" => match value.parse::<usize>() {
                    Ok(n) => cfg.initial_scene = n,
                    Err(_) => log::warn!("[config] bad scene index '{}'", value),
                },
                "hud" => cfg.show_hud = matches!(value, "" | "1" | "true" | "on"),
                "seed" => match value.parse::<u64>() {
                    Ok(s) => cfg.seed = Some(s),
                    Err(_) => log::warn!("[config] bad seed '{}'", value),
                },
                _ => log::warn!("[config] ignoring unknown key '{}'", key),
            }
        }
        cfg
    }
}
