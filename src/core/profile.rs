use super::constants::{DEFAULT_CORES, DEFAULT_MEMORY_GB, DEFAULT_PIXEL_RATIO};

/// Device capability buckets, ordered from weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    MobilePhone,
    Tablet,
    LowEndDesktop,
    MidRangeDesktop,
    HighEndDesktop,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::MobilePhone,
        Tier::Tablet,
        Tier::LowEndDesktop,
        Tier::MidRangeDesktop,
        Tier::HighEndDesktop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tier::MobilePhone => "mobile",
            Tier::Tablet => "tablet",
            Tier::LowEndDesktop => "desktop-low",
            Tier::MidRangeDesktop => "desktop-mid",
            Tier::HighEndDesktop => "desktop-high",
        }
    }

    /// Name accepted by the `?tier=` override.
    pub fn short_name(self) -> &'static str {
        match self {
            Tier::MobilePhone => "mobile",
            Tier::Tablet => "tablet",
            Tier::LowEndDesktop => "low",
            Tier::MidRangeDesktop => "mid",
            Tier::HighEndDesktop => "high",
        }
    }

    pub fn from_short_name(s: &str) -> Option<Tier> {
        let s = s.to_ascii_lowercase();
        if s == "phone" {
            return Some(Tier::MobilePhone);
        }
        Tier::ALL.iter().copied().find(|t| t.short_name() == s)
    }

    fn limits(self) -> TierLimits {
        match self {
            Tier::MobilePhone => TierLimits {
                complexity: 0.4,
                target_fps: 30,
                pixel_ratio_cap: 1.5,
                max_particles: 60,
                max_shapes: 12,
            },
            Tier::Tablet => TierLimits {
                complexity: 0.6,
                target_fps: 45,
                pixel_ratio_cap: 2.0,
                max_particles: 120,
                max_shapes: 20,
            },
            Tier::LowEndDesktop => TierLimits {
                complexity: 0.7,
                target_fps: 45,
                pixel_ratio_cap: 1.5,
                max_particles: 150,
                max_shapes: 24,
            },
            Tier::MidRangeDesktop => TierLimits {
                complexity: 0.85,
                target_fps: 60,
                pixel_ratio_cap: 2.0,
                max_particles: 250,
                max_shapes: 36,
            },
            Tier::HighEndDesktop => TierLimits {
                complexity: 1.0,
                target_fps: 60,
                pixel_ratio_cap: 2.0,
                max_particles: 400,
                max_shapes: 48,
            },
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct TierLimits {
    complexity: f32,
    target_fps: u32,
    pixel_ratio_cap: f64,
    max_particles: usize,
    max_shapes: usize,
}

/// Immutable quality settings for the whole session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapabilityProfile {
    pub tier: Tier,
    pub complexity: f32,
    pub target_fps: u32,
    pub pixel_ratio: f64,
    pub max_particles: usize,
    pub max_shapes: usize,
}

impl CapabilityProfile {
    /// Build the profile for `tier`, capping the reported pixel ratio.
    pub fn for_tier(tier: Tier, reported_pixel_ratio: f64) -> Self {
        let l = tier.limits();
        let reported = if reported_pixel_ratio.is_finite() && reported_pixel_ratio > 0.0 {
            reported_pixel_ratio
        } else {
            DEFAULT_PIXEL_RATIO
        };
        Self {
            tier,
            complexity: l.complexity,
            target_fps: l.target_fps,
            pixel_ratio: reported.min(l.pixel_ratio_cap),
            max_particles: l.max_particles,
            max_shapes: l.max_shapes,
        }
    }

    /// Fixed profile used when no device probing is wanted.
    pub fn baseline(reported_pixel_ratio: f64) -> Self {
        Self::for_tier(Tier::MidRangeDesktop, reported_pixel_ratio)
    }

    #[inline]
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps as f64
    }

    /// Number of shapes a pattern should draw at this tier.
    #[inline]
    pub fn shape_budget(&self) -> usize {
        ((self.max_shapes as f32 * self.complexity).round() as usize).max(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformClass {
    Phone,
    Tablet,
    Desktop,
}

pub fn classify_user_agent(user_agent: &str) -> PlatformClass {
    let ua = user_agent.to_ascii_lowercase();
    let android = ua.contains("android");
    let mobile = ua.contains("mobile");
    if ua.contains("ipad") || ua.contains("tablet") || (android && !mobile) {
        PlatformClass::Tablet
    } else if ua.contains("iphone") || ua.contains("ipod") || mobile {
        PlatformClass::Phone
    } else {
        PlatformClass::Desktop
    }
}

/// Coarse environment descriptors read once at startup. Every field may be absent.
#[derive(Clone, Debug, Default)]
pub struct DeviceSignals {
    pub user_agent: Option<String>,
    pub cores: Option<u32>,
    pub memory_gb: Option<f64>,
    pub pixel_ratio: Option<f64>,
    pub webgl: bool,
}

/// Signals with the conservative defaults filled in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedSignals {
    pub platform: PlatformClass,
    pub cores: u32,
    pub memory_gb: f64,
    pub pixel_ratio: f64,
    pub webgl: bool,
}

impl DeviceSignals {
    pub fn resolve(&self) -> ResolvedSignals {
        ResolvedSignals {
            platform: self
                .user_agent
                .as_deref()
                .map(classify_user_agent)
                .unwrap_or(PlatformClass::Desktop),
            cores: self.cores.filter(|c| *c > 0).unwrap_or(DEFAULT_CORES),
            memory_gb: self
                .memory_gb
                .filter(|m| m.is_finite() && *m > 0.0)
                .unwrap_or(DEFAULT_MEMORY_GB),
            pixel_ratio: self
                .pixel_ratio
                .filter(|p| p.is_finite() && *p > 0.0)
                .unwrap_or(DEFAULT_PIXEL_RATIO),
            webgl: self.webgl,
        }
    }
}

pub struct TierRule {
    pub name: &'static str,
    pub matches: fn(&ResolvedSignals) -> bool,
    pub tier: Tier,
}

fn is_phone(s: &ResolvedSignals) -> bool {
    s.platform == PlatformClass::Phone
}

fn is_tablet(s: &ResolvedSignals) -> bool {
    s.platform == PlatformClass::Tablet
}

fn is_weak_desktop(s: &ResolvedSignals) -> bool {
    s.cores <= 2 || s.memory_gb < 4.0 || !s.webgl
}

fn is_strong_desktop(s: &ResolvedSignals) -> bool {
    s.cores >= 8 && s.memory_gb >= 8.0 && s.webgl
}

fn always(_: &ResolvedSignals) -> bool {
    true
}

/// Evaluated top to bottom; the first matching rule wins. The last rule always matches.
pub const TIER_RULES: &[TierRule] = &[
    TierRule {
        name: "phone",
        matches: is_phone,
        tier: Tier::MobilePhone,
    },
    TierRule {
        name: "tablet",
        matches: is_tablet,
        tier: Tier::Tablet,
    },
    TierRule {
        name: "weak-desktop",
        matches: is_weak_desktop,
        tier: Tier::LowEndDesktop,
    },
    TierRule {
        name: "strong-desktop",
        matches: is_strong_desktop,
        tier: Tier::HighEndDesktop,
    },
    TierRule {
        name: "fallback",
        matches: always,
        tier: Tier::MidRangeDesktop,
    },
];

pub fn select_tier(signals: &ResolvedSignals) -> Tier {
    TIER_RULES
        .iter()
        .find(|rule| (rule.matches)(signals))
        .map(|rule| {
            log::debug!("[profile] rule '{}' matched", rule.name);
            rule.tier
        })
        .unwrap_or(Tier::MidRangeDesktop)
}

pub fn select_profile(signals: &DeviceSignals) -> CapabilityProfile {
    let resolved = signals.resolve();
    CapabilityProfile::for_tier(select_tier(&resolved), resolved.pixel_ratio)
}
