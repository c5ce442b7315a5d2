//! Startup-time device classification.

use crate::constants::{
    CONSTRAINED_VIEWPORT_WIDTH, MOBILE_UA_TOKENS, PARTICLE_COUNT, PARTICLE_COUNT_CONSTRAINED,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceTier {
    Standard,
    /// Phones, tablets and narrow viewports get a smaller particle pool.
    Constrained,
}

impl DeviceTier {
    pub fn particle_count(self) -> usize {
        match self {
            DeviceTier::Standard => PARTICLE_COUNT,
            DeviceTier::Constrained => PARTICLE_COUNT_CONSTRAINED,
        }
    }
}

pub fn classify(user_agent: &str, viewport_width: f32) -> DeviceTier {
    let mobile_ua = MOBILE_UA_TOKENS.iter().any(|t| user_agent.contains(t));
    if mobile_ua || viewport_width < CONSTRAINED_VIEWPORT_WIDTH {
        DeviceTier::Constrained
    } else {
        DeviceTier::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
    const PHONE: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

    #[test]
    fn desktop_is_standard() {
        assert_eq!(classify(DESKTOP, 1440.0), DeviceTier::Standard);
    }

    #[test]
    fn mobile_user_agent_is_constrained() {
        assert_eq!(classify(PHONE, 1024.0), DeviceTier::Constrained);
        assert_eq!(
            classify("Mozilla/5.0 (Linux; Android 14; Pixel 8)", 1200.0),
            DeviceTier::Constrained
        );
    }

    #[test]
    fn narrow_viewport_is_constrained() {
        assert_eq!(classify(DESKTOP, 600.0), DeviceTier::Constrained);
    }

    #[test]
    fn constrained_tier_has_fewer_particles() {
        assert!(DeviceTier::Constrained.particle_count() < DeviceTier::Standard.particle_count());
    }
}
