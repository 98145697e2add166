//! Reveal-on-scroll configuration.
//!
//! One parameterized utility replaces the family of near-identical
//! section/headline/stagger variants: callers tune the marker attribute,
//! the intersection threshold and the per-element stagger instead of
//! picking a different wrapper.

/// Configuration for the `Reveal` host component.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RevealOptions {
    /// Attribute that marks revealable descendants.
    pub marker: &'static str,
    /// Intersection ratio that triggers the reveal.
    pub threshold: f64,
    /// Extra transition delay per element index, for staggered groups.
    pub stagger_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            marker: "data-reveal",
            threshold: 0.2,
            stagger_ms: 0,
        }
    }
}

impl RevealOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_stagger(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn with_marker(mut self, marker: &'static str) -> Self {
        self.marker = marker;
        self
    }

    /// CSS selector matching marked descendants.
    pub fn selector(&self) -> String {
        format!("[{}]", self.marker)
    }

    /// Transition delay applied to the element at `index`.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.stagger_ms.saturating_mul(index as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_common_case() {
        let options = RevealOptions::default();
        assert_eq!(options.marker, "data-reveal");
        assert_eq!(options.threshold, 0.2);
        assert_eq!(options.stagger_ms, 0);
        assert_eq!(options.selector(), "[data-reveal]");
    }

    #[test]
    fn stagger_scales_linearly_with_index() {
        let options = RevealOptions::default().with_stagger(120);
        assert_eq!(options.delay_for(0), 0);
        assert_eq!(options.delay_for(3), 360);
    }

    #[test]
    fn builder_overrides_compose() {
        let options = RevealOptions::default()
            .with_threshold(0.3)
            .with_marker("data-fade");
        assert_eq!(options.threshold, 0.3);
        assert_eq!(options.selector(), "[data-fade]");
    }
}
