//! Section regions and the active-section resolver
//!
//! The laid-out document is an ordered list of labeled vertical spans.
//! Given a scroll offset and the fixed header height, the resolver picks
//! the section currently sitting under the header edge so the header can
//! mirror its title.

/// A labeled vertical span of the laid-out document
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Title shown in the header while this section is active
    pub label: String,
    /// First line of the section, in document coordinates
    pub top: f64,
    /// Height of the section in lines
    pub height: f64,
}

impl Section {
    /// Create a section span
    pub fn new(label: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            label: label.into(),
            top,
            height,
        }
    }
}

/// Resolves a scroll offset to the active section label
///
/// Sections are scanned in document order and the first one whose adjusted
/// span contains the offset wins, so overlapping spans deterministically
/// resolve to the earliest section.
#[derive(Debug, Clone)]
pub struct SectionResolver {
    sections: Vec<Section>,
    default_label: String,
}

impl SectionResolver {
    /// Create a resolver over sections ordered by ascending start offset
    pub fn new(sections: Vec<Section>, default_label: impl Into<String>) -> Self {
        Self {
            sections,
            default_label: default_label.into(),
        }
    }

    /// Replace the section list (after a relayout)
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// The sections currently scanned
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// True when there is nothing to resolve against
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Resolve the active label for a scroll offset
    ///
    /// A section is active while the offset lies in
    /// `[top - header_height, top + height - header_height)`; the header
    /// height shifts every span up by the rows the fixed header masks.
    /// Offsets outside every span (including NaN) fall back to the default
    /// label.
    pub fn resolve(&self, scroll_offset: f64, header_height: f64) -> &str {
        for section in &self.sections {
            let start = section.top - header_height;
            let end = section.top + section.height - header_height;
            if scroll_offset >= start && scroll_offset < end {
                return &section.label;
            }
        }
        &self.default_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> SectionResolver {
        SectionResolver::new(
            vec![
                Section::new("A", 0.0, 500.0),
                Section::new("B", 500.0, 500.0),
            ],
            "Home",
        )
    }

    #[test]
    fn test_default_outside_every_span() {
        let r = resolver();
        assert_eq!(r.resolve(-100.0, 50.0), "Home");
        assert_eq!(r.resolve(950.0, 50.0), "Home");
        assert_eq!(r.resolve(10_000.0, 50.0), "Home");
    }

    #[test]
    fn test_label_inside_a_span() {
        let r = resolver();
        assert_eq!(r.resolve(0.0, 50.0), "A");
        assert_eq!(r.resolve(100.0, 50.0), "A");
        assert_eq!(r.resolve(700.0, 50.0), "B");
    }

    #[test]
    fn test_boundary_transition_at_header_adjusted_start() {
        // B starts at 500 with a 50-line header, so the handoff is at 450
        let r = resolver();
        assert_eq!(r.resolve(449.0, 50.0), "A");
        assert_eq!(r.resolve(449.999, 50.0), "A");
        assert_eq!(r.resolve(450.0, 50.0), "B");
        assert_eq!(r.resolve(460.0, 50.0), "B");
    }

    #[test]
    fn test_overlapping_spans_pick_earliest() {
        let r = SectionResolver::new(
            vec![
                Section::new("first", 0.0, 600.0),
                Section::new("second", 500.0, 500.0),
            ],
            "Home",
        );
        // 550 is inside both adjusted spans; document order wins
        assert_eq!(r.resolve(550.0, 0.0), "first");
        assert_eq!(r.resolve(601.0, 0.0), "second");
    }

    #[test]
    fn test_zero_header_height() {
        let r = resolver();
        assert_eq!(r.resolve(499.0, 0.0), "A");
        assert_eq!(r.resolve(500.0, 0.0), "B");
    }

    #[test]
    fn test_nan_offset_falls_back_to_default() {
        let r = resolver();
        assert_eq!(r.resolve(f64::NAN, 50.0), "Home");
    }

    #[test]
    fn test_empty_resolver_always_default() {
        let r = SectionResolver::new(Vec::new(), "Home");
        assert!(r.is_empty());
        assert_eq!(r.resolve(0.0, 0.0), "Home");
    }
}
