/// Configuration options for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Keep the space between the tag name and the attribute text even
    /// when an element has no attributes (`<title >`). Existing consumers
    /// of the output may depend on it, so it stays on by default.
    pub pad_empty_attributes: bool,
}

/// Default configuration for rendering
impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pad_empty_attributes: true,
        }
    }
}

impl RenderConfig {
    /// Configuration that drops the padding space on attribute-less tags
    pub fn compact() -> Self {
        Self {
            pad_empty_attributes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pads_empty_attributes() {
        assert!(RenderConfig::default().pad_empty_attributes);
    }

    #[test]
    fn test_compact() {
        assert!(!RenderConfig::compact().pad_empty_attributes);
    }
}
