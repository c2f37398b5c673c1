use crate::vector::VectorKind;

/// Depth limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Settings for one parser run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Representation of the vectors built by combinators
    pub vector_kind: VectorKind,
    /// Deepest allowed nesting of combinators, `None` for no limit
    pub max_depth: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            vector_kind: VectorKind::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        ParserConfig::default()
    }

    pub fn vector_kind(mut self, kind: VectorKind) -> Self {
        self.vector_kind = kind;
        self
    }

    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn unlimited_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.vector_kind, VectorKind::Array);
        assert_eq!(config.max_depth, Some(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn test_setters() {
        let config = ParserConfig::new()
            .vector_kind(VectorKind::Cons)
            .max_depth(16);
        assert_eq!(config.vector_kind, VectorKind::Cons);
        assert_eq!(config.max_depth, Some(16));
        assert_eq!(config.unlimited_depth().max_depth, None);
    }
}
