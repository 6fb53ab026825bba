//! Array qualifier methods
//!
//! Only available while the last segment is a plain name; each method seals it.

use xkey_core::{ArraySpec, Segment};

use super::core::{KeyBuilder, NameOpen, Sealed};

impl KeyBuilder<NameOpen> {
    /// Qualify the last segment with `spec`
    #[must_use]
    pub fn array(mut self, spec: ArraySpec) -> KeyBuilder<Sealed> {
        if let Some(last) = self.segments.pop() {
            match Segment::with_array(last.name(), spec) {
                Ok(segment) => {
                    if self.debug_enabled {
                        log::debug!("KeyBuilder: qualified '{}' as '{segment}'", last.name());
                    }
                    self.segments.push(segment);
                }
                Err(e) => {
                    self.segments.push(last);
                    self.record(e);
                }
            }
        }
        self.transition()
    }

    /// `[index]`
    #[must_use]
    pub fn index(self, index: u32) -> KeyBuilder<Sealed> {
        self.array(ArraySpec::absolute(index))
    }

    /// `[*]`
    #[must_use]
    pub fn every(self) -> KeyBuilder<Sealed> {
        self.array(ArraySpec::wildcard())
    }

    /// `[lower..upper]`
    #[must_use]
    pub fn range(mut self, lower: u32, upper: u32) -> KeyBuilder<Sealed> {
        match ArraySpec::bounded_range(lower, upper) {
            Ok(spec) => self.array(spec),
            Err(e) => {
                self.record(e);
                self.transition()
            }
        }
    }

    /// `[lower..n]`
    #[must_use]
    pub fn from_index(self, lower: u32) -> KeyBuilder<Sealed> {
        self.array(ArraySpec::unbounded_range(lower))
    }
}
