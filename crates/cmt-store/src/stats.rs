//! Derived readiness statistics.

/// Counts derived from joining a catalog with the assessment store.
/// Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessStats {
    /// Practices whose effective scope is not `out`.
    pub applicable: usize,
    /// Applicable practices whose effective status is `implemented`.
    pub implemented: usize,
}

impl ReadinessStats {
    /// Readiness as a rounded percentage, undefined when nothing is
    /// applicable.
    pub fn readiness_percent(&self) -> Option<u32> {
        if self.applicable == 0 {
            None
        } else {
            Some(((self.implemented as f64 / self.applicable as f64) * 100.0).round() as u32)
        }
    }

    /// Readiness for display: `"57%"`, or the `–` placeholder when
    /// undefined.
    pub fn readiness_display(&self) -> String {
        match self.readiness_percent() {
            Some(pct) => format!("{pct}%"),
            None => "–".to_string(),
        }
    }
}

impl std::fmt::Display for ReadinessStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} applicable, {} implemented, readiness {}",
            self.applicable,
            self.implemented,
            self.readiness_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_is_undefined_with_nothing_applicable() {
        let stats = ReadinessStats {
            applicable: 0,
            implemented: 0,
        };
        assert_eq!(stats.readiness_percent(), None);
        assert_eq!(stats.readiness_display(), "–");
    }

    #[test]
    fn readiness_rounds_to_nearest_percent() {
        let stats = ReadinessStats {
            applicable: 3,
            implemented: 2,
        };
        // 66.66… rounds to 67.
        assert_eq!(stats.readiness_percent(), Some(67));

        let stats = ReadinessStats {
            applicable: 8,
            implemented: 1,
        };
        // 12.5 rounds to 13 (round half away from zero).
        assert_eq!(stats.readiness_percent(), Some(13));
    }

    #[test]
    fn full_implementation_is_one_hundred_percent() {
        let stats = ReadinessStats {
            applicable: 17,
            implemented: 17,
        };
        assert_eq!(stats.readiness_percent(), Some(100));
        assert_eq!(stats.readiness_display(), "100%");
    }
}
