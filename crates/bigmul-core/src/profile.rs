//! Static display labels for each algorithm.
//!
//! The security label is a descriptive string only.

use serde::Serialize;

/// Labels shown next to benchmark results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmProfile {
    /// Human-readable algorithm name.
    pub full_name: &'static str,
    /// Asymptotic time complexity.
    pub time_complexity: &'static str,
    /// Asymptotic space complexity.
    pub space_complexity: &'static str,
    /// Descriptive security label.
    pub security_level: &'static str,
    /// One-sentence description.
    pub description: &'static str,
}

/// Labels for [`crate::Karatsuba`].
pub static KARATSUBA: AlgorithmProfile = AlgorithmProfile {
    full_name: "Karatsuba Algorithm",
    time_complexity: "O(n^log₂3) ≈ O(n^1.585)",
    space_complexity: "O(n)",
    security_level: "Medium",
    description: "A divide-and-conquer algorithm that reduces the multiplication of two \
                  n-digit numbers to three multiplications of n/2-digit numbers.",
};

/// Labels for [`crate::ToomCook3`].
pub static TOOM_COOK: AlgorithmProfile = AlgorithmProfile {
    full_name: "Toom-Cook Algorithm (Toom-3)",
    time_complexity: "O(n^log₃5) ≈ O(n^1.465)",
    space_complexity: "O(n)",
    security_level: "High",
    description: "A divide-and-conquer algorithm that splits integers into 3 parts, \
                  reducing 9 multiplications to 5.",
};

/// Labels for [`crate::SchonhageStrassen`].
pub static SCHONHAGE_STRASSEN: AlgorithmProfile = AlgorithmProfile {
    full_name: "Schönhage-Strassen Algorithm",
    time_complexity: "O(n log n log log n)",
    space_complexity: "O(n)",
    security_level: "Very High",
    description: "A fast multiplication algorithm that uses Fast Fourier Transform \
                  (FFT) techniques for large integer multiplication.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        let names = [
            KARATSUBA.full_name,
            TOOM_COOK.full_name,
            SCHONHAGE_STRASSEN.full_name,
        ];
        assert_eq!(names[0], "Karatsuba Algorithm");
        assert_eq!(names[1], "Toom-Cook Algorithm (Toom-3)");
        assert_eq!(names[2], "Schönhage-Strassen Algorithm");
        assert_eq!(SCHONHAGE_STRASSEN.security_level, "Very High");
    }

    #[test]
    fn description_continuation_is_single_spaced() {
        assert!(!KARATSUBA.description.contains("  "));
        assert!(KARATSUBA.description.contains("two n-digit numbers"));
    }
}
