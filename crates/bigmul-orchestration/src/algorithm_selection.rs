//! Algorithm selection logic.

use std::sync::Arc;

use bigmul_core::{Algorithm, AlgorithmFactory, CodecError};

/// Get algorithms to run based on a name or `all`.
pub fn get_algorithms_to_run(
    algo: &str,
    factory: &dyn AlgorithmFactory,
) -> Result<Vec<Arc<dyn Algorithm>>, CodecError> {
    if algo.eq_ignore_ascii_case("all") {
        return factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect();
    }
    Ok(vec![factory.get(algo)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigmul_core::{DefaultFactory, Multiplier};

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let algorithms = get_algorithms_to_run("all", &factory).unwrap();
        let names: Vec<&str> = algorithms.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["Karatsuba", "Toom-Cook-3", "Schönhage-Strassen"]);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let algorithms = get_algorithms_to_run("toom-cook", &factory).unwrap();
        assert_eq!(algorithms.len(), 1);
        assert_eq!(algorithms[0].name(), "Toom-Cook-3");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        let result = get_algorithms_to_run("fft", &factory);
        assert!(matches!(result, Err(CodecError::Config(_))));
    }
}
