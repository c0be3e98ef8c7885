//! Portraits — deterministic image URLs keyed by DNA
//!
//! The rendering layer shows each cat through an external image service
//! that returns the same picture for the same path. Only the URL is built
//! here; fetching is left to the caller.

use crate::cat::Dna;
use serde::{Deserialize, Serialize};

/// Where portraits come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortraitConfig {
    /// Service root, without a trailing slash
    pub base_url: String,
    /// Image set requested from the service (`set4` draws cats)
    pub set: String,
}

impl Default for PortraitConfig {
    fn default() -> Self {
        Self {
            base_url: "https://robohash.org".into(),
            set: "set4".into(),
        }
    }
}

impl PortraitConfig {
    /// Portrait URL for `dna`: `{base_url}/{dna}?set={set}`
    pub fn url(&self, dna: &Dna) -> String {
        format!("{}/{}?set={}", self.base_url.trim_end_matches('/'), dna, self.set)
    }
}

/// Portrait URL using the default service
pub fn portrait_url(dna: &Dna) -> String {
    PortraitConfig::default().url(dna)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let dna = Dna::parse("SAEGRHYOMCCREPUGDNDDIICTSJZQRYVQ").unwrap();
        assert_eq!(
            portrait_url(&dna),
            "https://robohash.org/SAEGRHYOMCCREPUGDNDDIICTSJZQRYVQ?set=set4"
        );
    }

    #[test]
    fn test_custom_service() {
        let dna = Dna::parse("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap();
        let config = PortraitConfig {
            base_url: "http://localhost:8080/".into(),
            set: "set1".into(),
        };
        assert_eq!(
            config.url(&dna),
            "http://localhost:8080/AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA?set=set1"
        );
    }
}
