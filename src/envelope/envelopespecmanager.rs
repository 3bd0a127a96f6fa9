use tracing::warn;

use crate::envelope::envelopespec::EnvelopeSpec;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;

fn get_envelope_spec_from_json(name: &str, json_value: serde_json::Value) -> Result<EnvelopeSpec, ManagerError> {
    let spec: EnvelopeSpec = ManagerError::from_json_or_json_parse_error(json_value)?;
    spec.validate().map_err(|source| {
        warn!(name, %source, "rejected envelope preset");
        ManagerError::Envelope { name: name.to_owned(), source }
    })?;
    Ok(spec)
}

/// Envelope presets are validated on load, so every stored spec can be
/// generated.
pub struct EnvelopeSpecManager;

impl EnvelopeSpecManager {
    pub fn new() -> Manager<EnvelopeSpec> {
        Manager::new(get_envelope_spec_from_json)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::envelope::envelopespec::EnvelopeError;
    use crate::manager::manager::IManager;

    #[test]
    fn loads_valid_envelope() {
        let manager = EnvelopeSpecManager::new();
        manager.insert_obj_from_json(json!({
            "name": "beach_sand",
            "d50_min": 0.3, "d50_max": 0.4,
            "cu_min": 1.5, "cu_max": 2.5,
            "fines_max": 5.0,
            "points": 120
        })).unwrap();
        let spec = manager.get("beach_sand").unwrap();
        assert_eq!(spec, EnvelopeSpec::new(0.3, 0.4, 1.5, 2.5, 5.0).with_points(120));
    }

    #[test]
    fn invalid_envelope_is_not_stored() {
        let manager = EnvelopeSpecManager::new();
        let err = manager.insert_obj_from_json(json!({
            "name": "uniform",
            "d50_min": 0.3, "d50_max": 0.4,
            "cu_min": 1.0, "cu_max": 2.5,
            "fines_max": 5.0
        })).unwrap_err();
        match err {
            ManagerError::Envelope { name, source } => {
                assert_eq!(name, "uniform");
                assert!(matches!(source, EnvelopeError::InvalidParameter { name: "cu_min", .. }));
            },
            other => panic!("unexpected error {:?}", other)
        }
        assert!(!manager.contains("uniform"));
    }
}
