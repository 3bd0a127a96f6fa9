use crate::criteria::criteriaspec::CriteriaSpec;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;

fn get_criteria_spec_from_json(_name: &str, json_value: serde_json::Value) -> Result<CriteriaSpec, ManagerError> {
    ManagerError::from_json_or_json_parse_error(json_value)
}

pub struct CriteriaSpecManager;

impl CriteriaSpecManager {
    pub fn new() -> Manager<CriteriaSpec> {
        Manager::new(get_criteria_spec_from_json)
    }
}
