use gmm_core::errors::{config_error, GmmError};
use serde::{de::DeserializeOwned, Serialize};

/// Deserializes a configuration document from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, GmmError> {
    serde_json::from_slice(data).map_err(|err| config_error("json_deserialize", err))
}

/// Deserializes a configuration document from YAML bytes.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, GmmError> {
    serde_yaml::from_slice(data).map_err(|err| config_error("yaml_deserialize", err))
}

/// Serializes a configuration document into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, GmmError> {
    serde_yaml::to_string(value).map_err(|err| config_error("yaml_serialize", err))
}
