use serde::de::DeserializeOwned;

use crate::error::GenError;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, GenError> {
    from_slice_with_path(src.as_bytes())
}

pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GenError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize::<_, T>(&mut de).map_err(into_decode_error)?;
    de.end().map_err(|err| GenError::Decode {
        path: ".".to_string(),
        message: err.to_string(),
    })?;
    Ok(value)
}

fn into_decode_error(err: serde_path_to_error::Error<serde_json::Error>) -> GenError {
    GenError::Decode {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    }
}
