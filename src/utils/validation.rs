use crate::utils::error::HttpError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

/// Parses a JSON object body into `T` and runs its field validators.
pub fn parse<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, HttpError> {
    let value = serde_json::from_slice::<Value>(body).map_err(|err| {
        tracing::warn!("Failed to parse payload: {err}");
        HttpError::BadRequest(format!("Invalid JSON body: {err}"))
    })?;

    if !value.is_object() {
        return Err(HttpError::BadRequest(
            "Payload must be a JSON object".to_string(),
        ));
    }

    let payload = serde_json::from_value::<T>(value).map_err(|err| {
        tracing::warn!("Failed to deserialize payload: {err}");
        HttpError::BadRequest(err.to_string())
    })?;

    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        HttpError::BadRequest(errors.to_string())
    })?;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate, Debug)]
    #[serde(deny_unknown_fields)]
    struct Payload {
        #[validate(length(min = 1, message = "Name must not be empty"))]
        name: String,
    }

    fn bad_request(result: Result<Payload, HttpError>) -> String {
        match result {
            Err(HttpError::BadRequest(description)) => description,
            other => panic!("expected a bad request, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_valid_object() {
        let payload = parse::<Payload>(br#"{"name": "bike"}"#).unwrap();
        assert_eq!(payload.name, "bike");
    }

    #[test]
    fn rejects_malformed_json() {
        let description = bad_request(parse::<Payload>(b"{"));
        assert!(description.starts_with("Invalid JSON body"));
    }

    #[test]
    fn rejects_arrays() {
        let description = bad_request(parse::<Payload>(br#"["bike"]"#));
        assert_eq!(description, "Payload must be a JSON object");
    }

    #[test]
    fn rejects_unknown_fields() {
        let description = bad_request(parse::<Payload>(br#"{"name": "bike", "colour": "red"}"#));
        assert!(description.contains("unknown field `colour`"));
    }

    #[test]
    fn reports_failed_validators() {
        let description = bad_request(parse::<Payload>(br#"{"name": ""}"#));
        assert!(description.contains("Name must not be empty"));
    }
}
