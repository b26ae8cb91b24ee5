use reqwest::Response;
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;

use crate::dto::ErrorBody;

/// Reads the body, mapping non-2xx statuses and malformed JSON to `GatewayError`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Result<Response, reqwest::Error>,
) -> Result<T, GatewayError> {
    let response = response.map_err(|e| GatewayError::transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::transport(e.to_string()))?;
    decode(status, &body)
}

pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, GatewayError> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::api(status, error_message(body)));
    }
    serde_json::from_str(body).map_err(|e| GatewayError::decode(e.to_string()))
}

/// The `{message}` field of an error body, if the body has one.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::DeletedProductDto;

    #[test]
    fn should_extract_message_from_error_body() {
        let result: Result<DeletedProductDto, _> =
            decode(404, r#"{"message":"Product with id '0' not found"}"#);

        assert_eq!(
            result.unwrap_err(),
            GatewayError::api(404, Some("Product with id '0' not found".to_string()))
        );
    }

    #[test]
    fn should_leave_message_empty_for_non_json_error_body() {
        let result: Result<DeletedProductDto, _> = decode(502, "<html>Bad Gateway</html>");

        assert_eq!(result.unwrap_err(), GatewayError::api(502, None));
    }

    #[test]
    fn should_report_malformed_success_body_as_decode_error() {
        let result: Result<DeletedProductDto, _> = decode(200, r#"{"title":"no id"}"#);

        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[test]
    fn should_decode_success_body() {
        let result: DeletedProductDto = decode(200, r#"{"id":3,"isDeleted":true}"#).unwrap();
        assert_eq!(result.id, 3);
    }
}
