use std::error::Error;
use parkview_core::errors::{ParkError, ParkResult};

#[test]
fn test_park_error_display() {
    let not_found = ParkError::NotFound("Spot not found".to_string());
    let validation = ParkError::Validation("Invalid input".to_string());
    let authentication = ParkError::Authentication("Invalid password".to_string());
    let authorization = ParkError::Authorization("Not authorized".to_string());
    let api = ParkError::Api(eyre::eyre!("Connection refused"));
    let internal = ParkError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Spot not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Invalid password"
    );
    assert_eq!(
        authorization.to_string(),
        "Authorization error: Not authorized"
    );
    assert!(api.to_string().contains("API error:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let park_error = ParkError::Internal(Box::new(io_error));

    assert!(park_error.source().is_some());
}

#[test]
fn test_park_result() {
    let result: ParkResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: ParkResult<i32> = Err(ParkError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let report = eyre::eyre!("Backend rejected the request");
    let park_error = ParkError::Api(report);

    assert!(park_error.to_string().contains("Backend rejected the request"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let park_error = ParkError::Internal(boxed_error);

    assert!(park_error.to_string().contains("IO error"));
}
