use svcprobe::{Catalog, ProbeError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_catalog_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let toml_content = r#"
[[applications]]
name = "Orders"

[[applications.services]]
name = "Ping"
address = "http://svc/ping"
method = "GET"

[[applications.services]]
name = "Submit"
address = "http://svc/submit"
method = "POST"
contentType = "application/json"
entityBody = '{"order": 1}'
"#;

    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let catalog = Catalog::from_file(temp_file.path()).unwrap();
    assert_eq!(catalog.application_count(), 1);

    let orders = catalog.application_by_name("Orders").unwrap();
    assert_eq!(orders.service_count(), 2);
    assert_eq!(orders.service_at(0).unwrap().name, "Ping");
    assert!(orders.service_by_name("Submit").unwrap().is_post());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = Catalog::from_file("/no/such/catalog.toml").unwrap_err();
    assert!(matches!(err, ProbeError::IoError(_)));
}

#[test]
fn test_invalid_service_fails_the_whole_load() {
    let mut temp_file = NamedTempFile::new().unwrap();

    // The first application is fine; the second carries an invalid service.
    let toml_content = r#"
[[applications]]
name = "Orders"

[[applications.services]]
name = "Ping"
address = "http://svc/ping"
method = "GET"

[[applications]]
name = "Billing"

[[applications.services]]
name = "Broken"
address = "http://svc/broken"
method = "POST"
entityBody = "x"
"#;

    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let err = Catalog::from_file(temp_file.path()).unwrap_err();
    assert!(matches!(
        err,
        ProbeError::ConfigError { ref message }
            if message == "contentType must be specified when method is POST"
    ));
}
