use crate::config::catalog::Service;
use crate::utils::error::{ProbeError, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use std::fmt;
use std::io::Read;

/// Performs one synchronous HTTP exchange per validated service descriptor.
pub struct Invoker {
    client: Client,
}

/// The rendered outcome of one invocation.
#[derive(Debug, Clone)]
pub struct InvocationReport {
    pub status_code: u16,
    pub status_text: String,
    pub body: String,
}

impl fmt::Display for InvocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Status Code: {}\nStatus Description: {}\nResponse:\n{}",
            self.status_code, self.status_text, self.body
        )
    }
}

impl Invoker {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Sends the single request described by `service` and captures the
    /// response. Any received status code, 4xx and 5xx included, is a
    /// reportable outcome; an error here means no response arrived at all,
    /// or the body ended short of its declared length.
    pub fn invoke(&self, service: &Service) -> Result<InvocationReport> {
        tracing::debug!("Sending {} request to {}", service.method, service.address);

        let request = if service.is_post() {
            let entity_body = service.entity_body.clone().into_bytes();
            self.client
                .post(service.address.as_str())
                .header(CONTENT_TYPE, service.content_type.as_str())
                .body(entity_body)
        } else {
            self.client.get(service.address.as_str())
        };

        let response = request.send()?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let declared_length = response.content_length();
        let body = read_body(response, declared_length)?;

        Ok(InvocationReport {
            status_code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

/// Reads the body to its declared length, or to end-of-data when no length
/// was declared. A stream that ends or fails short of the declared length is
/// an incomplete response, not a shorter one. The connection is released
/// when the response is dropped, on every path.
fn read_body(mut response: Response, declared_length: Option<u64>) -> Result<Vec<u8>> {
    match declared_length {
        Some(expected) => {
            let mut buffer = vec![0u8; expected as usize];
            let mut received = 0usize;
            while received < buffer.len() {
                match response.read(&mut buffer[received..]) {
                    Ok(0) => {
                        return Err(ProbeError::StreamTruncated {
                            expected,
                            received: received as u64,
                        })
                    }
                    Ok(n) => received += n,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(_) => {
                        return Err(ProbeError::StreamTruncated {
                            expected,
                            received: received as u64,
                        })
                    }
                }
            }
            Ok(buffer)
        }
        None => {
            let mut buffer = Vec::new();
            response.read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_rendering() {
        let report = InvocationReport {
            status_code: 200,
            status_text: "OK".to_string(),
            body: "pong".to_string(),
        };

        let rendered = report.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Status Code: 200");
        assert_eq!(lines[1], "Status Description: OK");
        assert_eq!(lines[2], "Response:");
        assert_eq!(lines[3], "pong");
    }

    #[test]
    fn test_report_rendering_multiline_body() {
        let report = InvocationReport {
            status_code: 404,
            status_text: "Not Found".to_string(),
            body: "line one\nline two".to_string(),
        };

        let rendered = report.to_string();
        assert!(rendered.starts_with("Status Code: 404\nStatus Description: Not Found\nResponse:\n"));
        assert!(rendered.ends_with("line one\nline two"));
    }
}
