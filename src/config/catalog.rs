use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The full set of configured applications. Loaded once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub applications: Vec<Application>,
}

/// A named grouping of related web service endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// One configured HTTP endpoint descriptor.
///
/// `contentType` and `entityBody` keep their attribute names in the TOML
/// document; a missing key and an empty string are equivalent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub address: String,
    pub method: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub entity_body: String,
}

impl Catalog {
    /// Loads and validates the catalog from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProbeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the catalog from a TOML string. Validation is all-or-nothing:
    /// a single invalid record fails the whole load.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let catalog: Catalog =
            toml::from_str(&processed_content).map_err(|e| ProbeError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Replaces `${VAR}` placeholders with environment variable values.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn application_count(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn application_at(&self, index: usize) -> Result<&Application> {
        self.applications
            .get(index)
            .ok_or_else(|| ProbeError::OutOfRange {
                kind: "application",
                index,
                count: self.applications.len(),
            })
    }

    pub fn application_by_name(&self, name: &str) -> Result<&Application> {
        self.applications
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| ProbeError::NotFound {
                kind: "application",
                name: name.to_string(),
            })
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for application in &self.applications {
            validate_non_empty_string("applications.name", &application.name)?;
            if !seen.insert(application.name.as_str()) {
                return Err(ProbeError::InvalidConfigValue {
                    field: "applications.name".to_string(),
                    value: application.name.clone(),
                    reason: "Duplicate application name".to_string(),
                });
            }
            application.validate()?;
        }
        Ok(())
    }
}

impl Application {
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn service_at(&self, index: usize) -> Result<&Service> {
        self.services.get(index).ok_or_else(|| ProbeError::OutOfRange {
            kind: "service",
            index,
            count: self.services.len(),
        })
    }

    pub fn service_by_name(&self, name: &str) -> Result<&Service> {
        self.services
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ProbeError::NotFound {
                kind: "service",
                name: name.to_string(),
            })
    }
}

impl Validate for Application {
    fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for service in &self.services {
            let field = format!("applications.{}.services.name", self.name);
            validate_non_empty_string(&field, &service.name)?;
            if !seen.insert(service.name.as_str()) {
                return Err(ProbeError::InvalidConfigValue {
                    field,
                    value: service.name.clone(),
                    reason: "Duplicate service name".to_string(),
                });
            }
            service.validate()?;
        }
        Ok(())
    }
}

impl Service {
    pub fn is_post(&self) -> bool {
        self.method == "POST"
    }
}

impl Validate for Service {
    /// Applied once the whole record is assembled. GET is checked before
    /// POST, and contentType before entityBody.
    fn validate(&self) -> Result<()> {
        validate_url(&format!("services.{}.address", self.name), &self.address)?;

        match self.method.as_str() {
            "GET" => {
                if !self.content_type.is_empty() {
                    return Err(ProbeError::ConfigError {
                        message: "contentType must not be specified when method is GET".to_string(),
                    });
                }
                if !self.entity_body.is_empty() {
                    return Err(ProbeError::ConfigError {
                        message: "entityBody must not be specified when method is GET".to_string(),
                    });
                }
                Ok(())
            }
            "POST" => {
                if self.content_type.is_empty() {
                    return Err(ProbeError::ConfigError {
                        message: "contentType must be specified when method is POST".to_string(),
                    });
                }
                if self.entity_body.is_empty() {
                    return Err(ProbeError::ConfigError {
                        message: "entityBody must be specified when method is POST".to_string(),
                    });
                }
                Ok(())
            }
            _ => Err(ProbeError::ConfigError {
                message: "method must be GET or POST".to_string(),
            }),
        }
    }
}
