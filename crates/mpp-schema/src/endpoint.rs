//! Endpoint descriptors: what the client sends where, and what it expects back.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shape::Shape;

/// A named backend target with its own base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facade {
    /// Main REST API.
    Api,
    /// SSO / authorization server.
    Sso,
    /// Public marketing site.
    Public,
}

impl Facade {
    /// Every facade, in declaration order.
    pub const ALL: [Facade; 3] = [Facade::Api, Facade::Sso, Facade::Public];

    /// Name used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Facade::Api => "api",
            Facade::Sso => "sso",
            Facade::Public => "public",
        }
    }

    /// Production base address.
    pub fn production_url(&self) -> &'static str {
        match self {
            Facade::Api => "https://api.monpetitplacement.fr/",
            Facade::Sso => "https://sso.monpetitplacement.fr/",
            Facade::Public => "https://www.monpetitplacement.fr/",
        }
    }
}

impl fmt::Display for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The facade name is not one of `api`, `sso`, `public`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown facade '{0}' (expected one of: api, sso, public)")]
pub struct UnknownFacade(pub String);

impl FromStr for Facade {
    type Err = UnknownFacade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facade::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFacade(s.to_string()))
    }
}

/// HTTP verbs the backend is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of one backend endpoint.
///
/// `path` is relative to the facade's base address; `{name}` segments are
/// filled from the input at call time. `input` lists what a caller supplies
/// (path parameters and, for authenticated endpoints, `token`); `output` is
/// what every response body is validated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub facade: Facade,
    pub authenticated: bool,
    pub input: &'static Shape,
    pub output: &'static Shape,
}

/// A path template could not be filled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathTemplateError {
    #[error("endpoint '{endpoint}': no value for path parameter '{name}'")]
    MissingParameter {
        endpoint: &'static str,
        name: &'static str,
    },

    #[error("endpoint '{endpoint}': malformed path segment '{segment}'")]
    Malformed {
        endpoint: &'static str,
        segment: &'static str,
    },
}

impl EndpointDescriptor {
    /// Names of the `{parameter}` segments, in path order.
    pub fn path_parameters(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
            .collect()
    }

    /// Fill the template and return the raw (unencoded) path segments.
    ///
    /// Percent-encoding is left to the URL builder so every segment is
    /// escaped by the same rules.
    ///
    /// # Errors
    ///
    /// Returns [`PathTemplateError::MissingParameter`] if `params` has no
    /// value for a template parameter, and [`PathTemplateError::Malformed`]
    /// for a segment with unbalanced braces.
    pub fn render_path(&self, params: &[(&str, String)]) -> Result<Vec<String>, PathTemplateError> {
        self.path
            .split('/')
            .map(|segment| {
                match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| value.clone())
                        .ok_or(PathTemplateError::MissingParameter {
                            endpoint: self.name,
                            name,
                        }),
                    None if segment.contains(['{', '}']) => Err(PathTemplateError::Malformed {
                        endpoint: self.name,
                        segment,
                    }),
                    None => Ok(segment.to_string()),
                }
            })
            .collect()
    }
}

/// Type-level pairing of a descriptor with the Rust type its output decodes to.
pub trait Endpoint {
    /// Decoded, validated response body.
    type Output: DeserializeOwned + Serialize + Send + 'static;

    const DESCRIPTOR: &'static EndpointDescriptor;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::required;

    const INPUT: Shape = Shape::StrictObject(&[
        required!("token", Shape::String),
        required!("userKycsId", Shape::Integer),
    ]);

    const ANALYSIS: EndpointDescriptor = EndpointDescriptor {
        name: "test_analysis",
        method: HttpMethod::Get,
        path: "v1/user_kycs/{userKycsId}/consulting_analysis/initial",
        facade: Facade::Api,
        authenticated: true,
        input: &INPUT,
        output: &Shape::Unknown,
    };

    #[test]
    fn facade_parses_known_names() {
        for facade in Facade::ALL {
            assert_eq!(facade.as_str().parse::<Facade>().unwrap(), facade);
        }
    }

    #[test]
    fn facade_rejects_unknown_name() {
        let err = "backoffice".parse::<Facade>().unwrap_err();
        assert_eq!(err, UnknownFacade("backoffice".into()));
        assert!(err.to_string().contains("backoffice"));
    }

    #[test]
    fn production_urls_end_with_slash() {
        for facade in Facade::ALL {
            assert!(facade.production_url().starts_with("https://"));
            assert!(facade.production_url().ends_with('/'));
        }
    }

    #[test]
    fn lists_path_parameters() {
        assert_eq!(ANALYSIS.path_parameters(), vec!["userKycsId"]);
    }

    #[test]
    fn renders_segments() {
        let segments = ANALYSIS
            .render_path(&[("userKycsId", "42".to_string())])
            .unwrap();
        assert_eq!(
            segments,
            vec!["v1", "user_kycs", "42", "consulting_analysis", "initial"]
        );
    }

    #[test]
    fn missing_parameter_is_an_error() {
        let err = ANALYSIS.render_path(&[]).unwrap_err();
        assert_eq!(
            err,
            PathTemplateError::MissingParameter {
                endpoint: "test_analysis",
                name: "userKycsId"
            }
        );
    }

    #[test]
    fn unbalanced_braces_are_malformed() {
        let broken = EndpointDescriptor {
            path: "v1/users/{userId/user_kycs",
            ..ANALYSIS
        };
        assert!(matches!(
            broken.render_path(&[("userId", "1".into())]),
            Err(PathTemplateError::Malformed { .. })
        ));
    }
}
