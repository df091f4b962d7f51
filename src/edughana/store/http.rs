//! Provider backed by the portal's REST API.
//!
//! Endpoint map and response envelopes follow the portal server:
//! `/api/content/*` for the catalog, `/api/assessments` for tests and
//! `/api/news` for announcements. Every request carries the session's
//! bearer token when one is present; there is no retry logic, one failed
//! attempt surfaces as an error.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ContentProvider;
use crate::error::{PortalError, Result};
use crate::model::{
    Assessment, AssessmentKind, EducationalLevel, NewsItem, Resource, ResourceKind, Subject,
};
use crate::session::Session;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpProvider {
    client: Client,
    base_url: String,
    session: Session,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct LevelsEnvelope {
    educational_levels: Vec<EducationalLevel>,
}

#[derive(Deserialize)]
struct SubjectsEnvelope {
    subjects: Vec<Subject>,
}

#[derive(Deserialize)]
struct ContentEnvelope {
    content: Vec<Resource>,
}

#[derive(Deserialize)]
struct AssessmentsEnvelope {
    assessments: Vec<Assessment>,
}

#[derive(Deserialize)]
struct NewsEnvelope {
    news: Vec<NewsItem>,
}

impl HttpProvider {
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Exchange credentials for an authenticated session.
    pub fn login(&self, credentials: &Credentials) -> Result<Session> {
        let path = "/api/auth/login";
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(credentials)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::Api {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        let body: LoginResponse = response.json()?;
        Ok(Session::authenticated(body.token))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.authorize(request).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::Api {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.json()?)
    }
}

impl ContentProvider for HttpProvider {
    fn educational_levels(&self) -> Result<Vec<EducationalLevel>> {
        let envelope: LevelsEnvelope = self.get_json("/api/content/educational-levels", &[])?;
        Ok(envelope.educational_levels)
    }

    fn subjects(&self) -> Result<Vec<Subject>> {
        let envelope: SubjectsEnvelope = self.get_json("/api/content/subjects", &[])?;
        Ok(envelope.subjects)
    }

    fn resources(&self, kind: Option<ResourceKind>) -> Result<Vec<Resource>> {
        let envelope: ContentEnvelope = match kind {
            Some(kind) => self.get_json(
                "/api/content/resources",
                &[("content_type", kind.as_str())],
            )?,
            None => self.get_json("/api/content/resources", &[])?,
        };
        Ok(envelope.content)
    }

    fn assessments(&self, kind: Option<AssessmentKind>) -> Result<Vec<Assessment>> {
        let envelope: AssessmentsEnvelope = match kind {
            Some(kind) => {
                self.get_json("/api/assessments", &[("assessment_type", kind.as_str())])?
            }
            None => self.get_json("/api/assessments", &[])?,
        };
        Ok(envelope.assessments)
    }

    fn news(&self) -> Result<Vec<NewsItem>> {
        let envelope: NewsEnvelope = self.get_json("/api/news", &[])?;
        Ok(envelope.news)
    }

    fn featured_news(&self) -> Result<Vec<NewsItem>> {
        let envelope: NewsEnvelope = self.get_json("/api/news/featured", &[])?;
        Ok(envelope.news)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let provider =
            HttpProvider::new("http://localhost:5000/", Session::anonymous()).unwrap();
        assert_eq!(provider.base_url(), "http://localhost:5000");
    }

    #[test]
    fn credentials_serialize_to_expected_shape() {
        let credentials = Credentials {
            email: "ama@example.com".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json["email"], "ama@example.com");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn envelope_shapes_match_api() {
        let body = r#"{"educational_levels": [{"id": 1, "name": "JHS", "slug": "jhs"}]}"#;
        let envelope: LevelsEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.educational_levels[0].name, "JHS");

        let body = r#"{"content": []}"#;
        let envelope: ContentEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.content.is_empty());
    }
}
