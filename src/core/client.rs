use crate::core::envelope::{decode_envelope, Envelope};
use crate::core::normalize::sort_by_period;
use crate::domain::model::{School, TimetableEntry, TimetableQuery};
use crate::domain::ports::SchoolDirectory;
use crate::utils::error::{NeisError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://open.neis.go.kr/hub";

const SCHOOL_INFO_ENDPOINT: &str = "schoolInfo";

const SEARCH_CONTEXT: &str = "school search";
const TIMETABLE_CONTEXT: &str = "timetable lookup";

/// Client for the NEIS open-data API.
///
/// The API key is optional on purpose: startup proceeds without one and the
/// first remote call reports the missing credential instead.
pub struct NeisClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NeisClient {
    /// `timeout` bounds every remote call; `None` leaves calls unbounded
    /// (the console variant's behavior).
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| NeisError::Network {
            context: "client setup",
            source: e,
        })?;

        Ok(NeisClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn fetch_json(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        context: &'static str,
    ) -> Result<Value> {
        let key = self.api_key.as_deref().ok_or(NeisError::MissingApiKey)?;
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut query: Vec<(&str, &str)> = vec![("KEY", key), ("Type", "json")];
        query.extend_from_slice(params);

        tracing::debug!("GET {} ({})", url, context);
        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| classify_transport_error(e, context))?;

        let status = response.status();
        tracing::debug!("{} response status: {}", context, status);
        if !status.is_success() {
            return Err(NeisError::HttpStatus {
                context,
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| classify_transport_error(e, context))?;
        serde_json::from_str(&text).map_err(|e| NeisError::JsonParse { context, source: e })
    }

    /// Looks up schools by (partial) name.
    pub async fn search_school(&self, name: &str) -> Result<Vec<School>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NeisError::MissingParameter {
                name: "school_name".to_string(),
            });
        }

        let body = self
            .fetch_json(SCHOOL_INFO_ENDPOINT, &[("SCHUL_NM", name)], SEARCH_CONTEXT)
            .await?;

        match decode_envelope(&body, SCHOOL_INFO_ENDPOINT, SEARCH_CONTEXT)? {
            Envelope::Empty => Ok(Vec::new()),
            Envelope::Rows(rows) => {
                let schools = rows
                    .into_iter()
                    .map(|row| {
                        serde_json::from_value(row).map_err(|e| NeisError::JsonParse {
                            context: SEARCH_CONTEXT,
                            source: e,
                        })
                    })
                    .collect::<Result<Vec<School>>>()?;
                tracing::debug!("school search matched {} rows", schools.len());
                Ok(schools)
            }
        }
    }

    /// Fetches one class's timetable for one day, sorted by period.
    /// Validates the query before anything goes over the wire.
    pub async fn timetable(&self, query: &TimetableQuery) -> Result<Vec<TimetableEntry>> {
        query.validate()?;

        let endpoint = query.kind.endpoint();
        let params = [
            ("ATPT_OFCDC_SC_CODE", query.office_code.as_str()),
            ("SD_SCHUL_CODE", query.school_code.as_str()),
            ("AY", query.academic_year()),
            ("GRADE", query.grade.as_str()),
            ("CLASS_NM", query.class_name.as_str()),
            ("TI_FROM_YMD", query.date.as_str()),
            ("TI_TO_YMD", query.date.as_str()),
        ];

        let body = self.fetch_json(endpoint, &params, TIMETABLE_CONTEXT).await?;

        match decode_envelope(&body, endpoint, TIMETABLE_CONTEXT)? {
            Envelope::Empty => Ok(Vec::new()),
            Envelope::Rows(rows) => {
                let entries = rows
                    .into_iter()
                    .map(|row| {
                        serde_json::from_value(row).map_err(|e| NeisError::JsonParse {
                            context: TIMETABLE_CONTEXT,
                            source: e,
                        })
                    })
                    .collect::<Result<Vec<TimetableEntry>>>()?;
                Ok(sort_by_period(entries))
            }
        }
    }
}

fn classify_transport_error(error: reqwest::Error, context: &'static str) -> NeisError {
    if error.is_timeout() {
        NeisError::Timeout { context }
    } else {
        NeisError::Network {
            context,
            source: error,
        }
    }
}

#[async_trait]
impl SchoolDirectory for NeisClient {
    async fn search_school(&self, name: &str) -> Result<Vec<School>> {
        NeisClient::search_school(self, name).await
    }

    async fn timetable(&self, query: &TimetableQuery) -> Result<Vec<TimetableEntry>> {
        NeisClient::timetable(self, query).await
    }
}
