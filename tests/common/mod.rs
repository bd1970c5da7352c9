use endpoint_client::data_request::{Headers, Parameters};
use endpoint_client::{DataRequest, Method, ParamValue};
use reqwest::Url;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Game {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GameList {
    pub count: u32,
    pub results: Vec<Game>,
}

/// A catalogue API described as an enum, one variant per endpoint.
pub enum GamesApi {
    List { base_url: String, page: u32 },
    Search { base_url: String, term: String },
    Detail { base_url: String, id: u32 },
    Remove { base_url: String, id: u32 },
}

impl GamesApi {
    fn base(&self) -> &str {
        match self {
            GamesApi::List { base_url, .. }
            | GamesApi::Search { base_url, .. }
            | GamesApi::Detail { base_url, .. }
            | GamesApi::Remove { base_url, .. } => base_url,
        }
    }
}

impl DataRequest for GamesApi {
    fn base_url(&self) -> Url {
        Url::parse(self.base()).unwrap()
    }

    fn path(&self) -> String {
        match self {
            GamesApi::List { .. } | GamesApi::Search { .. } => "/games".to_string(),
            GamesApi::Detail { id, .. } | GamesApi::Remove { id, .. } => format!("/games/{}", id),
        }
    }

    fn method(&self) -> Method {
        match self {
            GamesApi::Remove { .. } => Method::Delete,
            _ => Method::Get,
        }
    }

    fn headers(&self) -> Option<Headers> {
        Some(vec![("Accept".to_string(), "application/json".to_string())])
    }

    fn parameters(&self) -> Option<Parameters> {
        match self {
            GamesApi::List { page, .. } => Some(vec![("page".to_string(), ParamValue::from(*page))]),
            GamesApi::Search { term, .. } => Some(vec![(
                "search".to_string(),
                ParamValue::from(term.as_str()),
            )]),
            _ => None,
        }
    }
}
