use anyhow::anyhow;
use reqwest::Url;
use std::fmt::{Display, Formatter};
use std::str::FromStr;


pub type Headers = Vec<(String, String)>;
pub type Parameters = Vec<(String, ParamValue)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            _ => Err(anyhow!("Unsupported method '{}'", s)),
        }
    }
}

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Raw bytes, sent only when they are valid UTF-8.
    Bytes(Vec<u8>),
}

impl ParamValue {
    /// Text placed in the query string before percent-encoding.
    ///
    /// `None` means the value has no URL representation and the parameter
    /// is left out of the request.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            ParamValue::Str(value) => Some(value.clone()),
            ParamValue::Int(value) => Some(value.to_string()),
            ParamValue::UInt(value) => Some(value.to_string()),
            ParamValue::Float(value) => Some(float_text(*value)),
            ParamValue::Bool(value) => Some(value.to_string()),
            ParamValue::Bytes(value) => std::str::from_utf8(value).ok().map(str::to_string),
        }
    }
}

/// Floats keep their fractional part (`2.0`) and non-finite values are
/// spelled `nan`, `inf` and `-inf`.
fn float_text(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:?}", value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::UInt(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(value: Vec<u8>) -> Self {
        ParamValue::Bytes(value)
    }
}

impl From<&[u8]> for ParamValue {
    fn from(value: &[u8]) -> Self {
        ParamValue::Bytes(value.to_vec())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Everything needed to issue one HTTP request.
///
/// Implementors only have to say where the request goes and how; headers
/// and query parameters default to none. Nothing is validated here, a bad
/// `path` is reported when the request is built.
pub trait DataRequest {
    fn base_url(&self) -> Url;
    fn path(&self) -> String;
    fn method(&self) -> Method;

    fn headers(&self) -> Option<Headers> {
        None
    }

    fn parameters(&self) -> Option<Parameters> {
        None
    }
}

/// Plain value implementation of [`DataRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub base_url: Url,
    pub path: String,
    pub method: Method,
    pub headers: Option<Headers>,
    pub parameters: Option<Parameters>,
}

impl Endpoint {
    pub fn new(base_url: Url, path: impl Into<String>, method: Method) -> Self {
        Endpoint {
            base_url,
            path: path.into(),
            method,
            headers: None,
            parameters: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

impl DataRequest for Endpoint {
    fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn method(&self) -> Method {
        self.method
    }

    fn headers(&self) -> Option<Headers> {
        self.headers.clone()
    }

    fn parameters(&self) -> Option<Parameters> {
        self.parameters.clone()
    }
}
