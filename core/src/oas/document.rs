#![deny(missing_docs)]

//! # OpenAPI Document Model
//!
//! The subset of an OpenAPI 3.x document the type compiler consumes: paths with
//! their operations, parameters, request bodies and responses, plus the
//! reusable `components` registry.
//!
//! Parsing goes through a JSON value so the normalization passes can rewrite
//! compatibility gaps before the typed model is built.

use crate::error::{AppError, AppResult};
use crate::oas::normalization::normalize_document;
use crate::oas::schema::Schema;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Media type of JSON bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Media type of raw binary bodies.
pub const BINARY_MEDIA_TYPE: &str = "application/octet-stream";

/// The only response status whose body is typed.
pub const SUCCESS_STATUS: &str = "200";

/// Either a `$ref` pointer or an inline object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    /// A `{ "$ref": "..." }` object.
    Ref(Reference),
    /// An inline definition.
    Item(T),
}

impl<T> RefOr<T> {
    /// Returns the inline item, if this is not a reference.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            RefOr::Ref(_) => None,
            RefOr::Item(item) => Some(item),
        }
    }

    /// Returns true when this is still a reference.
    pub fn is_ref(&self) -> bool {
        matches!(self, RefOr::Ref(_))
    }
}

/// A Reference Object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    /// The JSON pointer, e.g. `#/components/parameters/Limit`.
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

/// The parsed API description.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
    /// Path templates mapped to their Path Items, in declaration order.
    #[serde(default)]
    pub paths: IndexMap<String, RefOr<PathItem>>,
    /// Reusable definitions.
    #[serde(default)]
    pub components: Option<Components>,
}

/// The `components` registry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Named schemas; each becomes one exported type alias.
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
    /// Named parameters, targets of parameter references.
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,
    /// Named path items, targets of path item references.
    #[serde(default)]
    pub path_items: IndexMap<String, RefOr<PathItem>>,
}

/// HTTP methods that may key an Operation inside a Path Item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    /// DELETE
    Delete,
    /// GET
    Get,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// PATCH
    Patch,
    /// POST
    Post,
    /// PUT
    Put,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// All methods, in the order operations are visited.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Delete,
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Patch,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Trace,
    ];

    /// The lowercase key used in Path Items.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Delete => "delete",
            HttpMethod::Get => "get",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
            HttpMethod::Patch => "patch",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The operations declared for one path template.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation of this item.
    pub parameters: Option<Vec<RefOr<Parameter>>>,
    /// DELETE operation.
    pub delete: Option<Operation>,
    /// GET operation.
    pub get: Option<Operation>,
    /// HEAD operation.
    pub head: Option<Operation>,
    /// OPTIONS operation.
    pub options: Option<Operation>,
    /// PATCH operation.
    pub patch: Option<Operation>,
    /// POST operation.
    pub post: Option<Operation>,
    /// PUT operation.
    pub put: Option<Operation>,
    /// TRACE operation.
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Returns the operation declared for `method`.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Iterates the declared operations in [`HttpMethod::ALL`] order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }

    /// Mutable access to every declared operation.
    pub fn operations_mut(&mut self) -> impl Iterator<Item = &mut Operation> {
        [
            &mut self.delete,
            &mut self.get,
            &mut self.head,
            &mut self.options,
            &mut self.patch,
            &mut self.post,
            &mut self.put,
            &mut self.trace,
        ]
        .into_iter()
        .filter_map(Option::as_mut)
    }
}

/// One HTTP method handler on a path.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Optional unique identifier of the operation.
    pub operation_id: Option<String>,
    /// Parameters of this operation.
    pub parameters: Option<Vec<RefOr<Parameter>>>,
    /// Request body definition.
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// Resolved parameters of the given location, in declaration order.
    ///
    /// Parameters that are still references are skipped.
    pub fn parameters_in(&self, location: ParameterLocation) -> Vec<&Parameter> {
        self.parameters
            .iter()
            .flatten()
            .filter_map(RefOr::as_item)
            .filter(|param| param.location == location)
            .collect()
    }

    /// The `"200"` response, if declared.
    pub fn success_response(&self) -> Option<&Response> {
        self.responses.get(SUCCESS_STATUS)
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Templated path segment.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Cookie.
    Cookie,
}

/// A Parameter Object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// The parameter location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter must be supplied.
    #[serde(default)]
    pub required: bool,
    /// The value schema.
    pub schema: Option<Schema>,
}

/// A Request Body Object.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RequestBody {
    /// Whether a body must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Media types mapped to their content.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A Response Object.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Response {
    /// Media types mapped to their content.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A Media Type Object.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MediaType {
    /// The body schema.
    pub schema: Option<Schema>,
}

/// A body-carrying object (request body or response).
pub trait BodyContent {
    /// Media types mapped to their content.
    fn content(&self) -> &IndexMap<String, MediaType>;

    /// The schema under `application/json`.
    fn json_schema(&self) -> Option<&Schema> {
        self.content()
            .get(JSON_MEDIA_TYPE)
            .and_then(|media| media.schema.as_ref())
    }

    /// Whether the body is declared as raw `application/octet-stream` binary.
    fn is_binary(&self) -> bool {
        self.content()
            .get(BINARY_MEDIA_TYPE)
            .and_then(|media| media.schema.as_ref())
            .is_some_and(Schema::is_binary)
    }
}

impl BodyContent for RequestBody {
    fn content(&self) -> &IndexMap<String, MediaType> {
        &self.content
    }
}

impl BodyContent for Response {
    fn content(&self) -> &IndexMap<String, MediaType> {
        &self.content
    }
}

/// An operation together with the method and path it is declared under.
#[derive(Debug, Clone, Copy)]
pub struct OperationEntry<'a> {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path template, e.g. `/items/{id}`.
    pub path: &'a str,
    /// The operation itself.
    pub operation: &'a Operation,
}

impl Document {
    /// Parses a YAML (or JSON) OpenAPI document.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let raw: Value = serde_yaml::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI YAML: {}", e)))?;
        Self::from_value(raw)
    }

    /// Builds the typed model from an already parsed JSON value.
    pub fn from_value(mut raw: Value) -> AppResult<Self> {
        normalize_document(&mut raw);
        serde_json::from_value(raw)
            .map_err(|e| AppError::Parse(format!("Invalid OpenAPI document: {}", e)))
    }

    /// Every operation of every non-reference Path Item.
    ///
    /// Paths keep declaration order; operations within a path follow
    /// [`HttpMethod::ALL`].
    pub fn operations(&self) -> Vec<OperationEntry<'_>> {
        self.paths
            .iter()
            .filter_map(|(path, item)| item.as_item().map(|item| (path, item)))
            .flat_map(|(path, item)| {
                item.operations().map(move |(method, operation)| OperationEntry {
                    method,
                    path: path.as_str(),
                    operation,
                })
            })
            .collect()
    }

    /// Named component schemas, `None` when there is no registry.
    pub fn schemas(&self) -> Option<&IndexMap<String, Schema>> {
        self.components.as_ref().map(|c| &c.schemas)
    }
}
