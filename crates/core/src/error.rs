use crate::validation::FieldError;

/// Errors that reject a request before anything reaches the store.
///
/// Every variant renders as a `name` / `message` pair for the response
/// envelope, plus a shorter [`CoreError::summary`] used for log lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Missing env variables: {0}")]
    MissingConfig(&'static str),

    #[error("Request body is empty")]
    NoBody,

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("Malformed body: {0}")]
    MalformedBody(String),

    #[error("Request body contains no products")]
    NoProducts,

    #[error(transparent)]
    Field(#[from] FieldError),
}

const ARRAY_OF_PRODUCTS_HINT: &str =
    "Please provide an array of products with all the required properties";

impl CoreError {
    /// Short title for the error, e.g. `No sku provided`.
    pub fn name(&self) -> String {
        match self {
            CoreError::MissingConfig(_) => "Missing env variables".to_string(),
            CoreError::NoBody => "No arguments provided".to_string(),
            CoreError::UnsupportedMethod(_) => "Only POST and PATCH are supported".to_string(),
            CoreError::MalformedBody(_) => "Malformed body".to_string(),
            CoreError::NoProducts => "No new products provided".to_string(),
            CoreError::Field(err) => err.name().to_string(),
        }
    }

    /// Caller-facing explanation of how to fix the request.
    pub fn message(&self) -> String {
        match self {
            CoreError::MissingConfig(var) => {
                format!("Please provide {var} in environment variables")
            }
            CoreError::NoBody | CoreError::NoProducts => ARRAY_OF_PRODUCTS_HINT.to_string(),
            CoreError::UnsupportedMethod(_) => "Please send a POST http request to add a new \
                 product and a PATCH http request to update existing products"
                .to_string(),
            CoreError::MalformedBody(reason) => {
                format!("Please provide the products as a JSON array ({reason})")
            }
            CoreError::Field(err) => err.message(),
        }
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        match self {
            CoreError::MissingConfig(var) => format!("Missing {var} in environment variables"),
            CoreError::NoBody => "Validation Error in provided event".to_string(),
            CoreError::UnsupportedMethod(method) => {
                format!("Please provide a valid http method (got {method})")
            }
            CoreError::MalformedBody(_) => "Validation Error in provided body".to_string(),
            CoreError::NoProducts => "Validation Error in provided products".to_string(),
            CoreError::Field(err) => err.summary(),
        }
    }
}
