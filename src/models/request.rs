/*---------- Imports ----------*/
use lambda_http::http::Method;
use std::fmt;

/*---------- Enums ----------*/
/// What the dispatcher does with a request, decided by its method alone.
///
/// Matching is exact: `http::Method` keeps extension methods such as `post`
/// distinct from `POST`, so lowercase verbs end up as `Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Preflight,
    Create,
    Unsupported,
}

impl RequestKind {
    pub fn from_method(method: &Method) -> Self {
        match *method {
            Method::OPTIONS => RequestKind::Preflight,
            Method::POST => RequestKind::Create,
            _ => RequestKind::Unsupported,
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestKind::Preflight => "preflight",
            RequestKind::Create => "create",
            RequestKind::Unsupported => "unsupported",
        };

        write!(f, "{}", name)
    }
}
