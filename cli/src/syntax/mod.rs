pub mod bru_file;
pub mod error;
pub mod http_method;
pub mod keywords;
pub mod lines;
pub mod section;
pub mod template;

pub use bru_file::{BruFile, Meta, RequestLine, RequestView, ResolvedRequest, SectionKind};
pub use error::{SyntaxError, SyntaxErrorKind, TemplateField, UnresolvedTemplate};
pub use http_method::HttpMethod;
pub use template::{replace_variables, resolve};
