pub const SECTION_META: &str = "meta";
pub const SECTION_GET: &str = "get";
pub const SECTION_HEAD: &str = "head";
pub const SECTION_POST: &str = "post";
pub const SECTION_HEADERS: &str = "headers";
pub const SECTION_VARS: &str = "vars";
pub const SECTION_BODY_JSON: &str = "body:json";

pub const KEY_NAME: &str = "name";
pub const KEY_TYPE: &str = "type";
pub const KEY_SEQ: &str = "seq";
pub const KEY_URL: &str = "url";
pub const KEY_BODY: &str = "body";
pub const KEY_AUTH: &str = "auth";

pub const REQUEST_TYPE_HTTP: &str = "http";
pub const BODY_KIND_JSON: &str = "json";

pub const PUNC_LBRACE: &str = "{";
pub const PUNC_RBRACE: &str = "}";
pub const PUNC_COLON: char = ':';
pub const COMMENT_PREFIX: char = '#';
pub const ANNOTATION_PREFIX: char = '@';

pub const PLACEHOLDER_OPEN: &str = "{{";
pub const PLACEHOLDER_CLOSE: &str = "}}";
pub const PROCESS_ENV_PREFIX: &str = "process.env.";
