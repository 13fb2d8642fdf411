pub mod dotenv;
pub mod locator;

pub use locator::collect_variables;
