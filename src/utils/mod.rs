pub mod password;
pub mod validate;

pub use validate::ValidatedJson;
