use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Unknown {kind} code: {code}")]
    InvalidCode { kind: &'static str, code: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
