use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("duplicate property `{property}` in object type `{object}`")]
    DuplicateProperty { object: String, property: String },
}
