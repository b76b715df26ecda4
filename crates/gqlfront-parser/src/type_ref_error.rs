/// Errors from constructing type references programmatically.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeRefError {
    /// `T!!`: a non-null type may not wrap another non-null type.
    #[error("a non-null type cannot wrap another non-null type (`{inner}!`)")]
    NestedNonNull {
        inner: String,
    },
}
