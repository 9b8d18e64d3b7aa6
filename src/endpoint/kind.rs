/// Whether an endpoint is bounded, and if not, on which side.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, derive_more::Display, derive_more::IsVariant)]
pub enum EndpointKind {
    /// Unbounded below, as in `]-inf, t]`.
    #[display("-inf")]
    MinusInfinity,

    #[display("finite")]
    Finite,

    /// Unbounded above.
    #[display("+inf")]
    PlusInfinity,
}
