//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous: every [`Handler`] either completes or fails
/// immediately.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Depends on the concrete [`Handler`] implementation.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
