/// Ordered DROP / CREATE / LOAD statement generation from an inferred schema.
pub mod emitter;
/// SQL string literal quoting.
pub mod literal;
