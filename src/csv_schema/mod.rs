/// Single-pass width scan of a CSV file into a text-only [`inference::Schema`].
pub mod inference;
/// Table name and database prefix derivation.
pub mod names;
