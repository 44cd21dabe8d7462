//! Statically check GraphQL operations against a schema.
//!
//! A [`GraphQLTester`] owns an immutable [`Schema`](schema::Schema) and
//! answers one question per call: does this operation (plus its variables)
//! have a shape the schema accepts? Nothing is executed and no response data
//! is produced.
//!
//! ```
//! use graphql_tester::GraphQLTester;
//!
//! let tester = GraphQLTester::from_sdl([
//!     "type Query { me: User } type User { email: String }",
//! ]).unwrap();
//!
//! tester.test(true, "{ me { email } }").unwrap();
//! tester.test(false, "{ me { password } }").unwrap();
//! ```

pub mod ast;
pub mod loc;
pub mod operation;
pub mod schema;
mod tester;
pub mod types;
pub mod validation;
mod value;

pub use tester::GraphQLTester;
pub use tester::TestFailure;
pub use value::Value;

#[cfg(test)]
mod test;
