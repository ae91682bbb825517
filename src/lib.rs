pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod prefix;
pub mod writing;
