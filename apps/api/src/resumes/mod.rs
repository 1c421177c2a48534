// Resume Store: blob upload to S3, best-effort text extraction, and the
// metadata row the generation flow reads.

pub mod extract;
pub mod handlers;
pub mod store;
