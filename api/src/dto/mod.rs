mod requests;
mod responses;

pub use requests::{JsonBody, PostInput, PostUpdateInput, UserInput};
pub use responses::{HealthResponse, MessageResponse};
