pub mod error;
pub mod flatten;
pub mod http_method;
pub mod materialize;
pub mod model;
pub mod reader;
pub mod template;
pub mod variables;

pub use flatten::{find_request, flatten, group_by_parent};
pub use materialize::materialize;
pub use model::PreparedRequest;
pub use reader::Collection;
pub use variables::merge_variables;
