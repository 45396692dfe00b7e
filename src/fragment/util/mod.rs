mod location;
mod node;

pub use self::location::Location;
pub use self::node::Node;
