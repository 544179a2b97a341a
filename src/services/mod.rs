pub mod messages;
pub mod recommendations;

pub use messages::{ContactMessage, FileMessageSink, MessageSink};
pub use recommendations::{recommend, RECOMMENDATION_COUNT};
