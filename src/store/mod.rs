pub mod topic;

pub use topic::{list_topics, load_topic, reset_topics, save_topic};
