pub mod course;
pub mod meeting;
pub mod schedule;
pub mod section;

pub use course::*;
pub use meeting::*;
pub use schedule::*;
pub use section::*;
