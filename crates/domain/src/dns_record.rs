pub mod normalized_answer;
pub mod raw_answer;
pub mod record_type;

pub use normalized_answer::{MxAnswer, NormalizedAnswer, SoaAnswer, SrvAnswer};
pub use raw_answer::RawAnswer;
pub use record_type::RecordType;
