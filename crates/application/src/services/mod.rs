mod answer_codec;
mod record_type_map;

pub use answer_codec::AnswerCodec;
pub use record_type_map::RecordTypeMapper;
