pub mod converter;

pub use converter::{
    build_share_link, convert, convert_body, decode_share_segment, ConvertError, ConvertRequest,
    ConvertResult,
};
