pub mod slice;
pub mod stream;
pub mod text;

pub use slice::SliceCursor;
pub use stream::StreamCursor;
pub use text::TextCursor;
