mod stream;

pub use stream::{collect_n, collect_one, collect_ready};
