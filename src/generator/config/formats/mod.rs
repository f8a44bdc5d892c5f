pub mod surfboard;

pub use surfboard::proxy_to_surfboard;
