//! 资源管理
//!
//! 纹理按名称从资源根目录加载，并在持有者之间共享。

pub mod texture;

pub use texture::{Texture, TextureCache, TextureLoader};
