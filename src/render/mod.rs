//! 渲染侧数据：精灵与每帧绘制列表
//!
//! 实际的光栅化由外部引擎完成，这里只维护“画什么、怎么摆放”。

pub mod registry;
pub mod sprite;

pub use registry::{DrawList, DrawableRegistry};
pub use sprite::{IntRect, SharedSprite, Sprite};
