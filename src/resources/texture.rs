use crate::core::error::{AssetError, AssetResult};
use glam::UVec2;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::rc::{Rc, Weak};

/// 已解码的纹理
pub struct Texture {
    name: String,
    image: image::RgbaImage,
}

impl Texture {
    pub fn new(name: impl Into<String>, image: image::RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// 创建指定尺寸的空白纹理
    pub fn blank(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self::new(name, image::RgbaImage::new(width, height))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 纹理的像素尺寸
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.image.width(), self.image.height())
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("name", &self.name)
            .field("size", &self.size())
            .finish()
    }
}

/// 按名称加载纹理
pub trait TextureLoader {
    fn load(&self, name: &str) -> AssetResult<Rc<Texture>>;
}

/// 基于目录的纹理缓存
///
/// 缓存只保存弱引用：最后一个持有者释放后纹理即被回收，下次加载时重新解码。
#[derive(Debug)]
pub struct TextureCache {
    root: PathBuf,
    entries: RefCell<HashMap<String, Weak<Texture>>>,
}

impl TextureCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// 当前仍然存活的纹理数量
    pub fn live_count(&self) -> usize {
        self.entries
            .borrow()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// 清理已经释放的缓存条目
    pub fn purge(&self) -> usize {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|_, weak| weak.strong_count() > 0);
        before - entries.len()
    }

    fn decode(&self, name: &str) -> AssetResult<Texture> {
        // 只允许普通的相对路径分量，绝对路径与 `..` 都会离开资源根目录
        let relative = Path::new(name);
        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return Err(AssetError::OutsideRoot {
                name: name.to_string(),
            });
        }

        let path = self.root.join(relative);
        if !path.is_file() {
            return Err(AssetError::NotFound {
                path: path.display().to_string(),
            });
        }

        let image = image::open(&path).map_err(|e| AssetError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Texture::new(name, image.to_rgba8()))
    }
}

impl TextureLoader for TextureCache {
    fn load(&self, name: &str) -> AssetResult<Rc<Texture>> {
        if name.is_empty() {
            return Err(AssetError::EmptyName);
        }

        if let Some(texture) = self.entries.borrow().get(name).and_then(Weak::upgrade) {
            tracing::trace!(target: "assets", name, "Texture cache hit");
            return Ok(texture);
        }

        let texture = Rc::new(self.decode(name)?);
        let size = texture.size();
        tracing::debug!(target: "assets", name, width = size.x, height = size.y, "Texture loaded");

        self.entries
            .borrow_mut()
            .insert(name.to_string(), Rc::downgrade(&texture));
        Ok(texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) {
        image::RgbaImage::new(width, height)
            .save(dir.path().join(name))
            .unwrap();
    }

    #[test]
    fn test_load_reads_dimensions() {
        let dir = TempDir::new().unwrap();
        write_png(&dir, "hero.png", 24, 32);

        let cache = TextureCache::new(dir.path());
        let texture = cache.load("hero.png").unwrap();
        assert_eq!(texture.size(), UVec2::new(24, 32));
        assert_eq!(texture.name(), "hero.png");
    }

    #[test]
    fn test_cache_shares_live_textures() {
        let dir = TempDir::new().unwrap();
        write_png(&dir, "tile.png", 8, 8);

        let cache = TextureCache::new(dir.path());
        let first = cache.load("tile.png").unwrap();
        let second = cache.load("tile.png").unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.live_count(), 1);
    }

    #[test]
    fn test_texture_released_with_last_holder() {
        let dir = TempDir::new().unwrap();
        write_png(&dir, "tile.png", 8, 8);

        let cache = TextureCache::new(dir.path());
        let texture = cache.load("tile.png").unwrap();
        drop(texture);

        assert_eq!(cache.live_count(), 0);
        assert_eq!(cache.purge(), 1);
    }

    #[test]
    fn test_missing_and_empty_names() {
        let dir = TempDir::new().unwrap();
        let cache = TextureCache::new(dir.path());

        assert_eq!(cache.load("").unwrap_err(), AssetError::EmptyName);
        assert!(matches!(
            cache.load("missing.png"),
            Err(AssetError::NotFound { .. })
        ));
    }

    #[test]
    fn test_names_cannot_leave_root() {
        let outer = TempDir::new().unwrap();
        write_png(&outer, "secret.png", 4, 4);
        let root = outer.path().join("assets");
        std::fs::create_dir(&root).unwrap();

        let cache = TextureCache::new(&root);
        assert!(matches!(
            cache.load("../secret.png"),
            Err(AssetError::OutsideRoot { .. })
        ));

        let absolute = outer.path().join("secret.png");
        assert!(matches!(
            cache.load(&absolute.display().to_string()),
            Err(AssetError::OutsideRoot { .. })
        ));
        assert!(matches!(
            cache.load("./secret.png"),
            Err(AssetError::OutsideRoot { .. })
        ));
    }

    #[test]
    fn test_undecodable_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();

        let cache = TextureCache::new(dir.path());
        assert!(matches!(
            cache.load("broken.png"),
            Err(AssetError::LoadFailed { .. })
        ));
    }
}
