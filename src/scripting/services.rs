use crate::config::{EngineConfig, ScreenSize};
use crate::console::{CommandConsole, Console};
use crate::render::{DrawList, DrawableRegistry};
use crate::resources::{TextureCache, TextureLoader};
use crate::time::{Clock, GameClock};
use crate::ui::{DialogueBox, DialogueQueue};
use std::rc::Rc;

/// 绑定层依赖的全部引擎服务
///
/// 所有服务都在驱动更新循环的同一线程上访问，因此使用 `Rc` 而不加锁。
#[derive(Clone)]
pub struct EngineServices {
    pub textures: Rc<dyn TextureLoader>,
    pub drawables: Rc<dyn DrawableRegistry>,
    pub dialogue: Rc<dyn DialogueBox>,
    pub console: Rc<dyn Console>,
    pub clock: Rc<dyn Clock>,
    /// `game.screen()` 返回的屏幕尺寸
    pub screen: ScreenSize,
}

/// 不依赖外部引擎的服务实现，供命令行工具与测试使用
pub struct StandaloneServices {
    pub textures: Rc<TextureCache>,
    pub drawables: Rc<DrawList>,
    pub dialogue: Rc<DialogueQueue>,
    pub console: Rc<CommandConsole>,
    pub clock: Rc<GameClock>,
    pub screen: ScreenSize,
}

impl StandaloneServices {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            textures: Rc::new(TextureCache::new(config.assets.root.clone())),
            drawables: Rc::new(DrawList::new()),
            dialogue: Rc::new(DialogueQueue::new()),
            console: Rc::new(CommandConsole::new(&config.console)),
            clock: Rc::new(GameClock::from_config(&config.clock)),
            screen: config.display.screen,
        }
    }

    /// 以接口形式共享同一组服务
    pub fn services(&self) -> EngineServices {
        EngineServices {
            textures: self.textures.clone(),
            drawables: self.drawables.clone(),
            dialogue: self.dialogue.clone(),
            console: self.console.clone(),
            clock: self.clock.clone(),
            screen: self.screen,
        }
    }
}
