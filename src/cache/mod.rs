//! 缓存层
//!
//! 通过插件注册表选择缓存后端；当前内置 Moka 内存缓存。
//! 主要用于 JWT token -> 用户 的快速查找，减少每次请求的数据库往返。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并自注册一个缓存插件
///
/// 在插件模块内展开为一个 ctor 函数，进程启动时把构造器写入注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$plugin>::default();
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
