#![doc = "wayline-trail: 线程安全且可热更新的面包屑轨迹构建默认实现。"]
#![doc = ""]
#![doc = "`RouteRegistry` 以整表替换方式维护路由目录，`TrailRegistrar` 负责声明期校验，"]
#![doc = "`TrailBuilder` 在单次请求范围内装配轨迹。契约类型见 `wayline-core`。"]

use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use wayline_core::catalog::RouteCatalog;
use wayline_core::error::TrailError;
use wayline_core::metadata::TrailMetadata;
use wayline_core::route::RouteDescriptor;
use wayline_core::validation::RouteValidation;

mod builder;

pub use builder::TrailBuilder;

/// `RouteRegistry` 以整表替换方式维护路由目录，读路径零锁。
///
/// # 教案级说明
/// - **意图 (Why)**：路由表在应用启动或热更新时整体成型，逐条修改只会引入竞态；
///   `ArcSwap` 的“读取加载快照、写入整表替换”模式让并发请求免受更新干扰；
/// - **契约 (What)**：`update` 后新目录立即对后续 `catalog()` 调用可见，
///   旧快照在持有者释放后自然回收；`revision` 单调标识目录世代；
/// - **执行逻辑 (How)**：`update` 收集新 [`RouteCatalog`] 并一次 `store`；
///   `catalog` 返回 `Arc` 克隆，调用方借用其内容构建 [`TrailBuilder`]；
/// - **权衡 (Trade-offs)**：每次读取付出一次原子引用计数开销，换取写路径完全无锁。
pub struct RouteRegistry {
    catalog: ArcSwap<RouteCatalog>,
    revision: AtomicU64,
}

impl RouteRegistry {
    /// 构建空注册表，首次 `update` 前目录为空。
    pub fn new() -> Self {
        Self {
            catalog: ArcSwap::from_pointee(RouteCatalog::new()),
            revision: AtomicU64::new(0),
        }
    }

    /// 整表替换路由目录并推进世代号。
    ///
    /// # 契约（What）
    /// - **前置条件**：`routes` 中的 URI 模板应保持唯一，推荐经由
    ///   [`TrailRegistrar`] 完成声明期校验；
    /// - **后置条件**：新目录对后续读取立即可见，既有快照持有者不受影响。
    pub fn update<I>(&self, revision: u64, routes: I)
    where
        I: IntoIterator<Item = RouteDescriptor>,
    {
        let catalog: RouteCatalog = routes.into_iter().collect();
        tracing::debug!(revision, entries = catalog.len(), "route catalog replaced");
        self.revision.store(revision, Ordering::Release);
        self.catalog.store(Arc::new(catalog));
    }

    /// 获取当前目录快照。
    pub fn catalog(&self) -> Arc<RouteCatalog> {
        self.catalog.load_full()
    }

    /// 读取当前世代号。
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// 对单条路由声明执行轻量预检，返回非致命警告集合。
    ///
    /// 警告指向“声明了但永远不会生效”的元数据组合，预检不阻断注册。
    pub fn validate(&self, descriptor: &RouteDescriptor) -> RouteValidation {
        let mut validation = RouteValidation::new();
        let metadata = descriptor.metadata();
        if metadata.is_group() && !metadata.is_breadcrumb() {
            validation.push("group flag without breadcrumb flag never surfaces in a trail");
        }
        if metadata.title().is_some() && !(metadata.is_breadcrumb() || metadata.is_index()) {
            validation.push("title annotation is never read without breadcrumb or index flag");
        }
        if metadata.is_index() && descriptor.uri().contains('{') {
            validation.push("index route with a parameterized template cannot form a stable entry uri");
        }
        validation
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `TrailRegistrar` 以声明期校验的方式构建路由目录。
///
/// # 教案级说明
/// - **意图 (Why)**：目录的键唯一与注册顺序都是装配不变量，重复或空的 URI
///   应在声明现场失败，而不是在某次请求装配时产生难以追查的覆盖；
/// - **契约 (What)**：`route` 拒绝空 URI 与重复 URI；`finish` 产出保持声明
///   顺序的目录；
/// - **设计 (How)**：消费式 Builder，调用方以 `?` 链式传播 [`TrailError`]。
#[derive(Debug, Default)]
pub struct TrailRegistrar {
    entries: Vec<RouteDescriptor>,
}

impl TrailRegistrar {
    /// 创建空的注册器。
    pub fn new() -> Self {
        Self::default()
    }

    /// 声明一条路由；空 URI 或重复 URI 将被拒绝。
    pub fn route<S>(mut self, uri: S, metadata: TrailMetadata) -> Result<Self, TrailError>
    where
        S: Into<Cow<'static, str>>,
    {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(TrailError::EmptyUri);
        }
        if self.entries.iter().any(|entry| entry.uri() == uri.as_ref()) {
            return Err(TrailError::DuplicateUri {
                uri: uri.into_owned(),
            });
        }
        self.entries
            .push(RouteDescriptor::new(uri).with_metadata(metadata));
        Ok(self)
    }

    /// 产出保持声明顺序的路由目录。
    pub fn finish(self) -> RouteCatalog {
        self.entries.into_iter().collect()
    }
}
