use wayline_core::catalog::RouteCatalog;
use wayline_core::factory::BreadcrumbLinkFactory;
use wayline_core::link::{BreadcrumbLink, BreadcrumbTrail};
use wayline_core::prefix::prefix_chain;
use wayline_core::request::RequestContext;
use wayline_core::route::RouteDescriptor;

/// `TrailBuilder` 在单次请求范围内装配面包屑轨迹。
///
/// # 教案级说明
/// - **意图 (Why)**：轨迹 = 首页入口 + 祖先分组 + 当前页，三类节点均从同一张
///   按集合裁剪后的路由表推导，集中在一个构建器内避免重复扫描；
/// - **契约 (What)**：构建器逐请求创建，目录与请求在装配期间只读；
///   所有查询方法都是全函数——无匹配路由时返回 `None` 或空轨迹，绝不报错；
/// - **执行逻辑 (How)**：构造时完成一次集合裁剪（命中路由声明 `collection` 时
///   仅保留同集合路由，目录顺序不变），`index`/`current`/`links` 共享该结果；
/// - **并发 (Trade-offs)**：构建器不含内部可变状态，`links` 幂等；
///   跨请求复用没有意义，正确做法是每请求新建实例。
pub struct TrailBuilder<'a> {
    request: RequestContext<'a>,
    factory: &'a dyn BreadcrumbLinkFactory,
    scoped: Vec<&'a RouteDescriptor>,
}

impl<'a> TrailBuilder<'a> {
    /// 基于目录快照、请求视图与链接工厂创建构建器，并完成集合裁剪。
    pub fn new(
        catalog: &'a RouteCatalog,
        request: RequestContext<'a>,
        factory: &'a dyn BreadcrumbLinkFactory,
    ) -> Self {
        let collection = request
            .matched_route()
            .and_then(|route| route.metadata().collection());
        let scoped = catalog
            .iter()
            .filter(|route| match collection {
                Some(tag) => route.metadata().collection() == Some(tag),
                None => true,
            })
            .collect();
        Self {
            request,
            factory,
            scoped,
        }
    }

    /// 查找首页入口链接：目录序上第一条带 index 标记的路由，键为其自身模板。
    pub fn index(&self) -> Option<BreadcrumbLink> {
        let route = *self
            .scoped
            .iter()
            .find(|route| route.metadata().is_index())?;
        Some(self.factory.create(route.uri(), route))
    }

    /// 构造当前页链接：命中路由带 breadcrumb 标记时，键为字面请求路径。
    pub fn current(&self) -> Option<BreadcrumbLink> {
        let route = self.request.matched_route()?;
        if !route.metadata().is_breadcrumb() {
            return None;
        }
        Some(self.factory.create(self.request.path(), route))
    }

    /// 装配完整轨迹：祖先分组打底，首页入口置前，当前页殿后。
    ///
    /// 存在首页入口而当前页缺失时，轨迹坍缩为仅含首页入口一项。该分支与
    /// 分组链接的取舍不对称，是既定语义而非缺陷，调用方不应依赖坍缩分支
    /// 下的分组结果。
    pub fn links(&self) -> BreadcrumbTrail {
        let mut trail = self.group_links();

        let index_link = self.index();
        if let Some(link) = index_link.as_ref() {
            trail.prepend(link.clone());
        }

        let current_link = self.current();
        if let Some(link) = current_link.as_ref() {
            trail.insert(link.clone());
        }

        if let (Some(link), None) = (index_link, current_link) {
            tracing::trace!("no current link, trail collapses to the index entry");
            return BreadcrumbTrail::from_link(link);
        }

        tracing::trace!(entries = trail.len(), "breadcrumb trail assembled");
        trail
    }

    /// 推导祖先分组链接。
    ///
    /// 候选路由的模板必须恰好等于命中路由模板前缀链中的某个元素，且同时带
    /// breadcrumb 与 group 标记；其展示 URI 取请求路径前缀链中与模板同深度
    /// 的元素，参数化模板因此解析为该深度上的具体路径值。深度超出请求路径
    /// 前缀链的候选被跳过。
    fn group_links(&self) -> BreadcrumbTrail {
        let path_prefixes = prefix_chain(self.request.path());
        let route_uri = self.request.matched_route().map_or("", |route| route.uri());
        let route_prefixes = prefix_chain(route_uri);

        let mut trail = BreadcrumbTrail::new();
        for &route in &self.scoped {
            if !route_prefixes
                .iter()
                .any(|prefix| prefix.as_str() == route.uri())
            {
                continue;
            }
            let metadata = route.metadata();
            if !(metadata.is_breadcrumb() && metadata.is_group()) {
                continue;
            }
            let Some(display_uri) = path_prefixes.get(route.depth()) else {
                continue;
            };
            trail.insert(self.factory.create(display_uri, route));
        }
        trail
    }
}
