use alloc::borrow::ToOwned;

use crate::link::BreadcrumbLink;
use crate::route::RouteDescriptor;

/// 链接工厂契约：将展示 URI 与命中路由转换为面包屑链接。
///
/// # 教案级说明
/// - **意图 (Why)**：标签解析策略属于宿主关注点（本地化、动态标题等），
///   以 trait 注入保持装配逻辑与展示策略解耦；
/// - **契约 (What)**：`create` 必须是全函数——任何输入都返回链接，不得失败；
///   返回链接的 `uri` 必须与入参一致，轨迹以该 URI 为键维护唯一性；
/// - **设计 (How)**：为闭包提供毯式实现，宿主可直接传入 `Fn` 而无需新建类型；
/// - **线程安全**：要求 `Send + Sync`，工厂实例通常与路由表同享生命周期。
pub trait BreadcrumbLinkFactory: Send + Sync {
    /// 基于展示 URI 与命中路由构造链接。
    fn create(&self, uri: &str, route: &RouteDescriptor) -> BreadcrumbLink;
}

impl<F> BreadcrumbLinkFactory for F
where
    F: Fn(&str, &RouteDescriptor) -> BreadcrumbLink + Send + Sync,
{
    fn create(&self, uri: &str, route: &RouteDescriptor) -> BreadcrumbLink {
        self(uri, route)
    }
}

/// 默认工厂：读取路由上的 `title` 注解，缺失时退化为展示 URI 本身。
#[derive(Clone, Copy, Debug, Default)]
pub struct TitleLinkFactory;

impl BreadcrumbLinkFactory for TitleLinkFactory {
    fn create(&self, uri: &str, route: &RouteDescriptor) -> BreadcrumbLink {
        let label = route.metadata().title().unwrap_or(uri);
        BreadcrumbLink::new(uri.to_owned(), label.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::TrailMetadata;

    /// 默认工厂优先取 title 注解。
    #[test]
    fn title_factory_reads_title_annotation() {
        let route = RouteDescriptor::new("shop")
            .with_metadata(TrailMetadata::new().with_breadcrumb().with_title("Shop"));
        let link = TitleLinkFactory.create("shop", &route);
        assert_eq!(link.uri(), "shop");
        assert_eq!(link.label(), "Shop");
    }

    /// 缺失 title 时标签退化为展示 URI。
    #[test]
    fn title_factory_falls_back_to_uri() {
        let route = RouteDescriptor::new("shop/{id}")
            .with_metadata(TrailMetadata::new().with_breadcrumb());
        let link = TitleLinkFactory.create("shop/42", &route);
        assert_eq!(link.label(), "shop/42");
    }

    /// 闭包通过毯式实现充当工厂。
    #[test]
    fn closures_act_as_factories() {
        let factory = |uri: &str, _route: &RouteDescriptor| BreadcrumbLink::new(uri, "静态标签");
        let route = RouteDescriptor::new("shop");
        let link = BreadcrumbLinkFactory::create(&factory, "shop", &route);
        assert_eq!(link.label(), "静态标签");
    }
}
