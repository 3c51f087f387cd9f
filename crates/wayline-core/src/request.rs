use crate::route::RouteDescriptor;

/// 请求视图：当前路径与命中路由的借用聚合。
///
/// # 教案级说明
/// - **意图 (Why)**：轨迹装配只需要请求的两项事实——具体路径与命中路由，
///   以借用聚合避免在只读路径上产生拷贝；
/// - **契约 (What)**：`path` 为宿主框架给出的原始请求路径，本 crate 不做归一化；
///   `matched` 为命中的路由描述符，未命中时为 `None`；
/// - **权衡 (Trade-offs)**：生命周期参数要求调用方保证目录与请求存活期覆盖装配过程，
///   换取零分配的读路径。
#[derive(Clone, Copy, Debug)]
pub struct RequestContext<'a> {
    path: &'a str,
    matched: Option<&'a RouteDescriptor>,
}

impl<'a> RequestContext<'a> {
    /// 聚合请求路径与命中路由。
    pub fn new(path: &'a str, matched: Option<&'a RouteDescriptor>) -> Self {
        Self { path, matched }
    }

    /// 读取原始请求路径。
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// 读取命中的路由描述符。
    pub fn matched_route(&self) -> Option<&'a RouteDescriptor> {
        self.matched
    }
}
